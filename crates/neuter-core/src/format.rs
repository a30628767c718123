//! Unit formatting: optional filename comment plus optional closure wrap.

use std::fmt;
use std::sync::Arc;

use crate::unit::Unit;

/// Produces the one-line annotation placed above a unit's body.
pub trait FilenameComment: Send + Sync {
    fn comment(&self, unit: &Unit) -> String;
}

/// Template-driven comment, e.g. `/* {path} */`.
///
/// Placeholders: `{path}` is the canonical path, `{relative}` the path
/// relative to the unit's root.
#[derive(Debug, Clone)]
pub struct TemplateComment {
    template: String,
}

impl TemplateComment {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl FilenameComment for TemplateComment {
    fn comment(&self, unit: &Unit) -> String {
        self.template
            .replace("{path}", &unit.full_path().to_string_lossy())
            .replace("{relative}", &unit.path().to_string_lossy())
    }
}

/// Adapter for closures.
pub struct FnComment<F>(pub F);

impl<F> FilenameComment for FnComment<F>
where
    F: Fn(&Unit) -> String + Send + Sync,
{
    fn comment(&self, unit: &Unit) -> String {
        (self.0)(unit)
    }
}

/// Surround `body` in an immediately-invoked function expression.
pub fn closure_wrap(body: &str) -> String {
    format!("(function() {{\n{body}\n}})();\n\n")
}

/// Renders a unit's stripped body for emission.
#[derive(Clone, Default)]
pub struct UnitFormatter {
    closure_wrap: bool,
    comment: Option<Arc<dyn FilenameComment>>,
}

impl UnitFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn closure_wrap(mut self, enabled: bool) -> Self {
        self.closure_wrap = enabled;
        self
    }

    pub fn filename_comment(mut self, comment: Arc<dyn FilenameComment>) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn wraps(&self) -> bool {
        self.closure_wrap
    }

    /// `comment(unit) + "\n"` (when configured) followed by the body,
    /// wrapped when closure wrapping is enabled.
    pub fn format(&self, unit: &Unit, stripped: &str) -> String {
        let mut out = String::new();
        if let Some(comment) = &self.comment {
            out.push_str(&comment.comment(unit));
            out.push('\n');
        }
        if self.closure_wrap {
            out.push_str(&closure_wrap(stripped));
        } else {
            out.push_str(stripped);
        }
        out
    }
}

impl fmt::Debug for UnitFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitFormatter")
            .field("closure_wrap", &self.closure_wrap)
            .field("filename_comment", &self.comment.is_some())
            .finish()
    }
}
