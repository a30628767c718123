//! Path resolution: turning a declared target into the unit to read next.
//!
//! A [`PathTransform`] maps `(raw target, declaring unit)` to a path. The
//! resulting unit always shares the declaring unit's root, so its canonical
//! identity is `normalize(root / transformed)`.

use std::path::PathBuf;

use crate::unit::Unit;

/// Maps a raw declared target to the path of the unit it names.
pub trait PathTransform: Send + Sync {
    fn transform(&self, target: &str, declaring: &Unit) -> String;
}

/// Uses the raw target unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityTransform;

impl PathTransform for IdentityTransform {
    fn transform(&self, target: &str, _declaring: &Unit) -> String {
        target.to_string()
    }
}

/// Template-driven transform, e.g. `lib/{target}.js`.
///
/// Placeholders: `{target}` is the raw declaration, `{dir}` the declaring
/// unit's directory relative to its root. For units at the root `{dir}/`
/// collapses to nothing, so `{dir}/{target}` stays relative.
#[derive(Debug, Clone)]
pub struct TemplateTransform {
    template: String,
}

impl TemplateTransform {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl PathTransform for TemplateTransform {
    fn transform(&self, target: &str, declaring: &Unit) -> String {
        let dir = declaring.relative_dir().to_string_lossy().into_owned();
        let template = if dir.is_empty() {
            self.template.replace("{dir}/", "")
        } else {
            self.template.clone()
        };
        template.replace("{dir}", &dir).replace("{target}", target)
    }
}

/// Adapter for closures.
pub struct FnTransform<F>(pub F);

impl<F> PathTransform for FnTransform<F>
where
    F: Fn(&str, &Unit) -> String + Send + Sync,
{
    fn transform(&self, target: &str, declaring: &Unit) -> String {
        (self.0)(target, declaring)
    }
}

/// A declaration paired with the unit it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub declaration: String,
    pub unit: Unit,
}

impl ResolvedDependency {
    pub fn canonical_path(&self) -> PathBuf {
        self.unit.full_path()
    }
}

/// Resolve one declaration made by `declaring`.
pub fn resolve_declaration(
    transform: &dyn PathTransform,
    declaration: &str,
    declaring: &Unit,
) -> ResolvedDependency {
    let path = transform.transform(declaration, declaring);
    ResolvedDependency {
        declaration: declaration.to_string(),
        unit: declaring.sibling(path),
    }
}
