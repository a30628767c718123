//! Runtime configuration of one resolver invocation.
//!
//! [`NeuterConfig`] is built once (programmatically or from the `[neuter]`
//! manifest section) and only read afterwards. Hooks are strategy objects
//! behind `Arc`, so a config is cheap to clone into concurrent root jobs.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use neuter_util::errors::NeuterError;

use crate::diagnostics::DEFAULT_KNOWN_LABEL;
use crate::directive::DirectiveParser;
use crate::format::{FilenameComment, TemplateComment, UnitFormatter};
use crate::known::{KnownDependencies, StaticKnown, Unchecked};
use crate::manifest::NeuterSection;
use crate::transform::{IdentityTransform, PathTransform, TemplateTransform};

/// How the "already emitted" set is scoped across roots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DedupMode {
    /// A fresh scope per root: shared dependencies are emitted once per root.
    #[default]
    PerRoot,
    /// One scope for all roots: every unit is emitted at most once overall.
    Global,
}

#[derive(Clone)]
pub struct NeuterConfig {
    parser: DirectiveParser,
    transform: Arc<dyn PathTransform>,
    formatter: UnitFormatter,
    known: Arc<dyn KnownDependencies>,
    known_label: String,
    dedup: DedupMode,
}

impl NeuterConfig {
    pub fn new() -> Self {
        Self {
            parser: DirectiveParser::default(),
            transform: Arc::new(IdentityTransform),
            formatter: UnitFormatter::new(),
            known: Arc::new(Unchecked),
            known_label: DEFAULT_KNOWN_LABEL.to_string(),
            dedup: DedupMode::default(),
        }
    }

    /// Build a config from the `[neuter]` manifest section.
    pub fn from_section(section: &NeuterSection) -> Result<Self, NeuterError> {
        let parser = match &section.pattern {
            Some(pattern) => DirectiveParser::new(pattern)?,
            None => DirectiveParser::from_preset(section.directive),
        };

        let mut config = Self::new()
            .with_parser(parser)
            .closure_wrap(section.closure_wrap)
            .with_dedup(section.dedup)
            .with_known_label("known-dependencies");

        if let Some(template) = &section.path_transform {
            config = config.with_path_transform(Arc::new(TemplateTransform::new(template)));
        }
        if let Some(template) = &section.filename_comment {
            config = config.with_filename_comment(Arc::new(TemplateComment::new(template)));
        }
        if let Some(entries) = &section.known_dependencies {
            config = config.with_known_dependencies(Arc::new(StaticKnown::new(entries)));
        }

        Ok(config)
    }

    pub fn with_parser(mut self, parser: DirectiveParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_path_transform(mut self, transform: Arc<dyn PathTransform>) -> Self {
        self.transform = transform;
        self
    }

    pub fn closure_wrap(mut self, enabled: bool) -> Self {
        self.formatter = self.formatter.closure_wrap(enabled);
        self
    }

    pub fn with_filename_comment(mut self, comment: Arc<dyn FilenameComment>) -> Self {
        self.formatter = self.formatter.filename_comment(comment);
        self
    }

    pub fn with_known_dependencies(mut self, known: Arc<dyn KnownDependencies>) -> Self {
        self.known = known;
        self
    }

    /// Setting name quoted in unaccounted-dependency warnings.
    pub fn with_known_label(mut self, label: impl Into<String>) -> Self {
        self.known_label = label.into();
        self
    }

    pub fn with_dedup(mut self, dedup: DedupMode) -> Self {
        self.dedup = dedup;
        self
    }

    pub fn parser(&self) -> &DirectiveParser {
        &self.parser
    }

    pub fn path_transform(&self) -> &dyn PathTransform {
        self.transform.as_ref()
    }

    pub fn formatter(&self) -> &UnitFormatter {
        &self.formatter
    }

    pub fn known_dependencies(&self) -> &dyn KnownDependencies {
        self.known.as_ref()
    }

    pub fn known_label(&self) -> &str {
        &self.known_label
    }

    pub fn dedup(&self) -> DedupMode {
        self.dedup
    }
}

impl Default for NeuterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NeuterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeuterConfig")
            .field("pattern", &self.parser.pattern())
            .field("formatter", &self.formatter)
            .field("known_label", &self.known_label)
            .field("dedup", &self.dedup)
            .finish_non_exhaustive()
    }
}
