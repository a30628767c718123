use serde::{Deserialize, Serialize};
use std::path::Path;

use neuter_util::errors::NeuterError;

use crate::config::DedupMode;
use crate::directive::DirectivePreset;

/// The parsed representation of a `Neuter.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub build: BuildSection,

    #[serde(default)]
    pub neuter: NeuterSection,
}

/// Inputs and output of a build, from `[build]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    /// Root directory of all units, relative to the manifest.
    #[serde(default = "default_input")]
    pub input: String,
    /// Glob patterns (relative to `input`) selecting root units.
    #[serde(default = "default_include")]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Path of the concatenated artifact, relative to the manifest.
    #[serde(default = "default_output")]
    pub output: String,
    /// Number of roots resolved concurrently.
    #[serde(default = "default_jobs")]
    pub jobs: u32,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            input: default_input(),
            include: default_include(),
            exclude: Vec::new(),
            output: default_output(),
            jobs: default_jobs(),
        }
    }
}

fn default_input() -> String {
    "src".to_string()
}

fn default_include() -> Vec<String> {
    vec!["**/*.js".to_string()]
}

fn default_output() -> String {
    "dist/neutered.js".to_string()
}

fn default_jobs() -> u32 {
    1
}

/// Resolver settings from `[neuter]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NeuterSection {
    #[serde(default)]
    pub directive: DirectivePreset,
    /// Custom directive regex; takes precedence over `directive`.
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default, rename = "path-transform")]
    pub path_transform: Option<String>,
    #[serde(default, rename = "closure-wrap")]
    pub closure_wrap: bool,
    #[serde(default, rename = "filename-comment")]
    pub filename_comment: Option<String>,
    #[serde(default)]
    pub dedup: DedupMode,
    #[serde(default, rename = "known-dependencies")]
    pub known_dependencies: Option<Vec<String>>,
}

impl Manifest {
    /// Parse a manifest from a file path.
    pub fn from_path(path: &Path) -> Result<Self, NeuterError> {
        let content = std::fs::read_to_string(path).map_err(|e| NeuterError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content)
    }

    /// Parse a manifest from a TOML string.
    pub fn parse(content: &str) -> Result<Self, NeuterError> {
        toml::from_str(content).map_err(|e| NeuterError::Manifest {
            message: e.to_string(),
        })
    }
}

/// Manifest written by `neuter init`.
pub fn default_manifest() -> String {
    r#"[build]
input = "src"
include = ["**/*.js"]
output = "dist/neutered.js"

[neuter]
directive = "require"
closure-wrap = false
# filename-comment = "/* {path} */"
# path-transform = "{target}.js"
# known-dependencies = []
"#
    .to_string()
}
