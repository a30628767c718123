use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all neuter operations.
#[derive(Debug, Error, Diagnostic)]
pub enum NeuterError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A declared dependency could not be read. Fatal for the root being resolved.
    #[error("Missing dependency '{}' (required by '{}'): {source}", .path.display(), .declared_by.display())]
    #[diagnostic(help("Check the require directive or the path-transform setting"))]
    MissingDependency {
        path: PathBuf,
        declared_by: PathBuf,
        source: std::io::Error,
    },

    /// A root unit could not be read.
    #[error("Cannot read root '{}': {source}", .path.display())]
    MissingRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The directive pattern does not compile or has the wrong number of capture groups.
    #[error("Invalid directive pattern `{pattern}`: {message}")]
    #[diagnostic(help("A directive pattern needs exactly one capture group holding the target"))]
    InvalidDirective { pattern: String, message: String },

    /// Invalid or malformed manifest (Neuter.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Neuter.toml for syntax errors"))]
    Manifest { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Result type of the operation layer.
pub type NeuterResult<T> = miette::Result<T>;
