//! Core data types for the neuter bundler.
//!
//! This crate defines the units the bundler works on and every pure
//! transform applied to them: directive parsing, path transforms, unit
//! formatting, known-dependency providers, diagnostic sinks, the
//! `Neuter.toml` manifest and the runtime configuration record.
//!
//! Graph traversal lives in `neuter-resolver`; this crate never recurses.

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "Neuter.toml";

pub mod config;
pub mod diagnostics;
pub mod directive;
pub mod format;
pub mod known;
pub mod manifest;
pub mod source;
pub mod transform;
pub mod unit;
