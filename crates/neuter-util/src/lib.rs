//! Shared utilities for the neuter bundler.
//!
//! This crate provides cross-cutting concerns used by all other neuter crates:
//! the error type, filesystem and path helpers, and terminal status lines.

pub mod errors;
pub mod fs;
pub mod progress;
