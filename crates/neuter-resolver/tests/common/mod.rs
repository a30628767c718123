#![allow(dead_code)]

use neuter_core::source::MemorySource;
use neuter_core::unit::Unit;

pub const ROOT: &str = "/path/to/input";

/// In-memory units under [`ROOT`].
pub fn source(files: &[(&str, &str)]) -> MemorySource {
    files
        .iter()
        .fold(MemorySource::new(), |source, (path, body)| {
            source.with(ROOT, path, body)
        })
}

pub fn unit(path: &str) -> Unit {
    Unit::new(ROOT, path)
}
