//! Unit sources: the file-reading capability the resolver consumes.
//!
//! The resolver never touches the filesystem directly. It reads unit text
//! through a [`UnitSource`], which lets builds read from disk, tests read
//! from memory, and multi-root builds share a read-through cache.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::unit::Unit;

/// Reads the text of a unit.
pub trait UnitSource: Send + Sync {
    fn read(&self, unit: &Unit) -> io::Result<String>;
}

/// Reads units from disk as UTF-8.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskSource;

impl UnitSource for DiskSource {
    fn read(&self, unit: &Unit) -> io::Result<String> {
        std::fs::read_to_string(unit.full_path())
    }
}

/// In-memory unit contents keyed by canonical path.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the text stored for `unit`.
    pub fn insert(&mut self, unit: &Unit, body: impl Into<String>) {
        self.files.insert(unit.full_path(), body.into());
    }

    /// Builder form of [`MemorySource::insert`] for a unit under `root`.
    pub fn with(mut self, root: impl AsRef<Path>, path: &str, body: &str) -> Self {
        self.insert(&Unit::new(root.as_ref(), path), body);
        self
    }
}

impl UnitSource for MemorySource {
    fn read(&self, unit: &Unit) -> io::Result<String> {
        let full = unit.full_path();
        self.files.get(&full).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such unit: {}", full.display()),
            )
        })
    }
}

/// Read-through cache over another source, keyed by canonical path.
///
/// Entries are written once and never mutated, so one cache can be shared by
/// every root of a build, including roots resolved on different threads.
/// Failed reads are not cached.
pub struct CachedSource<S> {
    inner: S,
    entries: RwLock<HashMap<PathBuf, String>>,
}

impl<S: UnitSource> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<S: UnitSource> UnitSource for CachedSource<S> {
    fn read(&self, unit: &Unit) -> io::Result<String> {
        let key = unit.full_path();
        if let Ok(entries) = self.entries.read() {
            if let Some(body) = entries.get(&key) {
                return Ok(body.clone());
            }
        }

        tracing::debug!("cache miss for {}", key.display());
        let body = self.inner.read(unit)?;
        if let Ok(mut entries) = self.entries.write() {
            entries.entry(key).or_insert_with(|| body.clone());
        }
        Ok(body)
    }
}
