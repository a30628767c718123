//! The per-root set of canonical paths already emitted.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Tracks which units have been entered during one traversal.
///
/// A path is registered before its dependencies are visited, so the same
/// membership check breaks cycles and suppresses repeated emission in
/// diamond-shaped graphs.
#[derive(Debug, Default)]
pub struct TraversalScope {
    entered: HashSet<PathBuf>,
    order: Vec<PathBuf>,
}

impl TraversalScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a path as entered. Returns `false` if it already was.
    pub fn register(&mut self, path: &Path) -> bool {
        if self.entered.contains(path) {
            return false;
        }
        self.entered.insert(path.to_path_buf());
        self.order.push(path.to_path_buf());
        true
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entered.contains(path)
    }

    /// Paths in the order they were entered.
    pub fn entered(&self) -> &[PathBuf] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
