//! Known-dependency providers.
//!
//! The surrounding build scheduler tells the resolver which paths it already
//! tracks for a root. Paths reached during traversal that are missing from
//! that set only produce a warning; they never change the output.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use neuter_util::fs::join_normalized;

use crate::unit::Unit;

/// Supplies the paths the build scheduler accounts for, per root.
pub trait KnownDependencies: Send + Sync {
    /// `None` disables the check for this root.
    fn known_for(&self, root: &Unit) -> Option<Vec<PathBuf>>;
}

/// No known-dependency check at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unchecked;

impl KnownDependencies for Unchecked {
    fn known_for(&self, _root: &Unit) -> Option<Vec<PathBuf>> {
        None
    }
}

/// The same list for every root.
#[derive(Debug, Clone)]
pub struct StaticKnown {
    entries: Vec<PathBuf>,
}

impl StaticKnown {
    pub fn new<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }
}

impl KnownDependencies for StaticKnown {
    fn known_for(&self, _root: &Unit) -> Option<Vec<PathBuf>> {
        Some(self.entries.clone())
    }
}

/// Adapter for closures.
pub struct FnKnown<F>(pub F);

impl<F> KnownDependencies for FnKnown<F>
where
    F: Fn(&Unit) -> Vec<PathBuf> + Send + Sync,
{
    fn known_for(&self, root: &Unit) -> Option<Vec<PathBuf>> {
        Some((self.0)(root))
    }
}

/// Normalized known paths for one root.
///
/// Relative entries are resolved against the root unit's root directory.
#[derive(Debug, Clone, Default)]
pub struct KnownSet {
    paths: HashSet<PathBuf>,
}

impl KnownSet {
    pub fn for_root(provider: &dyn KnownDependencies, root: &Unit) -> Option<Self> {
        let entries = provider.known_for(root)?;
        let paths = entries
            .iter()
            .map(|entry| join_normalized(root.root(), entry))
            .collect();
        Some(Self { paths })
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
