use std::fmt;
use std::path::{Path, PathBuf};

use neuter_util::fs::join_normalized;

/// A single source file, addressed by a root directory plus a relative path.
///
/// Units are read-only handles; their content is fetched through a
/// [`UnitSource`](crate::source::UnitSource).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unit {
    root: PathBuf,
    path: PathBuf,
}

impl Unit {
    pub fn new(root: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            path: path.into(),
        }
    }

    /// Root directory the unit is addressed from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path relative to [`Unit::root`], as declared or supplied.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Canonical identity: root joined with the relative path, with `.` and
    /// `..` segments resolved lexically.
    pub fn full_path(&self) -> PathBuf {
        join_normalized(&self.root, &self.path)
    }

    /// Directory of the relative path, empty for units directly under the root.
    pub fn relative_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }

    /// A unit under the same root, used for dependencies discovered in this one.
    pub fn sibling(&self, path: impl Into<PathBuf>) -> Self {
        Self::new(self.root.clone(), path)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path().display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_path_is_normalized() {
        let unit = Unit::new("/path/to/input", "lib/../lib/./a.js");
        assert_eq!(unit.full_path(), PathBuf::from("/path/to/input/lib/a.js"));
    }

    #[test]
    fn relative_dir_of_top_level_unit_is_empty() {
        assert_eq!(Unit::new("/in", "a").relative_dir(), Path::new(""));
        assert_eq!(Unit::new("/in", "lib/a").relative_dir(), Path::new("lib"));
    }
}
