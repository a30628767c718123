use std::path::{Component, Path, PathBuf};

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Lexically normalize a path: drop `.` segments and fold `..` into the
/// preceding component. Does not touch the filesystem or follow symlinks.
///
/// A `..` that would climb above the root of an absolute path is dropped;
/// leading `..` segments of a relative path are kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Join `relative` onto `root` and normalize the result.
///
/// An absolute `relative` replaces `root`, matching [`Path::join`].
pub fn join_normalized(root: &Path, relative: &Path) -> PathBuf {
    normalize_path(&root.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_parent_segments() {
        assert_eq!(
            normalize_path(Path::new("/in/lib/../a/./b")),
            PathBuf::from("/in/a/b")
        );
    }

    #[test]
    fn normalize_keeps_leading_parent_of_relative_path() {
        assert_eq!(normalize_path(Path::new("../x/y/..")), PathBuf::from("../x"));
    }

    #[test]
    fn normalize_does_not_climb_above_root() {
        assert_eq!(normalize_path(Path::new("/../../a")), PathBuf::from("/a"));
    }
}
