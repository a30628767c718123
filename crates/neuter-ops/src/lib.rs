pub mod ops_build;
pub mod ops_deps;
pub mod ops_init;
pub mod ops_tree;

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use neuter_core::config::NeuterConfig;
use neuter_core::manifest::Manifest;
use neuter_core::unit::Unit;
use neuter_core::MANIFEST_FILE;
use neuter_util::errors::{NeuterError, NeuterResult};
use neuter_util::fs::normalize_path;

/// Everything an operation needs about the project, loaded once.
pub struct ProjectContext {
    pub project_dir: PathBuf,
    pub manifest: Manifest,
    /// Absolute root directory of all units.
    pub input_dir: PathBuf,
    /// Absolute path of the concatenated artifact.
    pub output_path: PathBuf,
    pub config: NeuterConfig,
}

impl ProjectContext {
    /// Load `Neuter.toml` from `project_dir`.
    pub fn load(project_dir: &Path) -> NeuterResult<Self> {
        let manifest_path = project_dir.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            return Err(NeuterError::Manifest {
                message: format!("No {MANIFEST_FILE} found in {}", project_dir.display()),
            }
            .into());
        }

        let manifest = Manifest::from_path(&manifest_path)?;
        let config = NeuterConfig::from_section(&manifest.neuter)?;

        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            input_dir: project_dir.join(&manifest.build.input),
            output_path: project_dir.join(&manifest.build.output),
            manifest,
            config,
        })
    }

    /// Root units selected by `include`/`exclude`, sorted by relative path.
    /// `output` is the artifact about to be written and is never a root.
    pub fn collect_roots(&self, output: &Path) -> NeuterResult<Vec<Unit>> {
        let include = build_globset(&self.manifest.build.include)?;
        let exclude = build_globset(&self.manifest.build.exclude)?;
        let output = normalize_path(output);

        let mut files = Vec::new();
        collect_files(&self.input_dir, &mut files);

        let mut relative: Vec<PathBuf> = files
            .into_iter()
            .filter(|path| normalize_path(path) != output)
            .filter_map(|path| path.strip_prefix(&self.input_dir).ok().map(Path::to_path_buf))
            .filter(|rel| include.is_match(rel) && !exclude.is_match(rel))
            .collect();
        relative.sort();
        tracing::debug!(
            "collected {} root(s) from {}",
            relative.len(),
            self.input_dir.display()
        );

        Ok(relative
            .into_iter()
            .map(|rel| Unit::new(self.input_dir.clone(), rel))
            .collect())
    }

    /// Turn a root given on the command line into a unit.
    ///
    /// Relative arguments are taken relative to the input directory.
    /// Absolute arguments inside the input directory are re-rooted there;
    /// anything else is rooted at its own parent directory.
    pub fn root_from_arg(&self, arg: &str) -> Unit {
        let path = Path::new(arg);
        if path.is_relative() {
            return Unit::new(self.input_dir.clone(), path);
        }
        if let Ok(rel) = path.strip_prefix(&self.input_dir) {
            return Unit::new(self.input_dir.clone(), rel);
        }
        let parent = path.parent().unwrap_or(Path::new("/"));
        let name = path.file_name().map(PathBuf::from).unwrap_or_default();
        Unit::new(parent, name)
    }
}

fn build_globset(patterns: &[String]) -> NeuterResult<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| NeuterError::Manifest {
            message: format!("Invalid glob pattern '{pattern}': {e}"),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| {
        NeuterError::Manifest {
            message: format!("Invalid glob set: {e}"),
        }
        .into()
    })
}

// Symlinked directories are not descended into, so a link cycle under the
// input directory cannot recurse forever. Symlinked files are still roots.
fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        if file_type.is_dir() {
            collect_files(&path, out);
        } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
            out.push(path);
        }
    }
}
