//! Operation: report the transitive dependency set of one root.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use neuter_core::source::DiskSource;
use neuter_resolver::report::transitive_dependencies;
use neuter_util::errors::NeuterResult;

use crate::ProjectContext;

/// Canonical paths `root` depends on, sorted, excluding `root` itself.
pub fn deps(project_dir: &Path, root: &str) -> NeuterResult<BTreeSet<PathBuf>> {
    let ctx = ProjectContext::load(project_dir)?;
    let unit = ctx.root_from_arg(root);
    Ok(transitive_dependencies(&DiskSource, &ctx.config, &unit)?)
}
