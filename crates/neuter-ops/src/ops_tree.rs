//! Operation: display the declared dependency tree of one root.

use std::path::Path;

use neuter_core::source::DiskSource;
use neuter_resolver::graph::DependencyGraph;
use neuter_util::errors::NeuterResult;

use crate::ProjectContext;

/// Render the tree of `root`, expanding at most `depth` levels.
pub fn tree(project_dir: &Path, root: &str, depth: Option<usize>) -> NeuterResult<String> {
    let ctx = ProjectContext::load(project_dir)?;
    let unit = ctx.root_from_arg(root);
    let graph = DependencyGraph::discover(&DiskSource, &ctx.config, &unit)?;

    let mut output = graph.print_tree(depth);
    if graph.has_cycles() {
        output.push_str("(cycles present; each unit is still emitted once per root)\n");
    }
    Ok(output)
}
