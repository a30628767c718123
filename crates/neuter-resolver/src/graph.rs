//! Declared-dependency graph of one root, for display and inspection.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use neuter_core::config::NeuterConfig;
use neuter_core::source::UnitSource;
use neuter_core::transform::resolve_declaration;
use neuter_core::unit::Unit;
use neuter_util::errors::NeuterError;

use crate::engine::read_unit;

/// Units reachable from a root and the `requires` edges between them.
///
/// Edge weights hold the declaration's position in the declaring unit, so
/// children can be listed in declaration order.
pub struct DependencyGraph {
    graph: DiGraph<PathBuf, usize>,
    index: HashMap<PathBuf, NodeIndex>,
    root: NodeIndex,
    base: PathBuf,
}

impl DependencyGraph {
    /// Walk everything reachable from `root` and record each declaration as an edge.
    pub fn discover(
        source: &dyn UnitSource,
        config: &NeuterConfig,
        root: &Unit,
    ) -> Result<Self, NeuterError> {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();
        let root_path = root.full_path();
        let root_idx = graph.add_node(root_path.clone());
        index.insert(root_path, root_idx);

        let mut this = Self {
            graph,
            index,
            root: root_idx,
            base: root.root().to_path_buf(),
        };

        let mut expanded = HashSet::new();
        let mut stack = vec![(root.clone(), None::<Unit>)];
        while let Some((unit, declared_by)) = stack.pop() {
            let from = this.add_node(unit.full_path());
            if !expanded.insert(from) {
                continue;
            }

            let body = read_unit(source, &unit, declared_by.as_ref())?;
            let declarations = config.parser().declarations(&body);
            for (position, declaration) in declarations.iter().enumerate() {
                let dependency = resolve_declaration(config.path_transform(), declaration, &unit);
                let to = this.add_node(dependency.canonical_path());
                if !this.graph.edges(from).any(|e| e.target() == to) {
                    this.graph.add_edge(from, to, position);
                }
                stack.push((dependency.unit, Some(unit.clone())));
            }
        }

        Ok(this)
    }

    fn add_node(&mut self, path: PathBuf) -> NodeIndex {
        if let Some(&idx) = self.index.get(&path) {
            return idx;
        }
        let idx = self.graph.add_node(path.clone());
        self.index.insert(path, idx);
        idx
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Look up a node by canonical path.
    pub fn find(&self, path: &Path) -> Option<NodeIndex> {
        self.index.get(path).copied()
    }

    pub fn path(&self, idx: NodeIndex) -> &Path {
        &self.graph[idx]
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Direct dependencies of a node, in declaration order.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<(usize, NodeIndex)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (*e.weight(), e.target()))
            .collect();
        edges.sort();
        edges.into_iter().map(|(_, target)| target).collect()
    }

    /// Units that declare a dependency on this node.
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut dependents: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| e.source())
            .collect();
        dependents.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));
        dependents
    }

    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    fn label(&self, idx: NodeIndex) -> String {
        let path = &self.graph[idx];
        path.strip_prefix(&self.base)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Render the graph as a tree. Nodes already printed are marked `(*)`
    /// and not expanded again.
    pub fn print_tree(&self, max_depth: Option<usize>) -> String {
        let mut output = format!("{}\n", self.label(self.root));
        let mut visited = HashSet::new();
        visited.insert(self.root);

        let deps = self.dependencies_of(self.root);
        let count = deps.len();
        for (i, idx) in deps.into_iter().enumerate() {
            self.print_subtree(&mut output, idx, "", i == count - 1, 1, max_depth, &mut visited);
        }
        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let label = self.label(idx);

        if !visited.insert(idx) {
            output.push_str(&format!("{prefix}{connector}{label} (*)\n"));
            return;
        }
        output.push_str(&format!("{prefix}{connector}{label}\n"));

        if let Some(max) = max_depth {
            if depth >= max {
                return;
            }
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let deps = self.dependencies_of(idx);
        let count = deps.len();
        for (i, child) in deps.into_iter().enumerate() {
            self.print_subtree(
                output,
                child,
                &child_prefix,
                i == count - 1,
                depth + 1,
                max_depth,
                visited,
            );
        }
    }
}
