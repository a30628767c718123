//! Dependency resolution and flattening: dependency-first traversal with
//! per-root emission scopes, transitive dependency reporting for build
//! schedulers, and a graph view for tree display.

pub mod engine;
pub mod graph;
pub mod report;
pub mod scope;
