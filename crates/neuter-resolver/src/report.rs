//! Dependency reporter: the transitive set of paths a root depends on.
//!
//! Build schedulers use this to derive file-level invalidation edges. The
//! walk is the engine's parse/resolve/recurse walk without formatting and
//! without the known-dependency check.

use std::collections::BTreeSet;
use std::path::PathBuf;

use neuter_core::config::NeuterConfig;
use neuter_core::source::UnitSource;
use neuter_core::transform::resolve_declaration;
use neuter_core::unit::Unit;
use neuter_util::errors::NeuterError;

use crate::engine::read_unit;
use crate::scope::TraversalScope;

/// Canonical paths of every unit reachable from `root`, excluding the root
/// itself (even when a cycle leads back to it). Sorted.
///
/// Visits exactly the units [`Resolver::resolve`](crate::engine::Resolver::resolve)
/// would visit with a fresh scope, and fails the same way on unreadable units.
pub fn transitive_dependencies(
    source: &dyn UnitSource,
    config: &NeuterConfig,
    root: &Unit,
) -> Result<BTreeSet<PathBuf>, NeuterError> {
    let mut scope = TraversalScope::new();
    walk(source, config, root, None, &mut scope)?;

    let root_path = root.full_path();
    Ok(scope
        .entered()
        .iter()
        .filter(|path| **path != root_path)
        .cloned()
        .collect())
}

fn walk(
    source: &dyn UnitSource,
    config: &NeuterConfig,
    unit: &Unit,
    declared_by: Option<&Unit>,
    scope: &mut TraversalScope,
) -> Result<(), NeuterError> {
    if !scope.register(&unit.full_path()) {
        return Ok(());
    }

    let body = read_unit(source, unit, declared_by)?;
    for declaration in config.parser().declarations(&body) {
        let dependency = resolve_declaration(config.path_transform(), &declaration, unit);
        walk(source, config, &dependency.unit, Some(unit), scope)?;
    }
    Ok(())
}
