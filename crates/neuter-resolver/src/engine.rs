//! Traversal engine: flattens a root unit and everything it requires into a
//! single text, each unit after all of its dependencies.
//!
//! Linearization is depth-first, leftmost declaration first. A unit is
//! registered in the [`TraversalScope`] before its dependencies are
//! visited; re-entering a registered unit yields nothing. That single check
//! both breaks cycles and prevents duplicate emission within a scope.

use neuter_core::config::{DedupMode, NeuterConfig};
use neuter_core::diagnostics::{unaccounted_message, DiagnosticSink};
use neuter_core::known::KnownSet;
use neuter_core::source::UnitSource;
use neuter_core::transform::resolve_declaration;
use neuter_core::unit::Unit;
use neuter_util::errors::NeuterError;

use crate::scope::TraversalScope;

/// Separator placed between consecutive non-empty pieces of output.
pub const SEPARATOR: &str = "\n\n";

/// Join non-empty pieces with [`SEPARATOR`].
pub fn join_pieces<I>(pieces: I) -> String
where
    I: IntoIterator<Item = String>,
{
    pieces
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Read a unit, mapping failures to the fatal error for its position in
/// the traversal.
pub(crate) fn read_unit(
    source: &dyn UnitSource,
    unit: &Unit,
    declared_by: Option<&Unit>,
) -> Result<String, NeuterError> {
    source.read(unit).map_err(|e| match declared_by {
        Some(parent) => NeuterError::MissingDependency {
            path: unit.full_path(),
            declared_by: parent.full_path(),
            source: e,
        },
        None => NeuterError::MissingRoot {
            path: unit.full_path(),
            source: e,
        },
    })
}

pub struct Resolver<'a> {
    source: &'a dyn UnitSource,
    config: &'a NeuterConfig,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> Resolver<'a> {
    pub fn new(
        source: &'a dyn UnitSource,
        config: &'a NeuterConfig,
        diagnostics: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            source,
            config,
            diagnostics,
        }
    }

    /// Flatten every root, in order, into one text.
    ///
    /// With [`DedupMode::PerRoot`] each root gets a fresh scope, so a
    /// dependency shared by two roots appears once in each root's block.
    /// With [`DedupMode::Global`] one scope spans all roots.
    pub fn generate_output(&self, roots: &[Unit]) -> Result<String, NeuterError> {
        let mut shared = TraversalScope::new();
        let mut pieces = Vec::with_capacity(roots.len());

        for root in roots {
            let output = match self.config.dedup() {
                DedupMode::PerRoot => self.resolve(root, &mut TraversalScope::new())?,
                DedupMode::Global => self.resolve(root, &mut shared)?,
            };
            pieces.push(output);
        }

        Ok(join_pieces(pieces))
    }

    /// Flatten one root within `scope`. Returns an empty string when the
    /// root was already emitted in this scope.
    pub fn resolve(&self, root: &Unit, scope: &mut TraversalScope) -> Result<String, NeuterError> {
        let known = KnownSet::for_root(self.config.known_dependencies(), root);
        tracing::debug!("resolving root {}", root);
        self.visit(root, None, scope, known.as_ref())
    }

    fn visit(
        &self,
        unit: &Unit,
        declared_by: Option<&Unit>,
        scope: &mut TraversalScope,
        known: Option<&KnownSet>,
    ) -> Result<String, NeuterError> {
        let full_path = unit.full_path();
        if !scope.register(&full_path) {
            tracing::debug!("skipping {}: already in scope", full_path.display());
            return Ok(String::new());
        }

        if let (Some(known), Some(_)) = (known, declared_by) {
            if !known.contains(&full_path) {
                let message = unaccounted_message(&full_path, self.config.known_label());
                tracing::debug!("{message}");
                self.diagnostics.warn(&message);
            }
        }

        let body = read_unit(self.source, unit, declared_by)?;
        let parsed = self.config.parser().parse(&body);

        let mut pieces = Vec::with_capacity(parsed.declarations.len() + 1);
        for declaration in &parsed.declarations {
            let dependency =
                resolve_declaration(self.config.path_transform(), declaration, unit);
            tracing::debug!(
                "{} requires '{}' -> {}",
                full_path.display(),
                dependency.declaration,
                dependency.unit
            );
            pieces.push(self.visit(&dependency.unit, Some(unit), scope, known)?);
        }

        pieces.push(self.config.formatter().format(unit, &parsed.stripped));
        Ok(join_pieces(pieces))
    }
}
