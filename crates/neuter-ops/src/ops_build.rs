//! Operation: flatten every root unit into the output artifact.
//!
//! Roots are resolved in order with the project's [`NeuterConfig`]. With
//! `jobs > 1` and per-root dedup, independent roots are resolved on a tokio
//! runtime, each with its own traversal scope, and reassembled in root
//! order so the artifact is identical to a sequential build.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use neuter_core::config::{DedupMode, NeuterConfig};
use neuter_core::diagnostics::{CollectingSink, DiagnosticSink, StderrSink};
use neuter_core::source::{CachedSource, DiskSource, UnitSource};
use neuter_core::unit::Unit;
use neuter_resolver::engine::{join_pieces, Resolver};
use neuter_resolver::scope::TraversalScope;
use neuter_util::errors::{NeuterError, NeuterResult};
use neuter_util::progress::{progress_bar, status};

use crate::ProjectContext;

/// Options for a build invocation. `None`/`false` fields defer to the manifest.
#[derive(Default)]
pub struct BuildOptions {
    /// Explicit roots, in order. Empty means "use include/exclude".
    pub roots: Vec<String>,
    pub output: Option<PathBuf>,
    pub jobs: Option<u32>,
    pub global_dedup: bool,
    pub closure_wrap: bool,
    pub verbose: bool,
    /// Suppress status lines and warnings on stderr.
    pub quiet: bool,
}

/// Result of a build.
#[derive(Debug)]
pub struct BuildResult {
    pub output_path: PathBuf,
    pub roots: usize,
    pub bytes: usize,
    /// Advisory warnings reported while resolving, in root order.
    pub warnings: Vec<String>,
}

/// Collects warnings and, unless quiet, echoes them to stderr as they arrive.
struct BuildSink {
    collected: CollectingSink,
    echo: bool,
}

impl BuildSink {
    fn new(echo: bool) -> Self {
        Self {
            collected: CollectingSink::new(),
            echo,
        }
    }
}

impl DiagnosticSink for BuildSink {
    fn warn(&self, message: &str) {
        self.collected.warn(message);
        if self.echo {
            StderrSink.warn(message);
        }
    }
}

pub fn build(project_dir: &Path, opts: &BuildOptions) -> NeuterResult<BuildResult> {
    let start = Instant::now();
    let ctx = ProjectContext::load(project_dir)?;

    let mut config = ctx.config.clone();
    if opts.global_dedup {
        config = config.with_dedup(DedupMode::Global);
    }
    if opts.closure_wrap {
        config = config.closure_wrap(true);
    }

    let output_path = match &opts.output {
        Some(path) => project_dir.join(path),
        None => ctx.output_path.clone(),
    };

    let roots: Vec<Unit> = if opts.roots.is_empty() {
        ctx.collect_roots(&output_path)?
    } else {
        opts.roots.iter().map(|r| ctx.root_from_arg(r)).collect()
    };

    if roots.is_empty() {
        return Err(NeuterError::Generic {
            message: format!(
                "No root units matched {:?} under {}",
                ctx.manifest.build.include,
                ctx.input_dir.display()
            ),
        }
        .into());
    }

    if !opts.quiet {
        status(
            "Neutering",
            &format!("{} root(s) into {}", roots.len(), output_path.display()),
        );
    }
    if opts.verbose {
        for root in &roots {
            eprintln!("  root: {root}");
        }
    }

    let jobs = opts.jobs.unwrap_or(ctx.manifest.build.jobs).max(1) as usize;
    let source = Arc::new(CachedSource::new(DiskSource));

    let (text, warnings) = if jobs > 1 && roots.len() > 1 && config.dedup() == DedupMode::PerRoot {
        resolve_concurrently(source, Arc::new(config), roots.clone(), jobs, opts.quiet)?
    } else {
        let sink = BuildSink::new(!opts.quiet);
        let text = Resolver::new(source.as_ref(), &config, &sink).generate_output(&roots)?;
        (text, sink.collected.messages())
    };

    if let Some(parent) = output_path.parent() {
        neuter_util::fs::ensure_dir(parent).map_err(NeuterError::Io)?;
    }
    std::fs::write(&output_path, &text).map_err(NeuterError::Io)?;

    if !opts.quiet {
        status(
            "Finished",
            &format!(
                "{} bytes, {} warning(s) in {:.2}s",
                text.len(),
                warnings.len(),
                start.elapsed().as_secs_f64()
            ),
        );
    }

    Ok(BuildResult {
        output_path,
        roots: roots.len(),
        bytes: text.len(),
        warnings,
    })
}

/// Resolve each root on its own blocking task with a fresh scope and sink,
/// at most `jobs` at a time. Outputs and warnings are joined in root order.
fn resolve_concurrently<S>(
    source: Arc<S>,
    config: Arc<NeuterConfig>,
    roots: Vec<Unit>,
    jobs: usize,
    quiet: bool,
) -> NeuterResult<(String, Vec<String>)>
where
    S: UnitSource + 'static,
{
    let rt = tokio::runtime::Runtime::new().map_err(|e| NeuterError::Generic {
        message: format!("Failed to create async runtime: {e}"),
    })?;

    let total = roots.len();
    let pb = (!quiet).then(|| progress_bar(total as u64, "Resolving"));

    let results = rt.block_on(async {
        let semaphore = Arc::new(Semaphore::new(jobs));
        let mut join_set = JoinSet::new();

        for (index, root) in roots.into_iter().enumerate() {
            let source = source.clone();
            let config = config.clone();
            let sem = semaphore.clone();
            join_set.spawn(async move {
                let _permit = sem.acquire_owned().await;
                let output = tokio::task::spawn_blocking(move || {
                    let sink = BuildSink::new(!quiet);
                    Resolver::new(source.as_ref(), config.as_ref(), &sink)
                        .resolve(&root, &mut TraversalScope::new())
                        .map(|text| (text, sink.collected.messages()))
                })
                .await;
                (index, output)
            });
        }

        let mut results: Vec<Option<Result<(String, Vec<String>), NeuterError>>> =
            (0..total).map(|_| None).collect();
        while let Some(joined) = join_set.join_next().await {
            let (index, output) = joined.map_err(|e| NeuterError::Generic {
                message: format!("Resolution task failed: {e}"),
            })?;
            let output = output.map_err(|e| NeuterError::Generic {
                message: format!("Resolution task failed: {e}"),
            })?;
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            results[index] = Some(output);
        }
        Ok::<_, NeuterError>(results)
    })?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let mut pieces = Vec::with_capacity(total);
    let mut warnings = Vec::new();
    for result in results.into_iter().flatten() {
        let (text, root_warnings) = result?;
        pieces.push(text);
        warnings.extend(root_warnings);
    }
    Ok((join_pieces(pieces), warnings))
}
