//! Command dispatch and handler modules.

mod build;
mod deps;
mod init;
mod tree;

use std::path::PathBuf;

use miette::Result;

use neuter_util::errors::NeuterError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init => init::exec(),
        Command::Build {
            roots,
            output,
            jobs,
            global_dedup,
            closure_wrap,
            quiet,
        } => build::exec(
            roots,
            output,
            jobs,
            global_dedup,
            closure_wrap,
            quiet,
            cli.verbose,
        ),
        Command::Deps { root, json } => deps::exec(&root, json),
        Command::Tree { root, depth } => tree::exec(&root, depth),
    }
}

/// Directory holding the nearest Neuter.toml at or above the working directory.
fn project_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(NeuterError::Io)?;
    match neuter_util::fs::find_ancestor_with(&cwd, neuter_core::MANIFEST_FILE) {
        Some(dir) => Ok(dir),
        None => Err(NeuterError::Manifest {
            message: format!(
                "No {} found in current directory or any parent",
                neuter_core::MANIFEST_FILE
            ),
        }
        .into()),
    }
}
