//! Handler for `neuter build`.

use std::path::PathBuf;

use miette::Result;

use neuter_ops::ops_build::{self, BuildOptions};

pub fn exec(
    roots: Vec<String>,
    output: Option<PathBuf>,
    jobs: Option<u32>,
    global_dedup: bool,
    closure_wrap: bool,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    let project_dir = super::project_dir()?;

    let opts = BuildOptions {
        roots,
        output,
        jobs,
        global_dedup,
        closure_wrap,
        verbose,
        quiet,
    };

    let result = ops_build::build(&project_dir, &opts)?;
    if verbose {
        eprintln!(
            "  wrote {} ({} root(s), {} bytes)",
            result.output_path.display(),
            result.roots,
            result.bytes
        );
    }
    Ok(())
}
