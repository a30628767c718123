//! Handler for `neuter init`.

use miette::Result;

use neuter_ops::ops_init;
use neuter_util::errors::NeuterError;

pub fn exec() -> Result<()> {
    let cwd = std::env::current_dir().map_err(NeuterError::Io)?;
    ops_init::init(&cwd)?;
    println!("Created {} in {}", neuter_core::MANIFEST_FILE, cwd.display());
    Ok(())
}
