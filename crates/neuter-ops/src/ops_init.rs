//! Operation: write a default `Neuter.toml`.

use std::path::Path;

use neuter_core::manifest::{default_manifest, Manifest};
use neuter_core::MANIFEST_FILE;
use neuter_util::errors::{NeuterError, NeuterResult};

/// Create `Neuter.toml` and the default input directory in `dir`.
/// Refuses to overwrite an existing manifest.
pub fn init(dir: &Path) -> NeuterResult<()> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if manifest_path.exists() {
        return Err(NeuterError::Generic {
            message: format!("{MANIFEST_FILE} already exists in {}", dir.display()),
        }
        .into());
    }

    let content = default_manifest();
    let manifest = Manifest::parse(&content)?;
    neuter_util::fs::ensure_dir(&dir.join(&manifest.build.input)).map_err(NeuterError::Io)?;
    std::fs::write(&manifest_path, content).map_err(NeuterError::Io)?;
    Ok(())
}
