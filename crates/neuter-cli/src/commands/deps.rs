//! Handler for `neuter deps`.

use miette::Result;

use neuter_ops::ops_deps;
use neuter_util::errors::NeuterError;

pub fn exec(root: &str, json: bool) -> Result<()> {
    let project_dir = super::project_dir()?;
    let deps = ops_deps::deps(&project_dir, root)?;

    if json {
        let paths: Vec<String> = deps
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        let rendered = serde_json::to_string_pretty(&paths).map_err(|e| NeuterError::Generic {
            message: format!("Failed to serialize dependency list: {e}"),
        })?;
        println!("{rendered}");
    } else {
        for path in &deps {
            println!("{}", path.display());
        }
    }
    Ok(())
}
