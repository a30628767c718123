//! Handler for `neuter tree`.

use miette::Result;

use neuter_ops::ops_tree;

pub fn exec(root: &str, depth: Option<usize>) -> Result<()> {
    let project_dir = super::project_dir()?;
    print!("{}", ops_tree::tree(&project_dir, root, depth)?);
    Ok(())
}
