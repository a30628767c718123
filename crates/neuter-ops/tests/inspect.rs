use std::fs;
use std::path::PathBuf;

use neuter_ops::{ops_deps, ops_init, ops_tree};
use tempfile::TempDir;

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("Neuter.toml"),
        "[neuter]\npath-transform = \"lib/{target}.js\"\n",
    )
    .unwrap();
    fs::create_dir_all(tmp.path().join("src/lib")).unwrap();
    fs::write(tmp.path().join("src/lib/a.js"), "require('b');\nrequire('c');\nA").unwrap();
    fs::write(tmp.path().join("src/lib/b.js"), "require('c');\nB").unwrap();
    fs::write(tmp.path().join("src/lib/c.js"), "C").unwrap();
    tmp
}

#[test]
fn test_deps_reports_transitive_set() {
    let tmp = project();
    let deps = ops_deps::deps(tmp.path(), "lib/a.js").unwrap();
    let src = tmp.path().join("src");
    let expected: Vec<PathBuf> = vec![src.join("lib/b.js"), src.join("lib/c.js")];
    assert_eq!(deps.into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_deps_missing_root_fails() {
    let tmp = project();
    assert!(ops_deps::deps(tmp.path(), "lib/zzz.js").is_err());
}

#[test]
fn test_tree_renders_relative_labels() {
    let tmp = project();
    let output = ops_tree::tree(tmp.path(), "lib/a.js", None).unwrap();
    assert_eq!(
        output,
        "lib/a.js\n├── lib/b.js\n│   └── lib/c.js\n└── lib/c.js (*)\n"
    );
}

#[test]
fn test_init_writes_manifest_and_input_dir() {
    let tmp = TempDir::new().unwrap();
    ops_init::init(tmp.path()).unwrap();
    assert!(tmp.path().join("Neuter.toml").is_file());
    assert!(tmp.path().join("src").is_dir());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let tmp = project();
    let err = ops_init::init(tmp.path()).unwrap_err();
    assert!(err.to_string().contains("already exists"), "got: {err}");
}
