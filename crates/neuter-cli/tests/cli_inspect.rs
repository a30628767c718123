use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn neuter() -> Command {
    Command::cargo_bin("neuter").unwrap()
}

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Neuter.toml"), "").unwrap();
    fs::create_dir_all(tmp.path().join("src")).unwrap();
    fs::write(tmp.path().join("src/a.js"), "require('b.js');\nrequire('c.js');\nA").unwrap();
    fs::write(tmp.path().join("src/b.js"), "require('c.js');\nB").unwrap();
    fs::write(tmp.path().join("src/c.js"), "require('a.js');\nC").unwrap();
    tmp
}

#[test]
fn test_deps_lists_transitive_paths() {
    let tmp = project();
    let src = tmp.path().join("src");
    let expected = format!(
        "{}\n{}\n",
        src.join("b.js").display(),
        src.join("c.js").display()
    );

    neuter()
        .current_dir(tmp.path())
        .args(["deps", "a.js"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_deps_json() {
    let tmp = project();

    let output = neuter()
        .current_dir(tmp.path())
        .args(["deps", "b.js", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let paths: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("a.js"));
    assert!(paths[1].ends_with("c.js"));
}

#[test]
fn test_tree_shows_cycle_marker() {
    let tmp = project();

    neuter()
        .current_dir(tmp.path())
        .args(["tree", "a.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("└── c.js (*)"))
        .stdout(predicate::str::contains("cycles present"));
}

#[test]
fn test_init_creates_manifest() {
    let tmp = TempDir::new().unwrap();

    neuter()
        .current_dir(tmp.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created Neuter.toml"));

    assert!(tmp.path().join("Neuter.toml").is_file());

    neuter()
        .current_dir(tmp.path())
        .args(["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
