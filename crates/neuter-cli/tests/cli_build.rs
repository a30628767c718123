use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn neuter() -> Command {
    Command::cargo_bin("neuter").unwrap()
}

fn project(manifest: &str, files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Neuter.toml"), manifest).unwrap();
    for (rel, body) in files {
        let path = tmp.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }
    tmp
}

#[test]
fn test_build_writes_artifact() {
    let tmp = project(
        "[build]\ninclude = [\"a.js\"]\n",
        &[
            ("src/a.js", "require('b.js');\nA"),
            ("src/b.js", "require('c.js');\nB"),
            ("src/c.js", "C"),
        ],
    );

    neuter()
        .current_dir(tmp.path())
        .args(["build"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Neutering"));

    let out = fs::read_to_string(tmp.path().join("dist/neutered.js")).unwrap();
    assert_eq!(out, "C\n\nB\n\nA");
}

#[test]
fn test_build_from_subdirectory_finds_manifest() {
    let tmp = project("", &[("src/lib/a.js", "A")]);

    neuter()
        .current_dir(tmp.path().join("src/lib"))
        .args(["build", "--quiet"])
        .assert()
        .success();

    assert!(tmp.path().join("dist/neutered.js").is_file());
}

#[test]
fn test_build_closure_wrap_flag_and_output() {
    let tmp = project("", &[("src/a.js", "require('b.js');\nA"), ("src/b.js", "B")]);

    neuter()
        .current_dir(tmp.path())
        .args(["build", "a.js", "--closure-wrap", "-o", "out.js", "-q"])
        .assert()
        .success();

    let out = fs::read_to_string(tmp.path().join("out.js")).unwrap();
    assert_eq!(
        out,
        "(function() {\nB\n})();\n\n\n\n(function() {\nA\n})();\n\n"
    );
}

#[test]
fn test_build_warns_about_unaccounted_dependency() {
    let tmp = project(
        "[build]\ninclude = [\"d.js\"]\n\n[neuter]\nknown-dependencies = []\n",
        &[("src/d.js", "require('e.js');\nD"), ("src/e.js", "E")],
    );

    neuter()
        .current_dir(tmp.path())
        .args(["build"])
        .assert()
        .success()
        .stderr(predicate::str::contains("e.js', which is not listed in known-dependencies"));
}

#[test]
fn test_build_missing_dependency_fails() {
    let tmp = project("", &[("src/a.js", "require('gone.js');\nA")]);

    neuter()
        .current_dir(tmp.path())
        .args(["build", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gone.js"));
}

#[test]
fn test_build_without_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    neuter()
        .current_dir(tmp.path())
        .args(["build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Neuter.toml"));
}
