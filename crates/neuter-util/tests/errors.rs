use std::path::PathBuf;

use neuter_util::errors::NeuterError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = NeuterError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_missing_dependency_names_both_paths() {
    let err = NeuterError::MissingDependency {
        path: PathBuf::from("/in/b"),
        declared_by: PathBuf::from("/in/a"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    let msg = err.to_string();
    assert!(msg.contains("'/in/b'"), "got: {msg}");
    assert!(msg.contains("required by '/in/a'"), "got: {msg}");
}

#[test]
fn test_missing_root_display() {
    let err = NeuterError::MissingRoot {
        path: PathBuf::from("/in/a"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert_eq!(err.to_string(), "Cannot read root '/in/a': gone");
}

#[test]
fn test_invalid_directive_display() {
    let err = NeuterError::InvalidDirective {
        pattern: "require".to_string(),
        message: "expected 1 capture group, found 0".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid directive pattern `require`: expected 1 capture group, found 0"
    );
}

#[test]
fn test_manifest_error_display() {
    let err = NeuterError::Manifest {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Manifest error: bad syntax");
}

#[test]
fn test_generic_error_display() {
    let err = NeuterError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: NeuterError = io_err.into();
    assert!(matches!(err, NeuterError::Io(_)));
}
