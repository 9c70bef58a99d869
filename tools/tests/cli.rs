use std::{fs, path::PathBuf, process::Command};

const BINARY: &str = env!("CARGO_BIN_EXE_polyrecover-cli");

fn sample() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("polyrecover")
        .join("tests")
        .join("fixtures")
        .join("sample.json")
}

#[test]
fn test_usage() {
    // No documents.
    let output = Command::new(BINARY).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("USAGE"));

    // A single document.
    let output = Command::new(BINARY).arg(sample()).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("USAGE"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_two_documents() {
    let output = Command::new(BINARY)
        .arg(sample())
        .arg(sample())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n3\n");
}

#[test]
fn test_methods() {
    for method in ["elimination", "lagrange", "cross-check"] {
        let output = Command::new(BINARY)
            .args(["--method", method])
            .arg(sample())
            .arg(sample())
            .output()
            .unwrap();
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n3\n");
    }
}

#[test]
fn test_failed_document() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.json");
    fs::write(&broken, r#"{ "keys": { "n": 1, "k": 2 }, "1": { "base": "10", "value": "4" } }"#)
        .unwrap();

    let output = Command::new(BINARY)
        .env_remove("POLYRECOVER_LOG")
        .arg(&broken)
        .arg(sample())
        .output()
        .unwrap();

    // The remaining document is still processed.
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not enough points: 2 required, 1 available"));
    assert!(stderr.contains("broken.json"));

    // Reported by the binary only, not again by the logger.
    assert_eq!(stderr.matches("not enough points").count(), 1);
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn test_missing_document() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let cause = fs::read(&missing).unwrap_err().to_string();

    let output = Command::new(BINARY)
        .env_remove("POLYRECOVER_LOG")
        .arg(&missing)
        .arg(sample())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.json"));
    assert!(stderr.contains("i/o error"));
    assert_eq!(stderr.matches(cause.as_str()).count(), 1);
}
