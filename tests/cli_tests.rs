//! Tests for the drawable-wrap binary
//!
//! These tests run the built binary and verify:
//! - Exit codes for success and failure
//! - Failures are reported once on stderr
//! - The JSON summary on stdout

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn drawable_wrap() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_drawable-wrap"));
    cmd.env("RUST_LOG", "drawable_wrap=info");
    cmd
}

#[test]
fn test_failure_is_reported_once() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let output = drawable_wrap()
        .arg("--root")
        .arg(&missing)
        .output()
        .expect("Should run binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.matches("Failed to process").count(),
        1,
        "stderr was: {}",
        stderr
    );
}

#[test]
fn test_json_summary() {
    let dir = TempDir::new().unwrap();
    let hdpi = dir.path().join("res/drawable-hdpi");
    fs::create_dir_all(&hdpi).unwrap();
    fs::write(hdpi.join("ic_a.png"), b"png").unwrap();

    let output = drawable_wrap()
        .arg("--root")
        .arg(dir.path())
        .arg("--json")
        .arg("--dry-run")
        .output()
        .expect("Should run binary");

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["renamed"], 1);
    assert_eq!(summary["wrappers_written"], 1);
    assert!(hdpi.join("ic_a.png").exists());
}

#[test]
fn test_validate_rejects_bad_conventions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conventions.json");
    fs::write(&path, r#"{ "alpha_marker": "alpha" }"#).unwrap();

    let output = drawable_wrap()
        .arg("validate")
        .arg(&path)
        .output()
        .expect("Should run binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("alpha marker"));
}
