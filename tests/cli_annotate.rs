//! Integration tests for the atn CLI
//!
//! These tests verify end-to-end behavior of the CLI by running the binary
//! against fixture files and checking exit codes and output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

/// Path to the atn binary, built by cargo for integration tests
fn atn_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_atn"))
}

fn run_atn(args: &[&Path]) -> Output {
    let mut cmd = Command::new(atn_binary());
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute atn")
}

fn write_fixture(dir: &Path) -> PathBuf {
    let document_path = dir.join("sheet.json");
    fs::write(
        &document_path,
        r#"{"frames": {"enemyBlue1.png": {"frame": {"x": 0, "y": 0, "w": 8, "h": 8}}}}"#,
    )
    .unwrap();
    RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255]))
        .save(dir.join("sheet.png"))
        .unwrap();
    document_path
}

#[test]
fn test_annotates_and_reports_count() {
    let dir = TempDir::new().unwrap();
    let document_path = write_fixture(dir.path());

    let output = run_atn(&[&document_path]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Updated descriptions for 1 frames\n"
    );

    let rewritten = fs::read_to_string(&document_path).unwrap();
    assert!(rewritten.contains(r#""description": "Blue enemy fighter v1""#));
}

#[test]
fn test_explicit_image_path() {
    let dir = TempDir::new().unwrap();
    let document_path = write_fixture(dir.path());
    let moved = dir.path().join("atlas.png");
    fs::rename(dir.path().join("sheet.png"), &moved).unwrap();

    let output = run_atn(&[&document_path, Path::new("--image"), &moved]);
    assert!(output.status.success());
}

#[test]
fn test_missing_document_is_invalid_args() {
    let dir = TempDir::new().unwrap();
    let output = run_atn(&[&dir.path().join("absent.json")]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}

#[test]
fn test_malformed_document_is_error() {
    let dir = TempDir::new().unwrap();
    let document_path = dir.path().join("sheet.json");
    fs::write(&document_path, "{not json").unwrap();

    let output = run_atn(&[&document_path]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_image_is_error_and_document_untouched() {
    let dir = TempDir::new().unwrap();
    let document_path = write_fixture(dir.path());
    fs::remove_file(dir.path().join("sheet.png")).unwrap();
    let before = fs::read_to_string(&document_path).unwrap();

    let output = run_atn(&[&document_path]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&document_path).unwrap(), before);
}
