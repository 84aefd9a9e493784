use image::{Rgba, RgbaImage};
use letter_icon::render;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Runs `verify-icon` against a freshly rendered icon and expects the
/// well-formed verdict.
#[test]
fn test_verify_icon_accepts_rendered_icon() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let icon_path = temp_dir.path().join("icon128.png");
    render(128, &icon_path).expect("render failed");

    let output = run_verify_icon(&icon_path);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "verify-icon failed: {stdout}");
    assert!(stdout.contains("Image dimensions: 128x128"), "stdout: {stdout}");
    assert!(stdout.contains("✓ Icon looks well-formed"), "stdout: {stdout}");
}

/// A fully opaque square has no rounded corners and gets flagged.
#[test]
fn test_verify_icon_flags_plain_square() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let icon_path = temp_dir.path().join("square.png");
    RgbaImage::from_pixel(32, 32, Rgba([50, 100, 150, 255]))
        .save(&icon_path)
        .expect("Failed to save test image");

    let output = run_verify_icon(&icon_path);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("⚠"), "stdout: {stdout}");
}

#[test]
fn test_verify_icon_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_verify_icon(&temp_dir.path().join("nope.png"));

    assert!(!output.status.success());
}

fn run_verify_icon(path: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_verify-icon"))
        .arg(path)
        .output()
        .expect("Failed to run verify-icon")
}
