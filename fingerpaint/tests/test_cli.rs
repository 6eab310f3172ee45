// Allow deprecated APIs (assert_cmd::cargo_bin is deprecated but still works)
#![allow(deprecated)]

use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use rstest::rstest;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const CROSSING_SCRIPT: &str = r#"[
    {"op": "size", "width": 10},
    {"op": "color", "token": "red"},
    {"op": "down", "x": 0, "y": 0},
    {"op": "up", "x": 10, "y": 10},
    {"op": "color", "token": "blue"},
    {"op": "down", "x": 0, "y": 10},
    {"op": "up", "x": 10, "y": 0}
]"#;

fn write_script(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join("gestures.json");
    fs::write(&path, body).unwrap();
    path.to_str().unwrap().to_string()
}

fn decode(path: &Path) -> image::RgbaImage {
    image::open(path).unwrap().to_rgba8()
}

#[test]
fn test_missing_args() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("fingerpaint")?;
    cmd.arg("--output").arg("out.png");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--script"));
    Ok(())
}

#[rstest]
#[case(&[], [0, 0, 255, 255])]
#[case(&["undo"], [255, 0, 0, 255])]
#[case(&["undo", "redo"], [0, 0, 255, 255])]
#[case(&["undo", "undo"], [255, 255, 255, 255])]
fn test_crossing_strokes(
    #[case] tail: &[&str],
    #[case] expected: [u8; 4],
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut ops: Vec<serde_json::Value> = serde_json::from_str(CROSSING_SCRIPT)?;
    for op in tail {
        ops.push(serde_json::json!({ "op": op }));
    }
    let script = write_script(&dir, &serde_json::to_string(&ops)?);
    let output = dir.path().join("out.png");

    let mut cmd = Command::cargo_bin("fingerpaint")?;
    cmd.arg("--width=20")
        .arg("--height=20")
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output);
    cmd.assert().success();

    let img = decode(&output);
    assert_eq!(img.dimensions(), (20, 20));
    assert_eq!(img.get_pixel(5, 5).0, expected);
    Ok(())
}

#[test]
fn test_background_color() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let script = write_script(&dir, "[]");
    let output = dir.path().join("out.png");

    let mut cmd = Command::cargo_bin("fingerpaint")?;
    cmd.arg("--width=8")
        .arg("--height=4")
        .arg("--background-color=#abc")
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output);
    cmd.assert().success();

    let img = decode(&output);
    assert_eq!(img.dimensions(), (8, 4));
    assert_eq!(img.get_pixel(3, 2).0, [0xaa, 0xbb, 0xcc, 255]);
    Ok(())
}

#[test]
fn test_background_image_from_script() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let bg = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 255, 255]));
    bg.save(dir.path().join("bg.png"))?;
    let script = write_script(
        &dir,
        r#"[
            {"op": "background", "path": "bg.png"},
            {"op": "preset", "size": "small"},
            {"op": "down", "x": 0, "y": 16},
            {"op": "up", "x": 32, "y": 16}
        ]"#,
    );
    let output = dir.path().join("out.png");

    let mut cmd = Command::cargo_bin("fingerpaint")?;
    cmd.arg("--width=32")
        .arg("--height=32")
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output);
    cmd.assert().success();

    let img = decode(&output);
    assert_eq!(img.get_pixel(16, 16).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(16, 2).0, [255, 0, 255, 255]);
    Ok(())
}

#[test]
fn test_invalid_color_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let script = write_script(&dir, r#"[{"op": "color", "token": "neon"}]"#);
    let output = dir.path().join("out.png");

    let mut cmd = Command::cargo_bin("fingerpaint")?;
    cmd.arg("--script").arg(&script).arg("--output").arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("neon"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_malformed_script_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let script = write_script(&dir, r#"[{"op": "down"}]"#);

    let mut cmd = Command::cargo_bin("fingerpaint")?;
    cmd.arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(dir.path().join("out.png"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse gesture script"));
    Ok(())
}

#[test]
fn test_zero_size_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let script = write_script(&dir, "[]");

    let mut cmd = Command::cargo_bin("fingerpaint")?;
    cmd.arg("--width=0")
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(dir.path().join("out.png"));
    cmd.assert().failure();
    Ok(())
}
