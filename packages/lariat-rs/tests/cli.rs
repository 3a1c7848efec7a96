//! Integration tests for the CLI commands

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const REGIONS_JSON: &str = r#"{
    "regions": [
        { "text": "hello", "bounding_box": { "left": 0.0, "top": 0.0, "right": 10.0, "bottom": 10.0 }, "confidence": 0.95 },
        { "text": "world", "bounding_box": { "left": 100.0, "top": 100.0, "right": 110.0, "bottom": 110.0 }, "confidence": 0.90 }
    ]
}"#;

const PATH_JSON: &str = r#"{
    "points": [
        { "x": -5.0, "y": -5.0 },
        { "x": 20.0, "y": -5.0 },
        { "x": 20.0, "y": 20.0 },
        { "x": -5.0, "y": 20.0 }
    ]
}"#;

const TRACE_JSON: &str = r#"{
    "events": [
        { "event": "down", "x": -5.0, "y": -5.0 },
        { "event": "move", "x": 20.0, "y": -5.0 },
        { "event": "move", "x": 20.0, "y": 20.0 },
        { "event": "move", "x": -5.0, "y": 20.0 },
        { "event": "up" },
        { "event": "down", "x": 0.0, "y": 0.0 },
        { "event": "move", "x": 30.0, "y": 30.0 },
        { "event": "cancel" }
    ]
}"#;

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}

#[test]
fn test_version_command() {
    let mut cmd = cargo_bin_cmd!("lariat");
    cmd.arg("version");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("lariat "));
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("lariat");
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("lariat "));
}

#[test]
fn test_version_short_flag() {
    let mut cmd = cargo_bin_cmd!("lariat");
    cmd.arg("-V");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("lariat "));
}

#[test]
fn test_select_prints_indices() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let regions = write_fixture(&dir, "regions.json", REGIONS_JSON);
    let path = write_fixture(&dir, "path.json", PATH_JSON);

    let mut cmd = cargo_bin_cmd!("lariat");
    cmd.arg("select")
        .arg("--regions-file")
        .arg(&regions)
        .arg("--path-file")
        .arg(&path);

    // Only the first region's center (5, 5) is enclosed
    cmd.assert().success().stdout(predicate::eq("0\n"));
}

#[test]
fn test_select_prints_text() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let regions = write_fixture(&dir, "regions.json", REGIONS_JSON);
    let path = write_fixture(&dir, "path.json", PATH_JSON);

    let mut cmd = cargo_bin_cmd!("lariat");
    cmd.arg("select")
        .arg("--regions-file")
        .arg(&regions)
        .arg("--path-file")
        .arg(&path)
        .arg("--text");

    cmd.assert().success().stdout(predicate::eq("hello\n"));
}

#[test]
fn test_replay_reports_completed_gestures_only() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let regions = write_fixture(&dir, "regions.json", REGIONS_JSON);
    let trace = write_fixture(&dir, "trace.json", TRACE_JSON);

    let mut cmd = cargo_bin_cmd!("lariat");
    cmd.arg("replay")
        .arg("--regions-file")
        .arg(&regions)
        .arg("--trace-file")
        .arg(&trace);

    // The cancelled second gesture produces no line
    cmd.assert()
        .success()
        .stdout(predicate::eq("gesture 0: [0]\n"));
}

#[test]
fn test_select_missing_regions_file_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_fixture(&dir, "path.json", PATH_JSON);

    let mut cmd = cargo_bin_cmd!("lariat");
    cmd.arg("select")
        .arg("--regions-file")
        .arg(dir.path().join("missing.json"))
        .arg("--path-file")
        .arg(&path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}
