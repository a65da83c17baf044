//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `smartexpiry` binary to verify that
//! argument parsing, filtering, and report/export writing work end-to-end.

use assert_cmd::Command;
use chrono::{Duration, Local};
use predicates::prelude::*;
use std::fs;

fn cmd() -> Command {
    Command::cargo_bin("smartexpiry").unwrap()
}

/// A small inventory whose expiry dates sit inside the default 0-30 window
/// relative to the run date.
fn sample_csv() -> String {
    let today = Local::now().date_naive();
    let tomorrow = today + Duration::days(1);
    let next_week = today + Duration::days(7);
    format!(
        "Item,Category,Store Location,Stock,Expiry Date,Predicted Unsold Units,Discount %\n\
         Milk 1L,Dairy,StoreX,10,{tomorrow},5,10\n\
         Sourdough Loaf,Bakery,StoreY,4,{next_week},0,0\n"
    )
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--store"))
        .stdout(predicate::str::contains("--min-days"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("smartexpiry"));
}

// ---------------------------------------------------------------------------
// Error paths
// ---------------------------------------------------------------------------

#[test]
fn missing_input_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .current_dir(dir.path())
        .arg("nope.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load inventory"));
}

#[test]
fn inverted_expiry_range_errors() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("inventory.csv");
    fs::write(&input, sample_csv()).unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["inventory.csv", "--min-days", "10", "--max-days", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expiry range"));
}

// ---------------------------------------------------------------------------
// End-to-end
// ---------------------------------------------------------------------------

#[test]
fn writes_export_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("inventory.csv");
    fs::write(&input, sample_csv()).unwrap();

    cmd()
        .current_dir(dir.path())
        .args([
            "inventory.csv",
            "--min-days",
            "0",
            "--max-days",
            "30",
            "--export",
            "out.csv",
            "--report",
            "report.html",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("2 of 2 rows"));

    let export = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert!(export.starts_with(
        "Item,Category,Store Location,Stock,Expiry Date,Days to Expiry,\
         Waste Risk Score,Suggested Discount"
    ));
    assert!(export.contains("Milk 1L"));

    let report = fs::read_to_string(dir.path().join("report.html")).unwrap();
    assert!(report.contains("Inventory Overview"));
    assert!(report.contains("Suggested Donations"));
}

#[test]
fn store_filter_narrows_the_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("inventory.csv");
    fs::write(&input, sample_csv()).unwrap();

    cmd()
        .current_dir(dir.path())
        .args([
            "inventory.csv",
            "--store",
            "StoreX",
            "--max-days",
            "30",
            "--export",
            "out.csv",
            "--no-report",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("1 of 2 rows"));

    let export = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert!(export.contains("Milk 1L"));
    assert!(!export.contains("Sourdough"));
}

#[test]
fn config_file_drives_the_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("inventory.csv"), sample_csv()).unwrap();
    fs::write(
        dir.path().join("report.json"),
        r#"{ "source": "inventory.csv", "store": "StoreY", "expiry_max_days": 30 }"#,
    )
    .unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["--config", "report.json", "--export", "out.csv", "--no-report"])
        .assert()
        .success()
        .stderr(predicate::str::contains("1 of 2 rows"));

    let export = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert!(export.contains("Sourdough"));
}
