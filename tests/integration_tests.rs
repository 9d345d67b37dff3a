//! Integration tests for the cursus CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get a cursus command
fn cursus() -> Command {
    Command::cargo_bin("cursus").unwrap()
}

/// Helper to write the sample curriculum into a temp directory
fn setup_sample_curriculum() -> TempDir {
    let tmp = TempDir::new().unwrap();
    cursus().current_dir(tmp.path()).arg("init").assert().success();
    tmp
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    cursus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("curriculum"));
}

#[test]
fn test_version_displays() {
    cursus()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cursus"));
}

#[test]
fn test_unknown_command_fails() {
    cursus()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Init Command Tests
// ============================================================================

#[test]
fn test_init_writes_sample_files() {
    let tmp = TempDir::new().unwrap();

    cursus()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample curriculum written"));

    assert!(tmp.path().join("gsi_curriculum.csv").exists());
    assert!(tmp.path().join("plan.yaml").exists());

    let csv = fs::read_to_string(tmp.path().join("gsi_curriculum.csv")).unwrap();
    assert!(csv.starts_with("type,code,title"));
    assert!(csv.contains("module,F111"));
    assert!(csv.contains("semester,S1"));
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let tmp = setup_sample_curriculum();

    cursus()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cursus()
        .current_dir(tmp.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_shows_all_elements() {
    let tmp = setup_sample_curriculum();

    cursus()
        .current_dir(tmp.path())
        .args(["list", "gsi_curriculum.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("F111"))
        .stdout(predicate::str::contains("UEF11"))
        .stdout(predicate::str::contains("S1"))
        .stdout(predicate::str::contains("14 element(s) loaded"));
}

#[test]
fn test_list_filters_by_kind() {
    let tmp = setup_sample_curriculum();

    cursus()
        .current_dir(tmp.path())
        .args(["list", "gsi_curriculum.csv", "--kind", "unit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UEF11"))
        .stdout(predicate::str::contains("F111").not());
}

#[test]
fn test_list_quiet_suppresses_summary() {
    let tmp = setup_sample_curriculum();

    cursus()
        .current_dir(tmp.path())
        .args(["list", "gsi_curriculum.csv", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("element(s) loaded").not());
}

#[test]
fn test_list_missing_file_fails() {
    let tmp = TempDir::new().unwrap();

    cursus()
        .current_dir(tmp.path())
        .args(["list", "missing.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// ============================================================================
// Report Command Tests
// ============================================================================

#[test]
fn test_report_end_to_end_on_sample_data() {
    let tmp = setup_sample_curriculum();

    // With the default demo grades the semester averages 11.28/20. T111
    // (exam_percent 0, no TP/TD hours) averages 0 by the faithful
    // no-renormalization rule, so total credits land at 29 of the
    // expected 27.
    cursus()
        .current_dir(tmp.path())
        .args(["report", "gsi_curriculum.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Academic Structure"))
        .stdout(predicate::str::contains("Semester 1 (S1)"))
        .stdout(predicate::str::contains("11.28/20"))
        .stdout(predicate::str::contains("29/27"))
        .stdout(predicate::str::contains("✓ PASS"))
        .stdout(predicate::str::contains("✗ FAIL"))
        .stdout(predicate::str::contains("Student has passed the semester"));
}

#[test]
fn test_report_summary_only() {
    let tmp = setup_sample_curriculum();

    cursus()
        .current_dir(tmp.path())
        .args(["report", "gsi_curriculum.csv", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student Results Summary"))
        .stdout(predicate::str::contains("Academic Structure").not());
}

#[test]
fn test_report_with_explicit_plan_file() {
    let tmp = setup_sample_curriculum();

    cursus()
        .current_dir(tmp.path())
        .args(["report", "gsi_curriculum.csv", "--plan", "plan.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UE Fondamentales 1"));
}

#[test]
fn test_report_writes_output_file() {
    let tmp = setup_sample_curriculum();

    cursus()
        .current_dir(tmp.path())
        .args(["report", "gsi_curriculum.csv", "-o", "report.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let report = fs::read_to_string(tmp.path().join("report.md")).unwrap();
    assert!(report.contains("# Academic Structure"));
    assert!(report.contains("| CODE | MODULE"));
}

#[test]
fn test_report_missing_file_fails() {
    let tmp = TempDir::new().unwrap();

    cursus()
        .current_dir(tmp.path())
        .args(["report", "missing.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_report_tolerates_partial_curriculum() {
    let tmp = TempDir::new().unwrap();
    // Only part of the curriculum the default plan references exists;
    // the missing branches must be skipped without failing.
    fs::write(
        tmp.path().join("partial.csv"),
        "type,code,title,coef,credit,hours_lecture,hours_td,hours_tp,teaching_mode,continous_percent,exam_percent\n\
         module,F111,Networks,3,6,1.5,1.5,1.5,In-person,40,60\n\
         unit,UEF11,Fundamentals 1,0,0,0,0,0,In-person,0,0\n\
         semester,S1,Semester 1,0,0,0,0,0,In-person,0,0\n",
    )
    .unwrap();

    cursus()
        .current_dir(tmp.path())
        .args(["report", "partial.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fundamentals 1"))
        .stdout(predicate::str::contains("13.00/20"));
}
