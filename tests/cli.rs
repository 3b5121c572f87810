//! End-to-end CLI tests
//!
//! Each test runs the binary against an isolated data directory via
//! FINZEN_DATA_DIR.

use assert_cmd::Command;
use chrono::{Duration, Local};
use predicates::prelude::*;
use tempfile::TempDir;

fn finzen(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finzen").unwrap();
    cmd.env("FINZEN_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn no_args_prints_hint() {
    let dir = TempDir::new().unwrap();
    finzen(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("finzen --help"));
}

#[test]
fn add_and_list_expense() {
    let dir = TempDir::new().unwrap();

    finzen(&dir)
        .args([
            "expense", "add", "Rent", "1200.00", "--category", "Housing", "--due", "2025-03-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense"));

    finzen(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("$1200.00"));
}

#[test]
fn expense_list_filters_by_category() {
    let dir = TempDir::new().unwrap();

    finzen(&dir)
        .args(["expense", "add", "Rent", "1200", "--category", "Housing"])
        .assert()
        .success();
    finzen(&dir)
        .args(["expense", "add", "Cinema", "40", "--category", "Leisure"])
        .assert()
        .success();

    finzen(&dir)
        .args(["expense", "list", "--category", "Leisure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cinema"))
        .stdout(predicate::str::contains("Rent").not());
}

#[test]
fn expense_reminder_shows_in_list() {
    let dir = TempDir::new().unwrap();
    let due = (Local::now().date_naive() + Duration::days(2))
        .format("%Y-%m-%d")
        .to_string();

    finzen(&dir)
        .args([
            "expense", "add", "Rent", "1200", "--category", "Housing", "--due", &due,
            "--reminder", "5",
        ])
        .assert()
        .success();

    finzen(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(reminder)"));
}

#[test]
fn rejects_malformed_amount() {
    let dir = TempDir::new().unwrap();
    finzen(&dir)
        .args(["expense", "add", "Snack", "10.5€", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));
}

#[test]
fn unknown_window_is_rejected() {
    let dir = TempDir::new().unwrap();
    finzen(&dir)
        .args(["expense", "list", "--window", "fortnight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown date window"));
}

#[test]
fn score_with_no_data_is_zero() {
    let dir = TempDir::new().unwrap();
    finzen(&dir)
        .args(["score"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zen Score: 0/100"));
}

#[test]
fn score_reflects_configured_income() {
    let dir = TempDir::new().unwrap();

    finzen(&dir)
        .args(["config", "--income", "5000"])
        .assert()
        .success();

    // No expenses: full savings (50) + full expense control (30) = 80
    finzen(&dir)
        .args(["score"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zen Score: 80/100"));
}

#[test]
fn configured_date_format_applies_to_listings() {
    let dir = TempDir::new().unwrap();

    finzen(&dir)
        .args(["config", "--date-format", "%d/%m/%Y"])
        .assert()
        .success();
    finzen(&dir)
        .args([
            "expense", "add", "Rent", "1200", "--category", "Housing", "--due", "2025-03-01",
        ])
        .assert()
        .success();

    finzen(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("01/03/2025"));
}

#[test]
fn invalid_date_format_is_rejected() {
    let dir = TempDir::new().unwrap();
    finzen(&dir)
        .args(["config", "--date-format", "%Q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn projection_prints_summary() {
    let dir = TempDir::new().unwrap();
    finzen(&dir)
        .args([
            "project", "1000", "--monthly", "200", "--rate", "8", "--years", "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Year 1"))
        .stdout(predicate::str::contains("Total invested: $3400.00"));
}

#[test]
fn projection_rejects_absurd_years() {
    let dir = TempDir::new().unwrap();
    finzen(&dir)
        .args([
            "project", "1000", "--monthly", "0", "--rate", "8", "--years", "500",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Years must be at most 100"));
}

#[test]
fn goal_contribution_clamps_at_target() {
    let dir = TempDir::new().unwrap();

    finzen(&dir)
        .args(["goal", "add", "Trip", "1000", "--deadline", "2026-06-01"])
        .assert()
        .success();

    finzen(&dir)
        .args(["goal", "contribute", "Trip", "1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied $1000.00"))
        .stdout(predicate::str::contains("Goal complete!"));
}
