//! Integration tests for list command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{buildlog_cmd, sample_log, write_day_folder};

fn init_root(temp: &TempDir, year: &str) {
    buildlog_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--year")
        .arg(year)
        .assert()
        .success();
}

#[test]
fn test_list_no_entries() {
    let temp = TempDir::new().unwrap();
    init_root(&temp, "2024");

    buildlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No log entries found"));
}

#[test]
fn test_list_sorted_by_day_ascending() {
    let temp = TempDir::new().unwrap();
    init_root(&temp, "2024");

    write_day_folder(
        temp.path(),
        "2024",
        "day8_20240118",
        &sample_log("Ana", "late"),
        &[],
    );
    write_day_folder(
        temp.path(),
        "2024",
        "day2_20240112",
        &sample_log("Ben", "early"),
        &[],
    );

    let output = buildlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("day2_20240112"));
    assert!(lines[1].contains("day8_20240118"));
}

#[test]
fn test_list_shows_derived_fields() {
    let temp = TempDir::new().unwrap();
    init_root(&temp, "2024");

    write_day_folder(
        temp.path(),
        "2024",
        "day5_20240115",
        &sample_log("Ana", "maiden flight"),
        &[],
    );

    buildlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 5"))
        .stdout(predicate::str::contains("2024-01-15"))
        .stdout(predicate::str::contains("maiden flight"));
}

#[test]
fn test_list_nonconforming_folder_defaults() {
    let temp = TempDir::new().unwrap();
    init_root(&temp, "2024");

    write_day_folder(temp.path(), "2024", "kickoff", "No bullets here.\n", &[]);

    buildlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 0"))
        .stdout(predicate::str::contains("Unknown Date"))
        .stdout(predicate::str::contains("No preview available"));
}

#[test]
fn test_list_unknown_year_is_empty_not_error() {
    let temp = TempDir::new().unwrap();
    init_root(&temp, "2024");

    write_day_folder(
        temp.path(),
        "2024",
        "day1_20240111",
        &sample_log("Ana", "a"),
        &[],
    );

    buildlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--year")
        .arg("1999")
        .assert()
        .success()
        .stdout(predicate::str::contains("No log entries found"));
}

#[test]
fn test_list_with_date_range() {
    let temp = TempDir::new().unwrap();
    init_root(&temp, "2024");

    write_day_folder(
        temp.path(),
        "2024",
        "day1_20240111",
        &sample_log("Ana", "a"),
        &[],
    );
    write_day_folder(
        temp.path(),
        "2024",
        "day5_20240115",
        &sample_log("Ana", "b"),
        &[],
    );
    write_day_folder(
        temp.path(),
        "2024",
        "day9_20240119",
        &sample_log("Ana", "c"),
        &[],
    );

    buildlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--from")
        .arg("2024-01-12")
        .arg("--to")
        .arg("2024-01-18")
        .assert()
        .success()
        .stdout(predicate::str::contains("day5_20240115"))
        .stdout(predicate::str::contains("day1_20240111").not())
        .stdout(predicate::str::contains("day9_20240119").not());
}

#[test]
fn test_list_with_limit() {
    let temp = TempDir::new().unwrap();
    init_root(&temp, "2024");

    write_day_folder(
        temp.path(),
        "2024",
        "day1_20240111",
        &sample_log("Ana", "a"),
        &[],
    );
    write_day_folder(
        temp.path(),
        "2024",
        "day2_20240112",
        &sample_log("Ana", "b"),
        &[],
    );
    write_day_folder(
        temp.path(),
        "2024",
        "day3_20240113",
        &sample_log("Ana", "c"),
        &[],
    );

    buildlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--limit")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("day1_20240111"))
        .stdout(predicate::str::contains("day2_20240112"))
        .stdout(predicate::str::contains("day3_20240113").not());
}

#[test]
fn test_list_invalid_date_value() {
    let temp = TempDir::new().unwrap();
    init_root(&temp, "2024");

    buildlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--from")
        .arg("11-01-2024")
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_list_missing_log_md_fails_hard() {
    let temp = TempDir::new().unwrap();
    init_root(&temp, "2024");

    write_day_folder(
        temp.path(),
        "2024",
        "day1_20240111",
        &sample_log("Ana", "a"),
        &[],
    );
    // A day folder without the required document.
    fs::create_dir_all(temp.path().join("logs/2024/day2_20240112")).unwrap();

    buildlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Missing log.md"));
}

#[test]
fn test_list_outside_root_exit_code() {
    let temp = TempDir::new().unwrap();

    buildlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a buildlog directory"));
}
