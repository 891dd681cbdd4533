//! Integration tests for CLI error handling and exit codes

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{lj2hugo_cmd, write_entry, ENTRY_XML};

#[test]
fn test_no_files_is_usage_error() {
    lj2hugo_cmd().assert().failure().code(2);
}

#[test]
fn test_missing_input_exits_with_read_code() {
    let temp = TempDir::new().unwrap();

    lj2hugo_cmd()
        .arg(temp.path().join("L-404"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("L-404"));
}

#[test]
fn test_malformed_xml_exits_with_parse_code() {
    let temp = TempDir::new().unwrap();
    let input = write_entry(temp.path(), "L-1", "<event><subject>oops</event>");

    lj2hugo_cmd()
        .arg(&input)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("L-1"));
}

#[test]
fn test_wrong_root_element_exits_with_parse_code() {
    let temp = TempDir::new().unwrap();
    let input = write_entry(temp.path(), "L-1", "<entry></entry>");

    lj2hugo_cmd()
        .arg(&input)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("expected <event> root element"));
}

#[test]
fn test_bad_event_time_exits_with_parse_code() {
    let temp = TempDir::new().unwrap();
    let input = write_entry(
        temp.path(),
        "L-1",
        "<event><eventtime>yesterday-ish</eventtime></event>",
    );

    lj2hugo_cmd()
        .arg(&input)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("yesterday-ish"));
}

#[test]
fn test_malformed_companion_exits_with_parse_code() {
    let temp = TempDir::new().unwrap();
    let input = write_entry(temp.path(), "L-1", ENTRY_XML);
    write_entry(temp.path(), "C-1", "not xml at all");

    lj2hugo_cmd()
        .arg(&input)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("C-1"));
}

#[test]
fn test_first_failure_aborts_remaining_paths() {
    let temp = TempDir::new().unwrap();
    let bad = temp.path().join("L-404");
    let good = write_entry(temp.path(), "L-1234", ENTRY_XML);

    lj2hugo_cmd().arg(&bad).arg(&good).assert().failure();

    assert!(!temp.path().join("L-1234.md").exists());
}
