//! Exit codes and messages of the binary that do not need a terminal.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_no_arguments_prints_usage() {
    cargo_bin_cmd!("ewig")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Give me a file name."))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_two_arguments_prints_usage() {
    cargo_bin_cmd!("ewig")
        .args(["a.txt", "b.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_succeeds() {
    cargo_bin_cmd!("ewig")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE"));
}

#[test]
fn test_unreadable_file_fails_before_rendering() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    cargo_bin_cmd!("ewig")
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot open"))
        .stderr(predicate::str::contains("missing.txt"))
        // Nothing was drawn: no alternate screen switch
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_directory_is_not_a_document() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("ewig")
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}
