//! Exit-code and output contracts of the two binaries.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_convert(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gcd-convert"))
        .args(args)
        .output()
        .unwrap()
}

fn run_query(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_comics-query"))
        .args(args)
        .output()
        .unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_query_usage_error_exits_1() {
    let out = run_query(&[]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_query_help_exits_0() {
    let out = run_query(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_query_selectors_are_exclusive() {
    let out = run_query(&["somewhere", "-s", "Alice", "-i", "Bob"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_query_missing_inputs_exit_2() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_query(&[path_arg(dir.path()), "-i", "Smith"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("JSON file"));
}

#[test]
fn test_convert_usage_error_exits_1() {
    let out = run_convert(&[]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_convert_then_query_binaries() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("gcd_issues.tsv"),
        "\"7\"\t\"title\"\t\"The Spirit\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("gcd_sequences.tsv"),
        "\"7\"\t\"1\"\t\"inks\"\t\"Smith\"\n\"7\"\t\"1\"\t\"colors\"\t\"True\"\n",
    )
    .unwrap();

    let out = run_convert(&[path_arg(dir.path())]);
    assert_eq!(out.status.code(), Some(0));
    assert!(dir.path().join("gcd_issues.json").exists());
    assert!(dir.path().join("gcd_sequences.json").exists());

    let out = run_query(&[path_arg(dir.path()), "-i", "Smith"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let expected = concat!(
        "Issue: 7\n",
        "            colors: true\n",
        "              inks: Smith\n",
        "             issue: 7\n",
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_query_no_matches_prints_nothing_exits_0() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("gcd_issues.json"), "[]").unwrap();
    fs::write(
        dir.path().join("gcd_sequences.json"),
        "[{\"issue\": \"1\", \"inks\": \"Jones\"}]",
    )
    .unwrap();

    let out = run_query(&[path_arg(dir.path()), "-i", "Smith"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_query_bad_data_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("gcd_issues.json"), "[]").unwrap();
    fs::write(
        dir.path().join("gcd_sequences.json"),
        "[{\"issue\": \"seven\", \"inks\": \"Smith\"}]",
    )
    .unwrap();

    let out = run_query(&[path_arg(dir.path()), "-i", "Smith"]);
    assert_eq!(out.status.code(), Some(2));
}
