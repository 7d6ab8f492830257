//! Tests for the `automata` binary.
//!
//! These run the built executable against the fixture programs and check
//! what it writes to stdout and stderr, and its exit status.

use std::{
    path::PathBuf,
    process::{Command, Output},
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str], fixture: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_automata"))
        .arg(fixture_path(fixture))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_prints_tokens_and_diagnostics() {
    let output = run(&[], "program_err.txt");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(output.status.success(), "diagnostics must not fail the run");

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[0], "KEYWORD (num)");
    assert_eq!(lines[1], "IDENTIFIER (x)");
    assert_eq!(lines[2], "ASSIGN ()");
    assert_eq!(lines[3], "NUMBER (5)");

    assert_eq!(stderr.matches("Error: UnrecognisedCharacter").count(), 2);
    assert!(stderr.contains("-> program_err.txt"));
    assert!(stderr.contains("2 | num y = x # 2 ;"));
}

#[test]
fn test_quiet_suppresses_diagnostics() {
    let output = run(&["--quiet"], "program_err.txt");

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 14);
}

#[test]
fn test_raw_prints_every_lexeme() {
    let output = run(&["--raw"], "program_err.txt");
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(stdout.lines().next(), Some("(KEYWORD, \"num\")"));
    assert!(stdout.contains("(SKIP, \" \")"));
    assert!(stdout.contains("(NEWLINE, \"\\n\")"));
    assert!(stdout.contains("(UNKNOWN, \"#\")"));
    assert!(stdout.contains("(UNKNOWN, \"@\")"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_timings() {
    let output = run(&["--timings", "--quiet"], "program.txt");

    assert!(output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().starts_with("Tokenized in "));
}

#[test]
fn test_unreadable_source_fails() {
    let output = run(&[], "does_not_exist.txt");
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(!output.status.success());
    assert!(stderr.contains("does_not_exist.txt"));
    assert!(output.stdout.is_empty());
}
