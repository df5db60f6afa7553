extern crate polymer;
extern crate serde_json;
extern crate tempdir;

use std::fs;
use std::io::Write;
use std::path;
use std::process::{Command, Output};
use tempdir::TempDir;

fn command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_polymer"))
}

fn write_input(dir: &TempDir, contents: &str) -> path::PathBuf {
    let path = dir.path().join("input.txt");
    let mut file = fs::File::create(&path).expect("should create input file");
    file.write_all(contents.as_bytes())
        .expect("should write input file");
    path
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "polymer should exit OK; stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn prints_reduced_length() {
    let dir = TempDir::new("prints_reduced_length").unwrap();
    let input = write_input(&dir, "dabAcCaCBAcCcaDA\n");

    let output = command().arg(&input).output().expect("should run polymer");
    assert_eq!(stdout_of(&output), "10\n");
}

#[test]
fn trim_none_counts_trailing_newline() {
    let dir = TempDir::new("trim_none_counts_trailing_newline").unwrap();
    let input = write_input(&dir, "dabAcCaCBAcCcaDA\n");

    let output = command()
        .args(&["--trim", "none"])
        .arg(&input)
        .output()
        .expect("should run polymer");
    assert_eq!(stdout_of(&output), "11\n");
}

#[test]
fn empty_file_reduces_to_zero() {
    let dir = TempDir::new("empty_file_reduces_to_zero").unwrap();
    let input = write_input(&dir, "");

    let output = command().arg(&input).output().expect("should run polymer");
    assert_eq!(stdout_of(&output), "0\n");
}

#[test]
fn improve_prints_second_line() {
    let dir = TempDir::new("improve_prints_second_line").unwrap();
    let input = write_input(&dir, "dabAcCaCBAcCcaDA\n");

    let output = command()
        .arg("--improve")
        .arg(&input)
        .output()
        .expect("should run polymer");
    assert_eq!(stdout_of(&output), "10\n4\n");
}

#[test]
fn json_report() {
    let dir = TempDir::new("json_report").unwrap();
    let input = write_input(&dir, "dabAcCaCBAcCcaDA\n");

    let output = command()
        .args(&["--json", "--improve"])
        .arg(&input)
        .output()
        .expect("should run polymer");
    let report: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("stdout should be JSON");
    assert_eq!(report["input_length"], 16);
    assert_eq!(report["length"], 10);
    assert_eq!(report["cancellations"], 3);
    assert_eq!(report["improvement"]["unit"], "c");
    assert_eq!(report["improvement"]["length"], 4);
}

#[test]
fn verbose_logs_to_stderr_only() {
    let dir = TempDir::new("verbose_logs_to_stderr_only").unwrap();
    let input = write_input(&dir, "abBA");

    let output = command()
        .arg("--verbose")
        .arg(&input)
        .output()
        .expect("should run polymer");
    assert_eq!(stdout_of(&output), "0\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Reducer: 4 units reduced to 0 after 2 cancellations"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new("missing_file_is_an_error").unwrap();

    let output = command()
        .arg(dir.path().join("missing.txt"))
        .output()
        .expect("should run polymer");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}

#[test]
fn missing_argument_is_an_error() {
    let output = command().output().expect("should run polymer");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_trim_policy_is_rejected() {
    let dir = TempDir::new("unknown_trim_policy_is_rejected").unwrap();
    let input = write_input(&dir, "aA");

    let output = command()
        .args(&["--trim", "sideways"])
        .arg(&input)
        .output()
        .expect("should run polymer");
    assert!(!output.status.success());
}

#[test]
fn library_matches_binary() {
    let report = polymer::Options::new("unused").reduce_str("dabAcCaCBAcCcaDA\n");
    assert_eq!(report.length, 10);
}
