//! Command-line tests driving the built `statreport` binary.
//!
//! Each test runs in its own temp directory so the default `report.txt`
//! never lands in the source tree.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::uninlined_format_args)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn write_input(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("input.csv");
    std::fs::write(&path, contents).expect("Failed to write input file");
    path
}

fn statreport(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_statreport"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run statreport")
}

fn setup(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = write_input(dir.path(), contents);
    (dir, input)
}

#[test]
fn test_cli_writes_default_report() {
    let (dir, input) = setup("1,2,3\n4,5,100\n");

    let output = statreport(dir.path(), &[input.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "Report generated: report.txt\n");

    let report = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert!(report.starts_with("Quantitative Data Analysis\nN: 6\n"));
    assert!(report.ends_with("Outliers: 100\n"));
}

#[test]
fn test_cli_custom_output_path() {
    let (dir, input) = setup("red,blue\nred,green\n");
    let target = dir.path().join("colors.txt");

    let output = statreport(
        dir.path(),
        &["-o", target.to_str().unwrap(), input.to_str().unwrap()],
    );
    assert!(output.status.success());

    let report = std::fs::read_to_string(&target).unwrap();
    assert!(report.starts_with("Qualitative Data Analysis\nN: 4\nMode: red\n"));
    assert!(!dir.path().join("report.txt").exists());
}

#[test]
fn test_cli_stdout_report() {
    let (dir, input) = setup("red,blue\nred,green\n");

    let output = statreport(dir.path(), &["--stdout", "-q", input.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = "\
Qualitative Data Analysis
N: 4
Mode: red
Frequencies:
blue: 1
green: 1
red: 2
Proportions:
blue: 0.25
green: 0.25
red: 0.5
";
    assert_eq!(stdout, expected);
    assert!(!dir.path().join("report.txt").exists());
}

#[test]
fn test_cli_json_format() {
    let (dir, input) = setup("2,4,4,4\n5,5,7,9\n");

    let output = statreport(
        dir.path(),
        &["--stdout", "--format", "json", input.to_str().unwrap()],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"data_type\": \"quantitative\""));
    assert!(stdout.contains("\"count\": 8"));
    assert!(stdout.contains("\"q3\": 6.5"));
}

#[test]
fn test_cli_precision() {
    let (dir, input) = setup("2,4,4,4\n5,5,7,9\n");

    let output = statreport(
        dir.path(),
        &["--stdout", "--precision", "2", input.to_str().unwrap()],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Mean: 5.00\n"));
    assert!(stdout.contains("Coefficient of Variation: 40.00%\n"));
}

#[test]
fn test_cli_invalid_precision_fails() {
    let (dir, input) = setup("1,2,3\n");

    let output = statreport(
        dir.path(),
        &["--stdout", "--precision", "99", input.to_str().unwrap()],
    );
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_invalid_multiplier_fails() {
    let (dir, input) = setup("1,2,3\n");

    let output = statreport(
        dir.path(),
        &["--iqr-multiplier", "0", input.to_str().unwrap()],
    );
    assert!(!output.status.success());
    assert!(!dir.path().join("report.txt").exists());
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = statreport(dir.path(), &["does-not-exist.csv"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("report.txt").exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist.csv"), "stderr: {}", stderr);
}

#[test]
fn test_cli_no_arguments_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = statreport(dir.path(), &[]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_extra_argument_fails() {
    let (dir, input) = setup("1,2,3\n");

    let output = statreport(dir.path(), &[input.to_str().unwrap(), "extra.csv"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_empty_file_fails() {
    let (dir, input) = setup("");

    let output = statreport(dir.path(), &[input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(!dir.path().join("report.txt").exists());
}

#[test]
fn test_cli_constant_sample_fails() {
    let (dir, input) = setup("7,7,7\n");

    let output = statreport(dir.path(), &[input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(!dir.path().join("report.txt").exists());
}

#[test]
fn test_cli_unwritable_output_fails() {
    let (dir, input) = setup("1,2,3\n");
    let target = dir.path().join("missing").join("report.txt");

    let output = statreport(
        dir.path(),
        &["-o", target.to_str().unwrap(), input.to_str().unwrap()],
    );
    assert!(!output.status.success());
}

#[test]
fn test_cli_output_is_deterministic() {
    let (dir, input) = setup("pear,apple\nfig,apple\npear,fig\n");

    let first = statreport(dir.path(), &["--stdout", input.to_str().unwrap()]);
    let second = statreport(dir.path(), &["--stdout", input.to_str().unwrap()]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
