//! CLI tests for the `luhny` binary.
//!
//! Spawns the binary in a temp directory and verifies output and exit codes
//! for valid, invalid, and malformed identifiers.

use std::io::Write;
use std::process::{Command, Stdio};

use luhny::exit_codes;
use luhny::test_support::{INVALID_IMEI, TestDir, VALID_IMEI, ZERO_TOTAL_IMEI};

fn luhny(dir: &TestDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_luhny"));
    cmd.current_dir(dir.root()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn validate_valid_imei_exits_ok() {
    let dir = TestDir::new().expect("dir");
    let output = luhny(&dir)
        .args(["validate", VALID_IMEI])
        .output()
        .expect("luhny validate");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "353879234252633\tvalid\n"
    );
}

#[test]
fn validate_any_invalid_exits_invalid() {
    let dir = TestDir::new().expect("dir");
    let output = luhny(&dir)
        .args(["validate", VALID_IMEI, INVALID_IMEI, ZERO_TOTAL_IMEI, "12ab"])
        .output()
        .expect("luhny validate");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "353879234252633\tvalid",
            "353879234252634\tinvalid",
            "653879234252630\tinvalid",
            "12ab\tinvalid",
        ]
    );
}

#[test]
fn validate_reads_file_with_json_config() {
    let dir = TestDir::new().expect("dir");
    dir.write("luhny.toml", "output = \"json\"\n")
        .expect("write config");
    dir.write("imeis.txt", &format!("{VALID_IMEI}\n\n  {INVALID_IMEI}  \n"))
        .expect("write imeis");

    let output = luhny(&dir)
        .args(["validate", "--file", "imeis.txt"])
        .output()
        .expect("luhny validate --file");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let verdicts: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(verdicts.len(), 2);
    assert_eq!(verdicts[0]["imei"], VALID_IMEI);
    assert_eq!(verdicts[0]["valid"], true);
    assert_eq!(verdicts[1]["imei"], INVALID_IMEI);
    assert_eq!(verdicts[1]["valid"], false);
}

#[test]
fn validate_reads_stdin_when_no_args() {
    let dir = TestDir::new().expect("dir");
    let mut child = luhny(&dir)
        .arg("validate")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn luhny");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(format!("{VALID_IMEI}\n").as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "353879234252633\tvalid\n"
    );
}

#[test]
fn missing_file_exits_error() {
    let dir = TestDir::new().expect("dir");
    let output = luhny(&dir)
        .args(["validate", "--file", "missing.txt"])
        .output()
        .expect("luhny validate --file");

    assert_eq!(output.status.code(), Some(exit_codes::ERROR));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
}

#[test]
fn explain_json_reports_totals() {
    let dir = TestDir::new().expect("dir");
    let output = luhny(&dir)
        .args(["--output", "json", "explain", VALID_IMEI])
        .output()
        .expect("luhny explain");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let report: luhny::ChecksumReport =
        serde_json::from_slice(&output.stdout).expect("report json");
    assert_eq!(report.total, 67);
    assert_eq!(report.expected, "3");
    assert!(report.valid);
}

#[test]
fn explain_non_digit_exits_error() {
    let dir = TestDir::new().expect("dir");
    let output = luhny(&dir)
        .args(["explain", "35387923425263x"])
        .output()
        .expect("luhny explain");

    assert_eq!(output.status.code(), Some(exit_codes::ERROR));
    assert!(String::from_utf8_lossy(&output.stderr).contains("non-digit character 'x'"));
}

#[test]
fn check_digit_prints_digit() {
    let dir = TestDir::new().expect("dir");
    let output = luhny(&dir)
        .args(["check-digit", "35387923425263"])
        .output()
        .expect("luhny check-digit");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n");
}

#[test]
fn check_digit_without_single_digit_exits_error() {
    let dir = TestDir::new().expect("dir");
    let output = luhny(&dir)
        .args(["check-digit", "00000000000000"])
        .output()
        .expect("luhny check-digit");

    assert_eq!(output.status.code(), Some(exit_codes::ERROR));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no single check digit"));
}

#[test]
fn init_config_writes_defaults_once() {
    let dir = TestDir::new().expect("dir");
    let status = luhny(&dir)
        .arg("init-config")
        .status()
        .expect("luhny init-config");
    assert_eq!(status.code(), Some(exit_codes::OK));

    let written = luhny::config::load_config(&dir.root().join("luhny.toml")).expect("load");
    assert_eq!(written, luhny::config::LuhnyConfig::default());

    let again = luhny(&dir)
        .arg("init-config")
        .status()
        .expect("luhny init-config");
    assert_eq!(again.code(), Some(exit_codes::ERROR));
}
