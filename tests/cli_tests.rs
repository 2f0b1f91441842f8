//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;

fn pwgen() -> Command {
    let mut cmd = Command::cargo_bin("pwgen").unwrap();
    cmd.env_remove("PW_DEFAULT_LENGTH").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version_flag() {
    pwgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pwgen"));
}

#[test]
fn test_help_flag() {
    pwgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("A CLI tool for generating random passwords"))
        .stdout(predicate::str::contains("--uppercase"))
        .stdout(predicate::str::contains("--length"));
}

#[test]
fn test_default_password() {
    pwgen()
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\S{32}\n$").unwrap())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_positional_length() {
    pwgen()
        .arg("18")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\S{18}\n$").unwrap());
}

#[test]
fn test_length_flag_overrides_positional() {
    pwgen()
        .args(["--length", "25", "8"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\S{25}\n$").unwrap());
}

#[test]
fn test_uppercase_only() {
    pwgen()
        .args(["-u", "200"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[A-Z]{200}\n$").unwrap());
}

#[test]
fn test_letters_only() {
    pwgen()
        .args(["-ul", "64"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[A-Za-z]{64}\n$").unwrap());
}

#[test]
fn test_short_length_is_raised() {
    pwgen()
        .args(["-ulns", "2"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\S{4}\n$").unwrap());
}

#[test]
fn test_avoid_ambiguous() {
    pwgen()
        .args(["-a", "--length", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[^lIO01]{5000}\n$").unwrap());
}

#[test]
fn test_min_number() {
    pwgen()
        .args(["-ln", "--min-number", "6", "3"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[a-z0-9]{7}\n$").unwrap());
}

#[test]
fn test_default_length_from_env() {
    pwgen()
        .env("PW_DEFAULT_LENGTH", "14")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\S{14}\n$").unwrap());
}

#[test]
fn test_invalid_positional_length() {
    pwgen()
        .arg("abc")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Received non-integer length: \"abc\"",
        ));
}

#[test]
fn test_invalid_length_flag() {
    pwgen()
        .args(["--length", "2.5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Received non-integer length"));
}

#[test]
fn test_negative_length() {
    pwgen()
        .args(["--length", "-3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("\"-3\""));
}

#[test]
fn test_overflowing_minimum() {
    let max = usize::MAX.to_string();
    pwgen()
        .args(["-ns", "--min-number", max.as_str()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("exceeds the maximum"));
}

#[test]
fn test_unknown_flag() {
    pwgen().arg("--bogus").assert().failure().code(2);
}

#[test]
fn test_verbose_logs_to_stderr() {
    pwgen()
        .args(["-v", "10"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\S{10}\n$").unwrap())
        .stderr(predicate::str::contains("Generating password"));
}
