//! End-to-end tests for the `silaba` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn silaba() -> Command {
    Command::cargo_bin("silaba").unwrap()
}

#[test]
fn separates_arguments() {
    silaba()
        .args(["bola", "chocalho", "carrasco"])
        .assert()
        .success()
        .stdout("bo-la\ncho-ca-lho\ncar-ras-co\n");
}

#[test]
fn custom_separator() {
    silaba()
        .args(["-s", "·", "transpiração"])
        .assert()
        .success()
        .stdout("trans·pi·ra·ção\n");
}

#[test]
fn reads_stdin_when_no_words_given() {
    silaba()
        .write_stdin("pais\n\n  país  \napneia\n")
        .assert()
        .success()
        .stdout("pais\npa-ís\nap-nei-a\n");
}

#[test]
fn json_format() {
    let output = silaba()
        .args(["-f", "json", "bola", "pneu"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["word"], "bola");
    assert_eq!(value[0]["syllables"], serde_json::json!(["bo", "la"]));
    assert_eq!(value[1]["syllables"], serde_json::json!(["pneu"]));
}

#[test]
fn pattern_format() {
    silaba()
        .args(["--format", "pattern", "carrasco"])
        .assert()
        .success()
        .stdout("carrasco    -  - \n");
}

#[test]
fn explain_format() {
    silaba()
        .args(["-f", "explain", "rainha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rainha: ra-i-nha"))
        .stdout(predicate::str::contains("hiatus closed-glide"))
        .stdout(predicate::str::contains("consonant digraph"));
}

#[test]
fn strict_mode_rejects_non_letters() {
    silaba()
        .args(["--strict", "bola", "guarda-chuva"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid word \"guarda-chuva\""))
        .stderr(predicate::str::contains("unexpected punctuation '-' at position 6"));
}

#[test]
fn lenient_mode_accepts_non_letters() {
    silaba().arg("a1b").assert().success().stdout("a1b\n");
}

#[test]
fn unknown_format_is_rejected() {
    silaba()
        .args(["-f", "xml", "bola"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    silaba()
        .args(["-vv", "bola"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("bo-la\n")
        .stderr(predicate::str::contains("separating 1 word(s)"));
}
