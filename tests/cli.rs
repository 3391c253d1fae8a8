//! CLI argument and exit-code behavior. No model is loaded here: only
//! invocations that fail before inference (or never reach it) are exercised.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_argument_exits_nonzero_without_a_verdict() {
    let mut cmd = Command::cargo_bin("sentiq").unwrap();

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("POSITIVE").not())
        .stdout(predicate::str::contains("NEUTRAL_OR_NEGATIVE").not())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unexpected_extra_argument_is_rejected() {
    let mut cmd = Command::cargo_bin("sentiq").unwrap();

    cmd.args(["I love this!", "stray"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn help_lists_the_surface() {
    let mut cmd = Command::cargo_bin("sentiq").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--size"))
        .stdout(predicate::str::contains("--cuda"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn version_flag_works() {
    let mut cmd = Command::cargo_bin("sentiq").unwrap();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sentiq"));
}
