// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn lps() -> Command {
    cargo_bin_cmd!("lps")
}

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let output = lps().args(["completion", shell]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "Completion output should not be empty");
}

#[test]
fn bash_completion_knows_report_commands() {
    lps()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pie-service"))
        .stdout(predicate::str::contains("card-timespan"));
}

#[test]
fn completion_without_shell_shows_help() {
    lps()
        .arg("completion")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn completion_invalid_shell_fails() {
    lps().args(["completion", "tcsh"]).assert().failure();
}
