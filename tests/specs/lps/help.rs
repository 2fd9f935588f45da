// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help output of the lps binary.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use yare::parameterized;

fn lps() -> Command {
    let mut cmd = cargo_bin_cmd!("lps");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_report_commands() {
    lps()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Reports:"))
        .stdout(predicate::str::contains("monthly-cross"))
        .stdout(predicate::str::contains("Setup & Configuration:"));
}

#[test]
fn missing_subcommand_fails() {
    lps().assert().failure();
}

#[parameterized(
    timeline = { "timeline" },
    monthly_cross = { "monthly-cross" },
    pie_member = { "pie-member" },
    pie_service = { "pie-service" },
    card_timespan = { "card-timespan" },
    weekly = { "weekly" },
    config = { "config" },
    completion = { "completion" },
)]
fn command_supports_help_flag(cmd: &str) {
    lps()
        .args([cmd, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn weekly_help_shows_defaults_and_examples() {
    lps()
        .args(["weekly", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-age"))
        .stdout(predicate::str::contains("[default: 14]"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn global_flags_are_listed() {
    let output = lps().arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--config", "--server", "--user", "--password", "--project", "--output"] {
        assert!(stdout.contains(flag), "{flag} missing from help");
    }
}

#[test]
fn version_flag_prints_version() {
    lps()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("lps "));
}

#[test]
fn bad_month_is_rejected_before_connecting() {
    lps()
        .args(["--user", "alice", "--password", "x", "--server", "http://127.0.0.1:9"])
        .args(["monthly-cross", "--from", "2015-13", "--to", "2016-01"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn unknown_command_fails() {
    lps().arg("burndown").assert().failure();
}
