// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line surface and argument errors.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    cargo_bin_cmd!("git-logs")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("--logs-dir"));
}

#[test]
fn analyze_requires_both_dates() {
    cargo_bin_cmd!("git-logs")
        .args(["analyze", "--since", "20150818"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--until"));
}

#[test]
fn malformed_date_is_reported() {
    cargo_bin_cmd!("git-logs")
        .args(["analyze", "--since", "18/08/2015", "--until", "20150819"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: invalid date '18/08/2015'"))
        .stderr(predicate::str::contains("hint: dates are YYYYMMDD"));
}

#[test]
fn reversed_range_is_reported() {
    cargo_bin_cmd!("git-logs")
        .args(["analyze", "--since", "20150819", "--until", "20150818"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("20150818 is before 20150819"));
}

#[test]
fn fetch_without_password_fails_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("git-logs")
        .env_remove("GIT_LOGS_PASSWORD")
        .arg("--logs-dir")
        .arg(dir.path())
        .args(["fetch", "--user", "someone"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no password for someone"));
}
