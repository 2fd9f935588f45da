// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::Parser;

#[test]
fn password_flag_wins_over_env() {
    let p = resolve_password(Some("flag".into()), Some("env".into()), "me").unwrap();
    assert_eq!(p, "flag");
}

#[test]
fn password_falls_back_to_env() {
    assert_eq!(resolve_password(None, Some("env".into()), "me").unwrap(), "env");
}

#[test]
fn missing_password_names_user() {
    let err = resolve_password(None, Some(String::new()), "me").unwrap_err();
    assert!(matches!(err, Error::MissingPassword { ref user } if user == "me"));
    assert!(err.to_string().contains("GIT_LOGS_PASSWORD"));
}

#[test]
fn analyze_rejects_bad_dates_before_reading_logs() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().to_str().unwrap();
    let cli = Cli::parse_from([
        "git-logs",
        "--logs-dir",
        logs,
        "analyze",
        "--since",
        "2015-08-18",
        "--until",
        "20150819",
    ]);
    assert!(matches!(run(cli), Err(Error::InvalidDate(_))));
}

#[test]
fn analyze_rejects_missing_geoip_database() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().to_str().unwrap();
    let db = dir.path().join("missing.csv");
    let cli = Cli::parse_from([
        "git-logs",
        "--logs-dir",
        logs,
        "analyze",
        "--since",
        "20150818",
        "--until",
        "20150819",
        "--geoip-db",
        db.to_str().unwrap(),
    ]);
    assert!(matches!(run(cli), Err(Error::Io(_))));
}
