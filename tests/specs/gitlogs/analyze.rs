// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Analyzing mirrored access logs.

#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use tempfile::TempDir;

const SERVER: &str = "git-ie.linaro.org";

fn fetch_line(ip: &str, repo: &str) -> String {
    format!(
        r#"{ip} - - [18/Aug/2015:10:01:02 +0000] "POST /{repo}/git-upload-pack HTTP/1.1" 200 1234 "-" "git/2.1.4""#
    )
}

fn write_gz(path: &Path, lines: &[String]) {
    let mut gz = GzEncoder::new(std::fs::File::create(path).unwrap(), Compression::default());
    for line in lines {
        writeln!(gz, "{line}").unwrap();
    }
    gz.finish().unwrap();
}

fn logs() -> TempDir {
    let dir = TempDir::new().unwrap();
    let server = dir.path().join(SERVER);
    std::fs::create_dir_all(&server).unwrap();
    write_gz(
        &server.join(format!("{SERVER}-access.log-20150818.gz")),
        &[
            fetch_line("1.0.0.9", "landing-teams/working/arm/kernel.git"),
            fetch_line("1.0.0.9", "landing-teams/working/arm/kernel.git"),
            fetch_line("192.0.2.1", "people/x/tools.git"),
            "garbage".to_string(),
        ],
    );
    write_gz(
        &server.join(format!("{SERVER}-access.log-20150819.gz")),
        &[fetch_line("198.51.100.4", "landing-teams/working/arm/edk2.git")],
    );
    dir
}

fn git_logs(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("git-logs");
    cmd.arg("--logs-dir").arg(dir.path()).args(["--server", SERVER]);
    cmd
}

#[test]
fn text_report_lists_days_ips_and_locations() {
    let dir = logs();
    git_logs(&dir)
        .args(["analyze", "--since", "20150818", "--until", "20150819"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  20150818       2"))
        .stdout(predicate::str::contains("  20150819       1"))
        .stdout(predicate::str::contains("  total          3"))
        .stdout(predicate::str::contains("1.0.0.9"))
        .stdout(predicate::str::contains("192.0.2.1").not())
        .stdout(predicate::str::contains("       3  country=-, city=-"));
}

#[test]
fn geoip_database_resolves_locations() {
    let dir = logs();
    let db = dir.path().join("ip2location.csv");
    std::fs::write(
        &db,
        "\"16777216\",\"16777471\",\"AU\",\"Australia\",\"Queensland\",\"Brisbane\"\n",
    )
    .unwrap();

    git_logs(&dir)
        .args(["analyze", "--since", "20150818", "--until", "20150819", "--geoip-db"])
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("       2  country=AU, city=Brisbane"))
        .stdout(predicate::str::contains("       1  country=-, city=-"));
}

#[test]
fn repo_filter_selects_other_repositories() {
    let dir = logs();
    git_logs(&dir)
        .args(["analyze", "--since", "20150818", "--until", "20150818", "--repo", "people/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("192.0.2.1"))
        .stdout(predicate::str::contains("  total          1"));
}

#[test]
fn json_report_has_per_day_counts() {
    let dir = logs();
    let output = git_logs(&dir)
        .args(["-o", "json", "analyze", "--since", "20150819", "--until", "20150819"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["per_day"]["20150819"], 1);
    assert_eq!(json["per_ip"]["198.51.100.4"]["hits"], 1);
    assert!(json["per_day"].get("20150818").is_none());
}

#[test]
fn missing_server_directory_is_not_an_error() {
    let dir = logs();
    cargo_bin_cmd!("git-logs")
        .arg("--logs-dir")
        .arg(dir.path())
        .args([
            "--server",
            "git-ap.linaro.org",
            "analyze",
            "--since",
            "20150818",
            "--until",
            "20150819",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("  total          0"));
}
