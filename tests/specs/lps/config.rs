// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration discovery and display.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lps(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("lps");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("LPS_CONFIG")
        .env_remove("LPS_PASSWORD");
    cmd
}

fn write_config(home: &TempDir, body: &str) -> std::path::PathBuf {
    let path = home.path().join("lps.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn show_without_file_prints_defaults() {
    let home = TempDir::new().unwrap();
    lps(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("server = \"https://projects.linaro.org\""))
        .stdout(predicate::str::contains("project = \"PSE\""));
}

#[test]
fn show_reads_file_named_by_flag() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, "project = \"OPS\"\nusername = \"alice\"\n");
    lps(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project = \"OPS\""))
        .stdout(predicate::str::contains("username = \"alice\""));
}

#[test]
fn show_reads_file_named_by_environment() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, "server = \"https://cards.example.org\"\n");
    lps(&home)
        .env("LPS_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("browse_url = \"https://cards.example.org/browse/\""));
}

#[test]
fn flags_override_file() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, "project = \"OPS\"\n");
    lps(&home)
        .arg("--config")
        .arg(&path)
        .args(["-p", "LAB", "-o", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"project\": \"LAB\""));
}

#[test]
fn missing_named_file_fails() {
    let home = TempDir::new().unwrap();
    lps(&home)
        .args(["--config", "/nonexistent/lps.toml", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: config error"));
}

#[test]
fn path_prints_named_file() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, "");
    lps(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lps.toml"));
}

#[test]
fn report_without_user_explains_how_to_set_one() {
    let home = TempDir::new().unwrap();
    lps(&home)
        .arg("timeline")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no user name"))
        .stderr(predicate::str::contains("hint:"));
}
