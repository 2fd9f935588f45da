// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::LPS_CONFIG, "LPS_CONFIG");
    assert_eq!(vars::LPS_PASSWORD, "LPS_PASSWORD");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

#[test]
fn test_config_path_set_and_unset() {
    std::env::set_var("LPS_CONFIG", "/tmp/lps-test/config.toml");
    assert_eq!(
        config_path(),
        Some(PathBuf::from("/tmp/lps-test/config.toml"))
    );
    std::env::set_var("LPS_CONFIG", "");
    assert_eq!(config_path(), None);
    std::env::remove_var("LPS_CONFIG");
    assert_eq!(config_path(), None);
}

#[test]
fn test_password_set_and_unset() {
    std::env::set_var("LPS_PASSWORD", "hunter2");
    assert_eq!(password().as_deref(), Some("hunter2"));
    std::env::remove_var("LPS_PASSWORD");
    assert_eq!(password(), None);
}
