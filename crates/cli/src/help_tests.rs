// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

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
fn commands_lists(name: &str) {
    let text = commands();
    assert!(
        text.lines().any(|l| l.contains(name)),
        "{name} missing from command list"
    );
}

#[test]
fn commands_has_both_sections() {
    let text = commands();
    let reports = text.find("Reports:").unwrap();
    let setup = text.find("Setup & Configuration:").unwrap();
    assert!(reports < setup);
}

#[test]
fn template_keeps_clap_placeholders() {
    let t = template();
    for placeholder in ["{usage}", "{before-help}", "{options}", "{after-help}"] {
        assert!(t.contains(placeholder), "{placeholder} missing");
    }
}

#[test]
fn quickstart_mentions_lps() {
    assert!(quickstart().contains("lps"));
}
