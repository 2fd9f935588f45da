// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::{log, raw, raw_with, settings};
use crate::error::Error;
use chrono::NaiveDate;
use lps_core::{jql, MemoryTracker};
use serde_json::json;

fn august() -> DateRangeArgs {
    DateRangeArgs {
        since: NaiveDate::from_ymd_opt(2015, 8, 1).unwrap(),
        until: NaiveDate::from_ymd_opt(2015, 8, 31).unwrap(),
    }
}

fn only(names: &[&str]) -> ComponentArgs {
    ComponentArgs {
        components: names.iter().map(|n| n.to_string()).collect(),
    }
}

fn member_tracker() -> MemoryTracker {
    MemoryTracker::new()
        .with_issue(raw("CARD-1", "Engineering card", "In Progress", &["TI"]))
        .with_issue(raw("CARD-2", "Engineering card", "In Progress", &["ZTE"]))
        .with_query(jql::component("PSE", "TI"), &["CARD-1"])
        .with_query(jql::component("PSE", "ZTE"), &["CARD-2"])
        .with_worklogs(
            "CARD-1",
            vec![
                log("2015-08-03T09:00:00.000+0000", "1d", "Bring-up"),
                log("2015-07-31T09:00:00.000+0000", "1w", "Earlier"),
            ],
        )
        .with_worklogs(
            "CARD-2",
            vec![log("2015-08-04T09:00:00.000+0000", "2h 30m", "Review")],
        )
}

#[test]
fn member_pie_sums_effort_in_range() {
    let tracker = member_tracker();
    let (pie, warnings) = run_impl(
        &tracker,
        &settings(),
        PieKind::Member,
        &august(),
        &only(&["ZTE", "TI", "Linaro"]),
    )
    .unwrap();

    let labels: Vec<_> = pie.slices.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["TI (76.2%)", "ZTE (23.8%)"]);
    assert_eq!(pie.total, 480 + 150);
    assert!(warnings.is_empty());
}

#[test]
fn member_pie_defaults_to_configured_components() {
    let tracker = MemoryTracker::new();
    let s = settings();
    run_impl(&tracker, &s, PieKind::Member, &august(), &only(&[])).unwrap();
    assert_eq!(tracker.received().len(), s.components.len());
}

#[test]
fn service_pie_follows_links() {
    let service = raw_with(
        "PSE-7",
        "Task",
        "Open",
        &["LAVA"],
        json!({ "issuelinks": [ { "outwardIssue": { "key": "EXT-1" } } ] }),
    );
    let tracker = MemoryTracker::new()
        .with_issue(service)
        .with_query(jql::component("PSE", "LAVA"), &["PSE-7"])
        .with_worklogs(
            "PSE-7",
            vec![log("2015-08-03T09:00:00.000+0000", "1w", "Own time")],
        )
        .with_worklogs(
            "EXT-1",
            vec![log("2015-08-05T09:00:00.000+0000", "3h", "Linked time")],
        );

    let (pie, _) = run_impl(
        &tracker,
        &settings(),
        PieKind::Service,
        &august(),
        &only(&["LAVA"]),
    )
    .unwrap();
    assert_eq!(pie.total, 180);
    assert_eq!(pie.slices[0].label(), "LAVA (100.0%)");
}

#[test]
fn reversed_range_is_rejected() {
    let range = DateRangeArgs {
        since: august().until,
        until: august().since,
    };
    let err = run_impl(
        &MemoryTracker::new(),
        &settings(),
        PieKind::Member,
        &range,
        &only(&["TI"]),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidWindow(_)));
}
