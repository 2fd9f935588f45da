// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::NaiveDate;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn wrap_text_short_content_is_one_line() {
    assert_eq!(wrap_text("short text", 70), vec!["short text"]);
}

#[test]
fn wrap_text_collapses_whitespace() {
    assert_eq!(wrap_text("line one\nline   two", 70), vec!["line one line two"]);
}

#[test]
fn wrap_text_breaks_at_words() {
    assert_eq!(wrap_text("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
}

#[test]
fn wrap_text_keeps_long_words_whole() {
    assert_eq!(
        wrap_text("a https://cards.example.org/browse/PSE-1 b", 10),
        vec!["a", "https://cards.example.org/browse/PSE-1", "b"]
    );
}

#[test]
fn wrap_text_of_blank_is_empty() {
    assert!(wrap_text("   ", 10).is_empty());
}

#[test]
fn warning_wraps_with_hanging_indent() {
    let warning = Warning::new(
        "https://cards.example.org/browse/CARD-123",
        "contains bad date (2015-02-30) which was dropped from the engineering status",
    );
    let lines = format_warning(&warning);
    assert!(lines.len() > 1);
    assert!(lines[0].starts_with("WARNING: https://cards.example.org/browse/CARD-123"));
    for line in &lines {
        assert!(line.len() <= TEXT_WIDTH, "too long: {line}");
    }
    for line in &lines[1..] {
        assert!(line.starts_with("         "));
        assert!(!line[9..].starts_with(' '));
    }
}

#[test]
fn short_warning_is_one_line() {
    let warning = Warning::new("https://x/browse/A-1", "has no component");
    assert_eq!(
        format_warning(&warning),
        vec!["WARNING: https://x/browse/A-1 has no component"]
    );
}

#[test]
fn timeline_row_marks_resolution() {
    let row = TimelineRow {
        key: "CARD-1".into(),
        start: day(2015, 3, 2),
        stop: day(2015, 6, 30),
        resolved: true,
    };
    assert_eq!(format_timeline_row(&row), "CARD-1 2015-03-02 2015-06-30 OK");
    let open = TimelineRow {
        resolved: false,
        ..row
    };
    assert!(format_timeline_row(&open).ends_with(" NOT_OK"));
}

#[test]
fn pie_lists_slices_and_total() {
    let pie = PieSeries::from_totals(vec![("TI".to_string(), 30), ("ZTE".to_string(), 10)]);
    let lines = format_pie(&pie, "min");
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("TI (75.0%)"));
    assert!(lines[0].ends_with("30 min"));
    assert!(lines[2].starts_with("Total"));
    assert!(lines[2].ends_with("40 min"));
}

#[test]
fn cross_has_header_and_rows() {
    let series = CrossSeries {
        labels: vec!["Aug 2015".into(), "Sep 2015".into()],
        closed: vec![4, 0],
        created: vec![7, 2],
        active: vec![12, 9],
    };
    let lines = format_cross(&series);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Window"));
    assert!(lines[1].starts_with("Aug 2015"));
    let cols: Vec<_> = lines[2].split_whitespace().collect();
    assert_eq!(cols, vec!["Sep", "2015", "0", "2", "9"]);
}

#[test]
fn weekly_groups_by_member() {
    let entry = |member: &str, key: &str| WeeklyEntry {
        member: member.into(),
        key: key.into(),
        summary: format!("{member}: Work on {key} [Ada] ({key})"),
        status: vec!["2015-09-07 merged".into()],
        plans: vec!["plan: upstream".into()],
        progress: Vec::new(),
    };
    let lines = format_weekly(&[
        entry("TI", "CARD-1"),
        entry("TI", "CARD-2"),
        entry("ZTE", "CARD-3"),
    ]);

    assert_eq!(lines[0], "TI");
    assert_eq!(lines[1], "==");
    assert_eq!(lines[2], "* TI: Work on CARD-1 [Ada] (CARD-1)");
    assert_eq!(lines[3], "    2015-09-07 merged");
    assert_eq!(lines[4], "  Plans:");
    assert_eq!(lines[5], "    - plan: upstream");
    assert!(!lines.iter().any(|l| l.contains("Progress:")));
    assert_eq!(lines.iter().filter(|l| l.as_str() == "TI").count(), 1);
    let zte = lines.iter().position(|l| l == "ZTE").unwrap();
    assert_eq!(lines[zte - 1], "");
}

#[test]
fn weekly_text_wraps_progress() {
    let entry = WeeklyEntry {
        member: "LAVA".into(),
        key: "CARD-7".into(),
        summary: "LAVA: Board farm upgrade [Ada, Grace] (CARD-7)".into(),
        status: vec!["2015-09-07 racked two new boards".into()],
        plans: Vec::new(),
        progress: vec![
            "Moved the BBB pool to the new PDU and re-ran the health checks on every device in the lab"
                .into(),
        ],
    };
    similar_asserts::assert_eq!(
        format_weekly(&[entry]).join("\n"),
        "\
LAVA
====
* LAVA: Board farm upgrade [Ada, Grace] (CARD-7)
    2015-09-07 racked two new boards
  Progress:
    - Moved the BBB pool to the new PDU and re-ran the health checks
      on every device in the lab"
    );
}

#[test]
fn json_envelope_carries_warnings() {
    let warnings = vec![Warning::new("https://x/browse/A-1", "has no component")];
    let json = serde_json::to_value(JsonReport {
        report: "timeline",
        data: vec![1, 2],
        warnings: &warnings,
    })
    .unwrap();
    assert_eq!(json["report"], "timeline");
    assert_eq!(json["data"][1], 2);
    assert_eq!(json["warnings"][0]["message"], "has no component");
}
