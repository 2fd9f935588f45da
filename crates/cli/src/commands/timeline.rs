// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{Local, NaiveDate};

use lps_core::series::timeline;
use lps_core::{jql, Report, TimelineRow, Tracker, Warning};

use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::display::format_timeline_row;
use crate::error::Result;

use super::emit;

pub fn run(
    tracker: &dyn Tracker,
    settings: &Settings,
    query: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let today = Local::now().date_naive();
    let (rows, warnings) = run_impl(tracker, settings, query, today)?;
    emit(output, "timeline", rows, &warnings, |rows| {
        rows.iter().map(format_timeline_row).collect()
    })
}

/// The card query, narrowed by `extra` JQL when given.
pub fn card_query(project: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("{} AND ({})", jql::cards(project), extra),
        None => jql::cards(project),
    }
}

pub(crate) fn run_impl(
    tracker: &dyn Tracker,
    settings: &Settings,
    query: Option<&str>,
    today: NaiveDate,
) -> Result<(Vec<TimelineRow>, Vec<Warning>)> {
    let mut report = Report::new();
    report.ingest(
        tracker,
        &settings.normalizer(),
        &card_query(&settings.project, query),
    )?;
    let rows = timeline(&report, today);
    Ok((rows, report.take_warnings()))
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
