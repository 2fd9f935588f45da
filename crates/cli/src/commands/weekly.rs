// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Duration, Utc};

use lps_core::series::weekly;
use lps_core::{
    jql, AlwaysCurrent, EmbeddedDateClassifier, FreshnessClassifier, Report, Tracker, Warning,
    WeeklyEntry,
};

use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::display::format_weekly;
use crate::error::Result;

use super::emit;

/// Options of the weekly report.
#[derive(Clone, Debug)]
pub struct WeeklyOptions {
    pub max_age: i64,
    pub days: i64,
    pub no_date_check: bool,
    pub query: Option<String>,
}

pub fn run(
    tracker: &dyn Tracker,
    settings: &Settings,
    options: &WeeklyOptions,
    output: OutputFormat,
) -> Result<()> {
    let (entries, warnings) = run_impl(tracker, settings, options, Utc::now())?;
    emit(output, "weekly", entries, &warnings, |e| format_weekly(e))
}

pub(crate) fn run_impl(
    tracker: &dyn Tracker,
    settings: &Settings,
    options: &WeeklyOptions,
    now: DateTime<Utc>,
) -> Result<(Vec<WeeklyEntry>, Vec<Warning>)> {
    let query = options
        .query
        .clone()
        .unwrap_or_else(|| jql::cards_and_blueprints(&settings.project));

    let mut report = Report::new();
    report.ingest(tracker, &settings.normalizer(), &query)?;
    report.link_blueprints();

    let dated = EmbeddedDateClassifier::new(now.date_naive(), options.max_age);
    let classifier: &dyn FreshnessClassifier = if options.no_date_check {
        &AlwaysCurrent
    } else {
        &dated
    };
    let since = now - Duration::days(options.days);

    let entries = weekly(&mut report, classifier, since);
    Ok((entries, report.take_warnings()))
}

#[cfg(test)]
#[path = "weekly_tests.rs"]
mod tests;
