// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;

use lps_core::series::cross_by_window;
use lps_core::{CrossSeries, TimeWindow, Tracker};

use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::display::format_cross;
use crate::error::Result;

use super::emit;

/// Earliest creation date counted as active when no baseline is given.
pub fn default_baseline() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap_or_default()
}

pub fn run(
    tracker: &dyn Tracker,
    settings: &Settings,
    from: &str,
    to: &str,
    baseline: Option<NaiveDate>,
    output: OutputFormat,
) -> Result<()> {
    let series = run_impl(tracker, settings, from, to, baseline)?;
    emit(output, "monthly-cross", series, &[], format_cross)
}

pub(crate) fn run_impl(
    tracker: &dyn Tracker,
    settings: &Settings,
    from: &str,
    to: &str,
    baseline: Option<NaiveDate>,
) -> Result<CrossSeries> {
    let windows = TimeWindow::monthly(from, to)?;
    let baseline = baseline.unwrap_or_else(default_baseline);
    Ok(cross_by_window(tracker, &settings.project, &windows, baseline)?)
}

#[cfg(test)]
#[path = "monthly_cross_tests.rs"]
mod tests;
