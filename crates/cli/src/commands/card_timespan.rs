// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;

use lps_core::series::count_by_component;
use lps_core::{jql, PieSeries, Tracker};

use crate::cli::{ComponentArgs, OutputFormat};
use crate::config::{pick_components, Settings};
use crate::display::format_pie;
use crate::error::Result;

use super::emit;

pub fn run(
    tracker: &dyn Tracker,
    settings: &Settings,
    resolved_since: NaiveDate,
    components: &ComponentArgs,
    output: OutputFormat,
) -> Result<()> {
    let pie = run_impl(tracker, settings, resolved_since, components)?;
    emit(output, "card-timespan", pie, &[], |pie| format_pie(pie, "cards"))
}

pub(crate) fn run_impl(
    tracker: &dyn Tracker,
    settings: &Settings,
    resolved_since: NaiveDate,
    components: &ComponentArgs,
) -> Result<PieSeries> {
    let components = pick_components(&components.components, &settings.components);
    let project = settings.project.as_str();
    let counts = count_by_component(tracker, &components, |c| {
        jql::card_timespan(project, c, resolved_since)
    })?;
    Ok(PieSeries::from_totals(counts))
}

#[cfg(test)]
#[path = "card_timespan_tests.rs"]
mod tests;
