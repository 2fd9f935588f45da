// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Effort pie charts per member or per service component.

use lps_core::effort::effort_by_component;
use lps_core::{DateRange, PieSeries, Tracker, Warning};

use crate::cli::{ComponentArgs, DateRangeArgs, OutputFormat};
use crate::config::{pick_components, Settings};
use crate::display::format_pie;
use crate::error::Result;

use super::emit;

/// Which component list a pie covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieKind {
    /// Member companies; each issue counts its own work log.
    Member,
    /// Services; issues that link elsewhere count the linked work logs.
    Service,
}

impl PieKind {
    fn report(self) -> &'static str {
        match self {
            PieKind::Member => "pie-member",
            PieKind::Service => "pie-service",
        }
    }

    fn components(self, settings: &Settings) -> &[String] {
        match self {
            PieKind::Member => &settings.components,
            PieKind::Service => &settings.services,
        }
    }
}

pub fn run(
    tracker: &dyn Tracker,
    settings: &Settings,
    kind: PieKind,
    range: &DateRangeArgs,
    components: &ComponentArgs,
    output: OutputFormat,
) -> Result<()> {
    let (pie, warnings) = run_impl(tracker, settings, kind, range, components)?;
    emit(output, kind.report(), pie, &warnings, |pie| format_pie(pie, "min"))
}

pub(crate) fn run_impl(
    tracker: &dyn Tracker,
    settings: &Settings,
    kind: PieKind,
    range: &DateRangeArgs,
    components: &ComponentArgs,
) -> Result<(PieSeries, Vec<Warning>)> {
    let range = DateRange::new(range.since, range.until)?;
    let components = pick_components(&components.components, kind.components(settings));
    let mut warnings = Vec::new();
    let totals = effort_by_component(
        tracker,
        &settings.normalizer(),
        &settings.project,
        &components,
        range,
        kind == PieKind::Service,
        &mut warnings,
    )?;
    Ok((PieSeries::from_totals(totals), warnings))
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
