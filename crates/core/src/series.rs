// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregated series handed to presentation.
//!
//! Each report produces one of these by value; nothing here knows how it
//! will be drawn.

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::issue::{Issue, StatusCategory};
use crate::jql;
use crate::report::Report;
use crate::status::FreshnessClassifier;
use crate::tracker::Tracker;

/// A closed date range `[start, end]` with a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeWindow {
    pub fn new(label: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidWindow(format!("{end} is before {start}")));
        }
        Ok(TimeWindow {
            label: label.into(),
            start,
            end,
        })
    }

    /// One calendar month, labelled like `Aug 2015`.
    pub fn month(year: i32, month: u32) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| Error::InvalidWindow(format!("{year}-{month:02} is not a month")))?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| Error::InvalidWindow(format!("{year}-{month:02} is out of range")))?;
        TimeWindow::new(start.format("%b %Y").to_string(), start, end)
    }

    /// One window per calendar month from `from` through `to`, inclusive.
    ///
    /// Both bounds are `YYYY-MM`.
    pub fn monthly(from: &str, to: &str) -> Result<Vec<Self>> {
        let (mut year, mut month) = parse_month(from)?;
        let last = parse_month(to)?;
        if last < (year, month) {
            return Err(Error::InvalidWindow(format!("{to} is before {from}")));
        }

        let mut windows = Vec::new();
        loop {
            windows.push(TimeWindow::month(year, month)?);
            if (year, month) == last {
                break;
            }
            (year, month) = if month == 12 {
                (year + 1, 1)
            } else {
                (year, month + 1)
            };
        }
        Ok(windows)
    }
}

/// Parse `YYYY-MM`.
pub fn parse_month(s: &str) -> Result<(i32, u32)> {
    let bad = || Error::InvalidWindow(format!("'{s}' is not YYYY-MM"));
    let (y, m) = s.trim().split_once('-').ok_or_else(bad)?;
    let year: i32 = y.parse().map_err(|_| bad())?;
    let month: u32 = m.parse().map_err(|_| bad())?;
    if !(1..=12).contains(&month) || y.len() != 4 {
        return Err(bad());
    }
    Ok((year, month))
}

/// Parallel per-window counts of closed, created, and active issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrossSeries {
    pub labels: Vec<String>,
    pub closed: Vec<u64>,
    pub created: Vec<u64>,
    pub active: Vec<u64>,
}

impl CrossSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Count closed, created, and active issues of `project` for each window.
///
/// "Active" means created on or after `baseline` and still open at the
/// window's end.
pub fn cross_by_window(
    tracker: &dyn Tracker,
    project: &str,
    windows: &[TimeWindow],
    baseline: NaiveDate,
) -> Result<CrossSeries> {
    let mut series = CrossSeries::default();
    for window in windows {
        tracing::info!(start = %window.start, end = %window.end, "analyzing window");
        let closed = tracker.count(&jql::closed_between(project, window.start, window.end))?;
        let created = tracker.count(&jql::created_between(project, window.start, window.end))?;
        let active = tracker.count(&jql::active_at(project, baseline, window.end))?;

        series.labels.push(window.label.clone());
        series.closed.push(closed);
        series.created.push(created);
        series.active.push(active);
    }
    Ok(series)
}

/// Issue counts per component, in input order.
///
/// `query` builds the JQL for one component.
pub fn count_by_component(
    tracker: &dyn Tracker,
    components: &[String],
    query: impl Fn(&str) -> String,
) -> Result<Vec<(String, u64)>> {
    components
        .iter()
        .map(|c| Ok((c.clone(), tracker.count(&query(c))?)))
        .collect()
}

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: u64,
    pub percent: f64,
}

impl PieSlice {
    /// `Name (12.3%)`.
    pub fn label(&self) -> String {
        format!("{} ({:.1}%)", self.name, self.percent)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PieSeries {
    pub slices: Vec<PieSlice>,
    pub total: u64,
}

impl PieSeries {
    /// Build slices from named totals.
    ///
    /// Zero totals are dropped and the rest sorted largest first; ties keep
    /// their input order.
    pub fn from_totals(totals: impl IntoIterator<Item = (String, u64)>) -> Self {
        let mut kept: Vec<(String, u64)> = totals.into_iter().filter(|(_, v)| *v > 0).collect();
        kept.sort_by(|a, b| b.1.cmp(&a.1));

        let total: u64 = kept.iter().map(|(_, v)| v).sum();
        let slices = kept
            .into_iter()
            .map(|(name, value)| PieSlice {
                percent: 100.0 * value as f64 / total as f64,
                name,
                value,
            })
            .collect();
        PieSeries { slices, total }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Lifetime of one card for a timeline chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineRow {
    pub key: String,
    pub start: NaiveDate,
    /// Resolution date, or the report date while unresolved.
    pub stop: NaiveDate,
    pub resolved: bool,
}

impl TimelineRow {
    /// Dates are the tracker's own calendar days, read in the offset each
    /// timestamp was recorded with.
    pub fn from_issue(issue: &Issue, today: NaiveDate) -> Self {
        TimelineRow {
            key: issue.key.clone(),
            start: issue.created.date_naive(),
            stop: issue.resolved.map_or(today, |r| r.date_naive()),
            resolved: issue.resolved.is_some(),
        }
    }
}

/// Rows for every card in `report`, in ingest order.
pub fn timeline(report: &Report, today: NaiveDate) -> Vec<TimelineRow> {
    report
        .cards()
        .map(|card| TimelineRow::from_issue(card, today))
        .collect()
}

/// One card's block in the weekly status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyEntry {
    pub member: String,
    pub key: String,
    /// `<member>: <summary> [<assignees>] (<key>)`.
    pub summary: String,
    pub status: Vec<String>,
    pub plans: Vec<String>,
    pub progress: Vec<String>,
}

/// Weekly status entries for every card, grouped by member.
///
/// Current status and recent work-log progress are shown for cards whose
/// status counts as progress; plans for cards whose status counts as
/// planned. Work-log progress includes linked blueprints and is limited to
/// entries started after `since`. Warnings raised along the way are added
/// to the report.
pub fn weekly(
    report: &mut Report,
    classifier: &dyn FreshnessClassifier,
    since: DateTime<Utc>,
) -> Vec<WeeklyEntry> {
    let mut warnings = Vec::new();
    let mut entries = Vec::new();

    for member in report.members() {
        for card in report.member_cards(member) {
            let cats = card.categorize(&mut warnings);
            let in_progress = cats.contains(&StatusCategory::Progress);
            let planned = cats.contains(&StatusCategory::Plan);

            let status = if in_progress {
                card.fmt_engineering_status(classifier, &mut warnings)
            } else {
                Vec::new()
            };
            let plans = if planned {
                card.fmt_engineering_plans()
            } else {
                Vec::new()
            };
            let progress = if in_progress {
                report
                    .worklog_for(&card.key, Some(since), true)
                    .into_iter()
                    .flat_map(|w| w.progress.iter().cloned())
                    .collect()
            } else {
                Vec::new()
            };

            entries.push(WeeklyEntry {
                member: member.to_string(),
                key: card.key.clone(),
                summary: card.fmt_summary(member),
                status,
                plans,
                progress,
            });
        }
    }

    report.extend_warnings(warnings);
    entries
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;
