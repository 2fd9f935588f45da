// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Work-log effort totals over a date range.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::duration::parse_work_duration;
use crate::error::{Error, Result};
use crate::ingest::Normalizer;
use crate::issue::Issue;
use crate::jql;
use crate::timestamp::parse_timestamp;
use crate::tracker::Tracker;
use crate::warning::Warning;

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub since: NaiveDate,
    pub until: NaiveDate,
}

impl DateRange {
    pub fn new(since: NaiveDate, until: NaiveDate) -> Result<Self> {
        if until < since {
            return Err(Error::InvalidWindow(format!("{until} is before {since}")));
        }
        Ok(DateRange { since, until })
    }

    /// True when the calendar day of `at`, in its own offset, lies in the
    /// range.
    pub fn contains(&self, at: DateTime<FixedOffset>) -> bool {
        let day = at.date_naive();
        self.since <= day && day <= self.until
    }
}

/// Minutes recorded by `time_spent`, or `None` with a warning when it does
/// not parse.
fn minutes(time_spent: &str, url: &str, warnings: &mut Vec<Warning>) -> Option<u64> {
    match parse_work_duration(time_spent) {
        Ok(m) => Some(m),
        Err(e) => {
            warnings.push(Warning::new(url, format!("has unreadable time spent: {e}")));
            None
        }
    }
}

/// Minutes logged on `issue` on days inside `range`.
pub fn issue_effort(issue: &Issue, range: DateRange, warnings: &mut Vec<Warning>) -> u64 {
    issue
        .worklog
        .iter()
        .filter(|w| range.contains(w.started))
        .filter_map(|w| minutes(&w.time_spent, &issue.url, warnings))
        .sum()
}

/// Minutes logged inside `range`, taken from linked issues when there are
/// any.
///
/// An issue that links elsewhere stands in for the linked work, so only the
/// linked issues' work logs count. Linked work logs are fetched from
/// `tracker` because the linked issues are usually outside the report.
pub fn linked_effort(
    tracker: &dyn Tracker,
    normalizer: &Normalizer,
    issue: &Issue,
    range: DateRange,
    warnings: &mut Vec<Warning>,
) -> Result<u64> {
    if issue.links.is_empty() {
        return Ok(issue_effort(issue, range, warnings));
    }

    let mut total = 0;
    for key in &issue.links {
        let url = format!("{}{}", normalizer.browse_url, key);
        for log in tracker.worklogs(key)? {
            if !range.contains(parse_timestamp(&log.started)?) {
                continue;
            }
            total += minutes(&log.time_spent, &url, warnings).unwrap_or(0);
        }
    }
    Ok(total)
}

/// Total effort per component of `project`, in input order.
///
/// With `follow_links`, issues that link elsewhere count their linked
/// issues' effort instead of their own.
pub fn effort_by_component(
    tracker: &dyn Tracker,
    normalizer: &Normalizer,
    project: &str,
    components: &[String],
    range: DateRange,
    follow_links: bool,
    warnings: &mut Vec<Warning>,
) -> Result<Vec<(String, u64)>> {
    let mut totals = Vec::with_capacity(components.len());
    for component in components {
        let mut sum = 0;
        for raw in tracker.search(&jql::component(project, component))? {
            let issue = normalizer.normalize(tracker, raw)?;
            sum += if follow_links {
                linked_effort(tracker, normalizer, &issue, range, warnings)?
            } else {
                issue_effort(&issue, range, warnings)
            };
        }
        tracing::info!(component = component.as_str(), minutes = sum, "component effort");
        totals.push((component.clone(), sum));
    }
    Ok(totals)
}

#[cfg(test)]
#[path = "effort_tests.rs"]
mod tests;
