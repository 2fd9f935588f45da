// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Engineering-status filtering.
//!
//! Engineers post dated one-line snippets into a free-text field. A report
//! wants the recent snippets ("current status") and the lines that start
//! with "plan" ("plans"). Whether a line is recent is decided by a
//! [`FreshnessClassifier`], so the date heuristic can be swapped out or
//! turned off without touching the filters.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::warning::Warning;

static YMD: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(20[0-9][0-9]).?([0-9][0-9]).?([0-9][0-9])") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

static PLANS_PREFIX: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?i)plans: ") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// How recent a status line is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    /// Dated within the allowed age.
    Current,
    /// Dated, but older than the allowed age.
    Stale,
    /// No date found in the line.
    Undated,
    /// Something date-shaped that is not a calendar date.
    BadDate(String),
}

/// Decides whether an engineering-status line is recent.
pub trait FreshnessClassifier {
    fn classify(&self, line: &str) -> Freshness;
}

/// Looks for an embedded `YYYY-MM-DD`-like date and compares its age in
/// days against a limit.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedDateClassifier {
    pub today: NaiveDate,
    pub max_age_days: i64,
}

impl EmbeddedDateClassifier {
    pub fn new(today: NaiveDate, max_age_days: i64) -> Self {
        EmbeddedDateClassifier {
            today,
            max_age_days,
        }
    }
}

impl FreshnessClassifier for EmbeddedDateClassifier {
    fn classify(&self, line: &str) -> Freshness {
        let Some(caps) = YMD.captures(line) else {
            return Freshness::Undated;
        };

        let part = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
        let date = match (part(1), part(2), part(3)) {
            (Some(y), Some(m), Some(d)) => i32::try_from(y)
                .ok()
                .and_then(|y| NaiveDate::from_ymd_opt(y, m, d)),
            _ => None,
        };

        match date {
            Some(date) if (self.today - date).num_days() > self.max_age_days => Freshness::Stale,
            Some(_) => Freshness::Current,
            None => Freshness::BadDate(
                caps.get(0)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
            ),
        }
    }
}

/// Treats every line as current.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysCurrent;

impl FreshnessClassifier for AlwaysCurrent {
    fn classify(&self, _line: &str) -> Freshness {
        Freshness::Current
    }
}

fn is_plan(line: &str) -> bool {
    line.starts_with("plan") || line.starts_with("Plan")
}

fn status_lines(text: &str) -> Vec<String> {
    text.replace('\r', "").split('\n').map(String::from).collect()
}

fn strip_plans_prefix(line: &str) -> String {
    PLANS_PREFIX.replace_all(line, "").into_owned()
}

/// Lines of `text` that describe current status.
///
/// Dated lines are kept while fresh. Undated lines are kept with a warning
/// unless they are plans. Lines with an impossible date are dropped with a
/// warning.
pub fn current_lines(
    text: &str,
    classifier: &dyn FreshnessClassifier,
    url: &str,
    warnings: &mut Vec<Warning>,
) -> Vec<String> {
    let mut kept = Vec::new();
    for line in status_lines(text) {
        if line.is_empty() {
            continue;
        }
        let keep = match classifier.classify(&line) {
            Freshness::Current => true,
            Freshness::Stale => false,
            Freshness::BadDate(found) => {
                warnings.push(Warning::new(url, format!("contains bad date ({found})")));
                false
            }
            Freshness::Undated if is_plan(&line) => false,
            Freshness::Undated => {
                warnings.push(Warning::new(url, "has missing date in engineering status"));
                true
            }
        };
        if keep {
            kept.push(strip_plans_prefix(&line));
        }
    }
    kept
}

/// Lines of `text` that start with "plan" or "Plan".
pub fn plan_lines(text: &str) -> Vec<String> {
    status_lines(text)
        .iter()
        .filter(|line| is_plan(line))
        .map(|line| strip_plans_prefix(line))
        .collect()
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
