// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JQL query construction for the built-in reports.

use chrono::NaiveDate;

use crate::issue::{BLUEPRINT_TYPE, CARD_TYPE};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a JQL value, quoting anything that is not a bare word.
pub fn value(text: &str) -> String {
    let bare = !text.is_empty() && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if bare {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn date(day: NaiveDate) -> String {
    day.format(DATE_FORMAT).to_string()
}

/// Every issue of `project` tagged with `component`.
pub fn component(project: &str, component: &str) -> String {
    format!(
        "project = {} AND component = {}",
        value(project),
        value(component)
    )
}

/// Every card of `project`.
pub fn cards(project: &str) -> String {
    format!(
        "project = {} AND issuetype = {}",
        value(project),
        value(CARD_TYPE)
    )
}

/// Every card and blueprint of `project`.
pub fn cards_and_blueprints(project: &str) -> String {
    format!(
        "project = {} AND issuetype in ({}, {})",
        value(project),
        value(CARD_TYPE),
        value(BLUEPRINT_TYPE)
    )
}

/// Issues resolved inside `[start, end]`.
pub fn closed_between(project: &str, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "project = {} AND status in (Resolved, Closed) AND resolved >= {} AND resolved <= {}",
        value(project),
        date(start),
        date(end)
    )
}

/// Issues created inside `[start, end]`.
pub fn created_between(project: &str, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "project = {} AND created >= {} AND created <= {}",
        value(project),
        date(start),
        date(end)
    )
}

/// Issues created since `baseline` that were still open at `end`.
///
/// An issue counts when it is open now, or when it was resolved only after
/// `end`.
pub fn active_at(project: &str, baseline: NaiveDate, end: NaiveDate) -> String {
    let p = value(project);
    let (base, end) = (date(baseline), date(end));
    format!(
        "(project = {p} AND status in (Open, \"In Progress\", Reopened, \"To Do\", Blocked) \
         AND created >= {base} AND created <= {end}) \
         OR (project = {p} AND status in (Closed, Resolved) \
         AND created >= {base} AND created <= {end} AND resolved > {end})"
    )
}

/// Cards tagged with `component` that are still active or were resolved on
/// or after `resolved_since`.
pub fn card_timespan(project: &str, component: &str, resolved_since: NaiveDate) -> String {
    let (p, c, t) = (value(project), value(component), value(CARD_TYPE));
    format!(
        "(project = {p} AND issuetype = {t} AND status in (Open, \"In Progress\", Reopened, TODO) \
         AND component = {c}) \
         OR (project = {p} AND issuetype = {t} AND resolved >= {since} AND component = {c})",
        since = date(resolved_since)
    )
}

#[cfg(test)]
#[path = "jql_tests.rs"]
mod tests;
