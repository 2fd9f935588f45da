// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text normalization for tracker fields.
//!
//! Handles summary rewriting, paragraph splitting of comment bodies, and
//! the progress/plans split of work-log text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A literal find/replace applied to issue summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRewrite(pub String, pub String);

/// Built-in rewrites that strip redundant type prefixes and verbose phrasing.
pub const DEFAULT_SUMMARY_REWRITES: &[(&str, &str)] = &[
    ("CARD:", ""),
    ("BLUEPRINT:", ""),
    ("backport feature", "backport"),
    ("found in 3.18 LSK to the", "to"),
    ("Prepare presentation", "Presentation"),
    ("and its relationship to", "and"),
    ("for u-boot/linux for", "for"),
    (
        "Execute initial test plan ltp-ddt test cases to LAVA for BBB",
        "LTP-DDT: Initial LAVA integration (using BBB)",
    ),
    ("ZTE power management", "Power management"),
];

/// The built-in table as owned rewrites, for configuration defaults.
pub fn default_rewrites() -> Vec<SummaryRewrite> {
    DEFAULT_SUMMARY_REWRITES
        .iter()
        .map(|(from, to)| SummaryRewrite(from.to_string(), to.to_string()))
        .collect()
}

/// Apply every rewrite in order (replace-all), then trim.
pub fn clean_summary(summary: &str, rewrites: &[SummaryRewrite]) -> String {
    let mut text = summary.to_string();
    for SummaryRewrite(from, to) in rewrites {
        if !from.is_empty() && text.contains(from.as_str()) {
            text = text.replace(from.as_str(), to);
        }
    }
    text.trim().to_string()
}

/// Split raw text into blank-line separated blocks, keeping line breaks.
fn blocks(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n").map(str::trim).filter(|b| !b.is_empty())
}

/// Join the lines of a block with single spaces.
fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a comment body into single-line paragraphs.
pub fn split_paragraphs(body: &str) -> Vec<String> {
    let body = body.replace('\r', "");
    blocks(&body).map(|b| join_lines(b.lines())).collect()
}

// Header patterns are hard-coded and verified by the tests.
static PROGRESS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^(h[1-6]\.|#+)?\s*[Pp]rogress") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static PLANS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^(h[1-6]\.|#+)?\s*[Pp]lans?") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Work-log text split into what was done and what comes next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkLogText {
    pub progress: Vec<String>,
    pub plans: Vec<String>,
}

#[derive(Clone, Copy)]
enum Target {
    Progress,
    Plans,
}

/// Split work-log text into progress and plans paragraphs.
///
/// A block whose first line is a "Progress" header loses that line; a
/// block whose first line is a "Plans" header loses that line and sends
/// everything from there on to `plans`. Order is preserved.
pub fn split_worklog(text: &str) -> WorkLogText {
    let text = text.replace('\r', "");
    let mut out = WorkLogText::default();
    let mut target = Target::Progress;

    for block in blocks(&text) {
        let mut lines = block.lines().peekable();
        if let Some(first) = lines.peek().copied().map(str::trim) {
            if PROGRESS_HEADER.is_match(first) {
                lines.next();
            } else if PLANS_HEADER.is_match(first) {
                target = Target::Plans;
                lines.next();
            }
        }

        let paragraph = join_lines(lines);
        if paragraph.is_empty() {
            continue;
        }
        match target {
            Target::Progress => out.progress.push(paragraph),
            Target::Plans => out.plans.push(paragraph),
        }
    }

    out
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
