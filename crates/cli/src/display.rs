// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of report series and warnings.

use serde::Serialize;

use lps_core::{CrossSeries, PieSeries, TimelineRow, Warning, WeeklyEntry};

/// Column width of warnings and weekly report text.
pub const TEXT_WIDTH: usize = 70;

const WARNING_PREFIX: &str = "WARNING: ";
const WARNING_INDENT: &str = "         ";

/// Greedy word wrap to `width` columns. Words longer than `width` get a
/// line of their own.
pub fn wrap_text(content: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap `content` to `width` columns, starting with `first` and indenting
/// continuation lines with `rest`.
pub fn wrap_hanging(content: &str, width: usize, first: &str, rest: &str) -> Vec<String> {
    let body = width.saturating_sub(first.len().max(rest.len())).max(1);
    wrap_text(content, body)
        .into_iter()
        .enumerate()
        .map(|(i, line)| format!("{}{}", if i == 0 { first } else { rest }, line))
        .collect()
}

/// `WARNING: <url> <message>` wrapped with a hanging indent.
pub fn format_warning(warning: &Warning) -> Vec<String> {
    wrap_hanging(&warning.to_string(), TEXT_WIDTH, WARNING_PREFIX, WARNING_INDENT)
}

/// One line per slice: label then value.
pub fn format_pie(pie: &PieSeries, unit: &str) -> Vec<String> {
    let width = pie.slices.iter().map(|s| s.label().len()).max().unwrap_or(0);
    let mut lines: Vec<String> = pie
        .slices
        .iter()
        .map(|s| format!("{:<width$}  {} {}", s.label(), s.value, unit))
        .collect();
    lines.push(format!("{:<width$}  {} {}", "Total", pie.total, unit));
    lines
}

/// A header plus one row per window.
pub fn format_cross(series: &CrossSeries) -> Vec<String> {
    let width = series
        .labels
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max("Window".len());
    let mut lines = vec![format!(
        "{:<width$}  {:>7}  {:>7}  {:>7}",
        "Window", "Closed", "Created", "Active"
    )];
    for i in 0..series.len() {
        lines.push(format!(
            "{:<width$}  {:>7}  {:>7}  {:>7}",
            series.labels[i], series.closed[i], series.created[i], series.active[i]
        ));
    }
    lines
}

/// `<key> <start> <stop> OK|NOT_OK`.
pub fn format_timeline_row(row: &TimelineRow) -> String {
    format!(
        "{} {} {} {}",
        row.key,
        row.start,
        row.stop,
        if row.resolved { "OK" } else { "NOT_OK" }
    )
}

/// Weekly report text, one section per member.
pub fn format_weekly(entries: &[WeeklyEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut member: Option<&str> = None;

    for entry in entries {
        if member != Some(entry.member.as_str()) {
            if member.is_some() {
                lines.push(String::new());
            }
            lines.push(entry.member.clone());
            lines.push("=".repeat(entry.member.len()));
            member = Some(entry.member.as_str());
        }

        lines.extend(wrap_hanging(&entry.summary, TEXT_WIDTH, "* ", "  "));
        for status in &entry.status {
            lines.extend(wrap_hanging(status, TEXT_WIDTH, "    ", "      "));
        }
        section(&mut lines, "Plans:", &entry.plans);
        section(&mut lines, "Progress:", &entry.progress);
    }
    lines
}

fn section(lines: &mut Vec<String>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(format!("  {title}"));
    for item in items {
        lines.extend(wrap_hanging(item, TEXT_WIDTH, "    - ", "      "));
    }
}

/// JSON envelope for report output.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a, T: Serialize> {
    pub report: &'a str,
    pub data: T,
    pub warnings: &'a [Warning],
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
