// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of fetch and analyze results.

use crate::analyze::Analysis;
use crate::fetch::SyncSummary;

/// Per-server download counts.
pub fn format_sync(summaries: &[SyncSummary]) -> Vec<String> {
    summaries
        .iter()
        .map(|s| {
            format!(
                "{}: {} downloaded, {} already present",
                s.server,
                s.downloaded.len(),
                s.skipped.len()
            )
        })
        .collect()
}

/// Hits per day, per address, and per location.
pub fn format_analysis(analysis: &Analysis) -> Vec<String> {
    let mut lines = vec!["Hits per day:".to_string()];
    for (day, hits) in &analysis.per_day {
        lines.push(format!("  {day}  {hits:>6}"));
    }
    lines.push(format!("  total     {:>6}", analysis.total()));

    lines.push(String::new());
    lines.push("Hits per IP:".to_string());
    for (ip, entry) in &analysis.per_ip {
        let loc = &entry.location;
        lines.push(format!(
            "  {ip:<15}  {:>6}  (country={}, region={}, city={})",
            entry.hits, loc.country, loc.region, loc.city
        ));
    }

    lines.push(String::new());
    lines.push("Hits per location:".to_string());
    for (location, hits) in analysis.ranked_locations() {
        lines.push(format!("  {hits:>6}  {location}"));
    }
    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
