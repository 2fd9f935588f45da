// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Clap styles matching the colors used in examples blocks.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(colors::HEADER)
        .usage(colors::HEADER)
        .literal(colors::LITERAL)
        .placeholder(colors::CONTEXT)
        .valid(colors::CONTEXT)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_reports}
  {timeline}        Start and stop dates of every card
  {monthly_cross}   Closed, created and active counts per month
  {pie_member}      Logged effort per member company
  {pie_service}     Logged effort per service
  {card_timespan}   Cards resolved since a date, per member
  {weekly}          Weekly status report per member

{header_setup}
  {config}          Show configuration
  {completion}      Generate shell completions
",
        header_reports = colors::header("Reports:"),
        header_setup = colors::header("Setup & Configuration:"),
        timeline = colors::literal("timeline"),
        monthly_cross = colors::literal("monthly-cross"),
        pie_member = colors::literal("pie-member"),
        pie_service = colors::literal("pie-service"),
        card_timespan = colors::literal("card-timespan"),
        weekly = colors::literal("weekly"),
        config = colors::literal("config"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  lps config path                                Where settings are read from
  lps -u alice weekly                            Weekly report for the last 7 days
  lps monthly-cross --from 2015-08 --to 2015-12  Monthly issue flow
  lps -o json timeline                           Card lifetimes as JSON",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
