// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{ComponentArgs, DateRangeArgs, GlobalArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for report commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "lps")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Status and effort reports from an issue tracker's cards and blueprints")]
#[command(
    long_about = "Status and effort reports from an issue tracker's cards and blueprints.\n\n\
    Queries the tracker, normalizes summaries, comments and work logs, and prints \
    report series as text or JSON for charting."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Reports
    // ─────────────────────────────────────────────────────────────────────────
    /// Lifetime of every card, for a timeline chart
    #[command(after_help = colors::examples("\
Examples:
  lps timeline                         Every card of the project
  lps timeline -q \"component = TI\"     Only cards matching extra JQL
  lps timeline -o json                 Rows as JSON"))]
    Timeline {
        /// Extra JQL ANDed onto the card query
        #[arg(long, short, value_parser = non_empty_string)]
        query: Option<String>,
    },

    /// Monthly closed, created, and active issue counts
    #[command(after_help = colors::examples("\
Examples:
  lps monthly-cross --from 2015-08 --to 2016-03
  lps monthly-cross --from 2015-08 --to 2015-10 --baseline 2015-06-01"))]
    MonthlyCross {
        /// First month (YYYY-MM)
        #[arg(long, value_name = "month")]
        from: String,

        /// Last month, inclusive (YYYY-MM)
        #[arg(long, value_name = "month")]
        to: String,

        /// Earliest creation date counted as active (YYYY-MM-DD)
        #[arg(long, value_name = "date")]
        baseline: Option<NaiveDate>,
    },

    /// Work-log effort per member component, as pie slices
    #[command(after_help = colors::examples("\
Examples:
  lps pie-member --since 2015-08-01 --until 2016-04-06
  lps pie-member --since 2015-08-01 --until 2015-08-31 -c TI,ZTE"))]
    PieMember {
        #[command(flatten)]
        range: DateRangeArgs,

        #[command(flatten)]
        components: ComponentArgs,
    },

    /// Work-log effort per service component, following issue links
    #[command(after_help = colors::examples("\
Examples:
  lps pie-service --since 2015-08-01 --until 2016-04-06
  lps pie-service --since 2015-08-01 --until 2016-04-06 -c LAVA"))]
    PieService {
        #[command(flatten)]
        range: DateRangeArgs,

        #[command(flatten)]
        components: ComponentArgs,
    },

    /// Cards active or resolved since a date, per member component
    #[command(after_help = colors::examples("\
Examples:
  lps card-timespan --resolved-since 2016-01-01
  lps card-timespan --resolved-since 2016-01-01 -c Qualcomm"))]
    CardTimespan {
        /// Count cards resolved on or after this date (YYYY-MM-DD)
        #[arg(long, value_name = "date")]
        resolved_since: NaiveDate,

        #[command(flatten)]
        components: ComponentArgs,
    },

    /// Weekly status text per member and card
    #[command(after_help = colors::examples("\
Examples:
  lps weekly                           Current week, 14-day status window
  lps weekly --max-age 7 --days 7      Tighter windows
  lps weekly --no-date-check           Keep every status line"))]
    Weekly {
        /// Oldest engineering-status date still shown, in days
        #[arg(long, default_value_t = 14, value_name = "days")]
        max_age: i64,

        /// Show work-log progress from this many days back
        #[arg(long, default_value_t = 7, value_name = "days")]
        days: i64,

        /// Treat every engineering-status line as current
        #[arg(long)]
        no_date_check: bool,

        /// Replace the default card and blueprint query
        #[arg(long, short, value_parser = non_empty_string)]
        query: Option<String>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration after flags and defaults
    Show,

    /// Print the configuration file location
    Path,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
