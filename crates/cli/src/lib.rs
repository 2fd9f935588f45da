// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lpsrs - status and effort reports from an issue tracker.
//!
//! This crate provides the `lps` command line tool on top of [`lps_core`]:
//! argument parsing, configuration, credentials, the JIRA client, and text
//! or JSON rendering of report series.
//!
//! # Main Components
//!
//! - [`Cli`] - parsed command line
//! - [`config::Settings`] - effective settings after file, flags and defaults
//! - [`jira::JiraClient`] - blocking [`lps_core::Tracker`] over JIRA REST v2
//! - [`Error`] - error types for all operations

mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod credentials;
mod display;
pub mod env;
pub mod error;
pub mod help;
pub mod jira;

pub use cli::{
    Cli, Command, ComponentArgs, ConfigCommand, DateRangeArgs, GlobalArgs, OutputFormat,
};
pub use config::{Config, Settings};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::pie::PieKind;
use commands::weekly::WeeklyOptions;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let Cli { global, command } = cli;
    let output = global.output;

    match command {
        Command::Timeline { query } => {
            let (settings, tracker) = commands::open_tracker(&global)?;
            commands::timeline::run(&tracker, &settings, query.as_deref(), output)
        }
        Command::MonthlyCross { from, to, baseline } => {
            let (settings, tracker) = commands::open_tracker(&global)?;
            commands::monthly_cross::run(&tracker, &settings, &from, &to, baseline, output)
        }
        Command::PieMember { range, components } => {
            let (settings, tracker) = commands::open_tracker(&global)?;
            commands::pie::run(&tracker, &settings, PieKind::Member, &range, &components, output)
        }
        Command::PieService { range, components } => {
            let (settings, tracker) = commands::open_tracker(&global)?;
            commands::pie::run(&tracker, &settings, PieKind::Service, &range, &components, output)
        }
        Command::CardTimespan {
            resolved_since,
            components,
        } => {
            let (settings, tracker) = commands::open_tracker(&global)?;
            commands::card_timespan::run(&tracker, &settings, resolved_since, &components, output)
        }
        Command::Weekly {
            max_age,
            days,
            no_date_check,
            query,
        } => {
            let (settings, tracker) = commands::open_tracker(&global)?;
            let options = WeeklyOptions {
                max_age,
                days,
                no_date_check,
                query,
            };
            commands::weekly::run(&tracker, &settings, &options, output)
        }
        Command::Config(cmd) => commands::config::run(cmd, &global),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "lps", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
