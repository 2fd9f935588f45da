// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that share common patterns.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use super::OutputFormat;

/// Connection and output options accepted by every command.
#[derive(Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// Configuration file (default: $LPS_CONFIG, then <config dir>/lps/config.toml)
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Tracker base URL
    #[arg(long, global = true, value_name = "url")]
    pub server: Option<String>,

    /// Tracker user name
    #[arg(long, short = 'u', global = true, value_name = "name")]
    pub user: Option<String>,

    /// Tracker password (default: $LPS_PASSWORD, then the OS keyring)
    #[arg(long, global = true, value_name = "secret", hide_default_value = true)]
    pub password: Option<String>,

    /// Tracker project key
    #[arg(long, short = 'p', global = true, value_name = "key")]
    pub project: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Inclusive work-log date range.
#[derive(Args, Clone, Debug)]
pub struct DateRangeArgs {
    /// First day counted (YYYY-MM-DD)
    #[arg(long, value_name = "date")]
    pub since: NaiveDate,

    /// Last day counted (YYYY-MM-DD)
    #[arg(long, value_name = "date")]
    pub until: NaiveDate,
}

/// Component selection.
#[derive(Args, Clone, Debug, Default)]
pub struct ComponentArgs {
    /// Component to include (repeat or comma-separate; default from config)
    #[arg(long = "component", short = 'c', value_delimiter = ',', value_name = "name")]
    pub components: Vec<String>,
}
