// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::analyze::DEFAULT_REPO;
use crate::fetch::{DEFAULT_BASE_URL, DEFAULT_SERVERS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "git-logs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build git usage stats from web-server access logs")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Clone, Debug)]
pub struct GlobalArgs {
    /// Local copy of the logs
    #[arg(long, global = true, default_value = "./", value_name = "dir")]
    pub logs_dir: PathBuf,

    /// Weblogs server the logs are fetched from
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL, value_name = "url")]
    pub base_url: String,

    /// Git server whose logs are fetched or analyzed (repeatable)
    #[arg(long = "server", global = true, value_name = "host")]
    pub servers: Vec<String>,

    /// Output format
    #[arg(long, short, global = true, value_enum, default_value_t)]
    pub output: OutputFormat,
}

impl GlobalArgs {
    /// Servers given on the command line, or the default set.
    pub fn servers(&self) -> Vec<String> {
        if self.servers.is_empty() {
            DEFAULT_SERVERS.iter().map(|s| s.to_string()).collect()
        } else {
            self.servers.clone()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch logs from weblogs
    Fetch {
        /// Account name on the weblogs server
        #[arg(long, short)]
        user: String,

        /// Account password (default: $GIT_LOGS_PASSWORD)
        #[arg(long, short)]
        password: Option<String>,
    },

    /// Analyze the logs stored locally
    Analyze {
        /// First log day to look at (YYYYMMDD)
        #[arg(long, value_name = "day")]
        since: String,

        /// Last log day to look at, inclusive (YYYYMMDD)
        #[arg(long, value_name = "day")]
        until: String,

        /// Count only repositories whose path contains this
        #[arg(long, default_value = DEFAULT_REPO)]
        repo: String,

        /// IP2Location CSV database for locating addresses
        #[arg(long, value_name = "path")]
        geoip_db: Option<PathBuf>,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
