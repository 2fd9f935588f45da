// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git clone and fetch statistics from web-server access logs.
//!
//! `fetch` mirrors rotated access logs from the weblogs server; `analyze`
//! counts successful smart-HTTP fetches per day, per address, and per
//! location.

pub mod access_log;
pub mod analyze;
pub mod cli;
pub mod display;
pub mod error;
pub mod fetch;
pub mod geoip;

pub use cli::{Cli, Command, GlobalArgs, OutputFormat};
pub use error::{Error, Result};

use serde::Serialize;

use crate::analyze::{analyze, DayRange};
use crate::fetch::{fetch_all, WeblogsClient};
use crate::geoip::{GeoLocator, Ip2LocationCsv, NoLocator};

/// Password fallback for `fetch`.
pub const PASSWORD_ENV: &str = "GIT_LOGS_PASSWORD";

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let Cli { global, command } = cli;
    match command {
        Command::Fetch { user, password } => {
            let password = resolve_password(password, std::env::var(PASSWORD_ENV).ok(), &user)?;
            let client = WeblogsClient::new(&global.base_url, user, password);
            let summaries = fetch_all(&client, &global.servers(), &global.logs_dir)?;
            emit(global.output, &summaries[..], display::format_sync)
        }
        Command::Analyze {
            since,
            until,
            repo,
            geoip_db,
        } => {
            let range = DayRange::parse(&since, &until)?;
            let locator: Box<dyn GeoLocator> = match geoip_db {
                Some(path) => Box::new(Ip2LocationCsv::open(&path)?),
                None => Box::new(NoLocator),
            };
            let analysis = analyze(
                &global.logs_dir,
                &global.servers(),
                range,
                &repo,
                locator.as_ref(),
            )?;
            emit(global.output, &analysis, display::format_analysis)
        }
    }
}

/// `--password`, then the environment.
pub fn resolve_password(
    flag: Option<String>,
    from_env: Option<String>,
    user: &str,
) -> Result<String> {
    flag.or(from_env)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| Error::MissingPassword {
            user: user.to_string(),
        })
}

fn emit<T: Serialize + ?Sized>(
    output: OutputFormat,
    data: &T,
    text: impl FnOnce(&T) -> Vec<String>,
) -> Result<()> {
    match output {
        OutputFormat::Text => {
            for line in text(data) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
    }
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
