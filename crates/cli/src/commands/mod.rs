// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod card_timespan;
pub mod config;
pub mod monthly_cross;
pub mod pie;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod timeline;
pub mod weekly;

use serde::Serialize;

use lps_core::Warning;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::{Config, Settings};
use crate::credentials;
use crate::display::{format_warning, JsonReport};
use crate::error::Result;
use crate::jira::JiraClient;

/// Helper to resolve settings and connect to the tracker.
pub fn open_tracker(global: &GlobalArgs) -> Result<(Settings, JiraClient)> {
    let (_, config) = Config::discover(global.config.as_deref())?;
    let settings = Settings::resolve(config, global);
    let user = settings.require_user()?;
    let password = credentials::password(global.password.clone(), &settings.server, user)?;
    let client = JiraClient::new(settings.server.as_str(), user, password);
    Ok((settings, client))
}

/// Print a report: text lines followed by warnings, or one JSON document.
pub fn emit<T: Serialize>(
    output: OutputFormat,
    report: &str,
    data: T,
    warnings: &[Warning],
    text: impl FnOnce(&T) -> Vec<String>,
) -> Result<()> {
    match output {
        OutputFormat::Text => {
            for line in text(&data) {
                println!("{line}");
            }
            for warning in warnings {
                for line in format_warning(warning) {
                    println!("{line}");
                }
            }
        }
        OutputFormat::Json => {
            let json = JsonReport {
                report,
                data,
                warnings,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}
