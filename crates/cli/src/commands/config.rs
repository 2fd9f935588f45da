// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::cli::{ConfigCommand, GlobalArgs, OutputFormat};
use crate::config::{Config, Settings};
use crate::error::{Error, Result};

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand, global: &GlobalArgs) -> Result<()> {
    let (path, config) = Config::discover(global.config.as_deref())?;
    match cmd {
        ConfigCommand::Show => {
            let settings = Settings::resolve(config, global);
            println!("{}", render_settings(&settings, global.output)?);
        }
        ConfigCommand::Path => println!("{}", render_path(path.as_ref(), global.output)?),
    }
    Ok(())
}

pub(crate) fn render_settings(settings: &Settings, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => toml::to_string_pretty(settings)
            .map(|s| s.trim_end().to_string())
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(settings)?),
    }
}

pub(crate) fn render_path(path: Option<&PathBuf>, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(path.map_or_else(
            || "no configuration directory".to_string(),
            |p| p.display().to_string(),
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "path": path,
            "exists": path.is_some_and(|p| p.exists()),
        }))?),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
