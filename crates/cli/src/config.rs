// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration management.
//!
//! Settings come from `config.toml` (located by `--config`, then
//! `$LPS_CONFIG`, then `<config dir>/lps/config.toml`) and are overridden by
//! command line flags. Every setting has a built-in default, so the file is
//! optional. Passwords are never read from it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use lps_core::normalize::default_rewrites;
use lps_core::{FieldMap, Normalizer, SummaryRewrite};

use crate::cli::GlobalArgs;
use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "lps";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_SERVER: &str = "https://projects.linaro.org";
pub const DEFAULT_PROJECT: &str = "PSE";

/// Member companies counted by the member reports.
pub const DEFAULT_COMPONENTS: &[&str] = &[
    "Actions",
    "Hisilicon",
    "Linaro",
    "MediaTek",
    "Qualcomm",
    "Spreadtrum",
    "TI",
    "ZTE",
];

/// Service components counted by the service effort report.
pub const DEFAULT_SERVICES: &[&str] = &[
    "Member Build",
    "96Boards",
    "Engineering works",
    "LAVA",
    "Training",
    "BSP Analysis",
    "Upstream Consultancy",
];

/// Contents of `config.toml`. Unset keys fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub server: Option<String>,
    pub username: Option<String>,
    /// Prefix for issue links; defaults to `<server>/browse/`.
    pub browse_url: Option<String>,
    pub project: Option<String>,
    /// Member components counted by the member reports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
    #[serde(default)]
    pub fields: FieldMap,
    /// `[from, to]` pairs replacing the built-in summary rewrites.
    pub summary_rewrites: Option<Vec<SummaryRewrite>>,
}

impl Config {
    /// Loads configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Loads the configuration selected by `explicit` or the environment.
    ///
    /// A missing file at a default location yields the defaults; a missing
    /// file that was named explicitly is an error.
    pub fn discover(explicit: Option<&Path>) -> Result<(Option<PathBuf>, Self)> {
        let named = explicit.map(Path::to_path_buf).or_else(env::config_path);
        let path = locate(named.as_deref(), dirs::config_dir().as_deref());
        match path {
            Some(path) if path.exists() || named.is_some() => {
                let config = Config::load(&path)?;
                Ok((Some(path), config))
            }
            other => Ok((other, Config::default())),
        }
    }
}

/// Pick the config file: a named path wins over the per-user default.
pub fn locate(named: Option<&Path>, config_dir: Option<&Path>) -> Option<PathBuf> {
    named
        .map(Path::to_path_buf)
        .or_else(|| config_dir.map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)))
}

/// Effective settings after flags, file, and defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub server: String,
    pub username: Option<String>,
    pub browse_url: String,
    pub project: String,
    pub components: Vec<String>,
    pub services: Vec<String>,
    pub summary_rewrites: Vec<SummaryRewrite>,
    pub fields: FieldMap,
}

impl Settings {
    pub fn resolve(config: Config, global: &GlobalArgs) -> Self {
        let server = global
            .server
            .clone()
            .or(config.server)
            .unwrap_or_else(|| DEFAULT_SERVER.to_string())
            .trim_end_matches('/')
            .to_string();
        let browse_url = config
            .browse_url
            .unwrap_or_else(|| format!("{server}/browse/"));

        Settings {
            username: global.user.clone().or(config.username),
            project: global
                .project
                .clone()
                .or(config.project)
                .unwrap_or_else(|| DEFAULT_PROJECT.to_string()),
            components: or_defaults(config.components, DEFAULT_COMPONENTS),
            services: or_defaults(config.services, DEFAULT_SERVICES),
            fields: config.fields,
            summary_rewrites: config.summary_rewrites.unwrap_or_else(default_rewrites),
            server,
            browse_url,
        }
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.browse_url.clone())
            .with_fields(self.fields.clone())
            .with_rewrites(self.summary_rewrites.clone())
    }

    /// The user name, required before talking to the tracker.
    pub fn require_user(&self) -> Result<&str> {
        self.username.as_deref().ok_or_else(|| Error::MissingUser {
            server: self.server.clone(),
        })
    }
}

fn or_defaults(list: Vec<String>, defaults: &[&str]) -> Vec<String> {
    if list.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        list
    }
}

/// Use `requested` when given, otherwise `configured`.
pub fn pick_components(requested: &[String], configured: &[String]) -> Vec<String> {
    if requested.is_empty() {
        configured.to_vec()
    } else {
        requested.to_vec()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
