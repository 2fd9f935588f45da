// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the lps command line tool.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("tracker error: {0}")]
    Tracker(String),

    #[error("tracker rejected credentials for {0}\n  hint: check --user and the stored password")]
    Unauthorized(String),

    #[error("invalid duration '{input}': {reason}")]
    InvalidDuration { input: String, reason: String },

    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("invalid date range: {0}")]
    InvalidWindow(String),

    #[error("no user name for {server}\n  hint: pass --user or set 'username' in the config file")]
    MissingUser { server: String },

    #[error("no password for {user} on {server}\n  hint: pass --password, set $LPS_PASSWORD, or store one in the OS keyring under service '{server}'")]
    MissingPassword { server: String, user: String },

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for lps operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<lps_core::Error> for Error {
    fn from(e: lps_core::Error) -> Self {
        match e {
            lps_core::Error::InvalidDuration { input, reason } => {
                Error::InvalidDuration { input, reason }
            }
            lps_core::Error::InvalidTimestamp { value, reason } => {
                Error::InvalidTimestamp { value, reason }
            }
            lps_core::Error::InvalidWindow(s) => Error::InvalidWindow(s),
            lps_core::Error::Unauthorized(server) => Error::Unauthorized(server),
            lps_core::Error::Json(e) => Error::Json(e),
            e @ (lps_core::Error::InvalidStatus(_) | lps_core::Error::Transport(_)) => {
                Error::Tracker(e.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
