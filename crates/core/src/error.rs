// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lps-core operations.

use thiserror::Error;

/// All possible errors that can occur in lps-core operations.
///
/// Tracker-data anomalies (odd issue types, dangling parents, stale dates)
/// are not errors; they are reported as [`crate::Warning`] values instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid duration '{input}': {reason}\n  hint: use tokens like 1w, 2d, 3h, 45m")]
    InvalidDuration { input: String, reason: String },

    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("invalid status: '{0}'\n  hint: valid statuses are: Open, TODO, In Progress, Reopened, Blocked, Resolved, Closed")]
    InvalidStatus(String),

    #[error("invalid time window: {0}")]
    InvalidWindow(String),

    #[error("tracker request failed: {0}")]
    Transport(String),

    #[error("tracker rejected credentials for {0}")]
    Unauthorized(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for lps-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
