// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in git-logs operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid date '{0}'\n  hint: dates are YYYYMMDD, e.g. 20150818")]
    InvalidDate(String),

    #[error("invalid date range: {until} is before {since}")]
    InvalidRange { since: String, until: String },

    #[error("no password for {user}\n  hint: pass --password or set $GIT_LOGS_PASSWORD")]
    MissingPassword { user: String },

    #[error("weblogs server rejected credentials for {0}")]
    Unauthorized(String),

    #[error("{url} returned {status}")]
    Status { url: String, status: u16 },

    #[error("bad geoip database {path} line {line}: {reason}")]
    GeoIp {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for git-logs operations.
pub type Result<T> = std::result::Result<T, Error>;
