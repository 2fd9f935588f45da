// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

use serde::Serialize;

/// A tracker-data anomaly tied to a browsable issue.
///
/// Warnings never abort a report. They are collected while the report is
/// built and printed alongside the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// Browse URL of the offending issue.
    pub url: String,
    /// What is wrong with it.
    pub message: String,
}

impl Warning {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        let warning = Warning {
            url: url.into(),
            message: message.into(),
        };
        tracing::debug!(url = %warning.url, "{}", warning.message);
        warning
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.url, self.message)
    }
}
