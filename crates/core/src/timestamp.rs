// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker timestamp parsing.
//!
//! JIRA emits ISO-8601 timestamps with a colon-less offset
//! (`2015-08-31T10:00:00.000+0000`), which RFC 3339 parsers reject.

use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};

const TRACKER_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parse a tracker timestamp, keeping the offset it was recorded with.
///
/// Accepts the tracker's native format and plain RFC 3339. Calendar days
/// are read in that offset, so `date_naive()` gives the tracker's own day.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let value = value.trim();
    DateTime::parse_from_str(value, TRACKER_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .map_err(|e| Error::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
