// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Work-log duration parsing.
//!
//! Tracker work logs record time spent as compact strings such as `2w 3d`,
//! `1d 4h` or `45m`. Durations use working time: a day is 8 hours and a
//! week is 5 days.

use crate::error::{Error, Result};

/// Minutes in one working hour.
pub const MINUTES_PER_HOUR: u64 = 60;
/// Minutes in one working day (8 hours).
pub const MINUTES_PER_DAY: u64 = 8 * MINUTES_PER_HOUR;
/// Minutes in one working week (5 days).
pub const MINUTES_PER_WEEK: u64 = 5 * MINUTES_PER_DAY;

/// Parse a work-log duration like "1w 2d 3h 30m" into total minutes.
///
/// Each token is a decimal quantity followed by one of `w`, `d`, `h`, `m`.
/// Tokens may be separated by whitespace or written back to back (`1h30m`).
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] for empty input, a quantity without a
/// unit, an unknown unit, or overflow.
pub fn parse_work_duration(input: &str) -> Result<u64> {
    let s = input.trim();
    if s.is_empty() {
        return Err(invalid(input, "empty duration"));
    }

    let mut total: u64 = 0;
    let mut rest = s;
    while !rest.is_empty() {
        let (num_str, unit, tail) = split_token(input, rest)?;

        let num: u64 = num_str
            .parse()
            .map_err(|_| invalid(input, format!("invalid number '{num_str}'")))?;

        let minutes = num
            .checked_mul(unit_minutes(input, unit)?)
            .and_then(|m| total.checked_add(m))
            .ok_or_else(|| invalid(input, "duration too large"))?;
        total = minutes;

        rest = tail.trim_start();
    }

    Ok(total)
}

/// Split the leading `<digits><unit>` token off `s`.
fn split_token<'a>(input: &str, s: &'a str) -> Result<(&'a str, char, &'a str)> {
    let num_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());

    if num_end == 0 {
        return Err(invalid(input, format!("expected a number at '{s}'")));
    }

    let num_str = &s[..num_end];
    let after = s[num_end..].trim_start();
    let unit = after
        .chars()
        .next()
        .ok_or_else(|| invalid(input, format!("missing unit after '{num_str}'")))?;

    Ok((num_str, unit, &after[unit.len_utf8()..]))
}

fn unit_minutes(input: &str, unit: char) -> Result<u64> {
    match unit {
        'w' => Ok(MINUTES_PER_WEEK),
        'd' => Ok(MINUTES_PER_DAY),
        'h' => Ok(MINUTES_PER_HOUR),
        'm' => Ok(1),
        other => Err(invalid(
            input,
            format!("unknown unit '{other}'. Valid units: w, d, h, m"),
        )),
    }
}

fn invalid(input: &str, reason: impl Into<String>) -> Error {
    Error::InvalidDuration {
        input: input.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
