// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Access-log file names and git fetch lines.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use flate2::read::MultiGzDecoder;
use regex::Regex;

use crate::error::{Error, Result};

/// A successful smart-HTTP `git-upload-pack` request.
static SMART_FETCH: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(
        r#"^(?P<ip>\d+\.\d+\.\d+\.\d+) - - \[(?P<date>.*)\] "POST /(?P<repo>\S+)/git-upload-pack HTTP.+" 200"#,
    ) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// Rotated access-log file names carry the rotation day.
static DATED_LOG: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"-access\.log-(?P<day>\d{8})(?:\.gz)?$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

const DAY_FORMAT: &str = "%Y%m%d";

/// One git fetch found in an access log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHit {
    pub ip: String,
    pub date: String,
    pub repo: String,
}

/// Parse an access-log line, returning `None` for anything but a
/// successful git fetch.
pub fn parse_hit(line: &str) -> Option<GitHit> {
    let caps = SMART_FETCH.captures(line)?;
    Some(GitHit {
        ip: caps["ip"].to_string(),
        date: caps["date"].to_string(),
        repo: caps["repo"].to_string(),
    })
}

/// Parse a `YYYYMMDD` day.
pub fn parse_day(s: &str) -> Result<NaiveDate> {
    if s.len() != 8 {
        return Err(Error::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DAY_FORMAT).map_err(|_| Error::InvalidDate(s.to_string()))
}

/// The rotation day of a dated access-log file name.
pub fn log_day(name: &str) -> Option<NaiveDate> {
    let caps = DATED_LOG.captures(name)?;
    NaiveDate::parse_from_str(&caps["day"], DAY_FORMAT).ok()
}

/// `YYYYMMDD` rendering of a day, used as per-day keys.
pub fn day_key(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Open a log for line reading, decompressing `.gz` files.
///
/// Rotated logs may be several gzip members back to back; all are read.
pub fn open_log(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    let reader: Box<dyn Read> = if path.extension().is_some_and(|e| e == "gz") {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    Ok(Box::new(BufReader::new(reader)))
}

/// Every git fetch in `path` whose repository contains `repo`.
///
/// Lines that are not valid UTF-8 are read lossily; lines that do not match
/// are skipped.
pub fn scan(path: &Path, repo: &str) -> Result<Vec<GitHit>> {
    let mut hits = Vec::new();
    for line in open_log(path)?.split(b'\n') {
        let line = line?;
        let text = String::from_utf8_lossy(&line);
        if let Some(hit) = parse_hit(&text) {
            if hit.repo.contains(repo) {
                hits.push(hit);
            }
        }
    }
    Ok(hits)
}

#[cfg(test)]
#[path = "access_log_tests.rs"]
mod tests;
