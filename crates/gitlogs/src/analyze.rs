// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tally git fetches from mirrored access logs.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use crate::access_log::{day_key, log_day, parse_day, scan};
use crate::error::{Error, Result};
use crate::geoip::{GeoLocator, Location};

/// Repository path fragment counted when none is given.
pub const DEFAULT_REPO: &str = "landing-teams/working/arm";

/// Inclusive range of log days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub since: NaiveDate,
    pub until: NaiveDate,
}

impl DayRange {
    /// Parse `YYYYMMDD` bounds.
    pub fn parse(since: &str, until: &str) -> Result<Self> {
        let range = DayRange {
            since: parse_day(since)?,
            until: parse_day(until)?,
        };
        if range.until < range.since {
            return Err(Error::InvalidRange {
                since: since.to_string(),
                until: until.to_string(),
            });
        }
        Ok(range)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.since <= day && day <= self.until
    }
}

/// Hits for one source address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpHits {
    pub hits: u64,
    pub location: Location,
}

/// Fetch counts across every scanned log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// `YYYYMMDD` to hits, with an entry for every log scanned.
    pub per_day: BTreeMap<String, u64>,
    pub per_ip: BTreeMap<String, IpHits>,
    /// `country=XX, city=YY` to hits summed over addresses.
    pub per_location: BTreeMap<String, u64>,
}

impl Analysis {
    pub fn total(&self) -> u64 {
        self.per_day.values().sum()
    }

    /// Locations by hits, largest first; ties by name.
    pub fn ranked_locations(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<_> = self
            .per_location
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        ranked
    }
}

/// Dated access logs in `dir` that fall in `range`, oldest first.
///
/// A missing directory yields no files.
pub fn logs_in_range(dir: &Path, range: DayRange) -> Result<Vec<(NaiveDate, PathBuf)>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(dir = %dir.display(), "no logs directory, skipping");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut logs = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(day) = name.to_str().and_then(log_day) else {
            continue;
        };
        if range.contains(day) {
            logs.push((day, entry.path()));
        }
    }
    logs.sort();
    Ok(logs)
}

/// Count fetches of repositories containing `repo` in every server's logs.
pub fn analyze(
    logs_dir: &Path,
    servers: &[String],
    range: DayRange,
    repo: &str,
    locator: &dyn GeoLocator,
) -> Result<Analysis> {
    let mut analysis = Analysis::default();
    let mut ips: BTreeMap<String, u64> = BTreeMap::new();

    for server in servers {
        tracing::info!(server = server.as_str(), since = %range.since, "analyzing logs");
        for (day, path) in logs_in_range(&logs_dir.join(server), range)? {
            tracing::info!(file = %path.display(), "analyzing");
            let hits = scan(&path, repo)?;
            *analysis.per_day.entry(day_key(day)).or_default() += hits.len() as u64;
            for hit in hits {
                tracing::debug!(
                    repo = hit.repo.as_str(),
                    ip = hit.ip.as_str(),
                    date = hit.date.as_str(),
                    "hit"
                );
                *ips.entry(hit.ip).or_default() += 1;
            }
        }
    }

    for (ip, hits) in ips {
        let location = ip
            .parse::<Ipv4Addr>()
            .map_or_else(|_| Location::unknown(), |addr| locator.locate(addr));
        tracing::debug!(
            ip = ip.as_str(),
            country = location.country.as_str(),
            region = location.region.as_str(),
            city = location.city.as_str(),
            hits,
            "located"
        );
        *analysis.per_location.entry(location.key()).or_default() += hits;
        analysis.per_ip.insert(ip, IpHits { hits, location });
    }
    Ok(analysis)
}

#[cfg(test)]
#[path = "analyze_tests.rs"]
mod tests;
