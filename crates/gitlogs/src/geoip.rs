// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! IP geolocation.
//!
//! Locations come from an IP2Location CSV export: quoted fields
//! `"ip_from","ip_to","country_code","country","region","city",...` with
//! addresses as 32-bit integers. Extra trailing columns are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::net::Ipv4Addr;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

/// Placeholder IP2Location uses for unknown values.
pub const UNKNOWN: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub country: String,
    pub region: String,
    pub city: String,
}

impl Location {
    pub fn unknown() -> Self {
        Location {
            country: UNKNOWN.to_string(),
            region: UNKNOWN.to_string(),
            city: UNKNOWN.to_string(),
        }
    }

    /// `country=XX, city=YY`.
    pub fn key(&self) -> String {
        format!("country={}, city={}", self.country, self.city)
    }
}

/// Resolves an address to a location.
pub trait GeoLocator {
    fn locate(&self, ip: Ipv4Addr) -> Location;
}

/// Locator used when no database is configured.
pub struct NoLocator;

impl GeoLocator for NoLocator {
    fn locate(&self, _ip: Ipv4Addr) -> Location {
        Location::unknown()
    }
}

/// Address ranges loaded from an IP2Location CSV file, sorted by start.
#[derive(Debug, Default)]
pub struct Ip2LocationCsv {
    ranges: Vec<(u32, u32, Location)>,
}

impl Ip2LocationCsv {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), path)
    }

    pub fn from_reader(reader: impl BufRead, path: &Path) -> Result<Self> {
        let mut ranges = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let bad = |reason: &str| Error::GeoIp {
                path: path.to_path_buf(),
                line: i + 1,
                reason: reason.to_string(),
            };
            let fields = split_quoted(&line);
            if fields.len() < 6 {
                return Err(bad("expected at least 6 fields"));
            }
            let from: u32 = fields[0].parse().map_err(|_| bad("bad ip_from"))?;
            let to: u32 = fields[1].parse().map_err(|_| bad("bad ip_to"))?;
            ranges.push((
                from,
                to,
                Location {
                    country: fields[2].clone(),
                    region: fields[4].clone(),
                    city: fields[5].clone(),
                },
            ));
        }
        ranges.sort_by_key(|r| r.0);
        tracing::info!(ranges = ranges.len(), path = %path.display(), "loaded geoip database");
        Ok(Ip2LocationCsv { ranges })
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl GeoLocator for Ip2LocationCsv {
    fn locate(&self, ip: Ipv4Addr) -> Location {
        let n = u32::from(ip);
        let idx = self.ranges.partition_point(|r| r.0 <= n);
        match idx.checked_sub(1).and_then(|i| self.ranges.get(i)) {
            Some((_, to, loc)) if n <= *to => loc.clone(),
            _ => Location::unknown(),
        }
    }
}

/// Split a CSV line whose fields are double-quoted.
fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
#[path = "geoip_tests.rs"]
mod tests;
