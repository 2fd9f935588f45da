// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mirror rotated access logs from the weblogs server.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use reqwest::blocking::Client as HttpClient;
use reqwest::StatusCode;
use serde::Serialize;

use crate::access_log::log_day;
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://weblogs.linaro.org";

pub const DEFAULT_SERVERS: &[&str] = &[
    "git-ie.linaro.org",
    "git-ap.linaro.org",
    "git-us.linaro.org",
];

static LISTING_LINK: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r#"^.+<a href="(\S+)">"#) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Link targets in a directory-listing page, one per matching line.
pub fn listing_links(html: &str) -> Vec<String> {
    html.lines()
        .filter_map(|line| LISTING_LINK.captures(line))
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Links worth mirroring: plain file names of dated access logs.
pub fn wanted(link: &str) -> bool {
    !link.contains('/') && log_day(link).is_some()
}

/// Where access logs are listed and downloaded from.
pub trait LogSource {
    /// Directory listing for one git server.
    fn list(&self, server: &str) -> Result<String>;

    /// Contents of one file in a server's directory.
    fn download(&self, server: &str, name: &str) -> Result<Vec<u8>>;
}

/// The weblogs HTTP server, read with basic auth.
pub struct WeblogsClient {
    http: HttpClient,
    base_url: String,
    user: String,
    password: String,
}

impl WeblogsClient {
    pub fn new(base_url: &str, user: impl Into<String>, password: impl Into<String>) -> Self {
        WeblogsClient {
            http: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// `<base>/restricted/<server>/<name>`.
    pub fn url(&self, server: &str, name: &str) -> String {
        format!("{}/restricted/{}/{}", self.base_url, server, name)
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        tracing::debug!(url, "GET");
        let resp = self
            .http
            .get(url)
            .basic_auth(&self.user, Some(&self.password))
            .send()?;
        match resp.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(Error::Unauthorized(self.base_url.clone()))
            }
            s if !s.is_success() => Err(Error::Status {
                url: url.to_string(),
                status: s.as_u16(),
            }),
            _ => Ok(resp),
        }
    }
}

impl LogSource for WeblogsClient {
    fn list(&self, server: &str) -> Result<String> {
        Ok(self.get(&self.url(server, ""))?.text()?)
    }

    fn download(&self, server: &str, name: &str) -> Result<Vec<u8>> {
        Ok(self.get(&self.url(server, name))?.bytes()?.to_vec())
    }
}

/// Files handled while syncing one server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    pub server: String,
    pub downloaded: Vec<String>,
    pub skipped: Vec<String>,
}

/// Download every dated access log of `server` missing from `local_dir`.
///
/// The directory is created if needed. Files already present are left alone.
pub fn sync_server(source: &dyn LogSource, server: &str, local_dir: &Path) -> Result<SyncSummary> {
    fs::create_dir_all(local_dir)?;
    tracing::info!(server, "syncing logs");

    let mut summary = SyncSummary {
        server: server.to_string(),
        ..SyncSummary::default()
    };
    for link in listing_links(&source.list(server)?) {
        if !wanted(&link) {
            continue;
        }
        let path = local_dir.join(&link);
        if path.exists() {
            tracing::debug!(file = link.as_str(), "exists locally, skipping");
            summary.skipped.push(link);
            continue;
        }
        tracing::info!(file = link.as_str(), "downloading");
        let body = source.download(server, &link)?;
        write_atomic(&path, &body)?;
        summary.downloaded.push(link);
    }
    Ok(summary)
}

/// Sync each server into `<logs_dir>/<server>`.
pub fn fetch_all(
    source: &dyn LogSource,
    servers: &[String],
    logs_dir: &Path,
) -> Result<Vec<SyncSummary>> {
    servers
        .iter()
        .map(|s| sync_server(source, s, &logs_dir.join(s)))
        .collect()
}

/// Write via a `.part` sibling, renamed into place once complete.
///
/// The `.part` file is removed again if any step fails.
fn write_atomic(path: &Path, body: &[u8]) -> Result<()> {
    let tmp = path.with_extension("part");
    let written = write_then_rename(&tmp, path, body);
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written
}

fn write_then_rename(tmp: &Path, path: &Path, body: &[u8]) -> Result<()> {
    let mut file = fs::File::create(tmp)?;
    file.write_all(body)?;
    file.sync_all()?;
    fs::rename(tmp, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
