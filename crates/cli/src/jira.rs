// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking JIRA REST v2 client.

use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use lps_core::tracker::{RawComment, RawIssue, RawWorkLog, Tracker};
use lps_core::{Error as CoreError, Result as CoreResult};

/// Issues requested per search page.
pub const PAGE_SIZE: u64 = 100;

/// One page of `/rest/api/2/search`.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(rename = "startAt", default)]
    pub start_at: u64,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub issues: Vec<RawIssue>,
}

impl SearchPage {
    /// Offset of the following page, or `None` when this was the last.
    pub fn next_start(&self) -> Option<u64> {
        let next = self.start_at + self.issues.len() as u64;
        (!self.issues.is_empty() && next < self.total).then_some(next)
    }
}

#[derive(Debug, Deserialize)]
struct CommentPage {
    #[serde(default)]
    comments: Vec<RawComment>,
}

#[derive(Debug, Deserialize)]
struct WorkLogPage {
    #[serde(default)]
    worklogs: Vec<RawWorkLog>,
}

/// Map an HTTP status to a tracker error; `None` on success.
pub fn status_error(status: StatusCode, server: &str, url: &str) -> Option<CoreError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Some(CoreError::Unauthorized(server.to_string()))
    } else if !status.is_success() {
        Some(CoreError::Transport(format!("{url} returned {status}")))
    } else {
        None
    }
}

/// Tracker backed by a JIRA server, authenticated with basic auth.
pub struct JiraClient {
    http: HttpClient,
    server: String,
    user: String,
    password: String,
}

impl JiraClient {
    pub fn new(
        server: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        JiraClient {
            http: HttpClient::new(),
            server: server.into().trim_end_matches('/').to_string(),
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    fn url(&self, path: &str) -> String {
        format!("{}/rest/api/2/{}", self.server, path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> CoreResult<T> {
        let url = self.url(path);
        tracing::debug!(url = url.as_str(), "GET");
        let resp: Response = self
            .http
            .get(&url)
            .basic_auth(&self.user, Some(&self.password))
            .query(query)
            .send()
            .map_err(|e| CoreError::Transport(format!("cannot reach {}: {}", self.server, e)))?;

        if let Some(err) = status_error(resp.status(), &self.server, &url) {
            return Err(err);
        }
        resp.json()
            .map_err(|e| CoreError::Transport(format!("bad response from {url}: {e}")))
    }

    fn search_page(&self, jql: &str, start_at: u64, max_results: u64) -> CoreResult<SearchPage> {
        self.get(
            "search",
            &[
                ("jql", jql.to_string()),
                ("startAt", start_at.to_string()),
                ("maxResults", max_results.to_string()),
            ],
        )
    }
}

impl Tracker for JiraClient {
    fn search(&self, jql: &str) -> CoreResult<Vec<RawIssue>> {
        let mut issues = Vec::new();
        let mut start = Some(0);
        while let Some(start_at) = start {
            let page = self.search_page(jql, start_at, PAGE_SIZE)?;
            start = page.next_start();
            issues.extend(page.issues);
        }
        tracing::info!(jql, found = issues.len(), "search");
        Ok(issues)
    }

    fn count(&self, jql: &str) -> CoreResult<u64> {
        Ok(self.search_page(jql, 0, 0)?.total)
    }

    fn comments(&self, key: &str) -> CoreResult<Vec<RawComment>> {
        let page: CommentPage = self.get(&format!("issue/{key}/comment"), &[])?;
        Ok(page.comments)
    }

    fn worklogs(&self, key: &str) -> CoreResult<Vec<RawWorkLog>> {
        let page: WorkLogPage = self.get(&format!("issue/{key}/worklog"), &[])?;
        Ok(page.worklogs)
    }
}

#[cfg(test)]
#[path = "jira_tests.rs"]
mod tests;
