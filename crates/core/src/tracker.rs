// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker boundary: raw records and the query trait.
//!
//! Raw types mirror the JSON returned by the JIRA REST v2 API closely
//! enough to deserialize it directly. Custom fields are site-specific, so
//! they are kept in a map and picked out by name during normalization.

#[cfg(any(test, feature = "test-support"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// An issue as returned by a search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawIssue {
    pub key: String,
    pub fields: RawFields,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub assignee: Option<RawUser>,
    #[serde(default)]
    pub components: Vec<RawNamed>,
    pub issuetype: RawNamed,
    pub status: RawNamed,
    pub created: String,
    #[serde(default)]
    pub resolutiondate: Option<String>,
    #[serde(default)]
    pub issuelinks: Vec<RawIssueLink>,
    /// Every field not listed above, including `customfield_*` values.
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawUser {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Any tracker object identified by name (components, types, statuses).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawNamed {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawIssueLink {
    #[serde(rename = "outwardIssue", default)]
    pub outward_issue: Option<RawLinkedIssue>,
    #[serde(rename = "inwardIssue", default)]
    pub inward_issue: Option<RawLinkedIssue>,
}

impl RawIssueLink {
    /// Key of the issue on the other end of the link.
    pub fn other_key(&self) -> Option<&str> {
        self.outward_issue
            .as_ref()
            .or(self.inward_issue.as_ref())
            .map(|i| i.key.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawLinkedIssue {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub body: String,
    pub updated: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawWorkLog {
    #[serde(default)]
    pub comment: Option<String>,
    pub started: String,
    #[serde(rename = "timeSpent")]
    pub time_spent: String,
}

/// Read access to an issue tracker.
///
/// Calls are blocking and issued one at a time; any error is fatal to the
/// report being built.
pub trait Tracker {
    /// Every issue matching a JQL expression.
    fn search(&self, jql: &str) -> Result<Vec<RawIssue>>;

    /// Number of issues matching a JQL expression.
    fn count(&self, jql: &str) -> Result<u64>;

    /// All comments on an issue, oldest first.
    fn comments(&self, key: &str) -> Result<Vec<RawComment>>;

    /// All work-log entries on an issue, oldest first.
    fn worklogs(&self, key: &str) -> Result<Vec<RawWorkLog>>;
}

/// A tracker held entirely in memory, for tests.
///
/// Searches answer only the JQL strings registered with
/// [`MemoryTracker::with_query`]; anything else matches nothing. Every JQL
/// string received is recorded for inspection. Built only with the
/// `test-support` feature.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct MemoryTracker {
    issues: HashMap<String, RawIssue>,
    queries: HashMap<String, Vec<String>>,
    counts: HashMap<String, u64>,
    comments: HashMap<String, Vec<RawComment>>,
    worklogs: HashMap<String, Vec<RawWorkLog>>,
    received: RefCell<Vec<String>>,
}

#[cfg(any(test, feature = "test-support"))]
impl MemoryTracker {
    pub fn new() -> Self {
        MemoryTracker::default()
    }

    pub fn with_issue(mut self, issue: RawIssue) -> Self {
        self.issues.insert(issue.key.clone(), issue);
        self
    }

    /// Answer `jql` with the issues stored under `keys`, in that order.
    pub fn with_query(mut self, jql: impl Into<String>, keys: &[&str]) -> Self {
        self.queries
            .insert(jql.into(), keys.iter().map(|k| k.to_string()).collect());
        self
    }

    /// Answer a count for `jql` without storing matching issues.
    pub fn with_count(mut self, jql: impl Into<String>, total: u64) -> Self {
        self.counts.insert(jql.into(), total);
        self
    }

    pub fn with_comments(mut self, key: &str, comments: Vec<RawComment>) -> Self {
        self.comments.insert(key.to_string(), comments);
        self
    }

    pub fn with_worklogs(mut self, key: &str, worklogs: Vec<RawWorkLog>) -> Self {
        self.worklogs.insert(key.to_string(), worklogs);
        self
    }

    /// JQL strings received so far, in order.
    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }

    fn record(&self, jql: &str) {
        self.received.borrow_mut().push(jql.to_string());
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Tracker for MemoryTracker {
    fn search(&self, jql: &str) -> Result<Vec<RawIssue>> {
        self.record(jql);
        let keys = self.queries.get(jql).map(Vec::as_slice).unwrap_or_default();
        Ok(keys
            .iter()
            .filter_map(|k| self.issues.get(k).cloned())
            .collect())
    }

    fn count(&self, jql: &str) -> Result<u64> {
        self.record(jql);
        if let Some(total) = self.counts.get(jql) {
            return Ok(*total);
        }
        let found = self.queries.get(jql).map(Vec::len).unwrap_or(0);
        Ok(found as u64)
    }

    fn comments(&self, key: &str) -> Result<Vec<RawComment>> {
        Ok(self.comments.get(key).cloned().unwrap_or_default())
    }

    fn worklogs(&self, key: &str) -> Result<Vec<RawWorkLog>> {
        Ok(self.worklogs.get(key).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
