// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turning raw tracker records into normalized [`Issue`] values.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::issue::{Comment, Issue, IssueKind, WorkLogEntry, UNASSIGNED};
use crate::normalize::{
    clean_summary, default_rewrites, split_paragraphs, split_worklog, SummaryRewrite,
};
use crate::timestamp::parse_timestamp;
use crate::tracker::{RawComment, RawIssue, RawWorkLog, Tracker};

/// Names of the site-specific custom fields a report reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    /// Free-text engineering status.
    #[serde(default = "default_engineering_status")]
    pub engineering_status: String,
    /// Parent card key of a blueprint.
    #[serde(default = "default_parent_card")]
    pub parent_card: String,
}

fn default_engineering_status() -> String {
    "customfield_10204".to_string()
}

fn default_parent_card() -> String {
    "customfield_10301".to_string()
}

impl Default for FieldMap {
    fn default() -> Self {
        FieldMap {
            engineering_status: default_engineering_status(),
            parent_card: default_parent_card(),
        }
    }
}

/// Normalizes raw issues, fetching their comments and work logs.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Prefix joined with an issue key to form its browse URL.
    pub browse_url: String,
    pub fields: FieldMap,
    pub rewrites: Vec<SummaryRewrite>,
}

impl Normalizer {
    pub fn new(browse_url: impl Into<String>) -> Self {
        Normalizer {
            browse_url: browse_url.into(),
            fields: FieldMap::default(),
            rewrites: default_rewrites(),
        }
    }

    pub fn with_fields(mut self, fields: FieldMap) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_rewrites(mut self, rewrites: Vec<SummaryRewrite>) -> Self {
        self.rewrites = rewrites;
        self
    }

    /// Normalize `raw`, fetching its comments and work log from `tracker`.
    ///
    /// # Errors
    ///
    /// Fails when the tracker cannot be reached or returns an unparseable
    /// timestamp.
    pub fn normalize(&self, tracker: &dyn Tracker, raw: RawIssue) -> Result<Issue> {
        let comments = tracker.comments(&raw.key)?;
        let worklogs = tracker.worklogs(&raw.key)?;
        self.build(raw, comments, worklogs)
    }

    /// Normalize `raw` from already-fetched comments and work logs.
    pub fn build(
        &self,
        raw: RawIssue,
        comments: Vec<RawComment>,
        worklogs: Vec<RawWorkLog>,
    ) -> Result<Issue> {
        let RawIssue { key, fields } = raw;
        let kind = IssueKind::from_type_name(&fields.issuetype.name);

        let assignee = fields
            .assignee
            .map(|a| a.display_name)
            .unwrap_or_else(|| UNASSIGNED.to_string());

        let parent = match kind {
            IssueKind::Blueprint => fields
                .custom
                .get(&self.fields.parent_card)
                .and_then(issue_key_value),
            _ => None,
        };

        let engineering_status = fields
            .custom
            .get(&self.fields.engineering_status)
            .and_then(Value::as_str)
            .map(String::from);

        let resolved = match fields.resolutiondate.as_deref() {
            Some(ts) => Some(parse_timestamp(ts)?),
            None => None,
        };

        let comments = comments
            .into_iter()
            .map(|c| {
                Ok(Comment {
                    issue_key: key.clone(),
                    paragraphs: split_paragraphs(&c.body),
                    updated: parse_timestamp(&c.updated)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let worklog = worklogs
            .into_iter()
            .map(|w| {
                let text = split_worklog(w.comment.as_deref().unwrap_or_default());
                Ok(WorkLogEntry {
                    issue_key: key.clone(),
                    started: parse_timestamp(&w.started)?,
                    time_spent: w.time_spent,
                    progress: text.progress,
                    plans: text.plans,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Issue {
            url: format!("{}{}", self.browse_url, key),
            summary: clean_summary(&fields.summary, &self.rewrites),
            assignees: BTreeSet::from([assignee]),
            status: fields.status.name.parse().ok(),
            status_name: fields.status.name,
            components: fields.components.into_iter().map(|c| c.name).collect(),
            created: parse_timestamp(&fields.created)?,
            resolved,
            engineering_status,
            parent,
            links: fields
                .issuelinks
                .iter()
                .filter_map(|l| l.other_key().map(String::from))
                .collect(),
            blueprints: Vec::new(),
            comments,
            worklog,
            kind,
            key,
        })
    }
}

/// Accept a parent reference given as a plain key or an object with `key`.
fn issue_key_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Object(obj) => obj.get("key").and_then(Value::as_str).map(String::from),
        _ => None,
    }
}

#[cfg(test)]
#[path = "ingest_tests.rs"]
mod tests;
