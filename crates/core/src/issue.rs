// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalized issue types.
//!
//! This module contains the report-side view of a tracker issue: Issue,
//! IssueKind, Status, Comment, and WorkLogEntry.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::status::{self, FreshnessClassifier};
use crate::warning::Warning;

/// Assignee recorded when the tracker reports nobody.
pub const UNASSIGNED: &str = "Unassigned";

/// Tracker type label for cards.
pub const CARD_TYPE: &str = "Engineering card";
/// Tracker type label for blueprints.
pub const BLUEPRINT_TYPE: &str = "Blueprint";

/// Classification of issues by the tracker's issue-type label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Top-level engineering work item.
    Card,
    /// Piece of work under a card.
    Blueprint,
    /// Any other issue type; carries the raw label.
    Other(String),
}

impl IssueKind {
    /// Classify a tracker issue-type label. Matching is exact.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            CARD_TYPE => IssueKind::Card,
            BLUEPRINT_TYPE => IssueKind::Blueprint,
            other => IssueKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            IssueKind::Card => CARD_TYPE,
            IssueKind::Blueprint => BLUEPRINT_TYPE,
            IssueKind::Other(name) => name,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Workflow status as named by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Open,
    Todo,
    InProgress,
    Reopened,
    Blocked,
    Resolved,
    Closed,
}

/// Report section an issue's status contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Plan,
    Progress,
}

impl Status {
    /// Returns the name the tracker uses for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::Todo => "TODO",
            Status::InProgress => "In Progress",
            Status::Reopened => "Reopened",
            Status::Blocked => "Blocked",
            Status::Resolved => "Resolved",
            Status::Closed => "Closed",
        }
    }

    /// Report sections this status belongs to.
    pub fn categories(&self) -> BTreeSet<StatusCategory> {
        use StatusCategory::{Plan, Progress};
        let cats: &[StatusCategory] = match self {
            Status::Open => &[],
            Status::Todo | Status::Blocked => &[Plan],
            Status::InProgress | Status::Reopened => &[Plan, Progress],
            Status::Resolved | Status::Closed => &[Progress],
        };
        cats.iter().copied().collect()
    }

    /// Returns true for resolved or closed issues.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Resolved | Status::Closed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "todo" | "to do" => Ok(Status::Todo),
            "in progress" => Ok(Status::InProgress),
            "reopened" => Ok(Status::Reopened),
            "blocked" => Ok(Status::Blocked),
            "resolved" => Ok(Status::Resolved),
            "closed" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// A comment split into paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    /// The issue this comment belongs to.
    pub issue_key: String,
    /// Blank-line separated paragraphs, each on a single line.
    pub paragraphs: Vec<String>,
    /// When the comment was last updated.
    pub updated: DateTime<FixedOffset>,
}

/// A unit of recorded work with its text split into progress and plans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkLogEntry {
    /// The issue this entry belongs to.
    pub issue_key: String,
    /// When the work started, in the offset the tracker recorded.
    pub started: DateTime<FixedOffset>,
    /// Compact duration string as recorded, e.g. `1d 4h`.
    pub time_spent: String,
    /// Paragraphs describing work done.
    pub progress: Vec<String>,
    /// Paragraphs following a "Plans" header.
    pub plans: Vec<String>,
}

/// A tracker issue after normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    /// Tracker key, e.g. `CARD-123`.
    pub key: String,
    /// Browse URL used to tag warnings.
    pub url: String,
    /// Summary after rewrite rules and trimming.
    pub summary: String,
    /// Display names; never empty.
    pub assignees: BTreeSet<String>,
    pub kind: IssueKind,
    /// Parsed status, `None` when the tracker name is not recognized.
    pub status: Option<Status>,
    /// Status name exactly as reported.
    pub status_name: String,
    pub components: Vec<String>,
    pub created: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engineering_status: Option<String>,
    /// Parent card key. Only read for blueprints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Keys of issues linked through tracker issue links.
    pub links: Vec<String>,
    /// Keys of blueprints linked to this card.
    pub blueprints: Vec<String>,
    pub comments: Vec<Comment>,
    pub worklog: Vec<WorkLogEntry>,
}

impl Issue {
    pub fn is_card(&self) -> bool {
        self.kind == IssueKind::Card
    }

    pub fn is_blueprint(&self) -> bool {
        self.kind == IssueKind::Blueprint
    }

    /// Report sections for the issue's status.
    ///
    /// An unrecognized status yields an empty set and a warning.
    pub fn categorize(&self, warnings: &mut Vec<Warning>) -> BTreeSet<StatusCategory> {
        match self.status {
            Some(status) => status.categories(),
            None => {
                warnings.push(Warning::new(
                    &self.url,
                    format!("has bad status ({})", self.status_name),
                ));
                BTreeSet::new()
            }
        }
    }

    /// Sorted assignee first names joined by `, `.
    pub fn fmt_assignees(&self) -> String {
        self.assignees
            .iter()
            .map(|a| a.split(' ').next().unwrap_or(a))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One-line summary: `<member>: <summary> [<assignees>] (<key>)`.
    pub fn fmt_summary(&self, member: &str) -> String {
        format!(
            "{}: {} [{}] ({})",
            member,
            self.summary,
            self.fmt_assignees(),
            self.key
        )
    }

    /// Current engineering-status lines, judged by `classifier`.
    pub fn fmt_engineering_status(
        &self,
        classifier: &dyn FreshnessClassifier,
        warnings: &mut Vec<Warning>,
    ) -> Vec<String> {
        match &self.engineering_status {
            Some(text) => status::current_lines(text, classifier, &self.url, warnings),
            None => Vec::new(),
        }
    }

    /// Engineering-status lines that describe plans.
    pub fn fmt_engineering_plans(&self) -> Vec<String> {
        match &self.engineering_status {
            Some(text) => status::plan_lines(text),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
