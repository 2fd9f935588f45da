// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The report aggregate: every ingested issue plus the indexes reports walk.
//!
//! A report is built in two phases. Issues are added one at a time (see
//! [`Report::add`] and [`Report::ingest`]), then [`Report::link_blueprints`]
//! attaches blueprints to their parent cards. Anomalies in tracker data are
//! recorded as [`Warning`]s rather than failing the build.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::ingest::Normalizer;
use crate::issue::{Comment, Issue, IssueKind, WorkLogEntry};
use crate::tracker::Tracker;
use crate::warning::Warning;

#[derive(Debug, Default)]
pub struct Report {
    issues: BTreeMap<String, Issue>,
    cards: Vec<String>,
    blueprints: Vec<String>,
    members: BTreeMap<String, Vec<String>>,
    warnings: Vec<Warning>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    /// Add a normalized issue and index it by kind and component.
    ///
    /// Re-adding a key replaces the stored issue without duplicating index
    /// entries.
    pub fn add(&mut self, issue: Issue) {
        let key = issue.key.clone();
        let seen = self.issues.contains_key(&key);

        match &issue.kind {
            IssueKind::Blueprint => {
                if !seen {
                    self.blueprints.push(key.clone());
                }
            }
            IssueKind::Card => {
                if !seen {
                    self.cards.push(key.clone());
                }
                if issue.components.is_empty() {
                    self.warnings.push(Warning::new(&issue.url, "has no component"));
                }
                for component in &issue.components {
                    let keys = self.members.entry(component.clone()).or_default();
                    if !keys.contains(&key) {
                        keys.push(key.clone());
                    }
                }
            }
            IssueKind::Other(name) => {
                self.warnings.push(Warning::new(
                    &issue.url,
                    format!("has unexpected issuetype {name}"),
                ));
            }
        }

        self.issues.insert(key, issue);
    }

    /// Run `jql` against `tracker` and add every result.
    ///
    /// Returns the number of issues added.
    pub fn ingest(
        &mut self,
        tracker: &dyn Tracker,
        normalizer: &Normalizer,
        jql: &str,
    ) -> Result<usize> {
        let found = tracker.search(jql)?;
        let count = found.len();
        tracing::debug!(jql, count, "ingesting search results");
        for raw in found {
            let issue = normalizer.normalize(tracker, raw)?;
            self.add(issue);
        }
        Ok(count)
    }

    /// Attach each blueprint to its parent card.
    ///
    /// The card gains the blueprint's assignees and lists the blueprint
    /// once, however many times linking runs.
    pub fn link_blueprints(&mut self) {
        for bp_key in &self.blueprints {
            let Some(bp) = self.issues.get(bp_key) else {
                continue;
            };
            let Some(parent) = bp.parent.clone() else {
                self.warnings
                    .push(Warning::new(&bp.url, "is not linked to an EPIC"));
                continue;
            };
            if !self.cards.contains(&parent) {
                self.warnings.push(Warning::new(
                    &bp.url,
                    format!("is linked to non-existant {parent}"),
                ));
                continue;
            }

            let assignees = bp.assignees.clone();
            if let Some(card) = self.issues.get_mut(&parent) {
                card.assignees.extend(assignees);
                if !card.blueprints.contains(bp_key) {
                    card.blueprints.push(bp_key.clone());
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Issue> {
        self.issues.get(key)
    }

    /// Every issue, ordered by key.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.values()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Cards in the order they were added.
    pub fn cards(&self) -> impl Iterator<Item = &Issue> {
        self.cards.iter().filter_map(|k| self.issues.get(k))
    }

    /// Blueprints in the order they were added.
    pub fn blueprints(&self) -> impl Iterator<Item = &Issue> {
        self.blueprints.iter().filter_map(|k| self.issues.get(k))
    }

    /// Component names that have at least one card.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Cards tagged with `member`, in the order they were added.
    pub fn member_cards(&self, member: &str) -> Vec<&Issue> {
        self.members
            .get(member)
            .map(|keys| keys.iter().filter_map(|k| self.issues.get(k)).collect())
            .unwrap_or_default()
    }

    /// Blueprints linked to `card`.
    pub fn linked_blueprints<'a>(&'a self, card: &'a Issue) -> impl Iterator<Item = &'a Issue> {
        card.blueprints.iter().filter_map(|k| self.issues.get(k))
    }

    /// Comments on `key` newer than `since`, oldest first.
    ///
    /// With `recurse`, a card's linked blueprints contribute their comments.
    pub fn comments_for(
        &self,
        key: &str,
        since: Option<DateTime<Utc>>,
        recurse: bool,
    ) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> = self
            .family(key, recurse)
            .flat_map(|issue| issue.comments.iter())
            .filter(|c| since.is_none_or(|t| c.updated > t))
            .collect();
        comments.sort_by_key(|c| c.updated);
        comments
    }

    /// Work-log entries on `key` started after `since`, oldest first.
    ///
    /// With `recurse`, a card's linked blueprints contribute their entries.
    pub fn worklog_for(
        &self,
        key: &str,
        since: Option<DateTime<Utc>>,
        recurse: bool,
    ) -> Vec<&WorkLogEntry> {
        let mut entries: Vec<&WorkLogEntry> = self
            .family(key, recurse)
            .flat_map(|issue| issue.worklog.iter())
            .filter(|w| since.is_none_or(|t| w.started > t))
            .collect();
        entries.sort_by_key(|w| w.started);
        entries
    }

    /// The issue itself, plus its blueprints when recursing into a card.
    fn family(&self, key: &str, recurse: bool) -> impl Iterator<Item = &Issue> {
        let root = self.issues.get(key);
        let children = root
            .filter(|issue| recurse && issue.is_card())
            .map(|card| card.blueprints.as_slice())
            .unwrap_or_default();
        root.into_iter()
            .chain(children.iter().filter_map(|k| self.issues.get(k)))
    }

    /// Record a warning raised while rendering from this report.
    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn extend_warnings(&mut self, warnings: impl IntoIterator<Item = Warning>) {
        self.warnings.extend(warnings);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
