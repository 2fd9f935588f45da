// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lps-core: Shared library for the tracker reporting tools
//!
//! This crate provides the issue model, text normalization, duration parsing,
//! and report aggregation used by every `lps` report. Network access stays
//! behind the [`Tracker`] trait so reports can be built from any source.

pub mod duration;
pub mod effort;
pub mod error;
pub mod ingest;
pub mod issue;
pub mod jql;
pub mod normalize;
pub mod report;
pub mod series;
pub mod status;
pub mod timestamp;
pub mod tracker;
pub mod warning;

pub use duration::parse_work_duration;
pub use effort::DateRange;
pub use error::{Error, Result};
pub use ingest::{FieldMap, Normalizer};
pub use issue::{Comment, Issue, IssueKind, Status, StatusCategory, WorkLogEntry, UNASSIGNED};
pub use normalize::{SummaryRewrite, DEFAULT_SUMMARY_REWRITES};
pub use report::Report;
pub use series::{CrossSeries, PieSeries, PieSlice, TimeWindow, TimelineRow, WeeklyEntry};
pub use status::{AlwaysCurrent, EmbeddedDateClassifier, Freshness, FreshnessClassifier};
#[cfg(any(test, feature = "test-support"))]
pub use tracker::MemoryTracker;
pub use tracker::Tracker;
pub use warning::Warning;
