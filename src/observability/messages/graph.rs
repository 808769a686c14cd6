// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for candidate graph construction.
//!
//! This module contains message types for logging events related to:
//! * Working set construction (start, completion)
//! * Candidates the metadata source could not resolve
//! * Deprecated candidates redirected to their replacements
//! * Deprecated replacement cycles

use crate::config::CandidateId;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

fn join(ids: &[CandidateId]) -> String {
    ids.iter()
        .map(CandidateId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Graph construction started.
///
/// # Log Level
/// `debug!` - Internal lifecycle event
pub struct GraphBuildStarted {
    pub initial_count: usize,
}

impl Display for GraphBuildStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Building candidate graph from {} initial candidates",
            self.initial_count
        )
    }
}

impl StructuredLog for GraphBuildStarted {
    fn log(&self) {
        tracing::debug!(initial_count = self.initial_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "graph_build",
            span_name = name,
            initial_count = self.initial_count,
        )
    }
}

/// Graph construction completed.
///
/// # Log Level
/// `debug!` - Internal lifecycle event
///
/// # Example
/// ```
/// use activation_order::observability::messages::graph::GraphBuildCompleted;
///
/// let msg = GraphBuildCompleted {
///     primary_count: 4,
///     inherited_count: 1,
///     deprecated_count: 0,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Candidate graph built: 4 primary, 1 inherited, 0 deprecated"
/// );
/// ```
pub struct GraphBuildCompleted {
    pub primary_count: usize,
    pub inherited_count: usize,
    pub deprecated_count: usize,
}

impl Display for GraphBuildCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Candidate graph built: {} primary, {} inherited, {} deprecated",
            self.primary_count, self.inherited_count, self.deprecated_count
        )
    }
}

impl StructuredLog for GraphBuildCompleted {
    fn log(&self) {
        tracing::debug!(
            primary_count = self.primary_count,
            inherited_count = self.inherited_count,
            deprecated_count = self.deprecated_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "graph_build",
            span_name = name,
            primary_count = self.primary_count,
            inherited_count = self.inherited_count,
            deprecated_count = self.deprecated_count,
        )
    }
}

/// The metadata source could not resolve a candidate; defaults apply.
///
/// # Log Level
/// `debug!` - Expected for optional candidates that are not present
pub struct CandidateUnavailable<'a> {
    pub candidate_id: &'a str,
    pub primary: bool,
}

impl Display for CandidateUnavailable<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let kind = if self.primary { "primary" } else { "inherited" };
        write!(
            f,
            "Candidate '{}' ({}) is unavailable, ordering with defaults",
            self.candidate_id, kind
        )
    }
}

impl StructuredLog for CandidateUnavailable<'_> {
    fn log(&self) {
        tracing::debug!(
            candidate_id = self.candidate_id,
            primary = self.primary,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "candidate",
            span_name = name,
            candidate_id = self.candidate_id,
            primary = self.primary,
        )
    }
}

/// A deprecated candidate was redirected to its replacements.
///
/// # Log Level
/// `debug!` - Deprecation is transparent to callers
///
/// # Example
/// ```
/// use activation_order::config::CandidateId;
/// use activation_order::observability::messages::graph::DeprecatedCandidateRedirected;
///
/// let replacements = vec![CandidateId::from("NewWeb")];
/// let msg = DeprecatedCandidateRedirected {
///     candidate_id: "OldWeb",
///     replacements: &replacements,
/// };
///
/// assert_eq!(msg.to_string(), "Deprecated candidate 'OldWeb' redirected to [NewWeb]");
/// ```
pub struct DeprecatedCandidateRedirected<'a> {
    pub candidate_id: &'a str,
    pub replacements: &'a [CandidateId],
}

impl Display for DeprecatedCandidateRedirected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Deprecated candidate '{}' redirected to [{}]",
            self.candidate_id,
            join(self.replacements)
        )
    }
}

impl StructuredLog for DeprecatedCandidateRedirected<'_> {
    fn log(&self) {
        tracing::debug!(
            candidate_id = self.candidate_id,
            replacements = join(self.replacements),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "candidate",
            span_name = name,
            candidate_id = self.candidate_id,
            replacements = join(self.replacements),
        )
    }
}

/// Deprecated candidates redirect to each other in a loop.
///
/// # Log Level
/// `error!` - Fatal, the ordering is aborted
pub struct ReplacementCycleDetected<'a> {
    pub chain: &'a [CandidateId],
}

impl Display for ReplacementCycleDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let chain: Vec<&str> = self.chain.iter().map(CandidateId::as_str).collect();
        write!(
            f,
            "Deprecated replacement cycle detected: {}",
            chain.join(" -> ")
        )
    }
}

impl StructuredLog for ReplacementCycleDetected<'_> {
    fn log(&self) {
        tracing::error!(
            chain = join(self.chain),
            chain_length = self.chain.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "replacement_cycle",
            span_name = name,
            chain = join(self.chain),
            chain_length = self.chain.len(),
        )
    }
}
