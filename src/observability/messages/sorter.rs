// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the ordering lifecycle.
//!
//! This module contains message types for logging events related to:
//! * Ordering start and completion
//! * Constraint cycles that abort an ordering

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Ordering started.
///
/// # Log Level
/// `debug!` - Internal lifecycle event
pub struct OrderingStarted {
    pub candidate_count: usize,
    pub working_set_size: usize,
}

impl Display for OrderingStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ordering {} candidates over a working set of {}",
            self.candidate_count, self.working_set_size
        )
    }
}

impl StructuredLog for OrderingStarted {
    fn log(&self) {
        tracing::debug!(
            candidate_count = self.candidate_count,
            working_set_size = self.working_set_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "ordering",
            span_name = name,
            candidate_count = self.candidate_count,
            working_set_size = self.working_set_size,
        )
    }
}

/// Ordering completed.
///
/// # Log Level
/// `debug!` - Internal lifecycle event
pub struct OrderingCompleted<'a> {
    pub first: Option<&'a str>,
    pub last: Option<&'a str>,
    pub candidate_count: usize,
}

impl Display for OrderingCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ordered {} candidates (first: {}, last: {})",
            self.candidate_count,
            self.first.unwrap_or("-"),
            self.last.unwrap_or("-")
        )
    }
}

impl StructuredLog for OrderingCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            candidate_count = self.candidate_count,
            first = self.first,
            last = self.last,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "ordering",
            span_name = name,
            candidate_count = self.candidate_count,
            first = self.first,
            last = self.last,
        )
    }
}

/// Two candidates require each other to come first.
///
/// # Log Level
/// `error!` - Fatal, the ordering is aborted
///
/// # Example
/// ```
/// use activation_order::observability::messages::sorter::OrderingCycleDetected;
///
/// let msg = OrderingCycleDetected {
///     current: "A",
///     requested_after: "B",
/// };
///
/// assert_eq!(msg.to_string(), "Ordering cycle detected between 'A' and 'B'");
/// ```
pub struct OrderingCycleDetected<'a> {
    pub current: &'a str,
    pub requested_after: &'a str,
}

impl Display for OrderingCycleDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ordering cycle detected between '{}' and '{}'",
            self.current, self.requested_after
        )
    }
}

impl StructuredLog for OrderingCycleDetected<'_> {
    fn log(&self) {
        tracing::error!(
            current = self.current,
            requested_after = self.requested_after,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "ordering_cycle",
            span_name = name,
            current = self.current,
            requested_after = self.requested_after,
        )
    }
}
