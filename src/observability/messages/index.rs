// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for index and run file loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A candidate index file was loaded.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use activation_order::observability::messages::index::IndexLoaded;
///
/// let msg = IndexLoaded {
///     path: "configs/web-index.yaml",
///     entry_count: 12,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct IndexLoaded<'a> {
    pub path: &'a str,
    pub entry_count: usize,
}

impl Display for IndexLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded candidate index '{}' with {} entries",
            self.path, self.entry_count
        )
    }
}

impl StructuredLog for IndexLoaded<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, entry_count = self.entry_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "index",
            span_name = name,
            path = self.path,
            entry_count = self.entry_count,
        )
    }
}

/// An index entry was overridden by a later index.
///
/// # Log Level
/// `warn!` - Possibly unintended, but not fatal
pub struct IndexEntryOverridden<'a> {
    pub candidate_id: &'a str,
    pub path: &'a str,
}

impl Display for IndexEntryOverridden<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Index entry for '{}' overridden by '{}'",
            self.candidate_id, self.path
        )
    }
}

impl StructuredLog for IndexEntryOverridden<'_> {
    fn log(&self) {
        tracing::warn!(
            candidate_id = self.candidate_id,
            path = self.path,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "index",
            span_name = name,
            candidate_id = self.candidate_id,
            path = self.path,
        )
    }
}
