// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::config::consts::DEFAULT_ORDER;
use crate::config::CandidateId;

/// Ordered, de-duplicated set of candidate ids.
///
/// Declaration order is preserved because the depth-first placement visits
/// edges in that order, which decides the final position of unrelated ids.
pub type CandidateSet = IndexSet<CandidateId>;

/// Everything the ordering subsystem knows about one candidate.
///
/// Records are produced by a [`MetadataSource`](crate::traits::MetadataSource)
/// and never mutated once they enter a [`CandidateGraph`](super::CandidateGraph).
///
/// # Example
/// ```
/// use activation_order::ordering::CandidateRecord;
///
/// let record = CandidateRecord::new("com.example.Web")
///     .with_order(10)
///     .with_after(["com.example.Data"]);
///
/// assert_eq!(record.order, 10);
/// assert!(record.after.contains("com.example.Data"));
/// assert!(!record.is_deprecated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: CandidateId,
    pub order: i32,
    pub before: CandidateSet,
    pub after: CandidateSet,
    pub replacements: CandidateSet,
    pub available: bool,
}

impl CandidateRecord {
    /// An available record with default order and no edges
    pub fn new(id: impl Into<CandidateId>) -> Self {
        Self {
            id: id.into(),
            order: DEFAULT_ORDER,
            before: CandidateSet::new(),
            after: CandidateSet::new(),
            replacements: CandidateSet::new(),
            available: true,
        }
    }

    /// A record for an id the metadata source could not resolve.
    pub fn unavailable(id: impl Into<CandidateId>) -> Self {
        Self {
            available: false,
            ..Self::new(id)
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn with_before<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CandidateId>,
    {
        self.before.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_after<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CandidateId>,
    {
        self.after.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_replacements<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CandidateId>,
    {
        self.replacements.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Whether this candidate is retired in favor of one or more replacements
    pub fn is_deprecated(&self) -> bool {
        !self.replacements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_keep_declaration_order_and_drop_duplicates() {
        let record = CandidateRecord::new("a").with_after(["c", "b", "c"]);
        let after: Vec<&str> = record.after.iter().map(|id| id.as_str()).collect();
        assert_eq!(after, vec!["c", "b"]);
    }

    #[test]
    fn test_unavailable_uses_defaults() {
        let record = CandidateRecord::unavailable("missing");
        assert!(!record.available);
        assert_eq!(record.order, DEFAULT_ORDER);
        assert!(record.before.is_empty());
        assert!(record.after.is_empty());
        assert!(!record.is_deprecated());
    }
}
