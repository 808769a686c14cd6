// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::consts::DEFAULT_ORDER;
use crate::config::CandidateId;
use crate::observability::messages::index::IndexEntryOverridden;
use crate::observability::messages::StructuredLog;
use crate::ordering::CandidateRecord;
use crate::traits::MetadataSource;

/// Precomputed ordering attributes for one candidate.
///
/// # Example
/// ```yaml
/// order: 10
/// before: [com.example.SecurityConfig]
/// after: [com.example.DataSourceConfig]
/// replaced_by: []
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub before: Vec<CandidateId>,
    #[serde(default)]
    pub after: Vec<CandidateId>,
    #[serde(default)]
    pub replaced_by: Vec<CandidateId>,
}

impl From<CandidateRecord> for IndexEntry {
    fn from(record: CandidateRecord) -> Self {
        Self {
            order: Some(record.order),
            before: record.before.into_iter().collect(),
            after: record.after.into_iter().collect(),
            replaced_by: record.replacements.into_iter().collect(),
        }
    }
}

/// A precomputed candidate index.
///
/// This is the fast metadata source: every answer is a map lookup. A
/// candidate is available exactly when the index has an entry for it.
///
/// # Examples
///
/// ## Building an index in code
/// ```
/// use activation_order::ordering::CandidateRecord;
/// use activation_order::sources::CandidateIndex;
/// use activation_order::traits::MetadataSource;
///
/// let index = CandidateIndex::from_records([
///     CandidateRecord::new("web").with_order(10).with_after(["data"]),
/// ]);
///
/// assert!(index.is_available(&"web".into()));
/// assert_eq!(index.order(&"web".into()), 10);
/// assert!(!index.is_available(&"data".into()));
/// ```
///
/// ## Reading an index document
/// ```
/// use activation_order::sources::CandidateIndex;
///
/// let yaml = r#"
/// candidates:
///   web:
///     order: 10
///     after: [data]
///   data: {}
/// "#;
///
/// let index: CandidateIndex = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(index.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIndex {
    #[serde(default)]
    pub candidates: IndexMap<CandidateId, IndexEntry>,
}

impl CandidateIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from fully specified records
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CandidateRecord>,
    {
        let mut index = Self::new();
        for record in records {
            index.insert(record.id.clone(), IndexEntry::from(record));
        }
        index
    }

    /// Insert an entry, returning the one it replaced
    pub fn insert(&mut self, id: CandidateId, entry: IndexEntry) -> Option<IndexEntry> {
        self.candidates.insert(id, entry)
    }

    pub fn get(&self, id: &str) -> Option<&IndexEntry> {
        self.candidates.get(id)
    }

    /// Get all candidate IDs in the index
    pub fn ids(&self) -> impl Iterator<Item = &CandidateId> {
        self.candidates.keys()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Merge `other` into this index.
    ///
    /// Entries from `other` win; each override is logged against `origin`.
    pub fn merge(&mut self, other: CandidateIndex, origin: &str) {
        for (id, entry) in other.candidates {
            if self.candidates.contains_key(&id) {
                IndexEntryOverridden {
                    candidate_id: id.as_str(),
                    path: origin,
                }
                .log();
            }
            self.candidates.insert(id, entry);
        }
    }
}

impl MetadataSource for CandidateIndex {
    fn is_available(&self, id: &CandidateId) -> bool {
        self.candidates.contains_key(id)
    }

    fn order(&self, id: &CandidateId) -> i32 {
        self.candidates
            .get(id)
            .and_then(|entry| entry.order)
            .unwrap_or(DEFAULT_ORDER)
    }

    fn before(&self, id: &CandidateId) -> Vec<CandidateId> {
        self.candidates
            .get(id)
            .map(|entry| entry.before.clone())
            .unwrap_or_default()
    }

    fn after(&self, id: &CandidateId) -> Vec<CandidateId> {
        self.candidates
            .get(id)
            .map(|entry| entry.after.clone())
            .unwrap_or_default()
    }

    fn deprecated_replacements(&self, id: &CandidateId) -> Vec<CandidateId> {
        self.candidates
            .get(id)
            .map(|entry| entry.replaced_by.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::candidate_id::ids;

    #[test]
    fn test_missing_entry_reports_defaults() {
        let index = CandidateIndex::new();
        let id = CandidateId::from("nope");

        assert!(!index.is_available(&id));
        assert_eq!(index.order(&id), DEFAULT_ORDER);
        assert!(index.before(&id).is_empty());
        assert!(index.deprecated_replacements(&id).is_empty());
        assert_eq!(index.record(&id), CandidateRecord::unavailable("nope"));
    }

    #[test]
    fn test_entry_without_order_uses_default() {
        let yaml = r#"
candidates:
  web:
    before: [security]
"#;
        let index: CandidateIndex = serde_yaml::from_str(yaml).unwrap();
        let id = CandidateId::from("web");

        assert_eq!(index.order(&id), DEFAULT_ORDER);
        assert_eq!(index.before(&id), ids(["security"]));
        assert!(index.after(&id).is_empty());
    }

    #[test]
    fn test_record_reflects_entry() {
        let yaml = r#"
candidates:
  old:
    replaced_by: [new]
"#;
        let index: CandidateIndex = serde_yaml::from_str(yaml).unwrap();
        let record = index.record(&"old".into());

        assert!(record.available);
        assert!(record.is_deprecated());
        assert!(record.replacements.contains("new"));
    }

    #[test]
    fn test_merge_later_entries_win() {
        let mut base = CandidateIndex::from_records([
            CandidateRecord::new("a").with_order(1),
            CandidateRecord::new("b"),
        ]);
        let overlay = CandidateIndex::from_records([CandidateRecord::new("a").with_order(5)]);

        base.merge(overlay, "overlay.yaml");

        assert_eq!(base.len(), 2);
        assert_eq!(base.order(&"a".into()), 5);
    }

    #[test]
    fn test_json_and_toml_documents() {
        let json = r#"{"candidates": {"a": {"order": -5, "after": ["b"]}}}"#;
        let from_json: CandidateIndex = serde_json::from_str(json).unwrap();
        assert_eq!(from_json.order(&"a".into()), -5);

        let toml_doc = r#"
[candidates.a]
order = -5
after = ["b"]
"#;
        let from_toml: CandidateIndex = toml::from_str(toml_doc).unwrap();
        assert_eq!(from_json, from_toml);
    }
}
