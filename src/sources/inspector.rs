// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;
use std::sync::Arc;

use crate::config::CandidateId;
use crate::traits::{Candidate, MetadataSource};

/// Live metadata source backed by registered [`Candidate`] objects.
///
/// Each query asks the candidate itself, so answers always reflect the
/// running code but cost a trait call and a fresh allocation. Prefer a
/// [`CandidateIndex`](super::CandidateIndex) where one can be produced ahead
/// of time and layer this inspector behind it with
/// [`LayeredSource`](super::LayeredSource).
///
/// The `Arc` wrapper lets the same candidate instances be shared by several
/// inspectors and across threads without cloning them.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use activation_order::config::CandidateId;
/// use activation_order::sources::LiveInspector;
/// use activation_order::traits::{Candidate, MetadataSource};
///
/// struct WebConfig;
///
/// impl Candidate for WebConfig {
///     fn id(&self) -> CandidateId {
///         "web".into()
///     }
///
///     fn after(&self) -> Vec<CandidateId> {
///         vec!["data".into()]
///     }
/// }
///
/// let mut inspector = LiveInspector::new();
/// inspector.register(Arc::new(WebConfig));
///
/// assert!(inspector.is_available(&"web".into()));
/// assert_eq!(inspector.after(&"web".into()), vec![CandidateId::from("data")]);
/// ```
#[derive(Clone, Default)]
pub struct LiveInspector {
    candidates: IndexMap<CandidateId, Arc<dyn Candidate>>,
}

impl LiveInspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate under the id it reports.
    ///
    /// A later registration with the same id replaces the earlier one.
    pub fn register(&mut self, candidate: Arc<dyn Candidate>) {
        self.candidates.insert(candidate.id(), candidate);
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, candidate: Arc<dyn Candidate>) -> Self {
        self.register(candidate);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Candidate>> {
        self.candidates.get(id)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn inspect<T: Default>(&self, id: &CandidateId, query: impl FnOnce(&dyn Candidate) -> T) -> T {
        self.candidates
            .get(id)
            .map(|candidate| query(candidate.as_ref()))
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for LiveInspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveInspector")
            .field("candidate_count", &self.candidates.len())
            .field("candidate_ids", &self.candidates.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl MetadataSource for LiveInspector {
    fn is_available(&self, id: &CandidateId) -> bool {
        self.candidates.contains_key(id)
    }

    fn order(&self, id: &CandidateId) -> i32 {
        self.inspect(id, |candidate| candidate.order())
    }

    fn before(&self, id: &CandidateId) -> Vec<CandidateId> {
        self.inspect(id, |candidate| candidate.before())
    }

    fn after(&self, id: &CandidateId) -> Vec<CandidateId> {
        self.inspect(id, |candidate| candidate.after())
    }

    fn deprecated_replacements(&self, id: &CandidateId) -> Vec<CandidateId> {
        self.inspect(id, |candidate| candidate.replaced_by())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::{DEFAULT_ORDER, HIGHEST_PRECEDENCE};

    struct Fixed {
        id: &'static str,
        order: i32,
        replaced_by: Vec<&'static str>,
    }

    impl Candidate for Fixed {
        fn id(&self) -> CandidateId {
            self.id.into()
        }

        fn order(&self) -> i32 {
            self.order
        }

        fn replaced_by(&self) -> Vec<CandidateId> {
            self.replaced_by.iter().map(|id| CandidateId::from(*id)).collect()
        }
    }

    #[test]
    fn test_queries_registered_candidates() {
        let inspector = LiveInspector::new().with(Arc::new(Fixed {
            id: "first",
            order: HIGHEST_PRECEDENCE,
            replaced_by: vec![],
        }));

        let id = CandidateId::from("first");
        assert!(inspector.is_available(&id));
        assert_eq!(inspector.order(&id), HIGHEST_PRECEDENCE);
        assert!(inspector.before(&id).is_empty());
    }

    #[test]
    fn test_unregistered_candidate_is_unavailable() {
        let inspector = LiveInspector::new();
        let record = inspector.record(&"ghost".into());

        assert!(!record.available);
        assert_eq!(record.order, DEFAULT_ORDER);
    }

    #[test]
    fn test_reports_deprecation() {
        let inspector = LiveInspector::new().with(Arc::new(Fixed {
            id: "legacy",
            order: 0,
            replaced_by: vec!["modern"],
        }));

        assert!(inspector.record(&"legacy".into()).is_deprecated());
    }
}
