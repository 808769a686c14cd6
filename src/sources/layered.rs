// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::CandidateId;
use crate::ordering::CandidateRecord;
use crate::traits::MetadataSource;

/// Consults a preferred source first and falls back to a second one.
///
/// The typical arrangement puts a precomputed [`CandidateIndex`] in front of a
/// [`LiveInspector`]: candidates covered by the index are answered from it
/// and only the rest are inspected live. Each id is answered wholly by one
/// layer, never a mix of both.
///
/// [`CandidateIndex`]: super::CandidateIndex
/// [`LiveInspector`]: super::LiveInspector
#[derive(Debug, Clone)]
pub struct LayeredSource<P, F> {
    preferred: P,
    fallback: F,
}

impl<P: MetadataSource, F: MetadataSource> LayeredSource<P, F> {
    pub fn new(preferred: P, fallback: F) -> Self {
        Self {
            preferred,
            fallback,
        }
    }

    pub fn preferred(&self) -> &P {
        &self.preferred
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    fn layer_for(&self, id: &CandidateId) -> &dyn MetadataSource {
        if self.preferred.is_available(id) {
            &self.preferred
        } else {
            &self.fallback
        }
    }
}

impl<P: MetadataSource, F: MetadataSource> MetadataSource for LayeredSource<P, F> {
    fn is_available(&self, id: &CandidateId) -> bool {
        self.preferred.is_available(id) || self.fallback.is_available(id)
    }

    fn order(&self, id: &CandidateId) -> i32 {
        self.layer_for(id).order(id)
    }

    fn before(&self, id: &CandidateId) -> Vec<CandidateId> {
        self.layer_for(id).before(id)
    }

    fn after(&self, id: &CandidateId) -> Vec<CandidateId> {
        self.layer_for(id).after(id)
    }

    fn deprecated_replacements(&self, id: &CandidateId) -> Vec<CandidateId> {
        self.layer_for(id).deprecated_replacements(id)
    }

    fn record(&self, id: &CandidateId) -> CandidateRecord {
        self.layer_for(id).record(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{CandidateIndex, LiveInspector};
    use crate::traits::Candidate;
    use std::sync::Arc;

    struct Live(&'static str, i32);

    impl Candidate for Live {
        fn id(&self) -> CandidateId {
            self.0.into()
        }

        fn order(&self) -> i32 {
            self.1
        }
    }

    fn layered() -> LayeredSource<CandidateIndex, LiveInspector> {
        let index = CandidateIndex::from_records([CandidateRecord::new("indexed").with_order(1)]);
        let inspector = LiveInspector::new()
            .with(Arc::new(Live("indexed", 99)))
            .with(Arc::new(Live("live", 7)));
        LayeredSource::new(index, inspector)
    }

    #[test]
    fn test_index_wins_when_it_has_an_entry() {
        assert_eq!(layered().order(&"indexed".into()), 1);
    }

    #[test]
    fn test_falls_back_to_inspector() {
        let source = layered();
        assert!(source.is_available(&"live".into()));
        assert_eq!(source.record(&"live".into()).order, 7);
    }

    #[test]
    fn test_unknown_everywhere_is_unavailable() {
        assert!(!layered().is_available(&"ghost".into()));
    }
}
