// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::consts::DEFAULT_ORDER;
use crate::config::CandidateId;
use crate::ordering::CandidateRecord;

/// Answers attribute queries about candidates.
///
/// Implementations may read a precomputed index or inspect candidates live;
/// the ordering code only ever talks to this trait. Lookups never fail: an id
/// the source knows nothing about reports `is_available() == false` and
/// default attributes.
///
/// Implementations must be safe for concurrent reads so a single source can
/// back several sorts at once.
pub trait MetadataSource: Send + Sync {
    /// Whether `id` could be resolved at all
    fn is_available(&self, id: &CandidateId) -> bool;

    /// Numeric priority; lower values sort earlier
    fn order(&self, _id: &CandidateId) -> i32 {
        DEFAULT_ORDER
    }

    /// Ids that must come after `id`
    fn before(&self, id: &CandidateId) -> Vec<CandidateId>;

    /// Ids that must come before `id`
    fn after(&self, id: &CandidateId) -> Vec<CandidateId>;

    /// Replacement ids when `id` is deprecated, empty otherwise
    fn deprecated_replacements(&self, id: &CandidateId) -> Vec<CandidateId>;

    /// Assemble the full record for `id`.
    ///
    /// Unavailable ids get a default record. Deprecation is reported even for
    /// unavailable ids so a retired name that no longer resolves still
    /// redirects to its successor.
    fn record(&self, id: &CandidateId) -> CandidateRecord {
        let replacements = self.deprecated_replacements(id);
        if !self.is_available(id) {
            return CandidateRecord::unavailable(id.clone()).with_replacements(replacements);
        }

        CandidateRecord::new(id.clone())
            .with_order(self.order(id))
            .with_before(self.before(id))
            .with_after(self.after(id))
            .with_replacements(replacements)
    }
}

impl<S: MetadataSource + ?Sized> MetadataSource for &S {
    fn is_available(&self, id: &CandidateId) -> bool {
        (**self).is_available(id)
    }

    fn order(&self, id: &CandidateId) -> i32 {
        (**self).order(id)
    }

    fn before(&self, id: &CandidateId) -> Vec<CandidateId> {
        (**self).before(id)
    }

    fn after(&self, id: &CandidateId) -> Vec<CandidateId> {
        (**self).after(id)
    }

    fn deprecated_replacements(&self, id: &CandidateId) -> Vec<CandidateId> {
        (**self).deprecated_replacements(id)
    }

    fn record(&self, id: &CandidateId) -> CandidateRecord {
        (**self).record(id)
    }
}

impl<S: MetadataSource + ?Sized> MetadataSource for Arc<S> {
    fn is_available(&self, id: &CandidateId) -> bool {
        (**self).is_available(id)
    }

    fn order(&self, id: &CandidateId) -> i32 {
        (**self).order(id)
    }

    fn before(&self, id: &CandidateId) -> Vec<CandidateId> {
        (**self).before(id)
    }

    fn after(&self, id: &CandidateId) -> Vec<CandidateId> {
        (**self).after(id)
    }

    fn deprecated_replacements(&self, id: &CandidateId) -> Vec<CandidateId> {
        (**self).deprecated_replacements(id)
    }

    fn record(&self, id: &CandidateId) -> CandidateRecord {
        (**self).record(id)
    }
}
