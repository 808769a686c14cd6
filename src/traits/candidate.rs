use crate::config::consts::DEFAULT_ORDER;
use crate::config::CandidateId;

/// A live candidate that can describe its own ordering attributes.
///
/// This is what the [`LiveInspector`](crate::sources::LiveInspector) queries
/// when no precomputed index entry exists. Only `id` is required; every
/// other attribute defaults to "unconstrained".
pub trait Candidate: Send + Sync {
    fn id(&self) -> CandidateId;

    fn order(&self) -> i32 {
        DEFAULT_ORDER
    }

    fn before(&self) -> Vec<CandidateId> {
        Vec::new()
    }

    fn after(&self) -> Vec<CandidateId> {
        Vec::new()
    }

    fn replaced_by(&self) -> Vec<CandidateId> {
        Vec::new()
    }
}
