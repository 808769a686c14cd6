// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for candidate ordering.
//!
//! Both variants are fatal: an ordering that cannot satisfy its constraints
//! has no partial result, and the caller is expected to abort bootstrap.

use thiserror::Error;

use crate::config::CandidateId;

/// Failure to produce an activation order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderingError {
    /// Two candidates require each other to come first.
    ///
    /// `a` is the candidate being placed, `b` the one it waits on that is
    /// already on the placement stack. A self-referencing edge reports the
    /// same id twice.
    #[error("Ordering cycle detected between '{a}' and '{b}'")]
    Cycle { a: CandidateId, b: CandidateId },

    /// Deprecated candidates redirect to each other in a loop.
    #[error("Deprecated replacement cycle detected: {}", format_chain(.chain))]
    ReplacementCycle { chain: Vec<CandidateId> },
}

impl OrderingError {
    pub fn cycle(a: impl Into<CandidateId>, b: impl Into<CandidateId>) -> Self {
        Self::Cycle {
            a: a.into(),
            b: b.into(),
        }
    }
}

fn format_chain(chain: &[CandidateId]) -> String {
    chain
        .iter()
        .map(CandidateId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::candidate_id::ids;

    #[test]
    fn test_cycle_message_names_both_ids() {
        let err = OrderingError::cycle("a", "b");
        assert_eq!(err.to_string(), "Ordering cycle detected between 'a' and 'b'");
    }

    #[test]
    fn test_replacement_cycle_message_shows_chain() {
        let err = OrderingError::ReplacementCycle {
            chain: ids(["d1", "d2", "d1"]),
        };
        assert_eq!(
            err.to_string(),
            "Deprecated replacement cycle detected: d1 -> d2 -> d1"
        );
    }
}
