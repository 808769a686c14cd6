// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur while validating index and run files
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The same candidate id was listed more than once
    DuplicateCandidateId {
        /// The duplicate candidate ID
        candidate_id: String,
    },
    /// A candidate id is empty or only whitespace
    BlankCandidateId {
        /// Where the blank id was found
        location: String,
    },
    /// A candidate names itself in its own before/after list
    SelfReference {
        /// The candidate referencing itself
        candidate_id: String,
        /// Which list the reference appears in
        relation: &'static str,
    },
    /// A deprecated candidate lists itself as its own replacement
    SelfReplacement {
        /// The deprecated candidate
        candidate_id: String,
    },
    /// A run file lists no candidates to order
    NoCandidates,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateCandidateId { candidate_id } => {
                write!(f, "Duplicate candidate ID: '{}'", candidate_id)
            }
            ValidationError::BlankCandidateId { location } => {
                write!(f, "Blank candidate ID in {}", location)
            }
            ValidationError::SelfReference {
                candidate_id,
                relation,
            } => {
                write!(
                    f,
                    "Candidate '{}' lists itself in '{}'",
                    candidate_id, relation
                )
            }
            ValidationError::SelfReplacement { candidate_id } => {
                write!(
                    f,
                    "Candidate '{}' is deprecated in favor of itself",
                    candidate_id
                )
            }
            ValidationError::NoCandidates => write!(f, "No candidates to order"),
        }
    }
}

impl std::error::Error for ValidationError {}
