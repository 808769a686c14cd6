//! Validation for run files and candidate indexes.
//!
//! Validation catches mistakes that would otherwise surface later as a
//! confusing ordering failure: an index entry that orders itself is a
//! guaranteed cycle, and a blank id can never match a real candidate.
//!
//! Like the rest of the loading path, validation accumulates every problem
//! it finds so a broken file can be fixed in one pass.
//!
//! # Example
//!
//! ```rust
//! use activation_order::config::{validate_index, CandidateId};
//! use activation_order::errors::ValidationError;
//! use activation_order::ordering::CandidateRecord;
//! use activation_order::sources::CandidateIndex;
//!
//! let index = CandidateIndex::from_records([
//!     CandidateRecord::new("web").with_before(["web"]),
//! ]);
//!
//! let errors = validate_index(&index).unwrap_err();
//! assert_eq!(
//!     errors,
//!     vec![ValidationError::SelfReference {
//!         candidate_id: "web".to_string(),
//!         relation: "before",
//!     }]
//! );
//! ```

use std::collections::HashSet;

use crate::config::{CandidateId, Config};
use crate::errors::ValidationError;
use crate::sources::CandidateIndex;

/// Validates a run file.
///
/// 1. **At least one candidate** - an empty run is almost certainly a typo
/// 2. **No blank ids**
/// 3. **No duplicate ids** - each candidate appears once in the output, so a
///    duplicate in the input is reported rather than silently collapsed
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.candidates.is_empty() {
        errors.push(ValidationError::NoCandidates);
    }

    let mut seen_ids = HashSet::new();
    for (position, id) in config.candidates.iter().enumerate() {
        if is_blank(id) {
            errors.push(ValidationError::BlankCandidateId {
                location: format!("candidates[{}]", position),
            });
            continue;
        }
        if !seen_ids.insert(id) {
            errors.push(ValidationError::DuplicateCandidateId {
                candidate_id: id.to_string(),
            });
        }
    }

    into_result(errors)
}

/// Validates a candidate index.
///
/// Every entry is checked for blank ids (as a key or inside a list), for
/// naming itself in `before` or `after`, and for listing itself in
/// `replaced_by`. Longer replacement loops are only detectable once several
/// indexes are merged, so they are left to graph construction.
pub fn validate_index(index: &CandidateIndex) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (id, entry) in &index.candidates {
        if is_blank(id) {
            errors.push(ValidationError::BlankCandidateId {
                location: "index keys".to_string(),
            });
            continue;
        }

        let relations: [(&'static str, &Vec<CandidateId>); 3] = [
            ("before", &entry.before),
            ("after", &entry.after),
            ("replaced_by", &entry.replaced_by),
        ];
        for (relation, targets) in relations {
            if targets.iter().any(is_blank) {
                errors.push(ValidationError::BlankCandidateId {
                    location: format!("'{}' {}", id, relation),
                });
            }
            if !targets.contains(id) {
                continue;
            }
            if relation == "replaced_by" {
                errors.push(ValidationError::SelfReplacement {
                    candidate_id: id.to_string(),
                });
            } else {
                errors.push(ValidationError::SelfReference {
                    candidate_id: id.to_string(),
                    relation,
                });
            }
        }
    }

    into_result(errors)
}

fn is_blank(id: &CandidateId) -> bool {
    id.as_str().trim().is_empty()
}

fn into_result(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::candidate_id::ids;
    use crate::ordering::CandidateRecord;

    fn run(candidates: &[&str]) -> Config {
        Config {
            indexes: vec![],
            candidates: ids(candidates.iter().copied()),
        }
    }

    #[test]
    fn test_valid_run() {
        assert!(validate_config(&run(&["a", "b"])).is_ok());
    }

    #[test]
    fn test_empty_run() {
        assert_eq!(
            validate_config(&run(&[])).unwrap_err(),
            vec![ValidationError::NoCandidates]
        );
    }

    #[test]
    fn test_duplicate_candidate_ids() {
        let errors = validate_config(&run(&["a", "b", "a"])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            ValidationError::DuplicateCandidateId { .. }
        ));
    }

    #[test]
    fn test_blank_candidate_id() {
        let errors = validate_config(&run(&["a", "  "])).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::BlankCandidateId {
                location: "candidates[1]".to_string()
            }]
        );
    }

    #[test]
    fn test_valid_index() {
        let index = CandidateIndex::from_records([
            CandidateRecord::new("a").with_after(["b"]),
            CandidateRecord::new("old").with_replacements(["a"]),
        ]);
        assert!(validate_index(&index).is_ok());
    }

    #[test]
    fn test_multiple_index_errors() {
        let index = CandidateIndex::from_records([
            CandidateRecord::new("a").with_before(["a"]).with_after([""]),
            CandidateRecord::new("d").with_replacements(["d"]),
        ]);

        let errors = validate_index(&index).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::SelfReplacement {
            candidate_id: "d".to_string()
        }));
    }
}
