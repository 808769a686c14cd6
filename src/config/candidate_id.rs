// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A type-safe wrapper for candidate identifiers.
///
/// A candidate id is an opaque, globally unique token naming one unit of
/// optional configuration. Ids compare by byte order, which is the order used
/// for the lexicographic baseline when sorting.
///
/// # Examples
///
/// ```
/// use activation_order::config::CandidateId;
///
/// let web = CandidateId::from("com.example.WebConfig");
/// let data = CandidateId::new("com.example.DataConfig");
///
/// assert!(data < web);
/// assert_eq!(web.as_str(), "com.example.WebConfig");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl CandidateId {
    /// Create a new candidate id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CandidateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CandidateId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CandidateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<CandidateId> for String {
    fn from(id: CandidateId) -> Self {
        id.0
    }
}

/// Convert a list of string slices into candidate ids.
pub fn ids<I, S>(values: I) -> Vec<CandidateId>
where
    I: IntoIterator<Item = S>,
    S: Into<CandidateId>,
{
    values.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_byte_order() {
        let mut values = ids(["b", "B", "a", "_", "aa"]);
        values.sort();
        assert_eq!(values, ids(["B", "_", "a", "aa", "b"]));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id: CandidateId = serde_yaml::from_str("com.example.Web").unwrap();
        assert_eq!(id, CandidateId::from("com.example.Web"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"com.example.Web\"");
    }
}
