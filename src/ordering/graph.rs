// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Working set construction for candidate ordering.
//!
//! A [`CandidateGraph`] is an id-keyed store of [`CandidateRecord`]s built from
//! the caller's candidate list. Construction walks every before/after edge so
//! candidates that are only *referenced* still take part in ordering, and it
//! redirects deprecated candidates to their replacements so retired ids never
//! surface in edges or output.
//!
//! # Partitions
//!
//! - **primary**: ids the caller asked for (deprecated ones substituted by their
//!   replacements). Only these are ever emitted.
//! - **inherited**: ids pulled in because a record names them in `before` or
//!   `after`. They steer the placement but are never emitted.
//! - **deprecated**: retired ids, held aside and only consulted to resolve
//!   edges.
//!
//! # Edge resolution
//!
//! Once the walk completes, every raw edge set is rewritten through the
//! deprecated index (recursively, memoized per id). The reverse relation is
//! then folded in, so [`CandidateGraph::classes_requested_after`] answers
//! "who must precede this candidate" regardless of which side declared the
//! constraint.
//!
//! # Examples
//!
//! ```rust
//! use activation_order::config::candidate_id::ids;
//! use activation_order::ordering::{CandidateGraph, CandidateRecord};
//! use activation_order::sources::CandidateIndex;
//!
//! let index = CandidateIndex::from_records([
//!     CandidateRecord::new("web").with_after(["data"]),
//!     CandidateRecord::new("data"),
//! ]);
//!
//! let graph = CandidateGraph::build(&ids(["web"]), &index).unwrap();
//!
//! // "data" was pulled in by the edge but is not primary
//! assert!(graph.is_primary("web"));
//! assert!(graph.contains("data"));
//! assert!(!graph.is_primary("data"));
//! assert!(graph.classes_requested_after("web").contains("data"));
//! ```

use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

use crate::config::consts::DEFAULT_ORDER;
use crate::config::CandidateId;
use crate::errors::OrderingError;
use crate::observability::messages::graph::{
    CandidateUnavailable, DeprecatedCandidateRedirected, GraphBuildCompleted, GraphBuildStarted,
    ReplacementCycleDetected,
};
use crate::observability::messages::StructuredLog;
use crate::ordering::record::{CandidateRecord, CandidateSet};
use crate::traits::MetadataSource;

/// Immutable working set for one ordering run.
#[derive(Debug, Clone)]
pub struct CandidateGraph {
    classes: IndexMap<CandidateId, CandidateRecord>,
    deprecated: IndexMap<CandidateId, CandidateRecord>,
    names: CandidateSet,
    replacements: HashMap<CandidateId, CandidateSet>,
    before: HashMap<CandidateId, CandidateSet>,
    after: HashMap<CandidateId, CandidateSet>,
    requested_after: HashMap<CandidateId, CandidateSet>,
    empty: CandidateSet,
}

impl CandidateGraph {
    /// Build the working set for `initial_ids`.
    ///
    /// Unresolvable ids never fail the build; they are recorded with default
    /// attributes. The only failure is a loop of deprecated candidates
    /// redirecting to one another.
    pub fn build<S>(initial_ids: &[CandidateId], source: &S) -> Result<Self, OrderingError>
    where
        S: MetadataSource + ?Sized,
    {
        GraphBuildStarted {
            initial_count: initial_ids.len(),
        }
        .log();

        let mut walker = Walker {
            source,
            classes: IndexMap::new(),
            deprecated: IndexMap::new(),
            names: CandidateSet::new(),
            visited: HashSet::new(),
            promoted: HashSet::new(),
        };
        for id in initial_ids {
            walker.visit(id, true);
        }

        let Walker {
            classes,
            deprecated,
            names,
            ..
        } = walker;

        let mut graph = Self {
            classes,
            deprecated,
            names,
            replacements: HashMap::new(),
            before: HashMap::new(),
            after: HashMap::new(),
            requested_after: HashMap::new(),
            empty: CandidateSet::new(),
        };
        graph.resolve_replacements()?;
        graph.resolve_edges();

        GraphBuildCompleted {
            primary_count: graph.names.len(),
            inherited_count: graph.inherited().count(),
            deprecated_count: graph.deprecated.len(),
        }
        .log();

        Ok(graph)
    }

    /// Primary ids, in the order they were first reached
    pub fn primary(&self) -> &CandidateSet {
        &self.names
    }

    pub fn is_primary(&self, id: &str) -> bool {
        self.names.contains(id)
    }

    /// Ids that take part in ordering but are never emitted
    pub fn inherited(&self) -> impl Iterator<Item = &CandidateId> {
        self.classes.keys().filter(|id| !self.names.contains(*id))
    }

    /// Every non-deprecated id in the graph, in insertion order
    pub fn working_set(&self) -> impl Iterator<Item = &CandidateId> {
        self.classes.keys()
    }

    /// Whether `id` is in the working set (primary or inherited)
    pub fn contains(&self, id: &str) -> bool {
        self.classes.contains_key(id)
    }

    pub fn is_deprecated(&self, id: &str) -> bool {
        self.deprecated.contains_key(id)
    }

    pub fn record(&self, id: &str) -> Option<&CandidateRecord> {
        self.classes.get(id)
    }

    /// Order value of `id`, [`DEFAULT_ORDER`] for ids outside the graph
    pub fn order(&self, id: &str) -> i32 {
        self.classes
            .get(id)
            .map(|record| record.order)
            .unwrap_or(DEFAULT_ORDER)
    }

    /// Ids that must come after `id`, deprecated members redirected
    pub fn before(&self, id: &str) -> &CandidateSet {
        self.before.get(id).unwrap_or(&self.empty)
    }

    /// Ids that must come before `id`, deprecated members redirected
    pub fn after(&self, id: &str) -> &CandidateSet {
        self.after.get(id).unwrap_or(&self.empty)
    }

    /// Every id that must be placed before `id`.
    ///
    /// Union of `after(id)` with every candidate whose resolved `before` set
    /// names `id`. Deprecated records that declare `before id` contribute
    /// their replacements.
    pub fn classes_requested_after(&self, id: &str) -> &CandidateSet {
        self.requested_after.get(id).unwrap_or(&self.empty)
    }

    /// The ids `id` stands for once deprecation is applied.
    ///
    /// A non-deprecated id resolves to itself.
    pub fn resolve(&self, id: &CandidateId) -> Vec<CandidateId> {
        match self.replacements.get(id.as_str()) {
            Some(replacements) => replacements.iter().cloned().collect(),
            None => vec![id.clone()],
        }
    }

    fn resolve_replacements(&mut self) -> Result<(), OrderingError> {
        let mut memo: HashMap<CandidateId, CandidateSet> = HashMap::new();
        for id in self.deprecated.keys() {
            let mut stack = Vec::new();
            resolve_deprecated(id, &self.deprecated, &mut memo, &mut stack)?;
        }
        self.replacements = memo;
        Ok(())
    }

    fn resolve_edges(&mut self) {
        let mut before = HashMap::with_capacity(self.classes.len());
        let mut after = HashMap::with_capacity(self.classes.len());
        for (id, record) in &self.classes {
            before.insert(id.clone(), self.redirect(&record.before));
            after.insert(id.clone(), self.redirect(&record.after));
        }

        let mut requested_after: HashMap<CandidateId, CandidateSet> = after.clone();
        for id in self.classes.keys() {
            for target in &before[id] {
                requested_after
                    .entry(target.clone())
                    .or_default()
                    .insert(id.clone());
            }
        }
        for (id, record) in &self.deprecated {
            let successors = &self.replacements[id];
            for target in self.redirect(&record.before) {
                requested_after
                    .entry(target)
                    .or_default()
                    .extend(successors.iter().cloned());
            }
        }

        self.before = before;
        self.after = after;
        self.requested_after = requested_after;
    }

    fn redirect(&self, ids: &CandidateSet) -> CandidateSet {
        let mut resolved = CandidateSet::with_capacity(ids.len());
        for id in ids {
            match self.replacements.get(id) {
                Some(replacements) => resolved.extend(replacements.iter().cloned()),
                None => {
                    resolved.insert(id.clone());
                }
            }
        }
        resolved
    }
}

/// Resolve a deprecated id to its final, non-deprecated replacements.
///
/// `stack` holds the chain currently being resolved; meeting one of its
/// members again is a replacement cycle.
fn resolve_deprecated(
    id: &CandidateId,
    deprecated: &IndexMap<CandidateId, CandidateRecord>,
    memo: &mut HashMap<CandidateId, CandidateSet>,
    stack: &mut Vec<CandidateId>,
) -> Result<CandidateSet, OrderingError> {
    if let Some(resolved) = memo.get(id) {
        return Ok(resolved.clone());
    }
    if let Some(start) = stack.iter().position(|entry| entry == id) {
        let mut chain = stack[start..].to_vec();
        chain.push(id.clone());
        ReplacementCycleDetected { chain: &chain }.log();
        return Err(OrderingError::ReplacementCycle { chain });
    }

    let Some(record) = deprecated.get(id) else {
        return Ok(CandidateSet::from_iter([id.clone()]));
    };

    stack.push(id.clone());
    let mut resolved = CandidateSet::new();
    for replacement in &record.replacements {
        resolved.extend(resolve_deprecated(replacement, deprecated, memo, stack)?);
    }
    stack.pop();

    memo.insert(id.clone(), resolved.clone());
    Ok(resolved)
}

/// Depth-first walk that fills the working set.
struct Walker<'s, S: ?Sized> {
    source: &'s S,
    classes: IndexMap<CandidateId, CandidateRecord>,
    deprecated: IndexMap<CandidateId, CandidateRecord>,
    names: CandidateSet,
    visited: HashSet<CandidateId>,
    promoted: HashSet<CandidateId>,
}

impl<S: MetadataSource + ?Sized> Walker<'_, S> {
    fn visit(&mut self, id: &CandidateId, primary: bool) {
        if primary && !self.promoted.insert(id.clone()) {
            return;
        }
        if !self.visited.insert(id.clone()) {
            // Already reached through an edge; a caller-supplied id still
            // becomes primary.
            if primary {
                self.promote(id);
            }
            return;
        }

        let record = self.source.record(id);

        if record.is_deprecated() {
            let replacements: Vec<CandidateId> = record.replacements.iter().cloned().collect();
            DeprecatedCandidateRedirected {
                candidate_id: id.as_str(),
                replacements: &replacements,
            }
            .log();
            self.deprecated.insert(id.clone(), record);
            for replacement in &replacements {
                self.visit(replacement, primary);
            }
            return;
        }

        if primary {
            self.names.insert(id.clone());
        }

        if !record.available {
            CandidateUnavailable {
                candidate_id: id.as_str(),
                primary,
            }
            .log();
            self.classes.insert(id.clone(), record);
            return;
        }

        let edges: Vec<CandidateId> = record
            .before
            .iter()
            .chain(record.after.iter())
            .cloned()
            .collect();
        self.classes.insert(id.clone(), record);
        for edge in &edges {
            self.visit(edge, false);
        }
    }

    fn promote(&mut self, id: &CandidateId) {
        if self.classes.contains_key(id) {
            self.names.insert(id.clone());
            return;
        }
        let replacements: Vec<CandidateId> = match self.deprecated.get(id) {
            Some(record) => record.replacements.iter().cloned().collect(),
            None => return,
        };
        for replacement in &replacements {
            self.visit(replacement, true);
        }
    }
}
