// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Deterministic activation ordering.
//!
//! The ordering is produced in four fixed steps. The step order is part of
//! the contract: reordering them yields different, equally "valid" but
//! unstable results.
//!
//! 1. **Lexicographic baseline**: primary ids sorted by byte order.
//! 2. **Priority**: stable sort ascending by order value. Ties keep the
//!    baseline order.
//! 3. **Constraint placement**: depth-first insertion. Each candidate is
//!    appended only after everything requested before it has been placed.
//!    Inherited ids are available as DFS targets so constraints that pass
//!    *through* them are still honored.
//! 4. **Projection**: the placement is filtered back down to primary ids.
//!
//! # Cycle Detection
//!
//! The DFS keeps the ids on its current path in `processing`. Meeting one of
//! them again means two candidates each require the other first, and the
//! ordering aborts with [`OrderingError::Cycle`] naming the id being placed
//! and the id it was waiting on.
//!
//! # Examples
//!
//! ```rust
//! use activation_order::config::candidate_id::ids;
//! use activation_order::ordering::{order_candidates, CandidateRecord};
//! use activation_order::sources::CandidateIndex;
//!
//! let index = CandidateIndex::from_records([
//!     CandidateRecord::new("a").with_after(["b"]),
//!     CandidateRecord::new("b").with_after(["c"]),
//!     CandidateRecord::new("c"),
//! ]);
//!
//! let ordered = order_candidates(&ids(["a", "b", "c"]), &index).unwrap();
//! assert_eq!(ordered, ids(["c", "b", "a"]));
//! ```

use indexmap::IndexSet;
use std::collections::{HashSet, VecDeque};

use crate::config::CandidateId;
use crate::errors::OrderingError;
use crate::observability::messages::sorter::{
    OrderingCompleted, OrderingCycleDetected, OrderingStarted,
};
use crate::observability::messages::StructuredLog;
use crate::ordering::graph::CandidateGraph;
use crate::ordering::record::CandidateSet;
use crate::traits::MetadataSource;

/// Order `names` using the constraints recorded in `graph`.
///
/// Deprecated names are replaced by their resolved replacements before
/// sorting, so the result is a permutation of the primary set: every
/// requested, non-deprecated id exactly once.
pub fn sort(names: &[CandidateId], graph: &CandidateGraph) -> Result<Vec<CandidateId>, OrderingError> {
    let mut primary = CandidateSet::with_capacity(names.len());
    for name in names {
        primary.extend(graph.resolve(name));
    }

    OrderingStarted {
        candidate_count: primary.len(),
        working_set_size: graph.working_set().count(),
    }
    .log();

    let mut ordered: Vec<CandidateId> = primary.iter().cloned().collect();
    ordered.sort();
    ordered.sort_by_key(|id| graph.order(id.as_str()));

    let placed = Placement::new(graph, ordered).run()?;

    let result: Vec<CandidateId> = placed
        .into_iter()
        .filter(|id| primary.contains(id))
        .collect();

    OrderingCompleted {
        first: result.first().map(CandidateId::as_str),
        last: result.last().map(CandidateId::as_str),
        candidate_count: result.len(),
    }
    .log();

    Ok(result)
}

/// Build a fresh graph for `ids` from `source` and sort it.
pub fn order_candidates<S>(ids: &[CandidateId], source: &S) -> Result<Vec<CandidateId>, OrderingError>
where
    S: MetadataSource + ?Sized,
{
    let graph = CandidateGraph::build(ids, source)?;
    sort(ids, &graph)
}

/// Stateless ordering service bound to one metadata source.
///
/// Holds no state besides the source, so one instance can serve any number
/// of orderings, concurrently if the source allows it.
///
/// # Example
/// ```
/// use activation_order::config::candidate_id::ids;
/// use activation_order::config::consts::{HIGHEST_PRECEDENCE, LOWEST_PRECEDENCE};
/// use activation_order::ordering::{CandidateRecord, Sorter};
/// use activation_order::sources::CandidateIndex;
///
/// let sorter = Sorter::new(CandidateIndex::from_records([
///     CandidateRecord::new("late").with_order(LOWEST_PRECEDENCE),
///     CandidateRecord::new("early").with_order(HIGHEST_PRECEDENCE),
/// ]));
///
/// let ordered = sorter.order(&ids(["late", "early", "plain"])).unwrap();
/// assert_eq!(ordered, ids(["early", "plain", "late"]));
/// ```
#[derive(Debug, Clone)]
pub struct Sorter<S> {
    source: S,
}

impl<S: MetadataSource> Sorter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Order `ids` against this sorter's metadata source
    pub fn order(&self, ids: &[CandidateId]) -> Result<Vec<CandidateId>, OrderingError> {
        order_candidates(ids, &self.source)
    }
}

/// Depth-first constraint placement over one graph.
struct Placement<'g> {
    graph: &'g CandidateGraph,
    to_sort: VecDeque<CandidateId>,
    pending: HashSet<CandidateId>,
    sorted: IndexSet<CandidateId>,
    processing: HashSet<CandidateId>,
}

impl<'g> Placement<'g> {
    fn new(graph: &'g CandidateGraph, ordered: Vec<CandidateId>) -> Self {
        let mut to_sort: VecDeque<CandidateId> = ordered.into();
        let mut pending: HashSet<CandidateId> = to_sort.iter().cloned().collect();
        for id in graph.working_set() {
            if pending.insert(id.clone()) {
                to_sort.push_back(id.clone());
            }
        }

        let capacity = pending.len();
        Self {
            graph,
            to_sort,
            pending,
            sorted: IndexSet::with_capacity(capacity),
            processing: HashSet::new(),
        }
    }

    fn run(mut self) -> Result<IndexSet<CandidateId>, OrderingError> {
        while let Some(current) = self.to_sort.pop_front() {
            self.pending.remove(&current);
            if self.sorted.contains(&current) {
                continue;
            }
            self.visit(&current)?;
        }
        Ok(self.sorted)
    }

    fn visit(&mut self, current: &CandidateId) -> Result<(), OrderingError> {
        let graph = self.graph;
        self.processing.insert(current.clone());

        for dep in graph.classes_requested_after(current.as_str()) {
            if self.processing.contains(dep) {
                OrderingCycleDetected {
                    current: current.as_str(),
                    requested_after: dep.as_str(),
                }
                .log();
                return Err(OrderingError::cycle(current.clone(), dep.clone()));
            }
            if !self.sorted.contains(dep) && self.pending.contains(dep) {
                self.visit(dep)?;
            }
        }

        self.processing.remove(current);
        self.sorted.insert(current.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::candidate_id::ids;
    use crate::ordering::CandidateRecord;
    use crate::sources::CandidateIndex;

    fn order(index: &CandidateIndex, names: &[&str]) -> Result<Vec<CandidateId>, OrderingError> {
        order_candidates(&ids(names.iter().copied()), index)
    }

    #[test]
    fn test_unconstrained_ids_sort_lexicographically() {
        let index = CandidateIndex::new();
        assert_eq!(order(&index, &["c", "a", "b"]).unwrap(), ids(["a", "b", "c"]));
    }

    #[test]
    fn test_equal_order_values_keep_lexicographic_order() {
        let index = CandidateIndex::from_records([
            CandidateRecord::new("b").with_order(5),
            CandidateRecord::new("a").with_order(5),
            CandidateRecord::new("c").with_order(-1),
        ]);
        assert_eq!(order(&index, &["a", "b", "c"]).unwrap(), ids(["c", "a", "b"]));
    }

    #[test]
    fn test_constraints_override_order_values() {
        let index = CandidateIndex::from_records([
            CandidateRecord::new("first").with_order(-10).with_after(["second"]),
            CandidateRecord::new("second").with_order(10),
        ]);
        assert_eq!(
            order(&index, &["first", "second"]).unwrap(),
            ids(["second", "first"])
        );
    }

    #[test]
    fn test_constraint_through_inherited_id_is_honored() {
        // a after hidden, hidden after b; hidden is never requested
        let index = CandidateIndex::from_records([
            CandidateRecord::new("a").with_after(["hidden"]),
            CandidateRecord::new("hidden").with_after(["b"]),
            CandidateRecord::new("b"),
        ]);
        assert_eq!(order(&index, &["a", "b"]).unwrap(), ids(["b", "a"]));
    }

    #[test]
    fn test_duplicate_names_are_emitted_once() {
        let index = CandidateIndex::new();
        assert_eq!(order(&index, &["a", "b", "a"]).unwrap(), ids(["a", "b"]));
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let index = CandidateIndex::from_records([CandidateRecord::new("x").with_before(["x"])]);
        assert_eq!(
            order(&index, &["x"]).unwrap_err(),
            OrderingError::cycle("x", "x")
        );
    }

    #[test]
    fn test_two_node_cycle_names_both_ids() {
        let index = CandidateIndex::from_records([
            CandidateRecord::new("a").with_after(["b"]),
            CandidateRecord::new("b").with_after(["a"]),
        ]);
        assert_eq!(
            order(&index, &["a", "b"]).unwrap_err(),
            OrderingError::cycle("b", "a")
        );
    }

    #[test]
    fn test_cycle_through_inherited_ids_is_detected() {
        let index = CandidateIndex::from_records([
            CandidateRecord::new("a").with_after(["m"]),
            CandidateRecord::new("m").with_after(["n"]),
            CandidateRecord::new("n").with_after(["a"]),
        ]);
        assert!(matches!(
            order(&index, &["a"]).unwrap_err(),
            OrderingError::Cycle { .. }
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(order(&CandidateIndex::new(), &[]).unwrap().is_empty());
    }
}
