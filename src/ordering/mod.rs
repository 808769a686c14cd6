// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod graph;
mod record;
mod sorter;


pub use graph::CandidateGraph;
pub use record::{CandidateRecord, CandidateSet};
pub use sorter::{order_candidates, sort, Sorter};
