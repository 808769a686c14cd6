// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Interchangeable [`MetadataSource`](crate::traits::MetadataSource)
//! implementations.

mod index;
mod inspector;
mod layered;

pub use index::{CandidateIndex, IndexEntry};
pub use inspector::LiveInspector;
pub use layered::LayeredSource;
