// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // candidate ids, run files, index loading
pub mod errors;     // error handling
pub mod observability;
pub mod ordering;   // candidate graph + sorter
pub mod sources;    // metadata source implementations
pub mod traits;     // unified abstractions
