// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit the same event with typed tracing fields at the
//! level the event calls for.
//!
//! # Usage Pattern
//!
//! ```rust
//! use activation_order::observability::messages::graph::GraphBuildCompleted;
//!
//! let msg = GraphBuildCompleted {
//!     primary_count: 3,
//!     inherited_count: 2,
//!     deprecated_count: 1,
//! };
//!
//! tracing::debug!("{}", msg);
//! ```

use tracing::Span;

pub mod graph;
pub mod index;
pub mod sorter;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the event at the message's log level
    fn log(&self);

    /// Create a span carrying the message's fields
    fn span(&self, name: &str) -> Span;
}
