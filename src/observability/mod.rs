// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the ordering subsystem. Message types follow a
//! struct-based pattern with a `Display` implementation so log text lives in
//! one place instead of being scattered through the graph and sorter code.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::graph` - working set construction and deprecation redirects
//! * `messages::sorter` - ordering lifecycle and cycle failures
//! * `messages::index` - index and run file loading
//!
//! # Usage
//!
//! ```rust
//! use activation_order::observability::messages::StructuredLog;
//! use activation_order::observability::messages::sorter::OrderingCycleDetected;
//!
//! let msg = OrderingCycleDetected {
//!     current: "com.example.A",
//!     requested_after: "com.example.B",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
