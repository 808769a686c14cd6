// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod load;
mod ordering;

pub use config::ValidationError;
pub use load::LoadError;
pub use ordering::OrderingError;
