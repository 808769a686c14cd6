// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod validation;

#[cfg(test)]
mod integration_tests;
pub mod candidate_id;
pub mod consts;

pub use candidate_id::CandidateId;
pub use loader::{
    load_and_validate_config, load_and_validate_index, load_config, load_index, Config, IndexFormat,
};
pub use validation::{validate_config, validate_index};
