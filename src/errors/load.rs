// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while reading index and run files from disk.

use std::path::PathBuf;
use thiserror::Error;

use crate::errors::ValidationError;

#[derive(Error, Debug)]
pub enum LoadError {
    /// File could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension does not name a supported format.
    #[error("Unsupported file format for '{}': expected .yaml, .yml, .json or .toml", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The file parsed but its contents are inconsistent.
    #[error("Validation failed:\n{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
