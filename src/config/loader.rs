// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CandidateId;
use crate::errors::LoadError;
use crate::observability::messages::index::IndexLoaded;
use crate::observability::messages::StructuredLog;
use crate::sources::CandidateIndex;

/// An ordering run: which candidates to order and where their metadata lives.
///
/// # Fields
/// * `indexes` - Candidate index files, merged in order (later entries win).
///   Relative paths are resolved against the run file's directory.
/// * `candidates` - The ids to order
///
/// # Example
/// ```yaml
/// indexes:
///   - web-index.yaml
///   - overrides.json
/// candidates:
///   - com.example.WebConfig
///   - com.example.DataSourceConfig
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub indexes: Vec<PathBuf>,
    #[serde(default)]
    pub candidates: Vec<CandidateId>,
}

impl Config {
    /// Load and merge every index this run refers to.
    ///
    /// `base_dir` anchors relative index paths, normally the directory the
    /// run file was read from.
    pub fn load_indexes(&self, base_dir: &Path) -> Result<CandidateIndex, LoadError> {
        let mut merged = CandidateIndex::new();
        for path in &self.indexes {
            let path = if path.is_absolute() {
                path.clone()
            } else {
                base_dir.join(path)
            };
            let index = load_and_validate_index(&path)?;
            merged.merge(index, &path.display().to_string());
        }
        Ok(merged)
    }
}

/// Serialization format of an index file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormat {
    Yaml,
    Json,
    Toml,
}

impl IndexFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse an index document in this format
    pub fn parse(self, content: &str) -> Result<CandidateIndex, LoadError> {
        let index = match self {
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
        };
        Ok(index)
    }
}

/// Load a run file from YAML
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, LoadError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a run file
///
/// Rejects run files with no candidates, blank ids or duplicate ids.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, LoadError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(LoadError::Invalid)?;
    Ok(cfg)
}

/// Load a candidate index from a YAML, JSON or TOML file
pub fn load_index<P: AsRef<Path>>(path: P) -> Result<CandidateIndex, LoadError> {
    let path = path.as_ref();
    let format =
        IndexFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let content = fs::read_to_string(path)?;
    let index = format.parse(&content)?;

    IndexLoaded {
        path: &path.display().to_string(),
        entry_count: index.len(),
    }
    .log();

    Ok(index)
}

/// Load and validate a candidate index
///
/// Rejects blank ids, candidates that order themselves and candidates that
/// are deprecated in favor of themselves.
pub fn load_and_validate_index<P: AsRef<Path>>(path: P) -> Result<CandidateIndex, LoadError> {
    let index = load_index(path)?;
    crate::config::validate_index(&index).map_err(LoadError::Invalid)?;
    Ok(index)
}
