// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search settings that a site is allowed to change.
//!
//! Markers and defaults only. Field weights and the typo threshold are
//! constants (see `scoring` and `fuzzy::edit_budget`).
//!
//! Settings come from the `search` object of the site config, or from a
//! standalone JSON file passed with `--config`. CLI flags win over both.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::highlight::{DEFAULT_CLOSE, DEFAULT_OPEN};
use crate::types::SortMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightConfig {
    pub open: String,
    pub close: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN.to_string(),
            close: DEFAULT_CLOSE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    pub highlight: HighlightConfig,
    /// Default result limit when the caller doesn't give one.
    pub limit: Option<usize>,
    pub default_sort: SortMode,
}

impl SearchConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        debug!(path = %path.display(), "loaded search config");
        Ok(config)
    }
}
