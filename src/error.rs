// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Two kinds matter to the pipeline: a bad record (caught at index build) and
//! a bad query (caught before matching). Neither is transient, so nothing
//! retries. A query that matches nothing is not an error.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Field;

/// A record in the store violates the data model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record #{position} ({identifier:?}) is missing required field `{field}`")]
    MissingField {
        position: usize,
        identifier: String,
        field: Field,
    },

    #[error("record #{position} has an empty identifier")]
    EmptyIdentifier { position: usize },

    #[error("duplicate record identifier {identifier:?}")]
    DuplicateIdentifier { identifier: String },
}

/// A `QueryRequest` is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("invalid sort mode {0:?} (expected relevance, date or title)")]
    InvalidSortMode(String),

    #[error("category filter must not be empty (use \"all\" to disable it)")]
    EmptyCategory,

    #[error("tag filter contains an empty tag")]
    EmptyTag,

    #[error("result limit must be at least 1")]
    ZeroLimit,
}

/// Loading the site config into a record store failed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid site config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page #{position}: invalid publishedAt {value:?}")]
    InvalidDate { position: usize, value: String },

    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Reading a standalone search config file failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the CLI can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode results: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
