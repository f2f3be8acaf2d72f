// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side search for zyros sites: weighted fuzzy matching, filters,
//! sorting and highlighting over the pages of a site config.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌───────────────┐    ┌──────────────┐
//! │  build/      │───▶│  index/      │───▶│  search/      │───▶│ highlight.rs │
//! │ (site JSON → │    │ (build_index,│    │ (match, score,│    │ (<mark>…)    │
//! │  records)    │    │  tokenize)   │    │ filter, sort) │    │              │
//! └──────────────┘    └──────────────┘    └───────────────┘    └──────────────┘
//!                                │                 │
//!                                ▼                 ▼
//!                     ┌──────────────────────────────────────┐
//!                     │ fuzzy/ (FuzzyMatcher, OSA distance)  │
//!                     │ scoring/ (field weights, sort order) │
//!                     └──────────────────────────────────────┘
//! ```
//!
//! `SearchSession` ties it together for interactive use: it owns the record
//! store, rebuilds the index when the store changes, and reports to an
//! injected `SearchObserver`.
//!
//! # Usage
//!
//! ```
//! use zyros::{build_index, highlight, search, QueryRequest, SearchableRecord};
//!
//! let records = vec![
//!     SearchableRecord::new("setup", "Widget Setup Guide", "Install the widget.").unwrap(),
//! ];
//! let index = build_index(&records).unwrap();
//! let result = search(&index, &QueryRequest::new("widget")).unwrap();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(
//!     highlight(&result.hits[0].record.title, "widget"),
//!     "<mark>Widget</mark> Setup Guide"
//! );
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod index;
pub mod observer;
pub mod scoring;
pub mod search;
pub mod session;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use build::{load_site, parse_site, LoadedSite};
pub use config::{HighlightConfig, SearchConfig};
pub use error::{ConfigError, Error, LoadError, QueryError, RecordError};
pub use fuzzy::{edit_budget, osa_distance_within, EditDistanceMatcher, FuzzyMatch, FuzzyMatcher};
pub use highlight::{highlight, highlight_spans, highlight_with};
pub use index::{build_index, SearchIndex};
pub use observer::{NoopObserver, RecordingObserver, SearchEvent, SearchObserver, TracingObserver};
pub use scoring::field_weight;
pub use search::{search, search_with, MIN_QUERY_CHARS};
pub use session::SearchSession;
pub use types::{
    CategoryFilter, Field, MatchedSpan, QueryRequest, QueryResult, RecordBuilder, SearchHit,
    SearchableRecord, SortMode,
};
pub use utils::{normalize, slugify, tokenize, Token};
