// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading the record store from a zyros site config.
//!
//! Read the JSON, convert each page, reject duplicates. The first bad page
//! stops the load: a half-loaded store would silently hide pages from search.

pub mod document;
pub mod site;

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

pub use document::*;
pub use site::*;

use crate::config::SearchConfig;
use crate::error::LoadError;
use crate::index::validate_records;
use crate::types::SearchableRecord;

/// Records plus whatever search settings the site carried.
#[derive(Debug, Clone, Default)]
pub struct LoadedSite {
    pub title: Option<String>,
    pub records: Vec<SearchableRecord>,
    pub config: SearchConfig,
}

/// Convert pages to records, in order.
pub fn records_from_pages(pages: Vec<Page>) -> Result<Vec<SearchableRecord>, LoadError> {
    let records = pages
        .into_iter()
        .enumerate()
        .map(|(position, page)| page.into_record(position))
        .collect::<Result<Vec<_>, _>>()?;
    validate_records(&records)?;
    Ok(records)
}

/// Parse a site config from a JSON string.
pub fn parse_site(json: &str) -> Result<LoadedSite, LoadError> {
    let site: SiteConfig = serde_json::from_str(json)?;
    if site.pages.is_empty() {
        warn!("site config has no pages; search will always be empty");
    }

    let title = site.site.and_then(|meta| meta.title);
    let config = site.search.unwrap_or_default();
    let records = records_from_pages(site.pages)?;
    debug!(records = records.len(), "loaded site records");

    Ok(LoadedSite {
        title,
        records,
        config,
    })
}

/// Read and parse a site config file.
pub fn load_site(path: &Path) -> Result<LoadedSite, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_site(&content)
}
