// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

use super::Page;
use crate::config::SearchConfig;

/// The parts of a zyros site config that search cares about.
///
/// Navigation, footer, forms and the rest are accepted and ignored.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default)]
    pub site: Option<SiteMeta>,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub search: Option<SearchConfig>,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SiteMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
