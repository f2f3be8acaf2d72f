// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One page of the site config, as authors write it.
//!
//! Pages are loosely shaped: `bodyText` or `content`, `identifier` or `slug`,
//! and `content` may be a plain string or a list of content blocks. This
//! module turns that into a validated `SearchableRecord`.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LoadError;
use crate::types::SearchableRecord;
use crate::utils::slugify;

/// Block keys that hold markup plumbing rather than readable text.
const NON_TEXT_BLOCK_KEYS: &[&str] = &[
    "type", "id", "href", "src", "image", "icon", "style", "className", "variant", "layout",
];

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body_text: Option<String>,
    #[serde(default)]
    pub content: Option<PageContent>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// `content` is either prose or a list of visual content blocks.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PageContent {
    Text(String),
    Blocks(Vec<Value>),
}

impl PageContent {
    /// Readable text, with blocks flattened in order.
    pub fn text(&self) -> String {
        match self {
            PageContent::Text(text) => text.clone(),
            PageContent::Blocks(blocks) => {
                let mut parts = Vec::new();
                for block in blocks {
                    collect_text(block, &mut parts);
                }
                parts.join(" ")
            }
        }
    }
}

fn collect_text(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) if !s.trim().is_empty() => out.push(s.trim().to_string()),
        Value::Array(items) => items.iter().for_each(|item| collect_text(item, out)),
        Value::Object(map) => {
            for (key, item) in map {
                if !NON_TEXT_BLOCK_KEYS.contains(&key.as_str()) {
                    collect_text(item, out);
                }
            }
        }
        _ => {}
    }
}

/// Parse `publishedAt`: RFC 3339 date-time, or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_published_at(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

impl Page {
    /// Identifier, falling back to slug, then to a slug of the title.
    pub fn resolved_identifier(&self) -> String {
        let present = |value: &Option<String>| value.clone().filter(|s| !s.trim().is_empty());
        present(&self.identifier)
            .or_else(|| present(&self.slug))
            .unwrap_or_else(|| slugify(self.title.as_deref().unwrap_or_default()))
    }

    /// Body text, preferring `bodyText` over `content`.
    pub fn resolved_body(&self) -> String {
        match (&self.body_text, &self.content) {
            (Some(body), _) if !body.trim().is_empty() => body.clone(),
            (_, Some(content)) => content.text(),
            (Some(body), None) => body.clone(),
            (None, None) => String::new(),
        }
    }

    /// Validate and convert. `position` is the page's index in `pages`.
    pub fn into_record(self, position: usize) -> Result<SearchableRecord, LoadError> {
        let published_at = match &self.published_at {
            Some(raw) => Some(parse_published_at(raw).ok_or_else(|| LoadError::InvalidDate {
                position,
                value: raw.clone(),
            })?),
            None => None,
        };

        let record = SearchableRecord {
            identifier: self.resolved_identifier(),
            body_text: self.resolved_body(),
            title: self.title.unwrap_or_default(),
            description: self.description.filter(|d| !d.trim().is_empty()),
            tags: self
                .tags
                .into_iter()
                .filter(|t| !t.trim().is_empty())
                .collect::<BTreeSet<_>>(),
            category: self.category.filter(|c| !c.trim().is_empty()),
            published_at,
        };
        record.validate(position)?;
        Ok(record)
    }
}
