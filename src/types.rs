// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search: records, requests, and results.
//!
//! Records are validated when they're constructed, not when they're searched.
//! If you hold a `SearchableRecord` built through `SearchableRecord::new` or
//! `RecordBuilder`, its title and body text are non-blank. Records that come
//! in through serde skip that check, which is why the index builder runs
//! `validate()` again before trusting them.
//!
//! # Invariants
//!
//! - **SearchableRecord**: `!title.trim().is_empty() ∧ !body_text.trim().is_empty()`
//! - **Record Store**: identifiers are unique (duplicates are rejected, never overwritten)
//! - **QueryRequest**: no empty category, no empty tag, `limit != Some(0)`

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QueryError, RecordError};

// =============================================================================
// RECORDS
// =============================================================================

/// One unit of content eligible for search (usually a page of the site).
///
/// `category` is only used for exact-match filtering and `published_at` only
/// for date sorting. Neither contributes to relevance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableRecord {
    pub identifier: String,
    pub title: String,
    pub body_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl SearchableRecord {
    /// Create a record with only the required fields.
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Result<Self, RecordError> {
        RecordBuilder::new(identifier, title, body_text).build()
    }

    /// Start building a record with optional fields.
    pub fn builder(
        identifier: impl Into<String>,
        title: impl Into<String>,
        body_text: impl Into<String>,
    ) -> RecordBuilder {
        RecordBuilder::new(identifier, title, body_text)
    }

    /// Check the required-field invariant.
    ///
    /// `position` is the record's index in the store, used only to make the
    /// error point somewhere useful. A missing title or body is reported
    /// ahead of a blank identifier, since loaded pages derive their
    /// identifier from the title.
    pub fn validate(&self, position: usize) -> Result<(), RecordError> {
        for (field, value) in [(Field::Title, &self.title), (Field::Body, &self.body_text)] {
            if value.trim().is_empty() {
                return Err(RecordError::MissingField {
                    position,
                    identifier: self.identifier.clone(),
                    field,
                });
            }
        }
        if self.identifier.trim().is_empty() {
            return Err(RecordError::EmptyIdentifier { position });
        }
        Ok(())
    }

    /// Does this record carry every tag in `required`?
    pub fn has_all_tags(&self, required: &BTreeSet<String>) -> bool {
        required.is_subset(&self.tags)
    }
}

/// Builder for records with optional fields. `build()` validates.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: SearchableRecord,
}

impl RecordBuilder {
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Self {
        Self {
            record: SearchableRecord {
                identifier: identifier.into(),
                title: title.into(),
                body_text: body_text.into(),
                description: None,
                tags: BTreeSet::new(),
                category: None,
                published_at: None,
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.record.category = Some(category.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.record.tags.insert(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.record.published_at = Some(published_at);
        self
    }

    pub fn build(self) -> Result<SearchableRecord, RecordError> {
        self.record.validate(0)?;
        Ok(self.record)
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// The scored fields of a record.
///
/// Weights live in `scoring::field_weight`. The derived `Ord` follows weight
/// order (Title first), which is also the order fields are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    #[serde(rename = "bodyText")]
    Body,
    Tags,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Description, Field::Body, Field::Tags];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Body => "bodyText",
            Field::Tags => "tags",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// How the final result list is ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Descending relevance score, ties in store order.
    #[default]
    Relevance,
    /// Newest `published_at` first, undated records last.
    Date,
    /// Ascending by title.
    Title,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::Date => "date",
            SortMode::Title => "title",
        }
    }
}

impl FromStr for SortMode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortMode::Relevance),
            "date" => Ok(SortMode::Date),
            "title" => Ok(SortMode::Title),
            other => Err(QueryError::InvalidSortMode(other.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category filter: everything, or one exact (case-sensitive) category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Exactly(String),
}

impl CategoryFilter {
    /// The sentinel that means "no category filter".
    pub const ALL_SENTINEL: &'static str = "all";

    /// Parse a raw filter value. `"all"` is the sentinel; anything else is an
    /// exact category. Blank values are rejected.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        if raw.trim().is_empty() {
            return Err(QueryError::EmptyCategory);
        }
        if raw == Self::ALL_SENTINEL {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Exactly(raw.to_string()))
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exactly(wanted) => category == Some(wanted.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

/// Everything the pipeline needs for one search. Built fresh per keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRequest {
    pub query: String,
    pub category: CategoryFilter,
    /// Required tags, AND semantics.
    pub tags: BTreeSet<String>,
    pub sort: SortMode,
    /// Truncate after sorting. `None` keeps every hit.
    pub limit: Option<usize>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Build a request from raw, presentation-layer strings.
    ///
    /// This is where malformed sort modes and filter values are caught,
    /// before any matching work happens.
    pub fn from_raw<I, S>(
        query: &str,
        category: Option<&str>,
        tags: I,
        sort: Option<&str>,
    ) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let category = match category {
            Some(raw) => CategoryFilter::parse(raw)?,
            None => CategoryFilter::All,
        };
        let sort = match sort {
            Some(raw) => raw.parse()?,
            None => SortMode::default(),
        };
        let request = Self {
            query: query.to_string(),
            category,
            tags: tags.into_iter().map(|t| t.as_ref().to_string()).collect(),
            sort,
            limit: None,
        };
        request.validate()?;
        Ok(request)
    }

    /// Restrict to one category. The `"all"` sentinel clears the filter.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category == CategoryFilter::ALL_SENTINEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Exactly(category)
        };
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Reject states a well-formed request can't be in.
    pub fn validate(&self) -> Result<(), QueryError> {
        if let CategoryFilter::Exactly(category) = &self.category {
            if category.trim().is_empty() {
                return Err(QueryError::EmptyCategory);
            }
        }
        if self.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(QueryError::EmptyTag);
        }
        if self.limit == Some(0) {
            return Err(QueryError::ZeroLimit);
        }
        Ok(())
    }

    /// True when the filter step can't exclude anything.
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_all() && self.tags.is_empty()
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A matched token inside one of the record's text fields.
///
/// `range` is a byte range into the original (un-normalized) field text, so
/// `&record.title[span.range.clone()]` is always valid for `Field::Title`.
/// Tag matches carry the tag's own text range and the tag itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedSpan {
    pub field: Field,
    pub range: Range<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// One entry of a `QueryResult`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub record: SearchableRecord,
    pub score: f64,
    pub matched_spans: Vec<MatchedSpan>,
}

/// Ordered hits for one query. Never cached across queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryResult {
    pub hits: Vec<SearchHit>,
}

impl QueryResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchHit> {
        self.hits.iter()
    }

    pub fn identifiers(&self) -> Vec<&str> {
        self.hits.iter().map(|h| h.record.identifier.as_str()).collect()
    }
}

impl IntoIterator for QueryResult {
    type Item = SearchHit;
    type IntoIter = std::vec::IntoIter<SearchHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a SearchHit;
    type IntoIter = std::slice::Iter<'a, SearchHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}
