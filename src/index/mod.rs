// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: tokenize every scored field of every record, once.
//!
//! The index is a snapshot. It owns a copy of the records it was built from
//! and is never patched afterwards; when the store changes, the old index
//! is dropped and a new one is built. That makes it trivially `Send + Sync`
//! and lets concurrent readers share it behind an `Arc` without locking.
//!
//! Building is pure: the same records in the same order give an equal index.

use std::collections::HashSet;

use crate::error::RecordError;
use crate::types::{Field, SearchableRecord};
use crate::utils::{tokenize, Token};

/// A token that came from one of a record's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
    pub tag: String,
    pub token: Token,
}

/// Tokenized fields of one record, in store order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRecord {
    pub title: Vec<Token>,
    pub description: Vec<Token>,
    pub body: Vec<Token>,
    pub tags: Vec<TagToken>,
}

impl IndexedRecord {
    fn from_record(record: &SearchableRecord) -> Self {
        let tags = record
            .tags
            .iter()
            .flat_map(|tag| {
                tokenize(tag).into_iter().map(move |token| TagToken {
                    tag: tag.clone(),
                    token,
                })
            })
            .collect();

        Self {
            title: tokenize(&record.title),
            description: record.description.as_deref().map(tokenize).unwrap_or_default(),
            body: tokenize(&record.body_text),
            tags,
        }
    }

    /// Tokens of a text field. Tags have their own accessor.
    pub fn text_tokens(&self, field: Field) -> &[Token] {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Body => &self.body,
            Field::Tags => &[],
        }
    }

    pub fn token_count(&self) -> usize {
        self.title.len() + self.description.len() + self.body.len() + self.tags.len()
    }
}

/// Weighted multi-field index over a snapshot of the record store.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchIndex {
    records: Vec<SearchableRecord>,
    entries: Vec<IndexedRecord>,
}

impl SearchIndex {
    /// An index over nothing. Every query against it is empty.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SearchableRecord] {
        &self.records
    }

    /// Records paired with their tokenized fields, in store order.
    pub fn entries(&self) -> impl Iterator<Item = (&SearchableRecord, &IndexedRecord)> {
        self.records.iter().zip(self.entries.iter())
    }

    pub fn token_count(&self) -> usize {
        self.entries.iter().map(IndexedRecord::token_count).sum()
    }
}

/// Check every record's required fields and identifier uniqueness.
pub fn validate_records(records: &[SearchableRecord]) -> Result<(), RecordError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        record.validate(position)?;
        if !seen.insert(record.identifier.as_str()) {
            return Err(RecordError::DuplicateIdentifier {
                identifier: record.identifier.clone(),
            });
        }
    }
    Ok(())
}

/// Build an index from an ordered snapshot of records.
///
/// Fails on the first record that is missing a required field, and on
/// duplicate identifiers (the store policy is to reject, so a duplicate here
/// means something bypassed the store).
pub fn build_index(records: &[SearchableRecord]) -> Result<SearchIndex, RecordError> {
    validate_records(records)?;

    Ok(SearchIndex {
        records: records.to_vec(),
        entries: records.iter().map(IndexedRecord::from_record).collect(),
    })
}
