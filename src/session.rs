// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record store and its lazily rebuilt index.
//!
//! `SearchSession` is what a presentation layer holds for the lifetime of a
//! page view. Mutations go through it so it knows when the index is stale:
//! any change drops the index, and the next `search` builds a fresh one from
//! the current snapshot. The index is never edited in place.
//!
//! Debouncing keystrokes is the caller's job. Calling `search` twice in a row
//! just runs two queries.

use std::sync::Arc;
use std::time::Instant;

use crate::error::{Error, RecordError};
use crate::index::{build_index, validate_records, SearchIndex};
use crate::observer::{SearchEvent, SearchObserver, TracingObserver};
use crate::search::search;
use crate::types::{QueryRequest, QueryResult, SearchableRecord};

pub struct SearchSession {
    records: Vec<SearchableRecord>,
    index: Option<Arc<SearchIndex>>,
    observer: Box<dyn SearchObserver>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("records", &self.records.len())
            .field("indexed", &self.index.is_some())
            .finish()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::with_observer(TracingObserver)
    }

    pub fn with_observer(observer: impl SearchObserver + 'static) -> Self {
        Self {
            records: Vec::new(),
            index: None,
            observer: Box::new(observer),
        }
    }

    /// Create a session pre-loaded with records. Duplicates are rejected.
    pub fn from_records(records: Vec<SearchableRecord>) -> Result<Self, RecordError> {
        let mut session = Self::new();
        session.extend(records)?;
        Ok(session)
    }

    pub fn records(&self) -> &[SearchableRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, identifier: &str) -> Option<&SearchableRecord> {
        self.records.iter().find(|r| r.identifier == identifier)
    }

    /// Append a record. Fails, leaving the store untouched, on a duplicate
    /// identifier or a missing required field.
    pub fn insert(&mut self, record: SearchableRecord) -> Result<(), RecordError> {
        record.validate(self.records.len())?;
        if self.get(&record.identifier).is_some() {
            return Err(RecordError::DuplicateIdentifier {
                identifier: record.identifier,
            });
        }
        self.records.push(record);
        self.invalidate();
        Ok(())
    }

    /// Append several records, all or nothing.
    pub fn extend(&mut self, records: Vec<SearchableRecord>) -> Result<(), RecordError> {
        let mut combined = self.records.clone();
        combined.extend(records);
        validate_records(&combined)?;
        self.records = combined;
        self.invalidate();
        Ok(())
    }

    /// Remove a record by identifier. Returns it if it was present.
    pub fn remove(&mut self, identifier: &str) -> Option<SearchableRecord> {
        let position = self.records.iter().position(|r| r.identifier == identifier)?;
        let removed = self.records.remove(position);
        self.invalidate();
        Some(removed)
    }

    /// Swap in a whole new store, all or nothing.
    pub fn replace_all(&mut self, records: Vec<SearchableRecord>) -> Result<(), RecordError> {
        validate_records(&records)?;
        self.records = records;
        self.invalidate();
        Ok(())
    }

    /// The current index, building it first if the store changed.
    pub fn index(&mut self) -> Result<Arc<SearchIndex>, RecordError> {
        if let Some(index) = &self.index {
            return Ok(Arc::clone(index));
        }

        let started = Instant::now();
        let index = Arc::new(build_index(&self.records)?);
        self.observer.on_event(&SearchEvent::IndexBuilt {
            records: index.len(),
            tokens: index.token_count(),
            elapsed: started.elapsed(),
        });
        self.index = Some(Arc::clone(&index));
        Ok(index)
    }

    /// Run a query against the current snapshot.
    pub fn search(&mut self, request: &QueryRequest) -> Result<QueryResult, Error> {
        let index = self.index()?;
        let started = Instant::now();
        match search(&index, request) {
            Ok(result) => {
                self.observer.on_event(&SearchEvent::QueryExecuted {
                    query: request.query.clone(),
                    results: result.len(),
                    elapsed: started.elapsed(),
                });
                Ok(result)
            }
            Err(err) => {
                self.observer.on_event(&SearchEvent::QueryRejected {
                    query: request.query.clone(),
                    reason: err.to_string(),
                });
                Err(err.into())
            }
        }
    }

    fn invalidate(&mut self) {
        self.index = None;
    }
}
