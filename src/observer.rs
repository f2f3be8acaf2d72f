// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search events, delivered to whoever the session was handed.
//!
//! There's no global analytics sink. A `SearchSession` holds a boxed
//! `SearchObserver` and calls it after each index build and each query.
//! The default observer turns events into `tracing` records; tests use
//! `RecordingObserver` to assert on what happened.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

/// Something worth telling an observer about.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    IndexBuilt {
        records: usize,
        tokens: usize,
        elapsed: Duration,
    },
    QueryExecuted {
        query: String,
        results: usize,
        elapsed: Duration,
    },
    QueryRejected {
        query: String,
        reason: String,
    },
}

pub trait SearchObserver: Send + Sync {
    fn on_event(&self, event: &SearchEvent);
}

/// Logs every event at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_event(&self, event: &SearchEvent) {
        match event {
            SearchEvent::IndexBuilt {
                records,
                tokens,
                elapsed,
            } => debug!(records, tokens, ?elapsed, "search index built"),
            SearchEvent::QueryExecuted {
                query,
                results,
                elapsed,
            } => debug!(%query, results, ?elapsed, "query executed"),
            SearchEvent::QueryRejected { query, reason } => {
                debug!(%query, %reason, "query rejected")
            }
        }
    }
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_event(&self, _event: &SearchEvent) {}
}

/// Keeps every event in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<SearchEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SearchEvent> {
        self.events.lock().clone()
    }

    pub fn index_builds(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, SearchEvent::IndexBuilt { .. }))
            .count()
    }
}

impl SearchObserver for RecordingObserver {
    fn on_event(&self, event: &SearchEvent) {
        self.events.lock().push(event.clone());
    }
}
