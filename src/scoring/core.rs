// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search relevance.
//!
//! A record's score is a weighted sum of per-field match qualities:
//!
//! ```text
//! score = 0.4 · q(title) + 0.3 · q(description) + 0.2 · q(body) + 0.1 · q(tags)
//! ```
//!
//! Each `q` is in `[0, 1]`, so scores are in `[0, 1]` too. For a query with
//! several words, `q(field)` is the mean of the best quality each word
//! achieved in that field. A word that misses a field drags that field's
//! quality down rather than zeroing the record.
//!
//! # Constants
//!
//! | Field       | Weight |
//! |-------------|--------|
//! | Title       | 0.4    |
//! | Description | 0.3    |
//! | Body        | 0.2    |
//! | Tags        | 0.1    |

use crate::types::Field;

pub const TITLE_WEIGHT: f64 = 0.4;
pub const DESCRIPTION_WEIGHT: f64 = 0.3;
pub const BODY_WEIGHT: f64 = 0.2;
pub const TAGS_WEIGHT: f64 = 0.1;

/// Weight of a field in the relevance sum.
pub fn field_weight(field: Field) -> f64 {
    match field {
        Field::Title => TITLE_WEIGHT,
        Field::Description => DESCRIPTION_WEIGHT,
        Field::Body => BODY_WEIGHT,
        Field::Tags => TAGS_WEIGHT,
    }
}

/// Per-field qualities for one record, indexed by `Field as usize`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldQualities([f64; 4]);

impl FieldQualities {
    pub fn get(&self, field: Field) -> f64 {
        self.0[field as usize]
    }

    pub fn set(&mut self, field: Field, quality: f64) {
        self.0[field as usize] = quality.clamp(0.0, 1.0);
    }

    /// Weighted sum across fields.
    pub fn score(&self) -> f64 {
        Field::ALL
            .iter()
            .map(|&field| field_weight(field) * self.get(field))
            .sum()
    }
}

/// Mean of per-term qualities. Empty input scores zero.
pub fn mean_quality(qualities: &[f64]) -> f64 {
    if qualities.is_empty() {
        return 0.0;
    }
    qualities.iter().sum::<f64>() / qualities.len() as f64
}
