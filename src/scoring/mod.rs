// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! Scores come from field weights (title counts most, tags least). Order
//! comes from the sort mode, and every sort is stable so equal keys keep
//! store order.

mod core;
pub mod ranking;

pub use core::*;
