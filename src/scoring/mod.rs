// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Semantic similarity dominates. Structured boosts are small additive
//! refinements on top, so two listings with close similarity are reordered by
//! how well they match the parsed constraints, while a poor semantic match
//! cannot be rescued by structure alone.

mod core;
pub mod ranking;

pub use core::*;
