// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking weight configuration.
//!
//! Weights live in a JSON object whose keys mirror `RankingWeights`. Missing
//! keys keep their defaults, unknown keys are rejected, and the result is
//! validated before it is handed to the ranker.
//!
//! ```json
//! { "semantic": 0.7, "location": 0.15, "transit_radius_m": 800 }
//! ```

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::scoring::RankingWeights;

/// Parse and validate weights from JSON text.
pub fn parse_weights(json: &str) -> Result<RankingWeights> {
    let weights: RankingWeights = serde_json::from_str(json)?;
    weights.validate()?;
    Ok(weights)
}

/// Load and validate weights from a JSON file.
pub fn load_weights(path: &Path) -> Result<RankingWeights> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let weights = parse_weights(&raw)?;
    tracing::info!(path = %path.display(), ?weights, "loaded ranking weights");
    Ok(weights)
}

/// Weights from `path` if given, defaults otherwise.
pub fn load_weights_or_default(path: Option<&Path>) -> Result<RankingWeights> {
    match path {
        Some(path) => load_weights(path),
        None => Ok(RankingWeights::default()),
    }
}
