// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The property data-store boundary.
//!
//! Records arrive as JSON and are validated exactly once, here. Past this
//! point the rest of the crate trusts every `Property` it sees.
//!
//! `ScoredCatalog` pairs a validated catalog with semantic scores computed
//! elsewhere (a vector search run by some other process) and serves them as
//! ranking candidates.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::search::CandidateSource;
use crate::types::{Candidate, Property};

/// One hit from an upstream vector search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SemanticScore {
    pub id: String,
    pub score: f64,
}

/// Check a single record.
pub fn validate_property(property: &Property) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidProperty {
        id: property.id.clone(),
        reason: reason.to_string(),
    };

    if property.id.trim().is_empty() {
        return Err(invalid("id is empty"));
    }
    if !property.latitude.is_finite() || !(-90.0..=90.0).contains(&property.latitude) {
        return Err(invalid("latitude outside [-90, 90]"));
    }
    if !property.longitude.is_finite() || !(-180.0..=180.0).contains(&property.longitude) {
        return Err(invalid("longitude outside [-180, 180]"));
    }
    Ok(())
}

/// Check every record and that ids are unique.
pub fn validate_properties(properties: &[Property]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(properties.len());
    for property in properties {
        validate_property(property)?;
        if !seen.insert(property.id.as_str()) {
            return Err(Error::DuplicateProperty(property.id.clone()));
        }
    }
    Ok(())
}

/// Parse and validate a JSON array of properties.
pub fn parse_properties(json: &str) -> Result<Vec<Property>> {
    let properties: Vec<Property> = serde_json::from_str(json)?;
    validate_properties(&properties)?;
    Ok(properties)
}

/// Load and validate a JSON array of properties from disk.
pub fn load_properties(path: &Path) -> Result<Vec<Property>> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let properties = parse_properties(&raw)?;
    tracing::info!(path = %path.display(), count = properties.len(), "loaded property catalog");
    Ok(properties)
}

/// Load a JSON array of `{ "id", "score" }` entries.
pub fn load_scores(path: &Path) -> Result<Vec<SemanticScore>> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_str(&raw)?)
}

/// A validated catalog plus precomputed semantic scores.
#[derive(Debug, Clone)]
pub struct ScoredCatalog {
    properties: Vec<Property>,
    by_id: HashMap<String, usize>,
    scores: Vec<SemanticScore>,
}

impl ScoredCatalog {
    /// Build from records and scores. Records are validated here.
    ///
    /// Scores are served in the order they are listed. The upstream search
    /// already returns them best first, and that order is what the ranker's
    /// stable sort falls back on for equal scores.
    pub fn new(properties: Vec<Property>, scores: Vec<SemanticScore>) -> Result<Self> {
        validate_properties(&properties)?;
        let by_id = properties
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id.clone(), idx))
            .collect();

        Ok(Self {
            properties,
            by_id,
            scores,
        })
    }

    /// Load both files from disk.
    pub fn load(catalog: &Path, scores: &Path) -> Result<Self> {
        let properties = load_properties(catalog)?;
        let scores = load_scores(scores)?;
        Self::new(properties, scores)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.by_id.get(id).map(|&idx| &self.properties[idx])
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl CandidateSource for ScoredCatalog {
    /// The query text is ignored: the scores were computed for it upstream.
    fn candidates(&self, _query_text: &str, limit: usize) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::with_capacity(limit.min(self.scores.len()));
        for hit in &self.scores {
            if candidates.len() >= limit {
                break;
            }
            match self.get(&hit.id) {
                Some(property) => candidates.push(Candidate::new(property.clone(), hit.score)),
                None => tracing::warn!(id = %hit.id, "score references unknown property, skipping"),
            }
        }
        Ok(candidates)
    }
}
