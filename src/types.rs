// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow through a search request.
//!
//! A `Property` comes from the data store and is never mutated here. The parser
//! turns free text into a `ParsedQuery`, the ranker pairs each `Candidate` with
//! that query and produces one `SearchResult` (with its `Explanation`) per
//! surviving property.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **ParsedQuery**: a field is `Some` only when the parser saw positive textual
//!   evidence for it. `None` means "no constraint", never zero.
//!
//! - **Explanation**: every component is `>= 0` and
//!   `total_boost = location_boost + amenity_match + price_match + bedroom_match + nearby_bonus`
//!   (up to rounding). The semantic term is never part of `total_boost`.
//!
//! - **SearchResult**: `score >= weights.semantic * semantic_similarity`. Boosts only add.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// PROPERTY RECORDS
// =============================================================================

/// A point of interest close to a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NearbyPlace {
    /// Category tag such as `school`, `hospital`, `transit`, `metro` or `station`.
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub distance_m: u32,
}

/// A listing as stored in the property catalog.
///
/// Prices are in the smallest currency unit. The ranker only reads these fields;
/// the whole record is echoed back in `SearchResult::metadata` for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub address: String,
    pub neighborhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area_sqft: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub nearby_places: Vec<NearbyPlace>,
}

impl Property {
    /// Does this listing carry the given amenity tag?
    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.amenities.iter().any(|tag| tag == amenity.as_str())
    }
}

// =============================================================================
// QUERY INTENT
// =============================================================================

/// Amenity categories the parser recognizes.
///
/// Declaration order is the canonical output order: `ParsedQuery::amenities`
/// is a `BTreeSet`, so serialized queries list categories in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    Parking,
    Balcony,
    Gym,
    Pool,
    Garden,
    PetFriendly,
    PublicTransit,
}

impl Amenity {
    /// Every category, in canonical order.
    pub const ALL: [Amenity; 7] = [
        Amenity::Parking,
        Amenity::Balcony,
        Amenity::Gym,
        Amenity::Pool,
        Amenity::Garden,
        Amenity::PetFriendly,
        Amenity::PublicTransit,
    ];

    /// The tag used for this category in property records.
    pub fn as_str(self) -> &'static str {
        match self {
            Amenity::Parking => "parking",
            Amenity::Balcony => "balcony",
            Amenity::Gym => "gym",
            Amenity::Pool => "pool",
            Amenity::Garden => "garden",
            Amenity::PetFriendly => "pet_friendly",
            Amenity::PublicTransit => "public_transit",
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured intent extracted from a free-text query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedQuery {
    pub location: Option<String>,
    pub max_price: Option<u64>,
    pub min_price: Option<u64>,
    /// Minimum bedroom count for filtering; an exact match earns a boost.
    pub bedrooms: Option<u32>,
    pub amenities: BTreeSet<Amenity>,
    pub prefer_nearby_school: bool,
    pub prefer_nearby_hospital: bool,
    pub prefer_nearby_transit: bool,
}

impl ParsedQuery {
    /// True when the parser found nothing at all.
    pub fn is_unconstrained(&self) -> bool {
        *self == ParsedQuery::default()
    }
}

// =============================================================================
// RANKING INPUT AND OUTPUT
// =============================================================================

/// A property plus its semantic similarity to the query, before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub property: Property,
    /// Similarity from the upstream vector search, roughly `[0, 1]`, higher is better.
    pub semantic_score: f64,
}

impl Candidate {
    pub fn new(property: Property, semantic_score: f64) -> Self {
        Self {
            property,
            semantic_score,
        }
    }
}

/// Per-component breakdown of a result's score.
///
/// All values are rounded to `SCORE_DECIMALS` places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Raw similarity from the vector search (not multiplied by the semantic weight).
    pub semantic_similarity: f64,
    pub location_boost: f64,
    pub amenity_match: f64,
    pub price_match: f64,
    pub bedroom_match: f64,
    pub nearby_bonus: f64,
    pub total_boost: f64,
}

/// One ranked property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub score: f64,
    pub explanation: Explanation,
    /// The full property record, for display.
    pub metadata: Property,
}

/// What the request boundary hands back to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub parsed_query: ParsedQuery,
}
