// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind hybrid ranking.
//!
//! Semantic similarity is the primary signal. Structured matches (location,
//! amenities, price, bedrooms, nearby places) are small additive boosts that
//! reorder results with similar semantic relevance. None of them can subtract.
//!
//! # Key Invariant: Weight Conservation
//!
//! ```text
//! semantic + location + amenity + price + bedroom = 1.0
//! semantic > every structured weight
//! ```
//!
//! Nearby-place bonuses sit outside this budget. They are small, fixed
//! increments awarded at most once per category.
//!
//! # Default Constants
//!
//! | Weight            | Value | Meaning                                    |
//! |-------------------|-------|--------------------------------------------|
//! | `semantic`        | 0.75  | Multiplier on the vector-search similarity |
//! | `location`        | 0.10  | Query location found in the listing        |
//! | `amenity`         | 0.05  | Scaled by fraction of requested amenities  |
//! | `price`           | 0.05  | A price constraint exists and is satisfied |
//! | `bedroom`         | 0.05  | Exact bedroom count match                  |
//! | `school_bonus`    | 0.05  | School within 300 m (inclusive)            |
//! | `hospital_bonus`  | 0.02  | Hospital within 2000 m (exclusive)         |
//! | `transit_bonus`   | 0.02  | Transit/station/metro within 1000 m (exclusive) |

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{ParsedQuery, Property};

// =============================================================================
// DEFAULT WEIGHTS
// =============================================================================

pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.75;
pub const DEFAULT_LOCATION_WEIGHT: f64 = 0.10;
pub const DEFAULT_AMENITY_WEIGHT: f64 = 0.05;
pub const DEFAULT_PRICE_WEIGHT: f64 = 0.05;
pub const DEFAULT_BEDROOM_WEIGHT: f64 = 0.05;

pub const DEFAULT_SCHOOL_BONUS: f64 = 0.05;
pub const DEFAULT_HOSPITAL_BONUS: f64 = 0.02;
pub const DEFAULT_TRANSIT_BONUS: f64 = 0.02;

pub const DEFAULT_SCHOOL_RADIUS_M: u32 = 300;
pub const DEFAULT_HOSPITAL_RADIUS_M: u32 = 2000;
pub const DEFAULT_TRANSIT_RADIUS_M: u32 = 1000;

/// Decimal places kept in scores and explanations.
pub const SCORE_DECIMALS: usize = 4;

/// Tolerance used when checking that the five named weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Nearby-place types that count as transit.
pub const TRANSIT_PLACE_KINDS: [&str; 3] = ["transit", "station", "metro"];

/// Every tunable number the ranker uses.
///
/// Missing keys in a config file fall back to the defaults above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingWeights {
    pub semantic: f64,
    pub location: f64,
    pub amenity: f64,
    pub price: f64,
    pub bedroom: f64,
    pub school_bonus: f64,
    pub hospital_bonus: f64,
    pub transit_bonus: f64,
    pub school_radius_m: u32,
    pub hospital_radius_m: u32,
    pub transit_radius_m: u32,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            semantic: DEFAULT_SEMANTIC_WEIGHT,
            location: DEFAULT_LOCATION_WEIGHT,
            amenity: DEFAULT_AMENITY_WEIGHT,
            price: DEFAULT_PRICE_WEIGHT,
            bedroom: DEFAULT_BEDROOM_WEIGHT,
            school_bonus: DEFAULT_SCHOOL_BONUS,
            hospital_bonus: DEFAULT_HOSPITAL_BONUS,
            transit_bonus: DEFAULT_TRANSIT_BONUS,
            school_radius_m: DEFAULT_SCHOOL_RADIUS_M,
            hospital_radius_m: DEFAULT_HOSPITAL_RADIUS_M,
            transit_radius_m: DEFAULT_TRANSIT_RADIUS_M,
        }
    }
}

impl RankingWeights {
    /// Sum of the five named weights. Nearby bonuses are excluded.
    pub fn named_sum(&self) -> f64 {
        self.semantic + self.location + self.amenity + self.price + self.bedroom
    }

    /// Check weight conservation and non-negativity.
    ///
    /// Negative weights would let a boost lower a score, which breaks the
    /// `score >= semantic * similarity` guarantee.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("semantic", self.semantic),
            ("location", self.location),
            ("amenity", self.amenity),
            ("price", self.price),
            ("bedroom", self.bedroom),
            ("school_bonus", self.school_bonus),
            ("hospital_bonus", self.hospital_bonus),
            ("transit_bonus", self.transit_bonus),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_weights(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        let sum = self.named_sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::invalid_weights(format!(
                "semantic + location + amenity + price + bedroom must equal 1.0, got {}",
                sum
            )));
        }

        let structured_max = self
            .location
            .max(self.amenity)
            .max(self.price)
            .max(self.bedroom);
        if self.semantic <= structured_max {
            return Err(Error::invalid_weights(format!(
                "semantic weight ({}) must exceed every structured weight (max {})",
                self.semantic, structured_max
            )));
        }

        Ok(())
    }
}

// =============================================================================
// STRICT FILTERS
// =============================================================================

/// Hard exclusion: over budget, or fewer bedrooms than requested.
///
/// The bedroom count from the query is a minimum here. Exact matches are
/// rewarded separately by `bedroom_boost`.
pub fn passes_filters(property: &Property, query: &ParsedQuery) -> bool {
    if let Some(max_price) = query.max_price {
        if property.price > max_price {
            return false;
        }
    }
    if let Some(bedrooms) = query.bedrooms {
        if property.bedrooms < bedrooms {
            return false;
        }
    }
    true
}

// =============================================================================
// BOOSTS
// =============================================================================

/// Full location weight when the query location appears in the listing's
/// neighborhood, address or title (case-insensitive substring).
pub fn location_boost(property: &Property, query: &ParsedQuery, weights: &RankingWeights) -> f64 {
    let Some(location) = query.location.as_deref() else {
        return 0.0;
    };
    let needle = location.to_lowercase();
    let found = [&property.neighborhood, &property.address, &property.title]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle));

    if found {
        weights.location
    } else {
        0.0
    }
}

/// Amenity weight scaled by the fraction of requested amenities the listing has.
pub fn amenity_boost(property: &Property, query: &ParsedQuery, weights: &RankingWeights) -> f64 {
    if query.amenities.is_empty() {
        return 0.0;
    }
    let matching = query
        .amenities
        .iter()
        .filter(|amenity| property.has_amenity(**amenity))
        .count();

    (matching as f64 / query.amenities.len() as f64) * weights.amenity
}

/// Price weight when a price constraint was given and the listing satisfies it.
///
/// A max price takes precedence; the min price only counts when no max was given.
pub fn price_boost(property: &Property, query: &ParsedQuery, weights: &RankingWeights) -> f64 {
    let satisfied = match (query.max_price, query.min_price) {
        (Some(max_price), _) => property.price <= max_price,
        (None, Some(min_price)) => property.price >= min_price,
        (None, None) => false,
    };

    if satisfied {
        weights.price
    } else {
        0.0
    }
}

/// Bedroom weight for an exact bedroom count match.
pub fn bedroom_boost(property: &Property, query: &ParsedQuery, weights: &RankingWeights) -> f64 {
    match query.bedrooms {
        Some(bedrooms) if property.bedrooms == bedrooms => weights.bedroom,
        _ => 0.0,
    }
}

/// Sum of nearby-place bonuses for the preferences the query expressed.
///
/// Each category pays out at most once, no matter how many places qualify.
pub fn nearby_bonus(property: &Property, query: &ParsedQuery, weights: &RankingWeights) -> f64 {
    let places = &property.nearby_places;
    let mut bonus = 0.0;

    if query.prefer_nearby_school
        && places
            .iter()
            .any(|p| p.kind == "school" && p.distance_m <= weights.school_radius_m)
    {
        bonus += weights.school_bonus;
    }

    if query.prefer_nearby_hospital
        && places
            .iter()
            .any(|p| p.kind == "hospital" && p.distance_m < weights.hospital_radius_m)
    {
        bonus += weights.hospital_bonus;
    }

    if query.prefer_nearby_transit
        && places.iter().any(|p| {
            TRANSIT_PLACE_KINDS.contains(&p.kind.as_str())
                && p.distance_m < weights.transit_radius_m
        })
    {
        bonus += weights.transit_bonus;
    }

    bonus
}

/// Round to `SCORE_DECIMALS` places.
///
/// Goes through decimal formatting, which rounds the exact binary value and
/// breaks exact ties to even (`0.03125` becomes `0.0312`).
pub fn round_score(value: f64) -> f64 {
    format!("{:.*}", SCORE_DECIMALS, value)
        .parse()
        .unwrap_or(value)
}
