// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword tables for amenity and preference detection.
//!
//! Matching is plain substring containment on the lowercased query, so these
//! lists overlap on purpose in a few places:
//!
//! - `park` belongs to both `Parking` and `Garden`.
//! - `metro`, `bus`, `station` and `transit` set both the `PublicTransit`
//!   amenity and the transit preference.
//! - Short stems like `car`, `cat` and `pet` fire inside longer words.

use crate::types::Amenity;

/// Synonyms per amenity category. Any hit adds the category.
pub const AMENITY_KEYWORDS: &[(Amenity, &[&str])] = &[
    (Amenity::Parking, &["parking", "garage", "car", "park"]),
    (Amenity::Balcony, &["balcony", "terrace", "patio"]),
    (Amenity::Gym, &["gym", "fitness", "workout"]),
    (Amenity::Pool, &["pool", "swimming"]),
    (Amenity::Garden, &["garden", "lawn", "park"]),
    (Amenity::PetFriendly, &["pet", "dog", "cat", "animal"]),
    (
        Amenity::PublicTransit,
        &["metro", "bus", "transit", "train", "station"],
    ),
];

pub const SCHOOL_KEYWORDS: &[&str] = &["school", "education", "college"];

pub const HOSPITAL_KEYWORDS: &[&str] = &["hospital", "clinic", "medical", "doctor"];

pub const TRANSIT_KEYWORDS: &[&str] = &["metro", "bus", "station", "transit"];

/// Captured location phrases that carry no place information.
pub const LOCATION_STOP_WORDS: &[&str] = &["the", "a", "an"];

/// Does `text` contain any of `keywords` as a substring?
///
/// `text` must already be lowercased.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
