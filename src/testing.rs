//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::{Candidate, NearbyPlace, Property};

/// Create a plain listing with no amenities and no nearby places.
///
/// This is the canonical implementation used across all tests.
pub fn make_property(id: &str, price: u64, bedrooms: u32) -> Property {
    Property {
        id: id.to_string(),
        title: format!("Listing {}", id),
        description: format!("Description for {}", id),
        address: format!("{} Main Road", id),
        neighborhood: "Riverside".to_string(),
        latitude: 40.0,
        longitude: -73.0,
        price,
        bedrooms,
        bathrooms: 1,
        area_sqft: 800,
        amenities: vec![],
        nearby_places: vec![],
    }
}

/// Create a listing located in a specific neighborhood.
pub fn make_property_in(id: &str, neighborhood: &str, price: u64, bedrooms: u32) -> Property {
    Property {
        neighborhood: neighborhood.to_string(),
        ..make_property(id, price, bedrooms)
    }
}

/// Create a nearby place.
pub fn make_place(kind: &str, distance_m: u32) -> NearbyPlace {
    NearbyPlace {
        kind: kind.to_string(),
        name: format!("Some {}", kind),
        distance_m,
    }
}

/// Pair a listing with a semantic score.
pub fn make_candidate(property: Property, semantic_score: f64) -> Candidate {
    Candidate::new(property, semantic_score)
}

/// A small, varied catalog used by integration tests and benches.
pub fn sample_catalog() -> Vec<Property> {
    let mut pine = make_property_in("pine-2bhk", "Pine Street", 38_000, 2);
    pine.title = "Sunny 2BHK on Pine Street".to_string();
    pine.amenities = vec!["parking".to_string(), "balcony".to_string()];
    pine.nearby_places = vec![make_place("school", 250), make_place("metro", 600)];

    let mut pine_big = make_property_in("pine-3bhk", "Pine Street", 39_500, 3);
    pine_big.title = "Family home near Pine Street park".to_string();
    pine_big.amenities = vec!["garden".to_string()];

    let mut studio = make_property_in("studio-central", "Central", 18_000, 0);
    studio.title = "Compact studio by the metro".to_string();
    studio.amenities = vec!["public_transit".to_string()];
    studio.nearby_places = vec![make_place("station", 300)];

    let mut villa = make_property_in("villa-hills", "Oak Hills", 120_000, 5);
    villa.title = "Luxury villa with pool".to_string();
    villa.amenities = vec!["pool".to_string(), "garden".to_string(), "gym".to_string()];
    villa.nearby_places = vec![make_place("hospital", 1500)];

    let mut pets = make_property_in("pets-loft", "Old Town", 45_000, 1);
    pets.title = "Pet-friendly loft with balcony".to_string();
    pets.amenities = vec!["pet_friendly".to_string(), "balcony".to_string()];

    vec![pine, pine_big, studio, villa, pets]
}
