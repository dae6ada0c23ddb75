//! Ranking properties: filters, score floor, ordering, weight conservation.

use super::common::assert_ranking_invariants;
use propsearch::{rank, Amenity, Candidate, NearbyPlace, ParsedQuery, Property, RankingWeights};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn amenity_strategy() -> impl Strategy<Value = Amenity> {
    prop::sample::select(Amenity::ALL.to_vec())
}

fn place_strategy() -> impl Strategy<Value = NearbyPlace> {
    (
        prop::sample::select(vec!["school", "hospital", "transit", "metro", "station", "park"]),
        0u32..4000,
    )
        .prop_map(|(kind, distance_m)| NearbyPlace {
            kind: kind.to_string(),
            name: format!("{} place", kind),
            distance_m,
        })
}

fn property_strategy() -> impl Strategy<Value = Property> {
    (
        prop::sample::select(vec!["Pine Street", "Oak Hills", "Old Town", "Central"]),
        0u64..100_000,
        0u32..6,
        prop::collection::btree_set(amenity_strategy(), 0..4),
        prop::collection::vec(place_strategy(), 0..4),
    )
        .prop_map(|(neighborhood, price, bedrooms, amenities, nearby_places)| Property {
            id: String::new(),
            title: format!("{} bedroom home", bedrooms),
            description: String::new(),
            address: format!("1 {}", neighborhood),
            neighborhood: neighborhood.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            price,
            bedrooms,
            bathrooms: 1,
            area_sqft: 700,
            amenities: amenities.iter().map(|a| a.as_str().to_string()).collect(),
            nearby_places,
        })
}

/// Candidates with unique ids and similarities in [0, 1].
fn candidates_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec((property_strategy(), 0.0f64..=1.0), 0..20).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (mut property, score))| {
                property.id = format!("p{}", i);
                Candidate::new(property, score)
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = ParsedQuery> {
    (
        prop::option::of(prop::sample::select(vec!["Pine Street", "Old Town", "Nowhere"])),
        prop::option::of(0u64..100_000),
        prop::option::of(0u64..100_000),
        prop::option::of(0u32..6),
        prop::collection::btree_set(amenity_strategy(), 0..4),
        any::<(bool, bool, bool)>(),
    )
        .prop_map(
            |(location, max_price, min_price, bedrooms, amenities, (school, hospital, transit))| {
                ParsedQuery {
                    location: location.map(str::to_string),
                    max_price,
                    min_price,
                    bedrooms,
                    amenities,
                    prefer_nearby_school: school,
                    prefer_nearby_hospital: hospital,
                    prefer_nearby_transit: transit,
                }
            },
        )
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: filters hold, scores never fall below the semantic floor,
    /// and output is sorted descending.
    #[test]
    fn prop_ranking_invariants(candidates in candidates_strategy(), query in query_strategy()) {
        let weights = RankingWeights::default();
        let results = rank(&candidates, &query, &weights);
        assert_ranking_invariants(&candidates, &query, &weights, &results);
    }

    /// Property: exactly the candidates passing the hard filters survive.
    #[test]
    fn prop_survivor_count(candidates in candidates_strategy(), query in query_strategy()) {
        let expected = candidates
            .iter()
            .filter(|c| query.max_price.map_or(true, |max| c.property.price <= max))
            .filter(|c| query.bedrooms.map_or(true, |min| c.property.bedrooms >= min))
            .count();
        let results = rank(&candidates, &query, &RankingWeights::default());
        prop_assert_eq!(results.len(), expected);
    }

    /// Property: every boost component is non-negative and bounded by its weight.
    #[test]
    fn prop_boosts_bounded(candidates in candidates_strategy(), query in query_strategy()) {
        let weights = RankingWeights::default();
        let nearby_max = weights.school_bonus + weights.hospital_bonus + weights.transit_bonus;
        for result in rank(&candidates, &query, &weights) {
            let e = result.explanation;
            prop_assert!((0.0..=weights.location).contains(&e.location_boost));
            prop_assert!((0.0..=weights.amenity).contains(&e.amenity_match));
            prop_assert!((0.0..=weights.price).contains(&e.price_match));
            prop_assert!((0.0..=weights.bedroom).contains(&e.bedroom_match));
            prop_assert!(e.nearby_bonus >= 0.0 && e.nearby_bonus <= nearby_max + 1e-9);
            let parts = e.location_boost + e.amenity_match + e.price_match
                + e.bedroom_match + e.nearby_bonus;
            prop_assert!((parts - e.total_boost).abs() < 1e-3);
        }
    }

    /// Property: equal scores keep candidate order.
    #[test]
    fn prop_ties_are_stable(candidates in candidates_strategy(), query in query_strategy()) {
        let results = rank(&candidates, &query, &RankingWeights::default());
        let position = |id: &str| candidates.iter().position(|c| c.property.id == id);
        for window in results.windows(2) {
            if window[0].score == window[1].score {
                prop_assert!(position(&window[0].id) < position(&window[1].id));
            }
        }
    }

    #[test]
    fn prop_rank_is_deterministic(candidates in candidates_strategy(), query in query_strategy()) {
        let weights = RankingWeights::default();
        prop_assert_eq!(rank(&candidates, &query, &weights), rank(&candidates, &query, &weights));
    }

    /// Property: rebalanced weights that still sum to one pass validation.
    #[test]
    fn prop_weight_conservation(location in 0.0f64..0.1, amenity in 0.0f64..0.05) {
        let weights = RankingWeights {
            location,
            amenity,
            semantic: 1.0 - location - amenity - 0.05 - 0.05,
            ..RankingWeights::default()
        };
        prop_assert!(weights.validate().is_ok());
        prop_assert!((weights.named_sum() - 1.0).abs() < 1e-9);
    }
}

#[cfg(feature = "parallel")]
proptest! {
    /// Property: the rayon ranking matches the sequential one exactly.
    #[test]
    fn prop_parallel_matches_sequential(
        candidates in candidates_strategy(),
        query in query_strategy()
    ) {
        let weights = RankingWeights::default();
        prop_assert_eq!(
            rank(&candidates, &query, &weights),
            propsearch::rank_parallel(&candidates, &query, &weights)
        );
    }
}

#[test]
fn default_weights_conserve_mass() {
    let weights = RankingWeights::default();
    assert!((weights.named_sum() - 1.0).abs() < 1e-12);
    assert!(weights.semantic > weights.location);
}
