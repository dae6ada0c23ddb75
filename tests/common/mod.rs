//! Shared test utilities and fixtures.

#![allow(dead_code)]

use propsearch::{Candidate, ParsedQuery, Property, RankingWeights, SearchResult};

// Re-export canonical fixtures from propsearch::testing
pub use propsearch::testing::{
    make_candidate, make_place, make_property, make_property_in, sample_catalog,
};

/// Pair every listing in the sample catalog with the same similarity.
pub fn uniform_candidates(similarity: f64) -> Vec<Candidate> {
    sample_catalog()
        .into_iter()
        .map(|property| Candidate::new(property, similarity))
        .collect()
}

/// Pair listings with explicit similarities, in order.
pub fn scored(pairs: Vec<(Property, f64)>) -> Vec<Candidate> {
    pairs
        .into_iter()
        .map(|(property, score)| Candidate::new(property, score))
        .collect()
}

pub fn ids(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

/// Check the guarantees every ranking must satisfy.
pub fn assert_ranking_invariants(
    candidates: &[Candidate],
    query: &ParsedQuery,
    weights: &RankingWeights,
    results: &[SearchResult],
) {
    for window in results.windows(2) {
        assert!(
            window[0].score >= window[1].score,
            "results not sorted: {} before {}",
            window[0].score,
            window[1].score
        );
    }

    for result in results {
        if let Some(max_price) = query.max_price {
            assert!(result.metadata.price <= max_price, "{} over budget", result.id);
        }
        if let Some(bedrooms) = query.bedrooms {
            assert!(result.metadata.bedrooms >= bedrooms, "{} too small", result.id);
        }

        let candidate = candidates
            .iter()
            .find(|c| c.property.id == result.id)
            .expect("result must come from a candidate");
        // Non-finite similarities are scored as zero.
        let similarity = if candidate.semantic_score.is_finite() {
            candidate.semantic_score
        } else {
            0.0
        };
        assert!(result.score.is_finite(), "{} has a non-finite score", result.id);
        // Rounding to 4 places can shave at most 0.00005 off the final score.
        assert!(
            result.score + 5e-5 >= weights.semantic * similarity,
            "{} scored below its semantic floor",
            result.id
        );
    }
}
