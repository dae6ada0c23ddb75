// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how candidates become an ordered, explained list.
//!
//! Each candidate is scored on its own. Strict filters drop it entirely,
//! otherwise it gets `semantic * similarity` plus every structured boost.
//! The output is sorted by score, descending, with a stable sort so equal
//! scores keep their candidate order.
//!
//! The ranker returns every survivor. Paging is the caller's job.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::core::{
    amenity_boost, bedroom_boost, location_boost, nearby_bonus, passes_filters, price_boost,
    round_score, RankingWeights,
};
use crate::types::{Candidate, Explanation, ParsedQuery, SearchResult};

/// Compare two results for ranking: higher score first.
///
/// Scores are always finite (see [`score_candidate`]), so `total_cmp` agrees
/// with numeric order. Equal scores compare `Equal`, which the stable sort
/// turns into "keep candidate order".
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Score one candidate, or `None` if a strict filter removes it.
///
/// A non-finite similarity from upstream counts as `0.0`, so such a candidate
/// keeps its structured boosts but sorts below every real semantic match.
pub fn score_candidate(
    candidate: &Candidate,
    query: &ParsedQuery,
    weights: &RankingWeights,
) -> Option<SearchResult> {
    let property = &candidate.property;
    if !passes_filters(property, query) {
        return None;
    }

    let location = location_boost(property, query, weights);
    let amenity = amenity_boost(property, query, weights);
    let price = price_boost(property, query, weights);
    let bedroom = bedroom_boost(property, query, weights);
    let nearby = nearby_bonus(property, query, weights);

    let similarity = if candidate.semantic_score.is_finite() {
        candidate.semantic_score
    } else {
        tracing::warn!(
            id = %property.id,
            score = candidate.semantic_score,
            "non-finite semantic score, using 0"
        );
        0.0
    };

    let total_boost = location + amenity + price + bedroom + nearby;
    let score = weights.semantic * similarity + total_boost;

    Some(SearchResult {
        id: property.id.clone(),
        title: property.title.clone(),
        score: round_score(score),
        explanation: Explanation {
            semantic_similarity: round_score(similarity),
            location_boost: round_score(location),
            amenity_match: round_score(amenity),
            price_match: round_score(price),
            bedroom_match: round_score(bedroom),
            nearby_bonus: round_score(nearby),
            total_boost: round_score(total_boost),
        },
        metadata: property.clone(),
    })
}

/// Rank candidates against a parsed query.
///
/// Filtered candidates are dropped. Survivors are sorted by descending score;
/// ties keep their input order.
pub fn rank(
    candidates: &[Candidate],
    query: &ParsedQuery,
    weights: &RankingWeights,
) -> Vec<SearchResult> {
    let results: Vec<SearchResult> = candidates
        .iter()
        .filter_map(|candidate| score_candidate(candidate, query, weights))
        .collect();

    finish(results, candidates.len())
}

/// Same as [`rank`], scoring candidates on the rayon thread pool.
///
/// `collect` on an indexed parallel iterator keeps input order, so the stable
/// sort afterwards produces exactly what `rank` produces.
#[cfg(feature = "parallel")]
pub fn rank_parallel(
    candidates: &[Candidate],
    query: &ParsedQuery,
    weights: &RankingWeights,
) -> Vec<SearchResult> {
    let scored: Vec<Option<SearchResult>> = candidates
        .par_iter()
        .map(|candidate| score_candidate(candidate, query, weights))
        .collect();
    let results: Vec<SearchResult> = scored.into_iter().flatten().collect();

    finish(results, candidates.len())
}

fn finish(mut results: Vec<SearchResult>, candidate_count: usize) -> Vec<SearchResult> {
    // sort_by is stable
    results.sort_by(compare_results);

    tracing::debug!(
        candidates = candidate_count,
        ranked = results.len(),
        filtered = candidate_count - results.len(),
        top_score = results.first().map(|r| r.score),
        "ranked candidates"
    );

    results
}
