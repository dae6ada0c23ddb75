// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The request boundary: one query text in, one explained result page out.
//!
//! ```text
//! text ──▶ validate ──▶ parse_query ──▶ CandidateSource ──▶ rank ──▶ truncate
//! ```
//!
//! The upstream vector search is injected as a `CandidateSource` when the
//! engine is built. Nothing here is global, and the engine holds no mutable
//! state, so one engine can serve concurrent requests behind a shared reference.

use crate::error::{Error, Result};
use crate::parser::parse_query;
use crate::scoring::ranking::rank;
use crate::scoring::RankingWeights;
use crate::types::{Candidate, SearchResponse};

/// Default number of candidates fetched from the source per request.
pub const DEFAULT_CANDIDATE_POOL: usize = 50;

/// Default number of results returned per request.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Something that can produce semantically scored candidates for a query.
///
/// In production this wraps an embedding model plus a vector index. The
/// ranking core never sees either, only the returned candidates.
pub trait CandidateSource {
    /// Up to `limit` candidates, best semantic match first.
    fn candidates(&self, query_text: &str, limit: usize) -> Result<Vec<Candidate>>;
}

impl<S: CandidateSource + ?Sized> CandidateSource for &S {
    fn candidates(&self, query_text: &str, limit: usize) -> Result<Vec<Candidate>> {
        (**self).candidates(query_text, limit)
    }
}

/// Parse, fetch, rank and page.
#[derive(Debug, Clone)]
pub struct SearchEngine<S> {
    source: S,
    weights: RankingWeights,
    candidate_pool: usize,
    page_size: usize,
}

impl<S: CandidateSource> SearchEngine<S> {
    /// Engine with default weights, pool size and page size.
    pub fn new(source: S) -> Self {
        Self {
            source,
            weights: RankingWeights::default(),
            candidate_pool: DEFAULT_CANDIDATE_POOL,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_weights(mut self, weights: RankingWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_candidate_pool(mut self, candidate_pool: usize) -> Self {
        self.candidate_pool = candidate_pool;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn weights(&self) -> &RankingWeights {
        &self.weights
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run one search request.
    ///
    /// Empty (or whitespace-only) text is rejected here; the parser itself
    /// would accept it and return an unconstrained query.
    pub fn search(&self, query_text: &str) -> Result<SearchResponse> {
        let query_text = query_text.trim();
        if query_text.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let parsed_query = parse_query(query_text);
        let candidates = self.source.candidates(query_text, self.candidate_pool)?;
        let mut results = rank(&candidates, &parsed_query, &self.weights);
        results.truncate(self.page_size);

        tracing::debug!(
            query = query_text,
            candidates = candidates.len(),
            returned = results.len(),
            "search complete"
        );

        Ok(SearchResponse {
            results,
            parsed_query,
        })
    }
}
