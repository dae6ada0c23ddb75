//! Hybrid real-estate search: query understanding plus explainable ranking.
//!
//! Free text is parsed into structured intent (price bounds, bedrooms,
//! amenities, location, nearby-place preferences). Candidates from an upstream
//! vector search are then ranked by semantic similarity plus small additive
//! boosts for every structured constraint they satisfy.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  parser     │────▶│  types.rs    │◀────│  scoring         │
//! │ (parse_query│     │ (ParsedQuery,│     │ (RankingWeights, │
//! │  keywords)  │     │  Property,   │     │  boosts, rank)   │
//! └─────────────┘     │  SearchResult│     └──────────────────┘
//!        ▲            └──────────────┘              ▲
//!        │                                          │
//! ┌──────┴──────────────────────────────────────────┴──────┐
//! │  search (SearchEngine + CandidateSource)               │
//! │  catalog (validated properties + upstream scores)      │
//! │  config (weights from JSON)                            │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! `parse_query` and `rank` are pure and total. Everything that can fail
//! (files, validation, the candidate source) lives at the edges and returns
//! [`Result`].
//!
//! # Usage
//!
//! ```
//! use propsearch::{parse_query, rank, Candidate, RankingWeights};
//! use propsearch::testing::sample_catalog;
//!
//! let query = parse_query("2BHK under 40k near Pine Street with parking");
//! let candidates: Vec<Candidate> = sample_catalog()
//!     .into_iter()
//!     .map(|property| Candidate::new(property, 0.5))
//!     .collect();
//!
//! let results = rank(&candidates, &query, &RankingWeights::default());
//! assert_eq!(results[0].id, "pine-2bhk");
//! ```

pub mod catalog;
pub mod config;
mod error;
pub mod parser;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;

// Re-exports for public API
pub use catalog::{load_properties, load_scores, ScoredCatalog, SemanticScore};
pub use config::{load_weights, load_weights_or_default};
pub use error::{Error, Result};
pub use parser::parse_query;
#[cfg(feature = "parallel")]
pub use scoring::ranking::rank_parallel;
pub use scoring::ranking::{compare_results, rank, score_candidate};
pub use scoring::RankingWeights;
pub use search::{CandidateSource, SearchEngine};
pub use types::{
    Amenity, Candidate, Explanation, NearbyPlace, ParsedQuery, Property, SearchResponse,
    SearchResult,
};
