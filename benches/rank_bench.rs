//! Query parsing and hybrid ranking throughput.
//!
//! Catalog sizes mirror realistic candidate pools:
//! - pool:    50 candidates (the default retrieval pool)
//! - city:    1,000 candidates
//! - region:  10,000 candidates
//!
//! Run with: cargo bench --bench rank_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use propsearch::testing::sample_catalog;
use propsearch::{
    parse_query, rank, Candidate, RankingWeights, ScoredCatalog, SearchEngine, SemanticScore,
};

// ============================================================================
// CATALOG SIMULATION
// ============================================================================

const POOL_SIZES: &[(&str, usize)] = &[("pool", 50), ("city", 1_000), ("region", 10_000)];

const QUERIES: &[(&str, &str)] = &[
    ("full", "2BHK under 40k near Pine Street with parking"),
    ("nearby", "home near a good school, metro and a hospital"),
    (
        "long_form",
        "I recently shifted to Pine Street and am looking for a property, and the nearby school is preferable.",
    ),
    ("no_match", "qwerty zxcv"),
];

/// Cycle the sample listings into `count` distinct candidates with spread-out similarities.
fn generate_candidates(count: usize) -> Vec<Candidate> {
    let templates = sample_catalog();
    (0..count)
        .map(|i| {
            let mut property = templates[i % templates.len()].clone();
            property.id = format!("{}-{}", property.id, i);
            property.price += (i as u64 * 37) % 20_000;
            let similarity = ((i * 7919) % 1000) as f64 / 1000.0;
            Candidate::new(property, similarity)
        })
        .collect()
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_parse_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_query");

    for (name, text) in QUERIES {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| parse_query(black_box(text)));
        });
    }

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let weights = RankingWeights::default();
    let query = parse_query(QUERIES[0].1);

    for &(name, size) in POOL_SIZES {
        let candidates = generate_candidates(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", name),
            &candidates,
            |b, candidates| {
                b.iter(|| rank(black_box(candidates), black_box(&query), &weights));
            },
        );

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("parallel", name),
            &candidates,
            |b, candidates| {
                b.iter(|| {
                    propsearch::rank_parallel(black_box(candidates), black_box(&query), &weights)
                });
            },
        );
    }

    group.finish();
}

fn bench_search_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_engine");

    let candidates = generate_candidates(1_000);
    let scores = candidates
        .iter()
        .map(|c| SemanticScore {
            id: c.property.id.clone(),
            score: c.semantic_score,
        })
        .collect();
    let properties = candidates.into_iter().map(|c| c.property).collect();
    let source = ScoredCatalog::new(properties, scores).expect("generated catalog is valid");
    let engine = SearchEngine::new(source);

    for (name, text) in QUERIES {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| engine.search(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_query, bench_rank, bench_search_engine);

criterion_main!(benches);
