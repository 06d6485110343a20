//! Criterion benchmarks for apifinder.
//!
//! Covers description analysis, tag synthesis and ranking over a synthetic
//! 5,000-entry catalog.

use std::hint::black_box;
use std::time::Duration;

use apifinder::analysis::analyzer::Analyzer;
use apifinder::catalog::Catalog;
use apifinder::catalog::entry::CatalogEntry;
use apifinder::config::{SearchConfig, TagConfig};
use apifinder::search::{RankingEngine, SearchController, VirtualScheduler};
use apifinder::tags::TagSynthesizer;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const CATALOG_SIZE: usize = 5_000;

const CATEGORIES: &[&str] = &[
    "Finance",
    "Weather",
    "Sports",
    "Demographics",
    "Health",
    "Entertainment",
    "Geocoding",
    "Open Data",
];

const WORDS: &[&str] = &[
    "real", "time", "weather", "data", "market", "prices", "crypto", "stock", "league", "scores",
    "census", "population", "nutrition", "movies", "music", "streaming", "maps", "address", "free",
    "public", "open", "global", "historical", "api",
];

/// Generate raw catalog entries for benchmarking.
fn generate_entries(count: usize) -> Vec<CatalogEntry> {
    (0..count)
        .map(|i| {
            let description: Vec<&str> = (0..8)
                .map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()]) // Pseudo-random distribution
                .collect();
            CatalogEntry::new(format!("Service{i}"))
                .with_category(CATEGORIES[i % CATEGORIES.len()])
                .with_description(description.join(" "))
                .with_url(format!("https://service{i}.example.com"))
                .with_requires_key(i % 2 == 0)
        })
        .collect()
}

fn generate_catalog(count: usize) -> Catalog {
    TagSynthesizer::default().enrich_all(generate_entries(count))
}

/// Benchmark description analysis and tag synthesis.
fn bench_tag_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("tag_synthesis");

    let analyzer = TagSynthesizer::description_analyzer(&TagConfig::default());
    let entries = generate_entries(CATALOG_SIZE);

    group.bench_function("analyze_single_description", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer
                .analyze(black_box(entries[0].description()))
                .map(|tokens| tokens.collect())
                .unwrap_or_default();
            black_box(tokens)
        })
    });

    group.throughput(Throughput::Elements(CATALOG_SIZE as u64));
    group.bench_function("enrich_catalog", |b| {
        let synthesizer = TagSynthesizer::default();
        b.iter_with_setup(
            || entries.clone(),
            |entries| black_box(synthesizer.enrich_all(entries)),
        )
    });

    group.finish();
}

/// Benchmark ranking a full catalog.
fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");

    let catalog = generate_catalog(CATALOG_SIZE);
    let engine = RankingEngine::default();

    group.throughput(Throughput::Elements(CATALOG_SIZE as u64));
    for query in ["weather", "crypto", "service42", "zebra"] {
        group.bench_with_input(BenchmarkId::new("rank", query), &query, |b, query| {
            b.iter(|| black_box(engine.rank(&catalog, black_box(query), 100)))
        });
    }

    group.finish();
}

/// Benchmark a debounced burst of input ending in one ranking pass.
fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");
    let catalog = generate_catalog(CATALOG_SIZE);

    group.bench_function("typed_query_burst", |b| {
        b.iter_with_setup(
            || {
                SearchController::new(
                    catalog.clone(),
                    RankingEngine::default(),
                    SearchConfig::default(),
                    VirtualScheduler::new(),
                )
            },
            |mut controller| {
                for prefix in ["w", "we", "wea", "weat", "weath", "weathe", "weather"] {
                    controller.on_input(prefix);
                    controller.scheduler_mut().advance(Duration::from_millis(30));
                    controller.poll();
                }
                controller.scheduler_mut().advance(Duration::from_millis(150));
                black_box(controller.poll())
            },
        )
    });

    group.finish();
}

criterion_group!(benches, bench_tag_synthesis, bench_ranking, bench_controller);

criterion_main!(benches);
