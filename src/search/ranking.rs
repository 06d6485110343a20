//! Catalog ranking.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::catalog::entry::CatalogEntry;
use crate::search::scorer::RelevanceScorer;

/// An entry paired with its relevance score for one query.
///
/// Scored entries live only for the duration of a search; the catalog entry
/// itself is shared, not copied or modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredEntry {
    pub entry: Arc<CatalogEntry>,
    pub relevance_score: u32,
}

/// Lower-case and trim a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Filters and orders a catalog against a query.
///
/// Every entry is scored, entries scoring zero are dropped, and the rest are
/// sorted by descending score. Entries with equal scores keep their catalog
/// order. The result holds at most `limit` entries.
///
/// An empty query is not special-cased here; callers decide what an empty
/// query should display.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine {
    scorer: RelevanceScorer,
}

impl RankingEngine {
    pub fn new(scorer: RelevanceScorer) -> Self {
        RankingEngine { scorer }
    }

    pub fn scorer(&self) -> &RelevanceScorer {
        &self.scorer
    }

    /// Rank `catalog` against `query`, returning at most `limit` entries.
    pub fn rank(&self, catalog: &Catalog, query: &str, limit: usize) -> Vec<ScoredEntry> {
        if limit == 0 {
            return Vec::new();
        }

        let start = Instant::now();
        let term = normalize_query(query);

        let mut hits: Vec<ScoredEntry> = catalog
            .iter()
            .filter_map(|entry| {
                let relevance_score = self.scorer.score(entry, &term);
                (relevance_score > 0).then(|| ScoredEntry {
                    entry: Arc::clone(entry),
                    relevance_score,
                })
            })
            .collect();
        let matched = hits.len();

        // `sort_by` is stable, which keeps catalog order among equal scores.
        hits.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        hits.truncate(limit);

        log::debug!(
            "Ranked {} entries for {:?}: {} matched, {} returned in {:?}",
            catalog.len(),
            term,
            matched,
            hits.len(),
            start.elapsed()
        );

        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(hits: &[ScoredEntry]) -> Vec<&str> {
        hits.iter().map(|hit| hit.entry.name()).collect()
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new("Open Weather").with_description("weather maps"),
            CatalogEntry::new("Weather").with_category("Weather"),
            CatalogEntry::new("Storm Watch").with_description("severe weather alerts"),
            CatalogEntry::new("Stock Ticker").with_category("Finance"),
            CatalogEntry::new("Rain Gauge").with_description("weather station data"),
        ])
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  WeAther \t"), "weather");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_rank_orders_by_score_then_catalog_order() {
        let hits = RankingEngine::default().rank(&catalog(), "Weather", 100);

        assert_eq!(
            names(&hits),
            vec!["Weather", "Open Weather", "Storm Watch", "Rain Gauge"]
        );
        let scores: Vec<u32> = hits.iter().map(|hit| hit.relevance_score).collect();
        assert_eq!(scores, vec![14, 7, 2, 2]);
    }

    #[test]
    fn test_rank_truncates_to_limit() {
        let hits = RankingEngine::default().rank(&catalog(), "weather", 2);
        assert_eq!(names(&hits), vec!["Weather", "Open Weather"]);
    }

    #[test]
    fn test_zero_limit_is_empty() {
        assert!(RankingEngine::default().rank(&catalog(), "weather", 0).is_empty());
    }

    #[test]
    fn test_no_matches() {
        assert!(RankingEngine::default().rank(&catalog(), "zebra", 100).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(RankingEngine::default()
            .rank(&Catalog::default(), "weather", 100)
            .is_empty());
    }

    #[test]
    fn test_rank_shares_entries_with_catalog() {
        let catalog = catalog();
        let hits = RankingEngine::default().rank(&catalog, "stock", 10);

        assert_eq!(hits.len(), 1);
        assert!(Arc::ptr_eq(&hits[0].entry, &catalog.entries()[3]));
    }

    #[test]
    fn test_duplicate_names_are_ranked_independently() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("Twin").with_description("first"),
            CatalogEntry::new("Twin").with_description("second"),
        ]);
        let hits = RankingEngine::default().rank(&catalog, "twin", 10);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].entry.description(), "first");
        assert_eq!(hits[1].entry.description(), "second");
    }

    #[test]
    fn test_rank_is_idempotent() {
        let catalog = catalog();
        let engine = RankingEngine::default();

        assert_eq!(
            engine.rank(&catalog, "weather", 3),
            engine.rank(&catalog, "weather", 3)
        );
    }
}
