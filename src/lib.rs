//! # apifinder
//!
//! Search tag synthesis and weighted relevance ranking for catalogs of
//! third-party APIs.
//!
//! ## Features
//!
//! - CSV and JSON catalog ingestion
//! - Search tags derived from a category taxonomy and entry descriptions
//! - Field-weighted relevance scoring with per-field explanations
//! - Stable, capped ranking of a whole catalog
//! - Debounced incremental search over live query input
//!
//! ## Example
//!
//! ```
//! use apifinder::prelude::*;
//!
//! let catalog = TagSynthesizer::default().enrich_all(vec![
//!     CatalogEntry::new("WeatherStack")
//!         .with_category("Weather")
//!         .with_description("Real time weather data API"),
//!     CatalogEntry::new("CoinGecko").with_category("Cryptocurrency"),
//! ]);
//!
//! let hits = RankingEngine::default().rank(&catalog, "weather", 100);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].entry.name(), "WeatherStack");
//! assert_eq!(hits[0].relevance_score, 14);
//! ```

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod tags;

pub mod prelude {
    pub use crate::catalog::entry::CatalogEntry;
    pub use crate::catalog::{Catalog, load_entries, write_json};
    pub use crate::config::{ApiFinderConfig, SearchConfig, TagConfig};
    pub use crate::error::{ApiFinderError, Result};
    pub use crate::search::{
        FieldWeights, RankingEngine, RelevanceScorer, Scheduler, ScoredEntry, SearchController,
        SearchView, VirtualScheduler, WallClockScheduler,
    };
    pub use crate::tags::{CategoryTaxonomy, TagSynthesizer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
