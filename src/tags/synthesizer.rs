//! Tag synthesizer deriving search tags for catalog entries.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::alphabetic::AlphabeticFilter;
use crate::analysis::token_filter::limit::LimitFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::token_filter::strip::PunctuationStripFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::catalog::Catalog;
use crate::catalog::entry::CatalogEntry;
use crate::config::TagConfig;
use crate::tags::taxonomy::CategoryTaxonomy;

/// Derives a sorted, de-duplicated tag set from an entry's category and
/// description.
///
/// Tags are the union of
/// - every synonym the taxonomy lists for the category, and
/// - the first `max_description_tokens` description words that are purely
///   alphabetic and at least `min_token_len` characters long after
///   lower-casing and stripping surrounding punctuation.
///
/// The word cap is applied before de-duplication, so a description that
/// repeats a word contributes fewer distinct tags.
///
/// # Examples
///
/// ```
/// use apifinder::tags::TagSynthesizer;
///
/// let synthesizer = TagSynthesizer::default();
/// let tags = synthesizer.tag_string("Weather", "Real time weather data API");
///
/// assert_eq!(
///     tags,
///     "atmospheric climate data forecast meteorology real temperature time weather"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TagSynthesizer {
    taxonomy: Arc<CategoryTaxonomy>,
    analyzer: PipelineAnalyzer,
    config: TagConfig,
}

impl Default for TagSynthesizer {
    fn default() -> Self {
        Self::new(Arc::new(CategoryTaxonomy::default()), TagConfig::default())
    }
}

impl TagSynthesizer {
    /// Create a synthesizer over an injected taxonomy.
    pub fn new(taxonomy: Arc<CategoryTaxonomy>, config: TagConfig) -> Self {
        let analyzer = Self::description_analyzer(&config);
        TagSynthesizer {
            taxonomy,
            analyzer,
            config,
        }
    }

    /// The analysis pipeline applied to descriptions.
    ///
    /// Punctuation is stripped before the length check, so `"data,"` counts
    /// as the four-letter word `"data"`.
    pub fn description_analyzer(config: &TagConfig) -> PipelineAnalyzer {
        PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(PunctuationStripFilter::with_chars(
                config.strip_chars.iter().copied(),
            )))
            .add_filter(Arc::new(AlphabeticFilter::new(config.min_token_len)))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .add_filter(Arc::new(LimitFilter::new(config.max_description_tokens)))
            .with_name("description")
    }

    pub fn taxonomy(&self) -> &CategoryTaxonomy {
        &self.taxonomy
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Synthesize the tag set for one entry.
    ///
    /// Never fails: an unknown category and a description without qualifying
    /// words simply produce an empty set.
    pub fn synthesize(&self, category: &str, description: &str) -> BTreeSet<String> {
        let mut tags = BTreeSet::new();

        if let Some(synonyms) = self.taxonomy.synonyms(category) {
            tags.extend(synonyms.iter().cloned());
        }

        match self.analyzer.analyze(description) {
            Ok(tokens) => tags.extend(tokens.map(|token| token.text)),
            Err(e) => log::warn!("Skipping description tags: {}", e),
        }

        tags
    }

    /// Synthesize tags and join them with single spaces in sorted order.
    pub fn tag_string(&self, category: &str, description: &str) -> String {
        self.synthesize(category, description)
            .into_iter()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Return a copy of `entry` carrying freshly synthesized tags.
    ///
    /// Any tags already on the entry are replaced.
    pub fn enrich(&self, entry: CatalogEntry) -> CatalogEntry {
        let tags = self.tag_string(entry.category(), entry.description());
        entry.with_search_tags(tags)
    }

    /// Enrich every entry and freeze the result into a [`Catalog`].
    pub fn enrich_all(&self, entries: Vec<CatalogEntry>) -> Catalog {
        let catalog: Catalog = entries.into_iter().map(|entry| self.enrich(entry)).collect();
        log::info!("Synthesized tags for {} catalog entries", catalog.len());
        catalog
    }

    /// Like [`enrich_all`](Self::enrich_all), but keeps tags that entries
    /// already carry and only synthesizes the missing ones.
    pub fn enrich_missing(&self, entries: Vec<CatalogEntry>) -> Catalog {
        let mut synthesized = 0usize;
        let catalog: Catalog = entries
            .into_iter()
            .map(|entry| {
                if entry.search_tags().is_empty() {
                    synthesized += 1;
                    self.enrich(entry)
                } else {
                    entry
                }
            })
            .collect();
        log::info!(
            "Synthesized tags for {} of {} catalog entries",
            synthesized,
            catalog.len()
        );
        catalog
    }
}
