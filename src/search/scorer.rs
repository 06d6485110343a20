//! Weighted field scoring of catalog entries.
//!
//! | Field        | Exact equality | Contains term |
//! |--------------|----------------|---------------|
//! | name         | 10             | 5             |
//! | category     |                | 4             |
//! | search tags  |                | 3             |
//! | description  |                | 2             |
//!
//! The name component is either the exact-match weight or the contains
//! weight, never both. All other fields add their weight independently.

use serde::{Deserialize, Serialize};

use crate::catalog::entry::CatalogEntry;
use crate::error::{ApiFinderError, Result};

/// Per-field scoring weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    /// Name equals the term (case-insensitive).
    pub name_exact: u32,
    /// Name contains the term but is not equal to it.
    pub name_contains: u32,
    pub category: u32,
    pub tags: u32,
    pub description: u32,
}

impl FieldWeights {
    /// Highest score an entry can reach, or `None` if it does not fit a `u32`.
    pub fn max_total(&self) -> Option<u32> {
        self.name_exact
            .max(self.name_contains)
            .checked_add(self.category)?
            .checked_add(self.tags)?
            .checked_add(self.description)
    }

    /// Every weight must be positive, so that any field match scores above
    /// zero, and the largest total must fit a `u32`.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("name_exact", self.name_exact),
            ("name_contains", self.name_contains),
            ("category", self.category),
            ("tags", self.tags),
            ("description", self.description),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, weight)| *weight == 0) {
            return Err(ApiFinderError::config(format!(
                "weights.{field} must be at least 1"
            )));
        }
        if self.max_total().is_none() {
            return Err(ApiFinderError::config(
                "weights are too large: the maximum score overflows",
            ));
        }
        Ok(())
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            name_exact: 10,
            name_contains: 5,
            category: 4,
            tags: 3,
            description: 2,
        }
    }
}

/// Per-field contributions to a relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub name: u32,
    pub category: u32,
    pub tags: u32,
    pub description: u32,
}

impl ScoreBreakdown {
    /// Sum of all field contributions.
    pub fn total(&self) -> u32 {
        self.name
            .saturating_add(self.category)
            .saturating_add(self.tags)
            .saturating_add(self.description)
    }
}

/// Scores entries against an already lower-cased, trimmed query term.
///
/// # Examples
///
/// ```
/// use apifinder::catalog::entry::CatalogEntry;
/// use apifinder::search::scorer::RelevanceScorer;
///
/// let entry = CatalogEntry::new("WeatherStack")
///     .with_category("Weather")
///     .with_description("Real time weather data API")
///     .with_search_tags("climate forecast real time weather");
///
/// assert_eq!(RelevanceScorer::default().score(&entry, "weather"), 14);
/// assert_eq!(RelevanceScorer::default().score(&entry, "weatherstack"), 10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceScorer {
    weights: FieldWeights,
}

impl RelevanceScorer {
    pub fn new(weights: FieldWeights) -> Self {
        RelevanceScorer { weights }
    }

    pub fn weights(&self) -> &FieldWeights {
        &self.weights
    }

    /// Total relevance score of `entry` for `term`. Zero means no match.
    pub fn score(&self, entry: &CatalogEntry, term: &str) -> u32 {
        self.explain(entry, term).total()
    }

    /// Score `entry` for `term`, keeping each field's contribution.
    pub fn explain(&self, entry: &CatalogEntry, term: &str) -> ScoreBreakdown {
        let name = entry.name().to_lowercase();
        let name = if name == term {
            self.weights.name_exact
        } else if name.contains(term) {
            self.weights.name_contains
        } else {
            0
        };

        let tags = entry.search_tags();

        ScoreBreakdown {
            name,
            category: weight_if(contains(entry.category(), term), self.weights.category),
            tags: weight_if(!tags.is_empty() && contains(tags, term), self.weights.tags),
            description: weight_if(
                contains(entry.description(), term),
                self.weights.description,
            ),
        }
    }
}

fn contains(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(term)
}

fn weight_if(matched: bool, weight: u32) -> u32 {
    if matched { weight } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather_stack() -> CatalogEntry {
        CatalogEntry::new("WeatherStack")
            .with_category("Weather")
            .with_description("Real time weather data API")
            .with_search_tags("climate forecast real time weather")
    }

    fn coin_gecko() -> CatalogEntry {
        CatalogEntry::new("CoinGecko")
            .with_category("Finance")
            .with_description("Cryptocurrency market data")
            .with_search_tags("banking crypto currency cryptocurrency market")
    }

    #[test]
    fn test_all_fields_contribute() {
        let breakdown = RelevanceScorer::default().explain(&weather_stack(), "weather");

        assert_eq!(
            breakdown,
            ScoreBreakdown {
                name: 5,
                category: 4,
                tags: 3,
                description: 2
            }
        );
        assert_eq!(breakdown.total(), 14);
    }

    #[test]
    fn test_tags_and_description_substrings() {
        let scorer = RelevanceScorer::default();
        assert_eq!(scorer.score(&coin_gecko(), "crypto"), 5);
        assert_eq!(scorer.score(&weather_stack(), "crypto"), 0);
    }

    #[test]
    fn test_exact_name_is_exclusive() {
        let scorer = RelevanceScorer::default();
        let breakdown = scorer.explain(&coin_gecko(), "coingecko");

        assert_eq!(breakdown.name, 10);
        assert_eq!(breakdown.total(), 10);
    }

    #[test]
    fn test_exact_name_plus_other_fields() {
        let entry = CatalogEntry::new("Weather")
            .with_category("Weather")
            .with_description("weather");

        assert_eq!(RelevanceScorer::default().score(&entry, "weather"), 10 + 4 + 2);
    }

    #[test]
    fn test_no_match_is_zero() {
        assert_eq!(RelevanceScorer::default().score(&weather_stack(), "sports"), 0);
    }

    #[test]
    fn test_empty_fields_never_match() {
        let entry = CatalogEntry::new("Bare");
        let breakdown = RelevanceScorer::default().explain(&entry, "bar");

        assert_eq!(breakdown.name, 5);
        assert_eq!(breakdown.category, 0);
        assert_eq!(breakdown.tags, 0);
        assert_eq!(breakdown.description, 0);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let entry = CatalogEntry::new("NASA").with_category("SCIENCE");
        let scorer = RelevanceScorer::default();

        assert_eq!(scorer.score(&entry, "nasa"), 10);
        assert_eq!(scorer.score(&entry, "scien"), 4);
    }

    #[test]
    fn test_custom_weights() {
        let weights = FieldWeights {
            description: 7,
            ..FieldWeights::default()
        };
        let scorer = RelevanceScorer::new(weights);

        assert_eq!(scorer.weights().description, 7);
        assert_eq!(scorer.score(&coin_gecko(), "market"), 3 + 7);
    }

    #[test]
    fn test_score_is_zero_iff_no_field_contains_term() {
        let scorer = RelevanceScorer::default();
        let entries = [weather_stack(), coin_gecko(), CatalogEntry::new("x")];

        for entry in &entries {
            for term in ["weather", "crypto", "data", "api", "zzz", "x", "real time"] {
                let any = [
                    entry.name(),
                    entry.category(),
                    entry.search_tags(),
                    entry.description(),
                ]
                .iter()
                .any(|field| !field.is_empty() && field.to_lowercase().contains(term));

                assert_eq!(scorer.score(entry, term) == 0, !any, "{} / {}", entry.name(), term);
            }
        }
    }

    #[test]
    fn test_weight_validation() {
        assert!(FieldWeights::default().validate().is_ok());
        assert_eq!(FieldWeights::default().max_total(), Some(10 + 4 + 3 + 2));

        let zero = FieldWeights {
            description: 0,
            ..FieldWeights::default()
        };
        assert!(matches!(zero.validate(), Err(ApiFinderError::Config(_))));

        let huge = FieldWeights {
            name_contains: u32::MAX,
            ..FieldWeights::default()
        };
        assert_eq!(huge.max_total(), None);
        assert!(huge.validate().is_err());
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let scorer = RelevanceScorer::new(FieldWeights {
            name_contains: u32::MAX,
            ..FieldWeights::default()
        });
        assert_eq!(scorer.score(&weather_stack(), "weat"), u32::MAX);
    }
}
