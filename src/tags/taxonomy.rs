//! Category taxonomy mapping categories to domain synonyms.

use std::collections::HashMap;
use std::path::Path;

use ahash::AHashMap;
use serde::Deserialize;

use crate::error::{ApiFinderError, Result};

/// Built-in category table.
const DEFAULT_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "finance",
        &[
            "money",
            "trading",
            "investment",
            "market",
            "stock",
            "crypto",
            "currency",
            "banking",
        ],
    ),
    (
        "weather",
        &[
            "climate",
            "forecast",
            "temperature",
            "meteorology",
            "atmospheric",
        ],
    ),
    (
        "sports",
        &[
            "game",
            "team",
            "player",
            "league",
            "score",
            "match",
            "tournament",
        ],
    ),
    (
        "demographics",
        &[
            "population",
            "census",
            "statistics",
            "geographic",
            "social",
        ],
    ),
    (
        "health",
        &[
            "medical",
            "healthcare",
            "disease",
            "fitness",
            "nutrition",
            "wellness",
        ],
    ),
    (
        "entertainment",
        &[
            "movies",
            "music",
            "games",
            "media",
            "television",
            "streaming",
        ],
    ),
];

/// Immutable mapping from a case-folded category to its synonym list.
///
/// A taxonomy is built once and handed to the
/// [`TagSynthesizer`](crate::tags::TagSynthesizer), so tests and callers can
/// substitute their own table.
///
/// The JSON form is an object of category to synonym array:
///
/// ```json
/// {"finance": ["money", "trading"], "weather": ["climate"]}
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "HashMap<String, Vec<String>>")]
pub struct CategoryTaxonomy {
    categories: AHashMap<String, Vec<String>>,
}

impl Default for CategoryTaxonomy {
    fn default() -> Self {
        let mut taxonomy = Self::empty();
        for (category, synonyms) in DEFAULT_TAXONOMY {
            taxonomy.insert(*category, synonyms.iter().copied());
        }
        taxonomy
    }
}

impl From<HashMap<String, Vec<String>>> for CategoryTaxonomy {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        Self::from_map(map)
    }
}

impl CategoryTaxonomy {
    /// A taxonomy with no categories.
    pub fn empty() -> Self {
        CategoryTaxonomy {
            categories: AHashMap::new(),
        }
    }

    /// Build a taxonomy from any category to synonyms mapping.
    pub fn from_map<I, K, V, S>(map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut taxonomy = Self::empty();
        for (category, synonyms) in map {
            taxonomy.insert(category, synonyms);
        }
        taxonomy
    }

    /// Load a taxonomy from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiFinderError::config(format!(
                "Failed to read taxonomy file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let taxonomy: CategoryTaxonomy = serde_json::from_str(&content).map_err(|e| {
            ApiFinderError::config(format!(
                "Failed to parse taxonomy JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        log::debug!(
            "Loaded taxonomy with {} categories from {}",
            taxonomy.len(),
            path.display()
        );
        Ok(taxonomy)
    }

    /// Add or replace a category.
    ///
    /// Category and synonyms are case-folded; blank synonyms and repeats are
    /// dropped, first occurrence wins.
    pub fn insert<K, V, S>(&mut self, category: K, synonyms: V)
    where
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<String> = Vec::new();
        for synonym in synonyms {
            let synonym = synonym.as_ref().trim().to_lowercase();
            if !synonym.is_empty() && !list.contains(&synonym) {
                list.push(synonym);
            }
        }
        self.categories
            .insert(category.as_ref().trim().to_lowercase(), list);
    }

    /// Synonyms for `category`, matched case-insensitively.
    pub fn synonyms(&self, category: &str) -> Option<&[String]> {
        self.categories
            .get(category.trim().to_lowercase().as_str())
            .map(Vec::as_slice)
    }

    /// Known categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.categories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
