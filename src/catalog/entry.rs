//! Catalog entry type.

use serde::{Deserialize, Deserializer, Serialize};

/// Auth-field values that mean "no key required".
const NO_KEY_VALUES: &[&str] = &["", "no", "none", "null", "false"];

/// Normalize free-form auth text into a "requires an API key" flag.
///
/// Upstream feeds describe authentication with strings such as `"apiKey"`,
/// `"OAuth"`, `"No"` or an empty cell. Only the empty string and the
/// explicit negatives (case-insensitive, surrounding whitespace ignored)
/// mean no key is needed.
///
/// # Examples
///
/// ```
/// use apifinder::catalog::entry::normalize_requires_key;
///
/// assert!(!normalize_requires_key(""));
/// assert!(!normalize_requires_key(" None "));
/// assert!(normalize_requires_key("apiKey"));
/// assert!(normalize_requires_key("OAuth"));
/// ```
pub fn normalize_requires_key(auth: &str) -> bool {
    let auth = auth.trim().to_lowercase();
    !NO_KEY_VALUES.contains(&auth.as_str())
}

/// One API or data-source listing.
///
/// Entries are built once at ingestion, enriched once with search tags, and
/// are read-only afterwards. Ranking hands out shared references to them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogEntry {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    category: String,
    #[serde(default, deserialize_with = "deserialize_requires_key")]
    requires_key: bool,
    #[serde(default)]
    search_tags: String,
}

impl CatalogEntry {
    /// Create an entry without search tags.
    pub fn new<S: Into<String>>(name: S) -> Self {
        CatalogEntry {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    /// Set the documentation URL.
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = url.into();
        self
    }

    /// Set the category.
    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = category.into();
        self
    }

    /// Set whether an API key is required.
    pub fn with_requires_key(mut self, requires_key: bool) -> Self {
        self.requires_key = requires_key;
        self
    }

    /// Set the space-joined search tag string.
    pub fn with_search_tags<S: Into<String>>(mut self, search_tags: S) -> Self {
        self.search_tags = search_tags.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn requires_key(&self) -> bool {
        self.requires_key
    }

    /// Space-joined, sorted tag string. Empty when the entry has no tags.
    pub fn search_tags(&self) -> &str {
        &self.search_tags
    }

    /// Iterate over the individual search tags.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.search_tags.split_whitespace()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRequiresKey {
    Flag(bool),
    Text(String),
}

fn deserialize_requires_key<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawRequiresKey>::deserialize(deserializer)?;
    Ok(match raw {
        None => false,
        Some(RawRequiresKey::Flag(flag)) => flag,
        Some(RawRequiresKey::Text(text)) => normalize_requires_key(&text),
    })
}
