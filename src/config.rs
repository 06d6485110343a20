//! Configuration for tag synthesis, scoring and the search controller.
//!
//! Every value has a built-in default; a JSON file can override any subset:
//!
//! ```json
//! {"search": {"debounce_ms": 200}, "weights": {"description": 1}}
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::strip::DEFAULT_STRIP_CHARS;
use crate::error::{ApiFinderError, Result};
use crate::search::scorer::FieldWeights;

/// Maximum number of description words turned into tags.
pub const DEFAULT_MAX_DESCRIPTION_TOKENS: usize = 5;
/// Minimum length, in characters, of a description word used as a tag.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 4;
/// Quiet period after the last keystroke before ranking runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;
/// Queries shorter than this (after trimming) do not trigger ranking.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
/// Entries shown, unranked, when the query is empty.
pub const DEFAULT_VIEW_SIZE: usize = 50;
/// Maximum number of ranked results displayed.
pub const DEFAULT_RESULT_LIMIT: usize = 100;

/// Tag synthesis settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    pub max_description_tokens: usize,
    pub min_token_len: usize,
    /// Punctuation stripped from both ends of description words.
    pub strip_chars: Vec<char>,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            max_description_tokens: DEFAULT_MAX_DESCRIPTION_TOKENS,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            strip_chars: DEFAULT_STRIP_CHARS.to_vec(),
        }
    }
}

/// Incremental search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub min_query_len: usize,
    pub default_view_size: usize,
    pub result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            default_view_size: DEFAULT_VIEW_SIZE,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Debounce delay as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiFinderConfig {
    pub tags: TagConfig,
    pub weights: FieldWeights,
    pub search: SearchConfig,
}

impl ApiFinderConfig {
    /// Load configuration from a JSON file. Missing keys keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiFinderError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: ApiFinderConfig = serde_json::from_str(&content).map_err(|e| {
            ApiFinderError::config(format!(
                "Failed to parse config JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the controller cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.search.min_query_len == 0 {
            return Err(ApiFinderError::config(
                "search.min_query_len must be at least 1",
            ));
        }
        if self.tags.strip_chars.iter().any(|c| c.is_alphabetic()) {
            return Err(ApiFinderError::config(
                "tags.strip_chars must not contain letters",
            ));
        }
        self.weights.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiFinderConfig::default();

        assert_eq!(config.tags.max_description_tokens, 5);
        assert_eq!(config.tags.min_token_len, 4);
        assert_eq!(config.search.debounce(), Duration::from_millis(150));
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.search.default_view_size, 50);
        assert_eq!(config.search.result_limit, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"search": {{"debounce_ms": 200}}, "weights": {{"description": 1}}}}"#
        )
        .unwrap();

        let config = ApiFinderConfig::load_from_file(file.path()).unwrap();

        assert_eq!(config.search.debounce_ms, 200);
        assert_eq!(config.search.result_limit, 100);
        assert_eq!(config.weights.description, 1);
        assert_eq!(config.weights.name_exact, 10);
        assert_eq!(config.tags, TagConfig::default());
    }

    #[test]
    fn test_validation_errors() {
        let mut config = ApiFinderConfig::default();
        config.search.min_query_len = 0;
        assert!(matches!(config.validate(), Err(ApiFinderError::Config(_))));

        let mut config = ApiFinderConfig::default();
        config.tags.strip_chars.push('a');
        assert!(config.validate().is_err());

        let config: ApiFinderConfig =
            serde_json::from_str(r#"{"weights": {"description": 0}}"#).unwrap();
        assert!(matches!(config.validate(), Err(ApiFinderError::Config(_))));

        let config: ApiFinderConfig =
            serde_json::from_str(r#"{"weights": {"name_contains": 4294967295, "category": 4}}"#)
                .unwrap();
        assert!(matches!(config.validate(), Err(ApiFinderError::Config(_))));
    }

    #[test]
    fn test_overflowing_weights_file_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"weights": {{"name_exact": 4294967295}}}}"#).unwrap();

        let err = ApiFinderConfig::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn test_missing_file() {
        let err = ApiFinderConfig::load_from_file("/nonexistent/apifinder.json").unwrap_err();
        assert!(matches!(err, ApiFinderError::Config(_)));
    }
}
