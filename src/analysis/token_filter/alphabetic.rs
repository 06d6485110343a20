//! Alphabetic word filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that stops tokens which are too short or contain anything other
/// than alphabetic characters.
///
/// Length is measured in characters, not bytes.
#[derive(Clone, Debug)]
pub struct AlphabeticFilter {
    min_len: usize,
}

impl AlphabeticFilter {
    /// Create a filter keeping alphabetic tokens of at least `min_len` chars.
    pub fn new(min_len: usize) -> Self {
        AlphabeticFilter { min_len }
    }

    /// Minimum accepted token length.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Whether `word` passes this filter.
    pub fn accepts(&self, word: &str) -> bool {
        !word.is_empty()
            && word.chars().count() >= self.min_len
            && word.chars().all(char::is_alphabetic)
    }
}

impl Filter for AlphabeticFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() || self.accepts(&token.text) {
                    token
                } else {
                    token.stop()
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}
