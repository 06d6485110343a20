//! Punctuation strip filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Punctuation stripped from both ends of description words.
pub const DEFAULT_STRIP_CHARS: &[char] = &['.', ',', '!', '?', '(', ')', '[', ']'];

/// A filter that removes leading and trailing punctuation from tokens.
///
/// Only the ends of a token are touched: `"real-time,"` becomes `"real-time"`.
/// A token made entirely of punctuation is stopped.
#[derive(Clone, Debug)]
pub struct PunctuationStripFilter {
    chars: Vec<char>,
}

impl Default for PunctuationStripFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl PunctuationStripFilter {
    /// Create a strip filter for [`DEFAULT_STRIP_CHARS`].
    pub fn new() -> Self {
        Self::with_chars(DEFAULT_STRIP_CHARS.iter().copied())
    }

    /// Create a strip filter for a custom character set.
    pub fn with_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        PunctuationStripFilter {
            chars: chars.into_iter().collect(),
        }
    }

    /// Characters removed from token ends.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Filter for PunctuationStripFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let trimmed = token.text.trim_matches(self.chars.as_slice());
                    if trimmed.is_empty() {
                        token.with_text("").stop()
                    } else {
                        token.with_text(trimmed)
                    }
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}
