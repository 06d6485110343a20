//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline. Only whitespace
//! tokenization is provided: descriptions are short English blurbs and
//! language-aware segmentation is out of scope.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use apifinder::analysis::token::{Token, TokenStream};
/// use apifinder::analysis::tokenizer::Tokenizer;
/// use apifinder::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
///
/// let tokens: Vec<_> = CommaTokenizer.tokenize("a, b").unwrap().collect();
/// assert_eq!(tokens[1].text, "b");
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
