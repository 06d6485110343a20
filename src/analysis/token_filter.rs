//! Token filter implementations for token transformation.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`strip::PunctuationStripFilter`] - Strips surrounding punctuation
//! - [`alphabetic::AlphabeticFilter`] - Stops short or non-alphabetic tokens
//! - [`remove_empty::RemoveEmptyFilter`] - Removes empty and stopped tokens
//! - [`limit::LimitFilter`] - Limits number of tokens
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → Strip → Alphabetic → RemoveEmpty → Limit
//! ```
//!
//! Filters that reject a token mark it as stopped instead of dropping it, so
//! the limit only counts tokens that survived every earlier filter once
//! `RemoveEmptyFilter` has run.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphabetic;
pub mod limit;
pub mod lowercase;
pub mod remove_empty;
pub mod strip;
