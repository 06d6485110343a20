//! Text analysis for catalog descriptions.
//!
//! Descriptions are turned into search tags by a small pipeline: a tokenizer
//! splits the text, then token filters normalize, validate and cap the tokens.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
