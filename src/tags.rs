//! Search tag synthesis.
//!
//! Each catalog entry gets a small set of search tags derived from its
//! category (through a [`CategoryTaxonomy`]) and the first few meaningful
//! words of its description.

pub mod synthesizer;
pub mod taxonomy;

pub use synthesizer::TagSynthesizer;
pub use taxonomy::CategoryTaxonomy;
