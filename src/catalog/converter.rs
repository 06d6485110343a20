//! Converters from catalog file formats into [`CatalogEntry`] values.

use crate::catalog::entry::CatalogEntry;
use crate::error::Result;

pub mod csv;
pub mod json;

/// A trait for decoding a catalog file's contents into entries.
///
/// Entries are returned in file order.
pub trait CatalogConverter {
    /// Decode `input` into catalog entries.
    fn convert(&self, input: &str) -> Result<Vec<CatalogEntry>>;
}
