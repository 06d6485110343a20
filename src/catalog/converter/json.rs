//! JSON catalog converter.
//!
//! Reads the enriched catalog format written by `apifinder enrich`:
//! ```json
//! [{"name": "CoinGecko", "description": "Cryptocurrency market data",
//!   "url": "https://coingecko.com", "category": "Finance",
//!   "requires_key": false, "search_tags": "banking crypto"}]
//! ```

use crate::catalog::converter::CatalogConverter;
use crate::catalog::entry::CatalogEntry;
use crate::error::Result;

/// A catalog converter for JSON arrays of entries.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalogConverter;

impl JsonCatalogConverter {
    pub fn new() -> Self {
        JsonCatalogConverter
    }
}

impl CatalogConverter for JsonCatalogConverter {
    fn convert(&self, input: &str) -> Result<Vec<CatalogEntry>> {
        Ok(serde_json::from_str(input)?)
    }
}
