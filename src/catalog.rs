//! In-memory API catalog.
//!
//! A [`Catalog`] is the ordered, read-only collection the ranking engine
//! searches. Its order is the ingestion order, which is also the tie-break
//! order for equal relevance scores.

pub mod converter;
pub mod entry;

use std::path::Path;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::catalog::converter::CatalogConverter;
use crate::catalog::converter::csv::CsvCatalogConverter;
use crate::catalog::converter::json::JsonCatalogConverter;
use crate::catalog::entry::CatalogEntry;
use crate::error::{ApiFinderError, Result};

/// An ordered collection of shared, immutable catalog entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<Arc<CatalogEntry>>,
}

impl Catalog {
    /// Create a catalog from owned entries, preserving their order.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        entries.into_iter().collect()
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[Arc<CatalogEntry>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<CatalogEntry>> {
        self.entries.iter()
    }

    /// The first `size` entries, unranked, in catalog order.
    pub fn head(&self, size: usize) -> &[Arc<CatalogEntry>] {
        &self.entries[..size.min(self.entries.len())]
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Catalog {
            entries: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Read raw catalog entries from a CSV or JSON file.
///
/// Files ending in `.csv` are read as CSV, everything else as a JSON array.
/// Any failure is reported as an unavailable catalog.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogEntry>> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|e| {
        ApiFinderError::catalog(format!("Failed to read catalog '{}': {}", path.display(), e))
    })?;

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let entries = if is_csv {
        CsvCatalogConverter::new().convert(&input)
    } else {
        JsonCatalogConverter::new().convert(&input)
    }
    .map_err(|e| match e {
        ApiFinderError::Catalog(_) => e,
        other => ApiFinderError::catalog(format!(
            "Failed to decode catalog '{}': {}",
            path.display(),
            other
        )),
    })?;

    log::info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Write a catalog as a JSON array.
pub fn write_json<W: std::io::Write>(catalog: &Catalog, writer: W, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, catalog)?;
    } else {
        serde_json::to_writer(writer, catalog)?;
    }
    Ok(())
}
