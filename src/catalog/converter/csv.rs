//! CSV catalog converter.
//!
//! The first row is the header:
//! ```csv
//! name,description,url,category,requires_key
//! CoinGecko,Cryptocurrency market data,https://coingecko.com,Finance,No
//! ```
//!
//! `name` is required. `description`, `url`, `category`, `requires_key` and
//! `search_tags` are optional and default to empty. `requires_key` holds
//! free-form auth text and is normalized with
//! [`normalize_requires_key`](crate::catalog::entry::normalize_requires_key).

use csv::{ReaderBuilder, StringRecord};

use crate::catalog::converter::CatalogConverter;
use crate::catalog::entry::{CatalogEntry, normalize_requires_key};
use crate::error::{ApiFinderError, Result};

/// A catalog converter for CSV input.
///
/// Records that cannot be decoded or have an empty name are skipped with a
/// warning instead of failing the whole catalog.
#[derive(Debug, Clone)]
pub struct CsvCatalogConverter {
    /// CSV delimiter character (default: ',')
    delimiter: u8,
    /// Whether to trim whitespace from fields
    trim: bool,
}

impl Default for CsvCatalogConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Column positions resolved from the header row.
struct Columns {
    name: usize,
    description: Option<usize>,
    url: Option<usize>,
    category: Option<usize>,
    requires_key: Option<usize>,
    search_tags: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(wanted))
        };

        let name = find("name")
            .ok_or_else(|| ApiFinderError::catalog("CSV header has no 'name' column"))?;

        Ok(Columns {
            name,
            description: find("description"),
            url: find("url"),
            category: find("category"),
            requires_key: find("requires_key").or_else(|| find("auth")),
            search_tags: find("search_tags"),
        })
    }
}

impl CsvCatalogConverter {
    /// Create a new CSV converter with comma delimiter.
    pub fn new() -> Self {
        CsvCatalogConverter {
            delimiter: b',',
            trim: true,
        }
    }

    /// Set a custom delimiter character. Only ASCII delimiters are supported.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(ApiFinderError::invalid_argument(format!(
                "CSV delimiter must be an ASCII character, got {delimiter:?}"
            )));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    /// Set whether to trim whitespace from fields.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    fn entry_from_record(columns: &Columns, record: &StringRecord) -> Option<CatalogEntry> {
        let field = |index: Option<usize>| index.and_then(|i| record.get(i)).unwrap_or("");

        let name = field(Some(columns.name));
        if name.is_empty() {
            return None;
        }

        Some(
            CatalogEntry::new(name)
                .with_description(field(columns.description))
                .with_url(field(columns.url))
                .with_category(field(columns.category))
                .with_requires_key(normalize_requires_key(field(columns.requires_key)))
                .with_search_tags(field(columns.search_tags)),
        )
    }
}

impl CatalogConverter for CsvCatalogConverter {
    fn convert(&self, input: &str) -> Result<Vec<CatalogEntry>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .flexible(true)
            .from_reader(input.as_bytes());

        let headers = reader.headers()?.clone();

        if headers.is_empty() {
            return Err(ApiFinderError::catalog("CSV header is empty"));
        }

        let columns = Columns::resolve(&headers)?;
        let mut entries = Vec::new();

        for (row, record) in reader.records().enumerate() {
            // Header is line 1.
            let line = row + 2;
            match record {
                Ok(record) => match Self::entry_from_record(&columns, &record) {
                    Some(entry) => entries.push(entry),
                    None => log::warn!("Skipping CSV line {}: empty name", line),
                },
                Err(e) => log::warn!("Skipping CSV line {}: {}", line, e),
            }
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_basic_parsing() {
        let csv = "name,description,url,category,requires_key\n\
                   CoinGecko,Cryptocurrency market data,https://coingecko.com,Finance,No\n\
                   WeatherStack,Real time weather data API,https://weatherstack.com,Weather,apiKey";
        let entries = CsvCatalogConverter::new().convert(csv).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name(), "CoinGecko");
        assert!(!entries[0].requires_key());
        assert_eq!(entries[1].category(), "Weather");
        assert!(entries[1].requires_key());
        assert_eq!(entries[1].search_tags(), "");
    }

    #[test]
    fn test_csv_quoted_fields() {
        let csv = r#"name,description
"Open, Data","An API about cities, towns""#;
        let entries = CsvCatalogConverter::new().convert(csv).unwrap();

        assert_eq!(entries[0].name(), "Open, Data");
        assert_eq!(entries[0].description(), "An API about cities, towns");
    }

    #[test]
    fn test_csv_missing_optional_columns() {
        let csv = "name\nLonely";
        let entries = CsvCatalogConverter::new().convert(csv).unwrap();

        assert_eq!(entries[0].name(), "Lonely");
        assert_eq!(entries[0].description(), "");
        assert!(!entries[0].requires_key());
    }

    #[test]
    fn test_csv_short_record_uses_defaults() {
        let csv = "name,description,url,category\nShort,Only a description";
        let entries = CsvCatalogConverter::new().convert(csv).unwrap();

        assert_eq!(entries[0].description(), "Only a description");
        assert_eq!(entries[0].category(), "");
    }

    #[test]
    fn test_csv_skips_empty_names() {
        let csv = "name,category\n,Finance\nKept,Weather";
        let entries = CsvCatalogConverter::new().convert(csv).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "Kept");
    }

    #[test]
    fn test_csv_without_name_column() {
        let csv = "title,category\nX,Finance";
        let err = CsvCatalogConverter::new().convert(csv).unwrap_err();
        assert!(matches!(err, ApiFinderError::Catalog(_)));
    }

    #[test]
    fn test_csv_empty_input() {
        assert!(CsvCatalogConverter::new().convert("").is_err());
    }

    #[test]
    fn test_csv_custom_delimiter_and_trim() {
        let csv = "name\tcategory\n  Tabbed  \t Sports ";
        let entries = CsvCatalogConverter::new()
            .with_delimiter('\t')
            .unwrap()
            .with_trim(true)
            .convert(csv)
            .unwrap();

        assert_eq!(entries[0].name(), "Tabbed");
        assert_eq!(entries[0].category(), "Sports");
    }

    #[test]
    fn test_csv_auth_column_alias() {
        let csv = "name,auth\nKeyed,OAuth\nOpen,";
        let entries = CsvCatalogConverter::new().convert(csv).unwrap();

        assert!(entries[0].requires_key());
        assert!(!entries[1].requires_key());
    }

    #[test]
    fn test_csv_non_ascii_delimiter_is_rejected() {
        let err = CsvCatalogConverter::new().with_delimiter('§').unwrap_err();
        assert!(matches!(err, ApiFinderError::InvalidArgument(_)));

        assert!(CsvCatalogConverter::new().with_delimiter(';').is_ok());
    }
}
