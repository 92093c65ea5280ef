//! File-based quote sources.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use zerocurve_curves::quotes::RawQuote;
use zerocurve_curves::source::{QuoteSource, SourceError};

fn ensure_exists(path: &Path) -> Result<(), SourceError> {
    if path.exists() {
        Ok(())
    } else {
        Err(SourceError::NotFound(path.display().to_string()))
    }
}

// =============================================================================
// CSV QUOTE SOURCE
// =============================================================================

/// CSV-based quote source.
///
/// The first line holds the column names `Tenor`, `Rate`, `Maturity` and
/// `Settlement_Date`. Other columns are ignored; absent ones leave the
/// field missing so validation can report them.
#[derive(Debug, Clone)]
pub struct CsvQuoteSource {
    file_path: PathBuf,
    name: String,
    delimiter: u8,
}

impl CsvQuoteSource {
    /// Create a new CSV quote source with a comma delimiter.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        Self {
            name: file_path.display().to_string(),
            file_path,
            delimiter: b',',
        }
    }

    /// Use a different field delimiter, e.g. `b';'` for spreadsheet exports
    /// that write decimal commas.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// The file read by this source.
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl QuoteSource for CsvQuoteSource {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<RawQuote>, SourceError> {
        ensure_exists(&self.file_path)?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_path(&self.file_path)
            .map_err(|e| SourceError::Io(e.to_string()))?;

        let rows = reader
            .deserialize()
            .collect::<Result<Vec<RawQuote>, _>>()
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        log::debug!("read {} rows from {}", rows.len(), self.name);
        Ok(rows)
    }
}

// =============================================================================
// JSON QUOTE SOURCE
// =============================================================================

/// A JSON value that may be written as a string or a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "{s}"),
            Scalar::Number(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuoteRecord {
    #[serde(rename = "Tenor")]
    tenor: Option<Scalar>,
    #[serde(rename = "Rate")]
    rate: Option<Scalar>,
    #[serde(rename = "Maturity")]
    maturity: Option<Scalar>,
    #[serde(rename = "Settlement_Date")]
    settlement_date: Option<Scalar>,
}

impl From<QuoteRecord> for RawQuote {
    fn from(record: QuoteRecord) -> Self {
        let text = |value: Option<Scalar>| value.map(|v| v.to_string());
        RawQuote {
            tenor: text(record.tenor),
            rate: text(record.rate),
            maturity: text(record.maturity),
            settlement_date: text(record.settlement_date),
        }
    }
}

/// JSON-based quote source: an array of row objects.
///
/// ```json
/// [{"Tenor": "3 MO", "Rate": 6.673567, "Maturity": "15.10.2021", "Settlement_Date": "15.07.2021"}]
/// ```
#[derive(Debug, Clone)]
pub struct JsonQuoteSource {
    file_path: PathBuf,
    name: String,
}

impl JsonQuoteSource {
    /// Create a new JSON quote source.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        Self {
            name: file_path.display().to_string(),
            file_path,
        }
    }
}

impl QuoteSource for JsonQuoteSource {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<RawQuote>, SourceError> {
        ensure_exists(&self.file_path)?;

        let content = std::fs::read_to_string(&self.file_path)?;
        let records: Vec<QuoteRecord> =
            serde_json::from_str(&content).map_err(|e| SourceError::Parse(e.to_string()))?;

        log::debug!("read {} rows from {}", records.len(), self.name);
        Ok(records.into_iter().map(RawQuote::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display() {
        let rows: Vec<QuoteRecord> =
            serde_json::from_str(r#"[{"Tenor": "3 MO", "Rate": 6.5}, {"Rate": "6,5"}]"#).unwrap();
        let rows: Vec<RawQuote> = rows.into_iter().map(RawQuote::from).collect();

        assert_eq!(rows[0].rate.as_deref(), Some("6.5"));
        assert_eq!(rows[0].maturity, None);
        assert_eq!(rows[1].rate.as_deref(), Some("6,5"));
        assert_eq!(rows[1].tenor, None);
    }

    #[test]
    fn test_missing_file() {
        let source = CsvQuoteSource::new("/definitely/not/here.csv");
        assert!(matches!(source.load(), Err(SourceError::NotFound(_))));

        let source = JsonQuoteSource::new("/definitely/not/here.json");
        assert!(matches!(source.load(), Err(SourceError::NotFound(_))));
    }
}
