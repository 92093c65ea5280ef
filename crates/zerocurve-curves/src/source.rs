//! Quote sources.
//!
//! A source hands over raw rows. File formats live in other crates; the
//! curves only ever see [`RawQuote`] values.

use thiserror::Error;

use crate::quotes::RawQuote;

/// Errors raised while reading quotes from a source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Underlying I/O failed.
    #[error("IO error: {0}")]
    Io(String),

    /// The source was read but its contents are malformed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The source does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            SourceError::NotFound(e.to_string())
        } else {
            SourceError::Io(e.to_string())
        }
    }
}

/// Provider of quote rows.
pub trait QuoteSource: Send + Sync {
    /// Human-readable name, used in log lines.
    fn source_name(&self) -> &str;

    /// Reads every row the source holds.
    fn load(&self) -> Result<Vec<RawQuote>, SourceError>;
}

impl QuoteSource for Vec<RawQuote> {
    fn source_name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> Result<Vec<RawQuote>, SourceError> {
        Ok(self.clone())
    }
}

impl<S: QuoteSource + ?Sized> QuoteSource for Box<S> {
    fn source_name(&self) -> &str {
        (**self).source_name()
    }

    fn load(&self) -> Result<Vec<RawQuote>, SourceError> {
        (**self).load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source() {
        let rows = vec![RawQuote::new("3 MO", "6.5", "15.10.2021", "15.07.2021")];
        assert_eq!(rows.source_name(), "memory");
        assert_eq!(rows.load().unwrap(), rows);
    }

    #[test]
    fn test_io_not_found_maps() {
        let err = SourceError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(err, SourceError::NotFound(_)));

        let err = SourceError::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(matches!(err, SourceError::Io(_)));
    }
}
