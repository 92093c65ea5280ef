//! # Zerocurve Ext File
//!
//! File-based quote sources for Zerocurve.
//!
//! This crate provides:
//! - CSV-based quote source, with a configurable delimiter
//! - JSON-based quote source
//! - [`open_quote_source`], which picks one by file extension

#![warn(missing_docs)]
#![warn(clippy::all)]

mod market_data;

pub use market_data::*;

use std::path::Path;

use zerocurve_curves::source::QuoteSource;

/// Opens a quote file, choosing the reader from its extension.
///
/// `.json` files are read as JSON, `.tsv` files as tab-separated CSV, and
/// anything else as CSV with `delimiter` (comma when `None`).
pub fn open_quote_source(path: impl AsRef<Path>, delimiter: Option<u8>) -> Box<dyn QuoteSource> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => Box::new(JsonQuoteSource::new(path)),
        Some("tsv") => Box::new(CsvQuoteSource::new(path).with_delimiter(delimiter.unwrap_or(b'\t'))),
        _ => Box::new(CsvQuoteSource::new(path).with_delimiter(delimiter.unwrap_or(b','))),
    }
}
