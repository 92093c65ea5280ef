//! Error types for curve operations.
//!
//! Every failure falls in one of two classes, see [`ErrorKind`]: bad input
//! rejected while a curve is being built, or a query outside the domain the
//! curve was built for.

use thiserror::Error;
use zerocurve_core::CoreError;
use zerocurve_math::MathError;

use crate::source::SourceError;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Broad classification of a [`CurveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The quote table, a tenor label or a date could not be used.
    InvalidInput,
    /// A day count or anchor date lies outside a curve's domain.
    Range,
}

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// No quotes were supplied.
    #[error("Empty dataset: no quotes supplied")]
    EmptyDataset,

    /// Required fields are missing from at least one row.
    #[error("Invalid columns: missing {}", .missing.join(", "))]
    InvalidColumns {
        /// Names of the fields missing in any row.
        missing: Vec<String>,
    },

    /// Quotes carry more than one settlement date.
    #[error("Rates from different dates: {}", .dates.join(", "))]
    MixedSettlementDates {
        /// The distinct settlement dates found.
        dates: Vec<String>,
    },

    /// Rate or date values that cannot be coerced.
    #[error("Invalid type: {}", .issues.join("; "))]
    InvalidType {
        /// One entry per offending value.
        issues: Vec<String>,
    },

    /// A tenor converts to a non-positive day count.
    #[error("Invalid tenor '{label}': {days} days")]
    InvalidTenorDays {
        /// The tenor label.
        label: String,
        /// Its day count.
        days: i64,
    },

    /// Two quotes map to the same day count.
    #[error("Duplicate tenor: '{first}' and '{second}' both map to {days} days")]
    DuplicateTenor {
        /// The shared day count.
        days: i64,
        /// Label of the first quote.
        first: String,
        /// Label of the second quote.
        second: String,
    },

    /// The quote source could not be read.
    #[error("Quote source error: {0}")]
    Source(#[from] SourceError),

    /// Tenor label or date parsing failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Interpolation failed.
    #[error(transparent)]
    Math(#[from] MathError),

    /// Requested day count is below the curve's first day.
    #[error("Tenor too small: {requested} days is below the minimum of {min} days")]
    TenorTooSmall {
        /// The requested day count.
        requested: i64,
        /// First day of the curve.
        min: i64,
    },

    /// Requested day count is beyond the curve's last day.
    #[error("Tenor too big: {requested} days exceeds the maximum of {max} days")]
    TenorTooBig {
        /// The requested day count.
        requested: i64,
        /// Last day of the curve.
        max: i64,
    },

    /// Forward anchor falls before the first quoted tenor.
    #[error("Future date too near: {offset} days from settlement, minimum is {min}")]
    FutureDateTooNear {
        /// Days from settlement to the anchor date.
        offset: i64,
        /// First day of the spot curve.
        min: i64,
    },

    /// Forward anchor falls after the last quoted tenor.
    #[error("Future date too far: {offset} days from settlement, maximum is {max}")]
    FutureDateTooFar {
        /// Days from settlement to the anchor date.
        offset: i64,
        /// Last day of the spot curve.
        max: i64,
    },
}

impl CurveError {
    /// Creates an invalid columns error.
    #[must_use]
    pub fn invalid_columns(missing: Vec<String>) -> Self {
        Self::InvalidColumns { missing }
    }

    /// Creates an invalid type error.
    #[must_use]
    pub fn invalid_type(issues: Vec<String>) -> Self {
        Self::InvalidType { issues }
    }

    /// Creates the out-of-range error for `requested` against `[min, max]`.
    ///
    /// Only meaningful when `requested` is actually outside the range.
    #[must_use]
    pub fn tenor_out_of_range(requested: i64, min: i64, max: i64) -> Self {
        if requested < min {
            Self::TenorTooSmall { requested, min }
        } else {
            Self::TenorTooBig { requested, max }
        }
    }

    /// Returns the error class.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TenorTooSmall { .. }
            | Self::TenorTooBig { .. }
            | Self::FutureDateTooNear { .. }
            | Self::FutureDateTooFar { .. }
            | Self::Math(MathError::ExtrapolationNotAllowed { .. }) => ErrorKind::Range,
            _ => ErrorKind::InvalidInput,
        }
    }

    /// True for construction-time input errors.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    /// True for domain violations.
    #[must_use]
    pub fn is_range_error(&self) -> bool {
        self.kind() == ErrorKind::Range
    }
}
