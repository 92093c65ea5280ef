//! Error types for the core primitives.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while parsing or building core values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date parsing or an invalid calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Tenor label is not of the form `<n> MO` or `<n> YR`.
    #[error("Unsupported tenor '{label}': {reason}")]
    UnsupportedTenor {
        /// The label as supplied.
        label: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unsupported tenor error.
    #[must_use]
    pub fn unsupported_tenor(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedTenor {
            label: label.into(),
            reason: reason.into(),
        }
    }
}
