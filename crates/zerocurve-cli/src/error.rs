//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Delimiter is not a single-byte character.
    #[error("Invalid delimiter: {0:?}. Use a single ASCII character such as ',' or ';'.")]
    InvalidDelimiter(char),

    /// Day count query is not positive.
    #[error("Invalid day count: {0}. Must be at least 1.")]
    InvalidDays(i64),

    /// Unknown configuration key.
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Configuration value rejected.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// The key being set.
        key: &'static str,
        /// What is wrong with the value.
        reason: String,
    },

    /// Configuration file problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// Converts a delimiter character to the byte the CSV reader expects.
pub fn delimiter_byte(c: char) -> CliResult<u8> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(CliError::InvalidDelimiter(c))
}
