//! Quoted tenor labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::daycounts::DAYS_PER_YEAR;
use crate::error::{CoreError, CoreResult};

/// Days counted per month when converting a tenor label.
pub const DAYS_PER_MONTH: i64 = 30;

/// Unit suffix of a tenor label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorUnit {
    /// `MO`: 30-day months.
    Months,
    /// `YR`: 365-day years.
    Years,
}

impl TenorUnit {
    /// Returns the label suffix.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Months => "MO",
            Self::Years => "YR",
        }
    }

    /// Days represented by one unit.
    #[must_use]
    pub fn days(&self) -> i64 {
        match self {
            Self::Months => DAYS_PER_MONTH,
            Self::Years => DAYS_PER_YEAR,
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "MO" => Some(Self::Months),
            "YR" => Some(Self::Years),
            _ => None,
        }
    }
}

/// A tenor as quoted in rate tables, e.g. `"4 MO"` or `"11 YR"`.
///
/// Only the two suffixes `MO` and `YR` are recognised, upper case, separated
/// from an unsigned integer magnitude by whitespace.
///
/// # Example
///
/// ```rust
/// use zerocurve_core::types::{Tenor, TenorUnit};
///
/// let tenor: Tenor = "11 YR".parse().unwrap();
/// assert_eq!(tenor.unit(), TenorUnit::Years);
/// assert_eq!(tenor.days(), 4015);
/// assert!(Tenor::parse("11 asdasd").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenor {
    magnitude: u32,
    unit: TenorUnit,
}

impl Tenor {
    /// Creates a tenor from its parts.
    #[must_use]
    pub fn new(magnitude: u32, unit: TenorUnit) -> Self {
        Self { magnitude, unit }
    }

    /// Creates a tenor of `n` months.
    #[must_use]
    pub fn months(n: u32) -> Self {
        Self::new(n, TenorUnit::Months)
    }

    /// Creates a tenor of `n` years.
    #[must_use]
    pub fn years(n: u32) -> Self {
        Self::new(n, TenorUnit::Years)
    }

    /// Parses a tenor label.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedTenor` when the label does not have
    /// exactly two whitespace-separated parts, the suffix is neither `MO` nor
    /// `YR`, or the magnitude is not an unsigned integer.
    pub fn parse(label: &str) -> CoreResult<Self> {
        let mut parts = label.split_whitespace();
        let (Some(number), Some(suffix), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(CoreError::unsupported_tenor(
                label,
                "expected '<n> MO' or '<n> YR'",
            ));
        };

        let unit = TenorUnit::from_suffix(suffix).ok_or_else(|| {
            CoreError::unsupported_tenor(label, format!("unknown unit '{suffix}'"))
        })?;

        let magnitude = number.parse::<u32>().map_err(|_| {
            CoreError::unsupported_tenor(label, format!("'{number}' is not a whole number"))
        })?;

        Ok(Self { magnitude, unit })
    }

    /// Returns the numeric part of the label.
    #[must_use]
    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    /// Returns the unit.
    #[must_use]
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Converts the tenor to a day count (30-day months, 365-day years).
    #[must_use]
    pub fn days(&self) -> i64 {
        i64::from(self.magnitude) * self.unit.days()
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit.suffix())
    }
}

/// Parses a tenor label straight to its day count.
///
/// ```rust
/// use zerocurve_core::parse_tenor_days;
///
/// assert_eq!(parse_tenor_days("4 MO").unwrap(), 120);
/// assert_eq!(parse_tenor_days("11 YR").unwrap(), 4015);
/// ```
pub fn parse_tenor_days(label: &str) -> CoreResult<i64> {
    Tenor::parse(label).map(|tenor| tenor.days())
}
