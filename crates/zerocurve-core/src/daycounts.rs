//! Actual/365 Fixed day count.
//!
//! Curves in this library are built on ACT/365F only: a day count is the
//! actual number of calendar days and a year is always 365 days.

use crate::types::Date;

/// Days in a year under ACT/365F.
pub const DAYS_PER_YEAR: i64 = 365;

/// Actual/365 Fixed day count convention.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl Act365Fixed {
    /// Returns the convention name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        "ACT/365F"
    }

    /// Year fraction between two dates.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.year_fraction_days(self.day_count(start, end))
    }

    /// Year fraction for a day count.
    #[must_use]
    pub fn year_fraction_days(&self, days: i64) -> f64 {
        days as f64 / DAYS_PER_YEAR as f64
    }

    /// Actual days between two dates.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act365f_ignores_leap_years() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 366);
        assert_relative_eq!(dc.year_fraction(start, end), 366.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_year_fraction_days() {
        let dc = Act365Fixed;
        assert_relative_eq!(dc.year_fraction_days(365), 1.0, epsilon = 1e-15);
        assert_relative_eq!(dc.year_fraction_days(92), 92.0 / 365.0, epsilon = 1e-15);
        assert_eq!(dc.name(), "ACT/365F");
    }
}
