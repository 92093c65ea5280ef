//! Date type for curve calculations.

use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

use crate::error::{CoreError, CoreResult};

/// Format used by quote tables and anchor dates (`20.11.2022`).
const DMY_FORMAT: &str = "%d.%m.%Y";

/// ISO 8601 calendar date format (`2022-11-20`).
const ISO_FORMAT: &str = "%Y-%m-%d";

/// A calendar date.
///
/// Newtype wrapper around `chrono::NaiveDate`. Curves only ever need calendar
/// day differences, so no business-day logic lives here.
///
/// # Example
///
/// ```rust
/// use zerocurve_core::types::Date;
///
/// let settlement = Date::parse_dmy("15.07.2021").unwrap();
/// let maturity = settlement.add_months(4).unwrap();
/// assert_eq!(maturity, Date::from_ymd(2021, 11, 15).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse '{s}', expected YYYY-MM-DD")))
    }

    /// Creates a date from the fixed `DD.MM.YYYY` pattern.
    ///
    /// Any other layout is rejected, including ISO dates.
    pub fn parse_dmy(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), DMY_FORMAT)
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse '{s}', expected DD.MM.YYYY")))
    }

    /// Parses either `DD.MM.YYYY` or ISO `YYYY-MM-DD`.
    ///
    /// Quote tables exported from spreadsheets come in both layouts.
    pub fn parse_any(s: &str) -> CoreResult<Self> {
        Self::parse_dmy(s)
            .or_else(|_| Self::parse(s))
            .map_err(|_| {
                CoreError::invalid_date(format!(
                    "Cannot parse '{s}', expected DD.MM.YYYY or YYYY-MM-DD"
                ))
            })
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is outside the
    /// representable calendar.
    pub fn add_days(&self, days: i64) -> CoreResult<Self> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {days} days is out of range")))
    }

    /// Adds a number of months to the date.
    ///
    /// Month ends are clamped (Jan 31 + 1 month = Feb 28/29).
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;
        let new_day = self.day().min(days_in_month(new_year, new_month));

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a number of years to the date (Feb 29 clamps to Feb 28).
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        let new_year = self.year() + years;
        let new_day = self.day().min(days_in_month(new_year, self.month()));

        Self::from_ymd(new_year, self.month(), new_day)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Formats the date as `DD.MM.YYYY`.
    #[must_use]
    pub fn format_dmy(&self) -> String {
        self.0.format(DMY_FORMAT).to_string()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        _ => 28,
    }
}
