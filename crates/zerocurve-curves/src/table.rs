//! Dense day-indexed value tables.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::{CurveError, CurveResult};

/// Values for every integer day in `[first_day, last_day]`.
///
/// Stored contiguously; `get(day)` is an index into the backing vector
/// after a bounds check. Only [`DayTable::empty`] builds a table with no
/// values; its `last_day` is `first_day - 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTable {
    first_day: i64,
    values: Vec<f64>,
}

impl DayTable {
    /// Wraps values for consecutive days starting at `first_day`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDataset` when `values` is empty.
    pub fn from_values(first_day: i64, values: Vec<f64>) -> CurveResult<Self> {
        if values.is_empty() {
            return Err(CurveError::EmptyDataset);
        }
        Ok(Self { first_day, values })
    }

    /// A table covering no days. Every lookup is a range error.
    #[must_use]
    pub fn empty(first_day: i64) -> Self {
        Self {
            first_day,
            values: Vec::new(),
        }
    }

    /// Evaluates `f` for every day in `[first_day, last_day]`.
    ///
    /// Stops at the first error.
    pub fn from_fn<F>(first_day: i64, last_day: i64, mut f: F) -> CurveResult<Self>
    where
        F: FnMut(i64) -> CurveResult<f64>,
    {
        if last_day < first_day {
            return Err(CurveError::EmptyDataset);
        }
        let values = (first_day..=last_day)
            .map(&mut f)
            .collect::<CurveResult<Vec<f64>>>()?;
        Ok(Self { first_day, values })
    }

    /// Value at `day`, or `None` outside the table.
    #[must_use]
    pub fn get(&self, day: i64) -> Option<f64> {
        let offset = usize::try_from(day.checked_sub(self.first_day)?).ok()?;
        self.values.get(offset).copied()
    }

    /// Value at `day`, with the range error a curve query reports.
    pub fn lookup(&self, day: i64) -> CurveResult<f64> {
        self.get(day)
            .ok_or_else(|| CurveError::tenor_out_of_range(day, self.first_day, self.last_day()))
    }

    /// First day covered.
    #[must_use]
    pub fn first_day(&self) -> i64 {
        self.first_day
    }

    /// Last day covered.
    #[must_use]
    pub fn last_day(&self) -> i64 {
        self.first_day + self.values.len() as i64 - 1
    }

    /// True if `day` has a value.
    #[must_use]
    pub fn contains(&self, day: i64) -> bool {
        self.days().contains(&day)
    }

    /// Number of days covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for a table covering no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The covered days.
    #[must_use]
    pub fn days(&self) -> RangeInclusive<i64> {
        self.first_day..=self.last_day()
    }

    /// Values in day order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// `(day, value)` pairs in day order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.days().zip(self.values.iter().copied())
    }
}
