//! Annual compounding on an ACT/365F time axis.
//!
//! A unit amount placed at rate `r` for `d` days grows to `(1 + r)^(d/365)`.
//! Spot, forward and discount curves are all expressed through this one
//! convention.
//!
//! # Example
//!
//! ```rust
//! use zerocurve_core::compounding::{discount_factor, growth_factor};
//!
//! let growth = growth_factor(0.05, 365);
//! assert!((growth - 1.05).abs() < 1e-12);
//! assert!((discount_factor(0.05, 365) * growth - 1.0).abs() < 1e-12);
//! ```

use crate::daycounts::Act365Fixed;

/// Growth of a unit amount over `days` at annual rate `rate`.
#[must_use]
pub fn growth_factor(rate: f64, days: i64) -> f64 {
    (1.0 + rate).powf(Act365Fixed.year_fraction_days(days))
}

/// Present value of a unit amount paid after `days`.
#[must_use]
pub fn discount_factor(rate: f64, days: i64) -> f64 {
    1.0 / growth_factor(rate, days)
}

/// Annual rate that produces `growth` over `days`.
///
/// `days` must be positive.
#[must_use]
pub fn rate_from_growth(growth: f64, days: i64) -> f64 {
    growth.powf(1.0 / Act365Fixed.year_fraction_days(days)) - 1.0
}
