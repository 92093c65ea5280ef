//! Read-only view shared by all curve types.
//!
//! Charting and reporting code works against [`DayCurve`] without caring
//! whether it holds spot rates, forward rates or discount factors.

use serde::{Deserialize, Serialize};
use std::fmt;

use zerocurve_core::parse_tenor_days;

use crate::error::CurveResult;
use crate::table::DayTable;

/// What a curve's values mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// Zero-coupon rates from settlement.
    Spot,
    /// Rates from an anchor date onward.
    Forward,
    /// Present value of a unit payment.
    Discount,
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spot => "spot",
            Self::Forward => "forward",
            Self::Discount => "discount",
        };
        write!(f, "{name}")
    }
}

/// One `(days, value)` row of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Tenor in days.
    pub days: i64,
    /// Curve value.
    pub value: f64,
}

/// A curve defined on a contiguous range of days.
pub trait DayCurve: Send + Sync {
    /// The kind of values held.
    fn kind(&self) -> CurveKind;

    /// The underlying table.
    fn table(&self) -> &DayTable;

    /// Value at `days`.
    ///
    /// # Errors
    ///
    /// `TenorTooSmall` / `TenorTooBig` outside the table.
    fn value_at_days(&self, days: i64) -> CurveResult<f64> {
        self.table().lookup(days)
    }

    /// Value at a tenor label such as `"4 MO"`.
    fn value_at_tenor(&self, label: &str) -> CurveResult<f64> {
        self.value_at_days(parse_tenor_days(label)?)
    }

    /// Every row of the curve, in day order.
    fn series(&self) -> Vec<CurvePoint> {
        self.table()
            .iter()
            .map(|(days, value)| CurvePoint { days, value })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat(DayTable);

    impl DayCurve for Flat {
        fn kind(&self) -> CurveKind {
            CurveKind::Spot
        }

        fn table(&self) -> &DayTable {
            &self.0
        }
    }

    #[test]
    fn test_default_methods() {
        let curve = Flat(DayTable::from_values(30, vec![0.05; 31]).unwrap());

        assert_eq!(curve.value_at_tenor("1 MO").unwrap(), 0.05);
        assert_eq!(curve.value_at_days(60).unwrap(), 0.05);
        assert!(curve.value_at_days(61).unwrap_err().is_range_error());
        assert!(curve.value_at_tenor("2 MO").is_ok());
        assert!(curve.value_at_tenor("asd").unwrap_err().is_invalid_input());
        assert_eq!(curve.series().len(), 31);
        assert_eq!(curve.series()[0], CurvePoint { days: 30, value: 0.05 });
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CurveKind::Discount.to_string(), "discount");
        assert_eq!(serde_json::to_string(&CurveKind::Forward).unwrap(), "\"forward\"");
    }
}
