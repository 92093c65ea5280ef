//! Discount factor curve.

use std::sync::Arc;

use zerocurve_core::compounding::discount_factor;
use zerocurve_core::parse_tenor_days;

use crate::curves::SpotCurve;
use crate::error::CurveResult;
use crate::quotes::QuotedPoint;
use crate::table::DayTable;
use crate::traits::{CurveKind, DayCurve};

/// Discount factors `1 / (1 + r(d))^(d/365)` over the spot curve's domain.
///
/// Non-increasing in `d` as long as every spot rate is non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountCurve {
    spot: Arc<SpotCurve>,
    table: DayTable,
}

impl DiscountCurve {
    /// Derives discount factors from a spot curve.
    pub fn new(spot: Arc<SpotCurve>) -> CurveResult<Self> {
        let values = spot
            .table()
            .iter()
            .map(|(days, rate)| discount_factor(rate, days))
            .collect();
        let table = DayTable::from_values(spot.min_tenor_days(), values)?;

        log::debug!(
            "built discount curve: days {}..={}",
            table.first_day(),
            table.last_day()
        );

        Ok(Self { spot, table })
    }

    /// Discount factor for a payment `days` after settlement.
    ///
    /// # Errors
    ///
    /// `TenorTooSmall` / `TenorTooBig` outside the spot curve's domain.
    pub fn discount_at_days(&self, days: i64) -> CurveResult<f64> {
        self.table.lookup(days)
    }

    /// Discount factor at a tenor label.
    pub fn discount_at_tenor(&self, label: &str) -> CurveResult<f64> {
        self.discount_at_days(parse_tenor_days(label)?)
    }

    /// Discount factors at the quoted tenors.
    #[must_use]
    pub fn quoted_points(&self) -> Vec<QuotedPoint> {
        self.spot
            .quotes()
            .iter()
            .filter_map(|q| {
                self.table.get(q.days).map(|df| QuotedPoint {
                    days: q.days,
                    rate: df,
                    label: q.label.clone(),
                })
            })
            .collect()
    }

    /// The underlying spot curve.
    #[must_use]
    pub fn spot(&self) -> &Arc<SpotCurve> {
        &self.spot
    }

    /// The discount factor table.
    #[must_use]
    pub fn table(&self) -> &DayTable {
        &self.table
    }
}

impl DayCurve for DiscountCurve {
    fn kind(&self) -> CurveKind {
        CurveKind::Discount
    }

    fn table(&self) -> &DayTable {
        &self.table
    }
}
