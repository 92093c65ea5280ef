//! Forward rate curve.
//!
//! A [`ForwardCurve`] holds the rates implied by a spot curve for deposits
//! starting at an anchor date `t` days after settlement and running `T`
//! days. Compounding at the spot rate to `t`, then at the forward rate for
//! `T` days, gives the same growth as compounding at the spot rate to
//! `t + T`:
//!
//! ```text
//! f(T) = ( (1 + r(t+T))^((t+T)/365) / (1 + r(t))^(t/365) )^(365/T) - 1
//! ```

use std::sync::Arc;

use zerocurve_core::compounding::{growth_factor, rate_from_growth};
use zerocurve_core::{parse_tenor_days, Date};

use crate::curves::SpotCurve;
use crate::error::{CurveError, CurveResult};
use crate::table::DayTable;
use crate::traits::{CurveKind, DayCurve};

/// Forward rates anchored at a future date.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use zerocurve_curves::prelude::*;
///
/// let spot = Arc::new(
///     SpotCurve::new(vec![
///         RawQuote::new("3 MO", "6", "15.10.2021", "15.07.2021"),
///         RawQuote::new("1 YR", "7", "15.07.2022", "15.07.2021"),
///     ])
///     .unwrap(),
/// );
///
/// let forward = ForwardCurve::from_date_str(spot, "15.10.2021").unwrap();
/// assert_eq!(forward.anchor_offset(), 92);
/// assert_eq!(forward.min_tenor_days(), 1);
/// assert_eq!(forward.max_tenor_days(), 365 - 92);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardCurve {
    spot: Arc<SpotCurve>,
    future_date: Date,
    anchor_offset: i64,
    table: DayTable,
}

impl ForwardCurve {
    /// Anchors a forward curve at `future_date`.
    ///
    /// # Errors
    ///
    /// `FutureDateTooNear` if the date is before the shortest quoted tenor,
    /// `FutureDateTooFar` if it is after the longest one. An anchor on the
    /// longest tenor is accepted and leaves no forward tenors, so every
    /// query on that curve is a range error.
    pub fn new(spot: Arc<SpotCurve>, future_date: Date) -> CurveResult<Self> {
        let offset = spot.settlement_date().days_between(&future_date);
        check_anchor(&spot, offset)?;
        Self::build(spot, future_date, offset)
    }

    /// Anchors a forward curve at a `DD.MM.YYYY` date.
    ///
    /// # Errors
    ///
    /// `CurveError::Core(InvalidDate)` for any other text layout, then as
    /// for [`ForwardCurve::new`].
    pub fn from_date_str(spot: Arc<SpotCurve>, date: &str) -> CurveResult<Self> {
        let future_date = Date::parse_dmy(date)?;
        Self::new(spot, future_date)
    }

    /// Anchors a forward curve `offset` days after settlement.
    ///
    /// # Errors
    ///
    /// As for [`ForwardCurve::new`]; the range is checked before the anchor
    /// date is computed.
    pub fn from_offset(spot: Arc<SpotCurve>, offset: i64) -> CurveResult<Self> {
        check_anchor(&spot, offset)?;
        let future_date = spot.settlement_date().add_days(offset)?;
        Self::build(spot, future_date, offset)
    }

    fn build(spot: Arc<SpotCurve>, future_date: Date, offset: i64) -> CurveResult<Self> {
        let (min, max) = (spot.min_tenor_days(), spot.max_tenor_days());
        let (first, last) = ((min - offset).max(1), max - offset);

        let anchor_growth = growth_factor(spot.rate_at_days(offset)?, offset);
        let table = if last < first {
            DayTable::empty(first)
        } else {
            DayTable::from_fn(first, last, |tenor| {
                let end = offset + tenor;
                let end_growth = growth_factor(spot.rate_at_days(end)?, end);
                Ok(rate_from_growth(end_growth / anchor_growth, tenor))
            })?
        };

        log::debug!(
            "built forward curve at {} (t = {} days): tenors {}..={}",
            future_date,
            offset,
            table.first_day(),
            table.last_day()
        );

        Ok(Self {
            spot,
            future_date,
            anchor_offset: offset,
            table,
        })
    }

    /// Forward rate for a deposit of `days` starting at the anchor date.
    ///
    /// # Errors
    ///
    /// `TenorTooSmall` / `TenorTooBig` outside the forward domain.
    pub fn forward_at_days(&self, days: i64) -> CurveResult<f64> {
        self.table.lookup(days)
    }

    /// Forward rate at a tenor label.
    pub fn forward_at_tenor(&self, label: &str) -> CurveResult<f64> {
        self.forward_at_days(parse_tenor_days(label)?)
    }

    /// Days from settlement to the anchor date.
    #[must_use]
    pub fn anchor_offset(&self) -> i64 {
        self.anchor_offset
    }

    /// The anchor date.
    #[must_use]
    pub fn future_date(&self) -> Date {
        self.future_date
    }

    /// The underlying spot curve.
    #[must_use]
    pub fn spot(&self) -> &Arc<SpotCurve> {
        &self.spot
    }

    /// Shortest forward tenor in days.
    #[must_use]
    pub fn min_tenor_days(&self) -> i64 {
        self.table.first_day()
    }

    /// Longest forward tenor in days.
    #[must_use]
    pub fn max_tenor_days(&self) -> i64 {
        self.table.last_day()
    }

    /// The forward rate table.
    #[must_use]
    pub fn table(&self) -> &DayTable {
        &self.table
    }
}

/// The anchor must fall on the spot curve's domain.
fn check_anchor(spot: &SpotCurve, offset: i64) -> CurveResult<()> {
    let (min, max) = (spot.min_tenor_days(), spot.max_tenor_days());
    if offset < min {
        return Err(CurveError::FutureDateTooNear { offset, min });
    }
    if offset > max {
        return Err(CurveError::FutureDateTooFar { offset, max });
    }
    Ok(())
}

impl DayCurve for ForwardCurve {
    fn kind(&self) -> CurveKind {
        CurveKind::Forward
    }

    fn table(&self) -> &DayTable {
        &self.table
    }
}
