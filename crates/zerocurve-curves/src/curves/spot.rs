//! Spot (zero-coupon) rate curve.

use zerocurve_core::{parse_tenor_days, Date};
use zerocurve_math::interpolation::LinearInterpolator;

use crate::error::CurveResult;
use crate::quotes::{QuoteSet, QuotedPoint, RateQuote, RawQuote};
use crate::source::QuoteSource;
use crate::table::DayTable;
use crate::traits::{CurveKind, DayCurve};

/// Spot rates for every day between the shortest and longest quoted tenor.
///
/// Rates are linearly interpolated against day count and precomputed at
/// construction, so a query is a table lookup. Quoted points come back
/// unchanged and nothing outside the quoted range is ever returned.
///
/// # Example
///
/// ```rust
/// use zerocurve_curves::prelude::*;
///
/// let curve = SpotCurve::new(vec![
///     RawQuote::new("3 MO", "6,0", "15.10.2021", "15.07.2021"),
///     RawQuote::new("6 MO", "9,0", "15.01.2022", "15.07.2021"),
/// ])
/// .unwrap();
///
/// assert_eq!(curve.min_tenor_days(), 90);
/// assert!((curve.rate_at_days(120).unwrap() - 0.07).abs() < 1e-12);
/// assert!(curve.rate_at_tenor("1 YR").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpotCurve {
    quotes: QuoteSet,
    table: DayTable,
}

impl SpotCurve {
    /// Validates raw rows and builds the curve.
    pub fn new(rows: Vec<RawQuote>) -> CurveResult<Self> {
        Self::from_quotes(QuoteSet::from_raw(rows)?)
    }

    /// Loads rows from a source and builds the curve.
    ///
    /// # Errors
    ///
    /// A source failure becomes `CurveError::Source`; everything else is as
    /// for [`SpotCurve::new`].
    pub fn from_source<S: QuoteSource + ?Sized>(source: &S) -> CurveResult<Self> {
        let rows = source.load()?;
        log::debug!("loaded {} quote rows from {}", rows.len(), source.source_name());
        Self::new(rows)
    }

    /// Builds the curve from a validated quote set.
    pub fn from_quotes(quotes: QuoteSet) -> CurveResult<Self> {
        let (first, last) = (quotes.min_days(), quotes.max_days());

        let table = match quotes.quotes() {
            [only] => DayTable::from_values(only.days, vec![only.rate])?,
            points => {
                let xs = points.iter().map(|q| q.days as f64).collect();
                let ys = points.iter().map(|q| q.rate).collect();
                let interpolator = LinearInterpolator::new(xs, ys)?;
                DayTable::from_values(first, interpolator.sample_integer_grid(first, last)?)?
            }
        };

        let negative: Vec<&str> = quotes
            .quotes()
            .iter()
            .filter(|q| q.rate < 0.0)
            .map(|q| q.label.as_str())
            .collect();
        if !negative.is_empty() {
            log::warn!(
                "negative spot rates at {}; discount factors will not be monotonic",
                negative.join(", ")
            );
        }

        log::debug!(
            "built spot curve: {} quotes, days {}..={}, settlement {}",
            quotes.quotes().len(),
            first,
            last,
            quotes.settlement_date()
        );

        Ok(Self { quotes, table })
    }

    /// Spot rate at `days` from settlement.
    ///
    /// # Errors
    ///
    /// `TenorTooSmall` / `TenorTooBig` outside the quoted range.
    pub fn rate_at_days(&self, days: i64) -> CurveResult<f64> {
        self.table.lookup(days)
    }

    /// Spot rate at a tenor label.
    pub fn rate_at_tenor(&self, label: &str) -> CurveResult<f64> {
        self.rate_at_days(parse_tenor_days(label)?)
    }

    /// Settlement date of the quotes.
    #[must_use]
    pub fn settlement_date(&self) -> Date {
        self.quotes.settlement_date()
    }

    /// Shortest quoted tenor in days.
    #[must_use]
    pub fn min_tenor_days(&self) -> i64 {
        self.table.first_day()
    }

    /// Longest quoted tenor in days.
    #[must_use]
    pub fn max_tenor_days(&self) -> i64 {
        self.table.last_day()
    }

    /// Validated quotes, sorted by day count.
    #[must_use]
    pub fn quotes(&self) -> &[RateQuote] {
        self.quotes.quotes()
    }

    /// Quoted points for chart overlays.
    #[must_use]
    pub fn quoted_points(&self) -> Vec<QuotedPoint> {
        self.quotes.quoted_points()
    }

    /// The interpolated table.
    #[must_use]
    pub fn table(&self) -> &DayTable {
        &self.table
    }
}

impl DayCurve for SpotCurve {
    fn kind(&self) -> CurveKind {
        CurveKind::Spot
    }

    fn table(&self) -> &DayTable {
        &self.table
    }
}
