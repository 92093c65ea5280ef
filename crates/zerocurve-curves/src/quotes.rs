//! Quote rows and their validation.
//!
//! [`RawQuote`] is a row as a source delivers it: four optional text fields.
//! [`QuoteSet::from_raw`] turns a batch of them into typed [`RateQuote`]s or
//! fails with one error describing what is wrong. Checks run in a fixed
//! order and the first failing check decides the error:
//!
//! 1. no rows at all
//! 2. a field missing in any row
//! 3. more than one settlement date
//! 4. rate or date text that does not coerce (all problems reported at once)
//! 5. tenor labels that do not parse, or parse to zero days
//! 6. rates at or below -100%
//! 7. two quotes on the same day count

use std::collections::BTreeSet;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use zerocurve_core::{Date, Tenor};

use crate::error::{CurveError, CurveResult};

/// Field names in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 4] = ["Tenor", "Rate", "Maturity", "Settlement_Date"];

/// A quote row before validation.
///
/// Blank text counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawQuote {
    /// Tenor label, e.g. `"6 MO"`.
    #[serde(rename = "Tenor")]
    pub tenor: Option<String>,
    /// Rate in percent; a decimal comma is accepted.
    #[serde(rename = "Rate")]
    pub rate: Option<String>,
    /// Maturity date.
    #[serde(rename = "Maturity")]
    pub maturity: Option<String>,
    /// Settlement date shared by the whole table.
    #[serde(rename = "Settlement_Date")]
    pub settlement_date: Option<String>,
}

impl RawQuote {
    /// Creates a row with every field present.
    pub fn new(
        tenor: impl Into<String>,
        rate: impl Into<String>,
        maturity: impl Into<String>,
        settlement_date: impl Into<String>,
    ) -> Self {
        Self {
            tenor: Some(tenor.into()),
            rate: Some(rate.into()),
            maturity: Some(maturity.into()),
            settlement_date: Some(settlement_date.into()),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "Tenor" => self.tenor.as_deref(),
            "Rate" => self.rate.as_deref(),
            "Maturity" => self.maturity.as_deref(),
            "Settlement_Date" => self.settlement_date.as_deref(),
            _ => None,
        }?;
        let value = value.trim();
        (!value.is_empty()).then_some(value)
    }

    fn text(&self, name: &str) -> &str {
        self.field(name).unwrap_or_default()
    }
}

/// A validated quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateQuote {
    /// Parsed tenor.
    pub tenor: Tenor,
    /// Label as it appeared in the source.
    pub label: String,
    /// Quoted rate in percent, exactly as parsed.
    pub rate_percent: Decimal,
    /// Rate as a decimal fraction (`rate_percent / 100`).
    pub rate: f64,
    /// Maturity date.
    pub maturity: Date,
    /// Settlement date.
    pub settlement_date: Date,
    /// Tenor in days.
    pub days: i64,
}

/// A quoted `(days, rate)` pair, for chart overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotedPoint {
    /// Tenor in days.
    pub days: i64,
    /// Value at that tenor.
    pub rate: f64,
    /// Tenor label.
    pub label: String,
}

/// A validated quote table: one settlement date, strictly increasing tenors.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSet {
    quotes: Vec<RateQuote>,
    settlement_date: Date,
}

impl QuoteSet {
    /// Validates raw rows.
    ///
    /// # Errors
    ///
    /// See the module documentation for the order of checks. No partially
    /// validated set is ever returned.
    pub fn from_raw(rows: Vec<RawQuote>) -> CurveResult<Self> {
        if rows.is_empty() {
            return Err(CurveError::EmptyDataset);
        }

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|name| rows.iter().any(|row| row.field(name).is_none()))
            .map(|name| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CurveError::invalid_columns(missing));
        }

        let settlement_keys: BTreeSet<String> = rows
            .iter()
            .map(|row| {
                let text = row.text("Settlement_Date");
                Date::parse_any(text).map_or_else(|_| text.to_string(), |d| d.to_string())
            })
            .collect();
        if settlement_keys.len() > 1 {
            return Err(CurveError::MixedSettlementDates {
                dates: settlement_keys.into_iter().collect(),
            });
        }

        let coerced = coerce_rows(&rows)?;

        let mut tenors = Vec::with_capacity(rows.len());
        for row in &rows {
            let label = row.text("Tenor");
            let tenor = Tenor::parse(label)?;
            let days = tenor.days();
            if days <= 0 {
                return Err(CurveError::InvalidTenorDays {
                    label: label.to_string(),
                    days,
                });
            }
            tenors.push((tenor, label.to_string()));
        }

        let mut issues = Vec::new();
        let mut quotes = Vec::with_capacity(rows.len());
        for ((tenor, label), (rate_percent, maturity, settlement_date)) in
            tenors.into_iter().zip(coerced)
        {
            match to_fraction(rate_percent) {
                Some(rate) if rate > -1.0 => quotes.push(RateQuote {
                    days: tenor.days(),
                    tenor,
                    label,
                    rate_percent,
                    rate,
                    maturity,
                    settlement_date,
                }),
                _ => issues.push(format!(
                    "{label}: rate {rate_percent}% is not a usable rate"
                )),
            }
        }
        if !issues.is_empty() {
            return Err(CurveError::invalid_type(issues));
        }

        Self::from_quotes(quotes)
    }

    /// Builds a set from already typed quotes.
    ///
    /// Applies the same per-quote checks as [`QuoteSet::from_raw`]: a
    /// positive day count matching the tenor and a finite rate above -100%.
    /// Then sorts by day count and rejects duplicate day counts or mixed
    /// settlement dates.
    pub fn from_quotes(mut quotes: Vec<RateQuote>) -> CurveResult<Self> {
        let Some(settlement_date) = quotes.first().map(|q| q.settlement_date) else {
            return Err(CurveError::EmptyDataset);
        };

        let mut issues = Vec::new();
        for quote in &quotes {
            if quote.days <= 0 {
                return Err(CurveError::InvalidTenorDays {
                    label: quote.label.clone(),
                    days: quote.days,
                });
            }
            if quote.days != quote.tenor.days() {
                issues.push(format!(
                    "{}: {} days does not match tenor {}",
                    quote.label, quote.days, quote.tenor
                ));
            }
            if !quote.rate.is_finite() || quote.rate <= -1.0 {
                issues.push(format!("{}: rate {} is not a usable rate", quote.label, quote.rate));
            }
        }
        if !issues.is_empty() {
            return Err(CurveError::invalid_type(issues));
        }

        let dates: BTreeSet<Date> = quotes.iter().map(|q| q.settlement_date).collect();
        if dates.len() > 1 {
            return Err(CurveError::MixedSettlementDates {
                dates: dates.iter().map(ToString::to_string).collect(),
            });
        }

        quotes.sort_by_key(|q| q.days);
        if let Some(pair) = quotes.windows(2).find(|w| w[0].days == w[1].days) {
            return Err(CurveError::DuplicateTenor {
                days: pair[0].days,
                first: pair[0].label.clone(),
                second: pair[1].label.clone(),
            });
        }

        for quote in quotes.iter().filter(|q| q.maturity <= q.settlement_date) {
            log::warn!(
                "quote {} matures on {} which is not after settlement {}",
                quote.label,
                quote.maturity,
                quote.settlement_date
            );
        }

        Ok(Self {
            quotes,
            settlement_date,
        })
    }

    /// Quotes sorted by day count.
    pub fn quotes(&self) -> &[RateQuote] {
        &self.quotes
    }

    /// The common settlement date.
    pub fn settlement_date(&self) -> Date {
        self.settlement_date
    }

    /// Smallest quoted day count.
    pub fn min_days(&self) -> i64 {
        self.quotes[0].days
    }

    /// Largest quoted day count.
    pub fn max_days(&self) -> i64 {
        self.quotes[self.quotes.len() - 1].days
    }

    /// The quotes as chart overlay points.
    pub fn quoted_points(&self) -> Vec<QuotedPoint> {
        self.quotes
            .iter()
            .map(|q| QuotedPoint {
                days: q.days,
                rate: q.rate,
                label: q.label.clone(),
            })
            .collect()
    }
}

type Coerced = (Decimal, Date, Date);

/// Coerces rate and date text for every row, collecting every failure.
fn coerce_rows(rows: &[RawQuote]) -> CurveResult<Vec<Coerced>> {
    let mut issues = Vec::new();
    let mut coerced = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let line = index + 1;

        let rate_text = row.text("Rate");
        let rate = parse_percent(rate_text);
        if rate.is_none() {
            issues.push(format!("row {line}: Rate '{rate_text}' is not a number"));
        }

        let mut date = |name: &str| {
            let text = row.text(name);
            let parsed = Date::parse_any(text).ok();
            if parsed.is_none() {
                issues.push(format!("row {line}: {name} '{text}' is not a date"));
            }
            parsed
        };
        let maturity = date("Maturity");
        let settlement = date("Settlement_Date");

        if let (Some(rate), Some(maturity), Some(settlement)) = (rate, maturity, settlement) {
            coerced.push((rate, maturity, settlement));
        }
    }

    if issues.is_empty() {
        Ok(coerced)
    } else {
        Err(CurveError::invalid_type(issues))
    }
}

/// Parses a percentage, accepting a decimal comma and scientific notation.
fn parse_percent(text: &str) -> Option<Decimal> {
    let normalized = text.trim().replace(',', ".");
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}

fn to_fraction(percent: Decimal) -> Option<f64> {
    (percent / Decimal::ONE_HUNDRED)
        .to_f64()
        .filter(|rate| rate.is_finite())
}
