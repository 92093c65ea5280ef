//! Integration test: spot, forward and discount curves from a quote table.
//!
//! Settlement: 15.07.2021, rates in percent.
//!
//! | Tenor | Days | Rate     |
//! |-------|------|----------|
//! | 3 MO  | 90   | 6.673567 |
//! | 4 MO  | 120  | 6.88047  |
//! | 5 MO  | 150  | 7.138185 |
//! | 6 MO  | 180  | 7.297925 |
//! | 7 MO  | 210  | 7.36081  |
//! | 9 MO  | 270  | 7.565647 |
//! | 1 YR  | 365  | 7.347589 |
//! | 2 YR  | 730  | 7.25     |
//! | 3 YR  | 1095 | 7.12     |
//! | 5 YR  | 1825 | 7.02     |
//! | 7 YR  | 2555 | 7.05     |
//! | 8 YR  | 2920 | 7.068237 |
//! | 9 YR  | 3285 | 7.066403 |
//! | 10 YR | 3650 | 7.08     |

use std::sync::Arc;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use zerocurve_core::compounding::growth_factor;
use zerocurve_core::{CoreError, Date};
use zerocurve_curves::prelude::*;

const SETTLEMENT: &str = "15.07.2021";

const QUOTES: [(&str, &str, &str); 14] = [
    ("3 MO", "6,673567", "15.10.2021"),
    ("4 MO", "6,88047", "15.11.2021"),
    ("5 MO", "7,138185", "15.12.2021"),
    ("6 MO", "7,297925", "15.01.2022"),
    ("7 MO", "7,36081", "15.02.2022"),
    ("9 MO", "7,565647", "15.04.2022"),
    ("1 YR", "7,347589", "15.07.2022"),
    ("2 YR", "7,25", "15.07.2023"),
    ("3 YR", "7,12", "15.07.2024"),
    ("5 YR", "7,02", "15.07.2026"),
    ("7 YR", "7,05", "15.07.2028"),
    ("8 YR", "7,068237", "15.07.2029"),
    ("9 YR", "7,066403", "15.07.2030"),
    ("10 YR", "7,08", "15.07.2031"),
];

const TOLERANCE: f64 = 1e-7;

fn rows() -> Vec<RawQuote> {
    QUOTES
        .iter()
        .map(|(tenor, rate, maturity)| RawQuote::new(*tenor, *rate, *maturity, SETTLEMENT))
        .collect()
}

fn spot() -> Arc<SpotCurve> {
    Arc::new(SpotCurve::new(rows()).unwrap())
}

fn forward() -> ForwardCurve {
    ForwardCurve::from_date_str(spot(), "15.10.2021").unwrap()
}

fn discount() -> DiscountCurve {
    DiscountCurve::new(spot()).unwrap()
}

// =============================================================================
// Spot
// =============================================================================

#[test]
fn test_spot_domain() {
    let spot = spot();
    assert_eq!(spot.min_tenor_days(), 90);
    assert_eq!(spot.max_tenor_days(), 3650);
    assert_eq!(spot.table().len(), 3561);
    assert_eq!(spot.settlement_date(), Date::from_ymd(2021, 7, 15).unwrap());
}

#[test]
fn test_spot_values() {
    let spot = spot();
    assert_abs_diff_eq!(spot.rate_at_tenor("4 MO").unwrap(), 0.068_804_7, epsilon = TOLERANCE);
    assert_abs_diff_eq!(spot.rate_at_tenor("7 MO").unwrap(), 0.073_608_1, epsilon = TOLERANCE);
    assert_abs_diff_eq!(spot.rate_at_days(100).unwrap(), 0.067_425_3, epsilon = TOLERANCE);
    assert_abs_diff_eq!(spot.rate_at_days(3211).unwrap(), 0.070_667_7, epsilon = TOLERANCE);
}

#[test]
fn test_spot_quotes_round_trip() {
    let spot = spot();
    for quote in spot.quotes() {
        assert_abs_diff_eq!(spot.rate_at_days(quote.days).unwrap(), quote.rate, epsilon = TOLERANCE);
    }
}

#[test]
fn test_spot_errors() {
    let spot = spot();
    assert!(matches!(
        spot.rate_at_tenor("1 MO"),
        Err(CurveError::TenorTooSmall { requested: 30, min: 90 })
    ));
    assert!(matches!(
        spot.rate_at_tenor("11 YR"),
        Err(CurveError::TenorTooBig { requested: 4015, max: 3650 })
    ));
    assert!(matches!(
        spot.rate_at_tenor("11 asdasd"),
        Err(CurveError::Core(CoreError::UnsupportedTenor { .. }))
    ));
    assert!(spot.rate_at_days(30).unwrap_err().is_range_error());
    assert!(spot.rate_at_days(30000).unwrap_err().is_range_error());
}

// =============================================================================
// Forward
// =============================================================================

#[test]
fn test_forward_domain() {
    let forward = forward();
    assert_eq!(forward.anchor_offset(), 92);
    assert_eq!(forward.min_tenor_days(), 1);
    assert_eq!(forward.max_tenor_days(), 3558);

    let later = ForwardCurve::from_date_str(spot(), "20.11.2022").unwrap();
    assert_eq!(later.anchor_offset(), 493);
    assert_eq!(later.min_tenor_days(), 1);
    assert_eq!(later.max_tenor_days(), 3157);
}

#[test]
fn test_forward_values() {
    let forward = forward();
    assert_abs_diff_eq!(forward.forward_at_tenor("1 MO").unwrap(), 0.075_451_3, epsilon = TOLERANCE);
    assert_abs_diff_eq!(forward.forward_at_tenor("4 MO").unwrap(), 0.078_921_2, epsilon = TOLERANCE);
    assert_abs_diff_eq!(forward.forward_at_tenor("7 MO").unwrap(), 0.078_467_0, epsilon = TOLERANCE);
    assert_abs_diff_eq!(forward.forward_at_days(100).unwrap(), 0.079_112_851, epsilon = TOLERANCE);
    assert_abs_diff_eq!(forward.forward_at_days(3211).unwrap(), 0.070_779_73, epsilon = TOLERANCE);
}

#[test]
fn test_forward_errors() {
    let forward = forward();
    assert!(forward.forward_at_days(0).unwrap_err().is_range_error());
    assert!(forward.forward_at_days(30000).unwrap_err().is_range_error());
    assert!(matches!(
        forward.forward_at_tenor("11 YR"),
        Err(CurveError::TenorTooBig { requested: 4015, max: 3558 })
    ));
    assert!(forward.forward_at_tenor("asd").unwrap_err().is_invalid_input());
}

#[test]
fn test_forward_anchor_errors() {
    assert!(matches!(
        ForwardCurve::from_date_str(spot(), "15.07.2021"),
        Err(CurveError::FutureDateTooNear { offset: 0, min: 90 })
    ));
    assert!(matches!(
        ForwardCurve::from_date_str(spot(), "01.07.2101"),
        Err(CurveError::FutureDateTooFar { max: 3650, .. })
    ));
    assert!(matches!(
        ForwardCurve::from_date_str(spot(), "2021/10/15"),
        Err(CurveError::Core(CoreError::InvalidDate { .. }))
    ));
    assert!(matches!(
        ForwardCurve::from_offset(spot(), i64::MAX / 2),
        Err(CurveError::FutureDateTooFar { max: 3650, .. })
    ));
}

#[test]
fn test_forward_anchor_on_last_tenor() {
    let forward = ForwardCurve::from_date_str(spot(), "12.07.2031").unwrap();
    assert_eq!(forward.anchor_offset(), 3650);
    assert!(forward.table().is_empty());
    assert!(forward.forward_at_tenor("1 MO").unwrap_err().is_range_error());

    assert!(matches!(
        ForwardCurve::from_date_str(spot(), "13.07.2031"),
        Err(CurveError::FutureDateTooFar { offset: 3651, max: 3650 })
    ));
}

// =============================================================================
// Discount
// =============================================================================

#[test]
fn test_discount_values() {
    let discount = discount();
    assert_abs_diff_eq!(discount.discount_at_tenor("3 MO").unwrap(), 0.984_196_6, epsilon = TOLERANCE);
    assert_abs_diff_eq!(discount.discount_at_tenor("7 MO").unwrap(), 0.959_959_9, epsilon = TOLERANCE);
    assert_abs_diff_eq!(discount.discount_at_days(100).unwrap(), 0.982_282_2, epsilon = TOLERANCE);
    assert_abs_diff_eq!(discount.discount_at_days(3211).unwrap(), 0.548_428_1, epsilon = TOLERANCE);
}

#[test]
fn test_discount_errors() {
    let discount = discount();
    assert!(discount.discount_at_days(15).unwrap_err().is_range_error());
    assert!(discount.discount_at_days(30000).unwrap_err().is_range_error());
    assert!(discount.discount_at_tenor("11 YR").unwrap_err().is_range_error());
    assert!(discount.discount_at_tenor("asd").unwrap_err().is_invalid_input());
}

#[test]
fn test_discount_monotonic() {
    let values = discount().table().values().to_vec();
    assert!(values.windows(2).all(|w| w[1] <= w[0]));
}

// =============================================================================
// Views
// =============================================================================

#[test]
fn test_series_views() {
    let spot = spot();
    let forward = ForwardCurve::new(Arc::clone(&spot), Date::from_ymd(2021, 10, 15).unwrap()).unwrap();
    let discount = DiscountCurve::new(Arc::clone(&spot)).unwrap();

    let curves: [&dyn DayCurve; 3] = [spot.as_ref(), &forward, &discount];
    let kinds: Vec<CurveKind> = curves.iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, vec![CurveKind::Spot, CurveKind::Forward, CurveKind::Discount]);

    assert_eq!(curves[0].series().len(), 3561);
    assert_eq!(curves[1].series().len(), 3558);
    assert_eq!(curves[2].series().first().map(|p| p.days), Some(90));

    let overlay = discount.quoted_points();
    assert_eq!(overlay.len(), 14);
    assert_eq!(overlay[0].label, "3 MO");
    assert_abs_diff_eq!(overlay[0].rate, 0.984_196_6, epsilon = TOLERANCE);
}

#[test]
fn test_validation_order() {
    assert!(matches!(SpotCurve::new(vec![]), Err(CurveError::EmptyDataset)));

    let mut mixed = rows();
    mixed[3].settlement_date = Some("16.07.2021".into());
    mixed[5].rate = Some("n/a".into());
    assert!(matches!(SpotCurve::new(mixed), Err(CurveError::MixedSettlementDates { .. })));

    let mut missing = rows();
    missing[5].rate = Some("n/a".into());
    missing[6].tenor = None;
    assert!(matches!(SpotCurve::new(missing), Err(CurveError::InvalidColumns { .. })));

    let mut bad_rate = rows();
    bad_rate[5].rate = Some("n/a".into());
    assert!(matches!(SpotCurve::new(bad_rate), Err(CurveError::InvalidType { .. })));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_spot_between_neighbouring_quotes(days in 90i64..=3650) {
        let spot = spot();
        let quotes = spot.quotes();
        let i = quotes.partition_point(|q| q.days <= days).saturating_sub(1).min(quotes.len() - 2);
        let (lo, hi) = (quotes[i].rate.min(quotes[i + 1].rate), quotes[i].rate.max(quotes[i + 1].rate));
        let rate = spot.rate_at_days(days).unwrap();
        prop_assert!(rate >= lo - 1e-15 && rate <= hi + 1e-15);
    }

    #[test]
    fn prop_no_arbitrage(anchor in 90i64..3650, fraction in 0.0f64..1.0) {
        let spot = spot();
        let forward = ForwardCurve::from_offset(Arc::clone(&spot), anchor).unwrap();
        let first = forward.min_tenor_days();
        let last = forward.max_tenor_days();
        let tenor = first + ((last - first) as f64 * fraction) as i64;

        let lhs = growth_factor(spot.rate_at_days(anchor).unwrap(), anchor)
            * growth_factor(forward.forward_at_days(tenor).unwrap(), tenor);
        let rhs = growth_factor(spot.rate_at_days(anchor + tenor).unwrap(), anchor + tenor);
        prop_assert!((lhs - rhs).abs() < 1e-9);
    }

    #[test]
    fn prop_discount_times_growth_is_one(days in 90i64..=3650) {
        let discount = discount();
        let rate = discount.spot().rate_at_days(days).unwrap();
        prop_assert!((discount.discount_at_days(days).unwrap() * growth_factor(rate, days) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_out_of_domain_is_range_error(days in prop_oneof![-10_000i64..90, 3651i64..100_000]) {
        let spot = spot();
        prop_assert!(spot.rate_at_days(days).unwrap_err().is_range_error());
        let discount = DiscountCurve::new(spot).unwrap();
        prop_assert!(discount.discount_at_days(days).unwrap_err().is_range_error());
    }
}
