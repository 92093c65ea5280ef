//! Benchmarks for curve construction and lookup.
//!
//! Run with: cargo bench -p zerocurve-curves

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use zerocurve_curves::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_rows(years: u32) -> Vec<RawQuote> {
    let mut rows: Vec<RawQuote> = [3, 6, 9]
        .iter()
        .map(|m| {
            RawQuote::new(
                format!("{m} MO"),
                format!("{:.4}", 6.5 + f64::from(*m) * 0.05),
                "15.07.2031",
                "15.07.2021",
            )
        })
        .collect();
    rows.extend((1..=years).map(|y| {
        RawQuote::new(
            format!("{y} YR"),
            format!("{:.4}", 7.0 + (f64::from(y) * 0.7).sin() * 0.2),
            "15.07.2031",
            "15.07.2021",
        )
    }));
    rows
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_spot_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("spot_construction");

    for years in [10_u32, 30, 50] {
        let rows = create_rows(years);
        group.throughput(Throughput::Elements(u64::from(years) * 365));
        group.bench_with_input(BenchmarkId::from_parameter(years), &rows, |b, rows| {
            b.iter(|| SpotCurve::new(black_box(rows.clone())).unwrap());
        });
    }

    group.finish();
}

fn bench_derived_curves(c: &mut Criterion) {
    let spot = Arc::new(SpotCurve::new(create_rows(30)).unwrap());

    c.bench_function("forward_curve_30y", |b| {
        b.iter(|| ForwardCurve::from_offset(Arc::clone(&spot), black_box(92)).unwrap());
    });

    c.bench_function("discount_curve_30y", |b| {
        b.iter(|| DiscountCurve::new(Arc::clone(&spot)).unwrap());
    });
}

fn bench_lookup(c: &mut Criterion) {
    let spot = SpotCurve::new(create_rows(30)).unwrap();

    c.bench_function("rate_at_days", |b| {
        b.iter(|| spot.rate_at_days(black_box(3211)).unwrap());
    });

    c.bench_function("rate_at_tenor", |b| {
        b.iter(|| spot.rate_at_tenor(black_box("7 YR")).unwrap());
    });
}

criterion_group!(
    benches,
    bench_spot_construction,
    bench_derived_curves,
    bench_lookup
);
criterion_main!(benches);
