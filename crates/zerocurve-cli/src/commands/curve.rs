//! Curve command implementations.
//!
//! `spot`, `forward` and `discount` share one query surface: explicit
//! tenor labels and day counts, or the full series for charting.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use serde_json::json;
use tabled::Tabled;
use tracing::debug;

use zerocurve_core::Tenor;
use zerocurve_curves::{DayCurve, DiscountCurve, ForwardCurve, QuotedPoint, SpotCurve};

use crate::cli::OutputFormat;
use crate::commands::{Context, InputArgs};
use crate::error::CliError;
use crate::output::{format_value, print_csv, print_header, print_json, print_table};

/// Query selection shared by the curve commands.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Tenor label to query, e.g. "4 MO" or "11 YR" (repeatable)
    #[arg(short, long = "tenor")]
    pub tenors: Vec<String>,

    /// Day count to query (repeatable)
    #[arg(long = "days", allow_negative_numbers = true)]
    pub days: Vec<i64>,

    /// Print every day of the curve plus the quoted points, for charting
    #[arg(long, conflicts_with_all = ["tenors", "days"])]
    pub series: bool,
}

/// Arguments for the spot command.
#[derive(Args, Debug)]
pub struct SpotArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub query: QueryArgs,
}

/// Arguments for the forward command.
#[derive(Args, Debug)]
pub struct ForwardArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Anchor date of the forward curve (DD.MM.YYYY)
    #[arg(long)]
    pub date: String,

    #[command(flatten)]
    pub query: QueryArgs,
}

/// Arguments for the discount command.
#[derive(Args, Debug)]
pub struct DiscountArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub query: QueryArgs,
}

/// Execute the spot command.
pub fn execute_spot(args: SpotArgs, ctx: &Context) -> Result<()> {
    let spot = args.input.load_spot(ctx)?;
    let header = json!({
        "curve": "spot",
        "settlement_date": spot.settlement_date(),
    });
    let overlay = spot.quoted_points();
    run(spot.as_ref(), overlay, &args.query, ctx, header)
}

/// Execute the forward command.
pub fn execute_forward(args: ForwardArgs, ctx: &Context) -> Result<()> {
    let spot = args.input.load_spot(ctx)?;
    let forward = ForwardCurve::from_date_str(Arc::clone(&spot), &args.date)
        .with_context(|| format!("Cannot anchor forward curve at {}", args.date))?;
    debug!(
        anchor_offset = forward.anchor_offset(),
        last_tenor = forward.max_tenor_days(),
        "forward curve ready"
    );

    ctx.status(&format!(
        "anchor {} (t = {} days), forward tenors {}..={} days",
        forward.future_date().format_dmy(),
        forward.anchor_offset(),
        forward.min_tenor_days(),
        forward.max_tenor_days()
    ));

    let header = json!({
        "curve": "forward",
        "settlement_date": spot.settlement_date(),
        "future_date": forward.future_date(),
        "anchor_offset": forward.anchor_offset(),
    });
    let overlay = overlay_at_quoted_tenors(&forward, &spot);
    run(&forward, overlay, &args.query, ctx, header)
}

/// Execute the discount command.
pub fn execute_discount(args: DiscountArgs, ctx: &Context) -> Result<()> {
    let spot = args.input.load_spot(ctx)?;
    let discount = DiscountCurve::new(Arc::clone(&spot))?;
    let header = json!({
        "curve": "discount",
        "settlement_date": spot.settlement_date(),
    });
    let overlay = discount.quoted_points();
    run(&discount, overlay, &args.query, ctx, header)
}

/// Curve values at the quoted tenors that fall inside the curve's domain.
fn overlay_at_quoted_tenors(curve: &dyn DayCurve, spot: &SpotCurve) -> Vec<QuotedPoint> {
    spot.quotes()
        .iter()
        .filter_map(|q| {
            curve.table().get(q.days).map(|value| QuotedPoint {
                days: q.days,
                rate: value,
                label: q.label.clone(),
            })
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct QueryResult {
    query: String,
    days: i64,
    value: f64,
}

#[derive(Tabled)]
struct ValueRow {
    #[tabled(rename = "Query")]
    query: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Value")]
    value: String,
}

fn run(
    curve: &dyn DayCurve,
    overlay: Vec<QuotedPoint>,
    query: &QueryArgs,
    ctx: &Context,
    header: serde_json::Value,
) -> Result<()> {
    if query.series {
        return print_series(curve, &overlay, ctx, header);
    }

    let mut results = Vec::new();
    for label in &query.tenors {
        let tenor: Tenor = label.parse()?;
        let value = curve.value_at_tenor(label)?;
        results.push(QueryResult {
            query: tenor.to_string(),
            days: tenor.days(),
            value,
        });
    }
    for &days in &query.days {
        if days < 1 {
            return Err(CliError::InvalidDays(days).into());
        }
        results.push(QueryResult {
            query: format!("{days} days"),
            days,
            value: curve.value_at_days(days)?,
        });
    }
    if query.tenors.is_empty() && query.days.is_empty() {
        results = overlay
            .into_iter()
            .map(|p| QueryResult {
                query: p.label,
                days: p.days,
                value: p.rate,
            })
            .collect();
    }

    match ctx.format {
        OutputFormat::Table => {
            print_header(&format!("{} curve", title_case(&curve.kind().to_string())));
            let rows: Vec<ValueRow> = results
                .iter()
                .map(|r| ValueRow {
                    query: r.query.clone(),
                    days: r.days,
                    value: format_value(r.value, ctx.precision),
                })
                .collect();
            print_table(&rows)
        }
        OutputFormat::Json => {
            let mut output = header;
            output["results"] = serde_json::to_value(&results)?;
            print_json(&output)
        }
        OutputFormat::Csv => print_csv(&results),
        OutputFormat::Minimal => {
            for r in &results {
                println!("{}", format_value(r.value, ctx.precision));
            }
            Ok(())
        }
    }
}

#[derive(Tabled)]
struct SeriesRow {
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct OverlayRow {
    #[tabled(rename = "Tenor")]
    label: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Value")]
    value: String,
}

fn print_series(
    curve: &dyn DayCurve,
    overlay: &[QuotedPoint],
    ctx: &Context,
    header: serde_json::Value,
) -> Result<()> {
    let series = curve.series();

    match ctx.format {
        OutputFormat::Table => {
            print_header(&format!("{} curve series", title_case(&curve.kind().to_string())));
            let rows: Vec<SeriesRow> = series
                .iter()
                .map(|p| SeriesRow {
                    days: p.days,
                    value: format_value(p.value, ctx.precision),
                })
                .collect();
            print_table(&rows)?;

            print_header("Quoted points");
            let rows: Vec<OverlayRow> = overlay
                .iter()
                .map(|p| OverlayRow {
                    label: p.label.clone(),
                    days: p.days,
                    value: format_value(p.rate, ctx.precision),
                })
                .collect();
            print_table(&rows)
        }
        OutputFormat::Json => {
            let mut output = header;
            output["series"] = serde_json::to_value(&series)?;
            output["quoted"] = serde_json::to_value(overlay)?;
            print_json(&output)
        }
        OutputFormat::Csv => print_csv(&series),
        OutputFormat::Minimal => {
            for p in &series {
                println!("{} {}", p.days, format_value(p.value, ctx.precision));
            }
            Ok(())
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
