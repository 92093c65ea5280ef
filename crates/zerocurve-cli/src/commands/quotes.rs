//! Quotes command implementation.
//!
//! Shows a quote table after validation: sorted, converted to day counts
//! and decimal rates.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::commands::{Context, InputArgs};
use crate::output::{format_value, print_header, print_output};

/// Arguments for the quotes command.
#[derive(Args, Debug)]
pub struct QuotesArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct QuoteRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Maturity")]
    maturity: String,
    #[tabled(rename = "Rate (%)")]
    rate_percent: String,
    #[tabled(rename = "Rate")]
    rate: String,
}

/// Execute the quotes command.
pub fn execute(args: QuotesArgs, ctx: &Context) -> Result<()> {
    let spot = args.input.load_spot(ctx)?;

    let rows: Vec<QuoteRow> = spot
        .quotes()
        .iter()
        .map(|q| QuoteRow {
            tenor: q.tenor.to_string(),
            days: q.days,
            maturity: q.maturity.format_dmy(),
            rate_percent: q.rate_percent.normalize().to_string(),
            rate: format_value(q.rate, ctx.precision),
        })
        .collect();

    if ctx.format == crate::cli::OutputFormat::Table {
        print_header(&format!("Quotes (settlement {})", spot.settlement_date().format_dmy()));
    }
    print_output(&rows, ctx.format)
}
