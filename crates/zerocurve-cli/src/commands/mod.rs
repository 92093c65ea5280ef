//! CLI command implementations.

pub mod config;
pub mod curve;
pub mod quotes;

pub use config::ConfigArgs;
pub use curve::{DiscountArgs, ForwardArgs, SpotArgs};
pub use quotes::QuotesArgs;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Args;
use tracing::{debug, info};

use zerocurve_curves::SpotCurve;
use zerocurve_ext_file::open_quote_source;

use crate::cli::OutputFormat;
use crate::output::print_info;

/// Settings resolved for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub format: OutputFormat,
    pub precision: usize,
    pub quiet: bool,
    /// Explicit CSV delimiter; `None` picks one from the file extension.
    pub delimiter: Option<u8>,
}

impl Context {
    /// Prints a status line unless `--quiet` or a machine format is active.
    pub fn status(&self, message: &str) {
        if !self.quiet && self.format == OutputFormat::Table {
            print_info(message);
        }
    }
}

/// Quote file argument shared by the curve commands.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Quote table (.csv, .tsv or .json) with Tenor, Rate, Maturity and Settlement_Date columns
    #[arg(short, long)]
    pub input: PathBuf,
}

impl InputArgs {
    /// Loads the quote file and builds the spot curve.
    pub fn load_spot(&self, ctx: &Context) -> Result<Arc<SpotCurve>> {
        let source = open_quote_source(&self.input, ctx.delimiter);
        info!(path = %self.input.display(), "loading quotes");

        let spot = SpotCurve::from_source(&source)
            .with_context(|| format!("Cannot build curve from {}", self.input.display()))?;
        debug!(
            quotes = spot.quotes().len(),
            first_day = spot.min_tenor_days(),
            last_day = spot.max_tenor_days(),
            "spot curve ready"
        );

        ctx.status(&format!(
            "{} quotes, settlement {}, days {}..={}",
            spot.quotes().len(),
            spot.settlement_date().format_dmy(),
            spot.min_tenor_days(),
            spot.max_tenor_days()
        ));
        Ok(Arc::new(spot))
    }
}
