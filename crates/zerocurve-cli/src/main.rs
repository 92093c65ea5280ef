//! Zerocurve CLI - spot, forward and discount curves from quoted rates.
//!
//! # Usage
//!
//! ```bash
//! # Inspect the validated quote table
//! zerocurve quotes --input data/rates_2021_07_15.csv
//!
//! # Spot rate at a tenor
//! zerocurve spot --input data/rates_2021_07_15.csv --tenor "4 MO"
//!
//! # Forward rates anchored at a future date
//! zerocurve forward --input data/rates_2021_07_15.csv --date 15.10.2021 --tenor "1 MO"
//!
//! # Full discount curve as JSON, for charting
//! zerocurve discount --input data/rates_2021_07_15.csv --series --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use commands::Context;
use error::delimiter_byte;
use output::print_warning;
use settings::{default_config_path, ConfigKey, ConfigStore, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => default_config_path()?,
    };
    let store = ConfigStore::load(config_path)?;

    // A broken settings file must not lock the user out of `config reset`.
    let settings = match store.settings() {
        Ok(settings) => settings,
        Err(e) if matches!(cli.command, Commands::Config(_)) => {
            print_warning(&e.to_string());
            Settings::default()
        }
        Err(e) => return Err(e.into()),
    };

    if !settings.use_colors {
        colored::control::set_override(false);
    }

    let ctx = Context {
        format: cli.format.unwrap_or(settings.format),
        precision: settings.precision,
        quiet: cli.quiet,
        delimiter: match cli.delimiter {
            Some(c) => Some(delimiter_byte(c)?),
            None => store
                .is_set(ConfigKey::CsvDelimiter)
                .then_some(settings.csv_delimiter),
        },
    };
    tracing::debug!(?ctx, "resolved settings");

    match cli.command {
        Commands::Quotes(args) => commands::quotes::execute(args, &ctx)?,
        Commands::Spot(args) => commands::curve::execute_spot(args, &ctx)?,
        Commands::Forward(args) => commands::curve::execute_forward(args, &ctx)?,
        Commands::Discount(args) => commands::curve::execute_discount(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, store, ctx.format)?,
    }

    Ok(())
}
