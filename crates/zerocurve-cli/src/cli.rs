//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{ConfigArgs, DiscountArgs, ForwardArgs, QuotesArgs, SpotArgs};

/// Zerocurve - spot, forward and discount curves from quoted rates
#[derive(Parser)]
#[command(name = "zerocurve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log construction steps (sets the default log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Field delimiter for CSV quote files (defaults to the configured one)
    #[arg(short, long, global = true)]
    pub delimiter: Option<char>,

    /// Settings file to use instead of the one in the user config directory
    #[arg(long, env = "ZEROCURVE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the validated quotes of a table
    Quotes(QuotesArgs),

    /// Query the interpolated spot curve
    Spot(SpotArgs),

    /// Query forward rates anchored at a future date
    Forward(ForwardArgs),

    /// Query discount factors
    Discount(DiscountArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}

impl OutputFormat {
    /// Parses a configured format name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }
}
