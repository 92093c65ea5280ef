//! Config command implementation.
//!
//! Manages the persisted CLI settings.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::output::{print_header, print_info, print_output, print_success, print_warning, KeyValue};
use crate::settings::{ConfigKey, ConfigStore};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, mut store: ConfigStore, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(&store, format),
        ConfigCommand::Get(get_args) => execute_get(&get_args, &store, format),
        ConfigCommand::Set(set_args) => execute_set(set_args, &mut store),
        ConfigCommand::List => execute_list(format),
        ConfigCommand::Reset(reset_args) => execute_reset(&reset_args, &mut store),
        ConfigCommand::Path => {
            execute_path(&store);
            Ok(())
        }
    }
}

fn execute_show(store: &ConfigStore, format: OutputFormat) -> Result<()> {
    let results: Vec<KeyValue> = ConfigKey::all()
        .iter()
        .map(|key| KeyValue::new(key.as_str(), store.get(*key)))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: BTreeMap<_, _> = ConfigKey::all()
                .iter()
                .map(|key| (key.as_str(), store.get(*key)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => print_output(&results, format)?,
        OutputFormat::Minimal => {
            for kv in &results {
                println!("{}={}", kv.key, kv.value);
            }
        }
    }

    Ok(())
}

fn execute_get(args: &GetArgs, store: &ConfigStore, format: OutputFormat) -> Result<()> {
    let key = ConfigKey::from_name(&args.key)?;
    let value = store.get(key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key.as_str(), value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            println!("{value}");
        }
    }

    Ok(())
}

fn execute_set(args: SetArgs, store: &mut ConfigStore) -> Result<()> {
    let key = ConfigKey::from_name(&args.key)?;
    key.validate(&args.value)?;

    print_success(&format!("Set {} = {}", key.as_str(), args.value));
    store.set(key, args.value);
    store.save()?;
    Ok(())
}

fn execute_list(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let results: Vec<KeyValue> = ConfigKey::all()
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", key.description(), key.default_value()),
                    )
                })
                .collect();
            print_header("Available Configuration Keys");
            print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(["key", "description", "default"])?;
            for key in ConfigKey::all() {
                wtr.write_record([key.as_str(), key.description(), key.default_value()])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key.as_str());
            }
        }
    }

    Ok(())
}

fn execute_reset(args: &ResetArgs, store: &mut ConfigStore) -> Result<()> {
    if args.all {
        store.clear();
        store.save()?;
        print_success("Reset all configuration to defaults");
    } else if let Some(name) = &args.key {
        let key = ConfigKey::from_name(name)?;
        store.remove(key);
        store.save()?;
        print_success(&format!(
            "Reset {} to default ({})",
            key.as_str(),
            key.default_value()
        ));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

fn execute_path(store: &ConfigStore) {
    let path = store.path();
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
}
