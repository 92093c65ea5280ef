//! Persisted CLI settings.
//!
//! Stored as a flat JSON object of strings under the user config directory.
//! Unset keys fall back to their defaults; values are validated on `set`
//! and again when resolved, so a hand-edited file cannot break a command.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{delimiter_byte, CliError, CliResult};

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    DefaultFormat,
    /// Precision for decimal output
    DecimalPrecision,
    /// Whether to use colors
    UseColors,
    /// Delimiter for CSV quote files
    CsvDelimiter,
}

impl ConfigKey {
    /// Looks a key up by name or short alias.
    pub fn from_name(s: &str) -> CliResult<Self> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Ok(Self::DefaultFormat),
            "decimal_precision" | "precision" => Ok(Self::DecimalPrecision),
            "use_colors" | "colors" => Ok(Self::UseColors),
            "csv_delimiter" | "delimiter" => Ok(Self::CsvDelimiter),
            _ => Err(CliError::UnknownKey(s.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::DecimalPrecision => "decimal_precision",
            Self::UseColors => "use_colors",
            Self::CsvDelimiter => "csv_delimiter",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::DecimalPrecision => "Number of decimal places for output (2-12)",
            Self::UseColors => "Enable colored output (true, false)",
            Self::CsvDelimiter => "Field delimiter for CSV quote files (one character)",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::DecimalPrecision => "7",
            Self::UseColors => "true",
            Self::CsvDelimiter => ",",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::DefaultFormat,
            Self::DecimalPrecision,
            Self::UseColors,
            Self::CsvDelimiter,
        ]
    }

    /// Checks a value for this key.
    pub fn validate(self, value: &str) -> CliResult<()> {
        let invalid = |reason: String| CliError::InvalidValue {
            key: self.as_str(),
            reason,
        };
        match self {
            Self::DefaultFormat => {
                OutputFormat::from_name(value)
                    .ok_or_else(|| invalid(format!("{value}. Use table, json, csv, or minimal.")))?;
            }
            Self::DecimalPrecision => {
                parse_precision(value).ok_or_else(|| invalid(format!("{value}. Must be between 2 and 12.")))?;
            }
            Self::UseColors => {
                parse_bool(value).ok_or_else(|| invalid(format!("{value}. Use true or false.")))?;
            }
            Self::CsvDelimiter => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        delimiter_byte(c)?;
                    }
                    _ => return Err(invalid(format!("{value:?}. Must be a single character."))),
                }
            }
        }
        Ok(())
    }
}

fn parse_precision(value: &str) -> Option<usize> {
    value.parse().ok().filter(|p| (2..=12).contains(p))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Raw settings file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigStore {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
    #[serde(skip)]
    path: PathBuf,
}

impl ConfigStore {
    /// Loads the file at `path`, or an empty store if it does not exist.
    pub fn load(path: PathBuf) -> CliResult<Self> {
        let mut store = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)
                .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?
        } else {
            Self::default()
        };
        store.path = path;
        Ok(store)
    }

    pub fn save(&self) -> CliResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CliError::Config(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value of `key`, or its default.
    pub fn get(&self, key: ConfigKey) -> &str {
        self.values
            .get(key.as_str())
            .map_or_else(|| key.default_value(), String::as_str)
    }

    /// Whether `key` has an explicit value in the file.
    pub fn is_set(&self, key: ConfigKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    pub fn set(&mut self, key: ConfigKey, value: String) {
        self.values.insert(key.as_str().to_string(), value);
    }

    pub fn remove(&mut self, key: ConfigKey) {
        self.values.remove(key.as_str());
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Resolves every key to a typed value.
    pub fn settings(&self) -> CliResult<Settings> {
        for key in ConfigKey::all() {
            key.validate(self.get(*key))?;
        }
        let delimiter = self
            .get(ConfigKey::CsvDelimiter)
            .chars()
            .next()
            .map_or(Ok(b','), delimiter_byte)?;

        Ok(Settings {
            format: OutputFormat::from_name(self.get(ConfigKey::DefaultFormat)).unwrap_or_default(),
            precision: parse_precision(self.get(ConfigKey::DecimalPrecision)).unwrap_or(7),
            use_colors: parse_bool(self.get(ConfigKey::UseColors)).unwrap_or(true),
            csv_delimiter: delimiter,
        })
    }
}

/// Default location of the settings file.
pub fn default_config_path() -> CliResult<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".into()))?;
    Ok(base.join("zerocurve").join("config.json"))
}

/// Typed settings used by the commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub precision: usize,
    pub use_colors: bool,
    pub csv_delimiter: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: 7,
            use_colors: true,
            csv_delimiter: b',',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let store = ConfigStore::default();
        let settings = store.settings().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.format, OutputFormat::Table);
        assert_eq!(settings.precision, 7);
        assert!(settings.use_colors);
        assert_eq!(settings.csv_delimiter, b',');
    }

    #[test]
    fn test_validation() {
        assert!(ConfigKey::DefaultFormat.validate("JSON").is_ok());
        assert!(ConfigKey::DefaultFormat.validate("yaml").is_err());
        assert!(ConfigKey::DecimalPrecision.validate("1").is_err());
        assert!(ConfigKey::DecimalPrecision.validate("10").is_ok());
        assert!(ConfigKey::UseColors.validate("maybe").is_err());
        assert!(ConfigKey::CsvDelimiter.validate(";").is_ok());
        assert!(ConfigKey::CsvDelimiter.validate(";;").is_err());
        assert!(matches!(
            ConfigKey::from_name("currency"),
            Err(CliError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut store = ConfigStore::load(path.clone()).unwrap();
        store.set(ConfigKey::CsvDelimiter, ";".into());
        store.set(ConfigKey::DefaultFormat, "csv".into());
        store.save().unwrap();

        let reloaded = ConfigStore::load(path.clone()).unwrap();
        assert!(reloaded.is_set(ConfigKey::CsvDelimiter));
        assert!(!reloaded.is_set(ConfigKey::UseColors));

        let settings = ConfigStore::load(path).unwrap().settings().unwrap();
        assert_eq!(settings.csv_delimiter, b';');
        assert_eq!(settings.format, OutputFormat::Csv);
    }
}
