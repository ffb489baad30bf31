//! Configuration file for the neodb binary
//!
//! Optional JSON file; every field has a default. Command-line flags take
//! precedence over file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::validate_level;

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// NEO CSV file (optional, default data/neos.csv)
    #[serde(default = "default_neo_path")]
    pub neo_path: PathBuf,

    /// Close-approach JSON file (optional, default data/cad.json)
    #[serde(default = "default_cad_path")]
    pub cad_path: PathBuf,

    /// Log level (optional, default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_neo_path() -> PathBuf {
    PathBuf::from("data/neos.csv")
}
fn default_cad_path() -> PathBuf {
    PathBuf::from("data/cad.json")
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neo_path: default_neo_path(),
            cad_path: default_cad_path(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Builds the effective configuration: file (or defaults), then flags.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(path) = &cli.neofile {
            config.neo_path = path.clone();
        }
        if let Some(path) = &cli.cadfile {
            config.cad_path = path.clone();
        }
        if let Some(level) = &cli.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.neo_path.as_os_str().is_empty() {
            return Err(CliError::config_error("neo_path must not be empty"));
        }
        if self.cad_path.as_os_str().is_empty() {
            return Err(CliError::config_error("cad_path must not be empty"));
        }
        validate_level(&self.log_level).map_err(|e| CliError::config_error(e.message()))?;
        Ok(())
    }
}
