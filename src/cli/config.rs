//! Configuration file handling.
//!
//! Configuration is a single JSON file naming the listing source plus the
//! pagination caps applied while parsing request parameters. Every field
//! except the source has a default; validation runs on load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::query::ParamLimits;

use super::errors::{CliError, CliResult};

/// Where listings come from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    /// A JSON dataset file (an array of listing records)
    Dataset { path: String },
    /// A MySQL database
    Mysql {
        url: String,
        #[serde(default = "default_table")]
        table: String,
    },
}

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listing source (required)
    pub source: SourceConfig,

    /// Page size used when a request omits `limit` (default 6)
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Largest accepted `limit` (default 100)
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
}

fn default_limit() -> u32 {
    6
}

fn default_max_limit() -> u32 {
    100
}

fn default_table() -> String {
    "properties".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.default_limit == 0 {
            return Err(CliError::config_error("default_limit must be > 0"));
        }
        if self.max_limit < self.default_limit {
            return Err(CliError::config_error(
                "max_limit must be >= default_limit",
            ));
        }
        match &self.source {
            SourceConfig::Dataset { path } if path.is_empty() => {
                Err(CliError::config_error("dataset path must not be empty"))
            }
            SourceConfig::Mysql { url, .. } if url.is_empty() => {
                Err(CliError::config_error("mysql url must not be empty"))
            }
            _ => Ok(()),
        }
    }

    /// The caps handed to the request-parameter parser
    pub fn param_limits(&self) -> ParamLimits {
        ParamLimits {
            default_limit: self.default_limit,
            max_limit: self.max_limit,
        }
    }
}
