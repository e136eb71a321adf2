//! Configuration system for dotpath.
//!
//! This module provides the configuration structure for the `dotpath` command
//! with sensible defaults and support for serialization/deserialization via
//! serde. Configuration is loaded from a TOML file and merged with
//! command-line arguments, which take precedence.
//!
//! # Example
//!
//! ```
//! use dotpath::config::Config;
//! use dotpath::output::OutputFormat;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.output_format, OutputFormat::Yaml);
//! assert_eq!(config.max_indirection, 256);
//!
//! // Create custom configuration
//! let custom = Config {
//!     output_format: OutputFormat::Json,
//!     fail_on_absent: true,
//!     ..Config::default()
//! };
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::value::DEFAULT_MAX_INDIRECTION;

/// Configuration for the dotpath command.
///
/// # Fields
///
/// * `output_format` - How resolved values are printed: "yaml" or "json" (default: "yaml")
/// * `pretty` - Pretty-print JSON output (default: true)
/// * `max_indirection` - Indirection layers followed per level (default: 256)
/// * `fail_on_absent` - Exit with a failure status when nothing is found (default: false)
/// * `log_level` - Default log filter when `RUST_LOG` is unset (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format for resolved values
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Indirection layers followed per level before giving up
    #[serde(default = "default_max_indirection")]
    pub max_indirection: usize,

    /// Exit with a failure status when the path resolves to nothing
    #[serde(default)]
    pub fail_on_absent: bool,

    /// Default log filter
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_pretty() -> bool {
    true
}

fn default_max_indirection() -> usize {
    DEFAULT_MAX_INDIRECTION
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            pretty: default_pretty(),
            max_indirection: default_max_indirection(),
            fail_on_absent: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/dotpath/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("dotpath");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if there is no config file.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but can't be read or is not valid TOML.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from `path`.
    ///
    /// Returns the default configuration if the file doesn't exist. Missing
    /// keys take their default values.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))
    }
}
