//!
//! This module defines the configuration file structures and loading logic for
//! codefmt. A `.codefmt.toml` in the working directory supplies default style
//! options and the printer command; CLI flags override file values.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::FormatOptions;

/// Default configuration file name, searched in the working directory.
pub const CONFIG_FILE: &str = ".codefmt.toml";

/// Default external printer command when the config names none.
pub const DEFAULT_PRINTER_COMMAND: &str = "prettier";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings for the external printer backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PrinterSettings {
    /// Command line to invoke; split on whitespace, source piped over stdin.
    pub command: String,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        PrinterSettings { command: DEFAULT_PRINTER_COMMAND.to_string() }
    }
}

/// The complete configuration loaded from `.codefmt.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default style options, overridable per invocation.
    pub format: FormatOptions,

    pub printer: PrinterSettings,
}

impl Config {
    /// Load from an explicit path, or from `.codefmt.toml` in the working
    /// directory when present. Absent files yield the defaults; unreadable or
    /// malformed files are errors.
    pub fn load(path: Option<&str>) -> Result<Config, ConfigError> {
        let path = match path {
            Some(explicit) => explicit,
            None if Path::new(CONFIG_FILE).exists() => CONFIG_FILE,
            None => {
                log::debug!("no {CONFIG_FILE} found; using default configuration");
                return Ok(Config::default());
            }
        };
        Config::load_file(path)
    }

    fn load_file(path: &str) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_string(), source })?;
        let config = toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_string(), source })?;
        log::debug!("loaded configuration from {path}");
        Ok(config)
    }
}
