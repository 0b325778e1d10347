//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::cli::args::OutputFormat;
use crate::config::{ColumnConfig, Config, ConfigFile};
use crate::domain::{Column, Preset};
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must load; without one the default locations are
    /// searched and a miss keeps the defaults.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.config.general.verbose = true;
        }
        self
    }

    /// Override with CLI output format
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(f) = format {
            self.config.display.format = f;
        }
        self
    }

    /// Override with CLI preset, dropping any configured columns
    pub fn with_preset(mut self, preset: Option<Preset>) -> Self {
        if let Some(p) = preset {
            self.config.display.preset = p;
            self.config.display.columns.clear();
        }
        self
    }

    /// Override with CLI columns
    pub fn with_columns(mut self, columns: &[Column]) -> Self {
        if !columns.is_empty() {
            self.config.display.columns = columns.iter().map(ColumnConfig::from).collect();
        }
        self
    }

    /// Override with CLI query program
    pub fn with_program(mut self, program: Option<String>) -> Self {
        if let Some(p) = program {
            self.config.smi.program = p;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
