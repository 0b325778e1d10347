//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::{ConfigFile, DefaultLoad};

use crate::cli::args::OutputFormat;
use crate::domain::{Column, FieldSelection, GpuField, Preset};
use crate::error::ConfigError;
use crate::smi::DEFAULT_PROGRAM;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Query program settings
    pub smi: SmiConfig,
    /// Presentation settings
    pub display: DisplayConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
}

/// Query program configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmiConfig {
    /// Program name or path
    pub program: String,
}

impl Default for SmiConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
        }
    }
}

/// Presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplayConfig {
    /// Output format
    pub format: OutputFormat,
    /// Column set used when `columns` is empty
    pub preset: Preset,
    /// Explicit columns, overriding the preset
    pub columns: Vec<ColumnConfig>,
}

/// Column configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Header text (defaults to the field's own label)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Field name, as listed by `showgpu fields`
    pub field: String,
}

impl ColumnConfig {
    /// Convert to a Column domain object
    pub fn to_column(&self) -> Result<Column, ConfigError> {
        let field: GpuField = self.field.parse()?;
        Ok(match &self.label {
            Some(label) => Column::new(label.clone(), field),
            None => Column::from(field),
        })
    }
}

impl From<&Column> for ColumnConfig {
    fn from(column: &Column) -> Self {
        Self {
            label: Some(column.label.clone()),
            field: column.field.name().to_string(),
        }
    }
}

impl Config {
    /// Resolve the columns to render
    pub fn selection(&self) -> Result<FieldSelection, ConfigError> {
        if self.display.columns.is_empty() {
            return Ok(FieldSelection::preset(self.display.preset));
        }

        let columns = self
            .display
            .columns
            .iter()
            .map(ColumnConfig::to_column)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FieldSelection::new(columns)?)
    }
}
