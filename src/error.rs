//! Unified error types for showgpu
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from invoking the query program
    #[error("GPU query failed: {0}")]
    Smi(#[from] SmiError),

    /// Error from parsing the query output
    #[error("Failed to parse GPU query output: {0}")]
    Parse(#[from] ParseError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from field selection
    #[error("Field selection error: {0}")]
    Field(#[from] FieldError),

    /// Requested GPU index is not present in the query result
    #[error("GPU not found at index {0}")]
    GpuNotFound(u32),

    /// IO error (writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from running the vendor query program
#[derive(Error, Debug)]
pub enum SmiError {
    /// Program is not installed or not on PATH
    #[error("'{0}' not found. Is the NVIDIA driver installed?")]
    NotFound(String),

    /// Program exists but could not be started
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Program ran but reported failure
    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}

/// Errors from parsing one line of CSV output
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line did not split into the expected number of fields
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// GPU index column is not an integer
    #[error("line {line}: invalid GPU index '{value}'")]
    InvalidIndex { line: usize, value: String },
}

/// Errors from resolving displayable fields
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Field name is not known
    #[error("Unknown field '{0}' (run 'showgpu fields' to list them)")]
    UnknownField(String),

    /// Column definition has an empty label or field
    #[error("Invalid column '{0}' (expected LABEL=FIELD or FIELD)")]
    InvalidColumn(String),

    /// Two columns share a label
    #[error("Duplicate column label '{0}'")]
    DuplicateLabel(String),

    /// No columns were selected
    #[error("Field selection must have at least one column")]
    EmptySelection,
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Config file exists but could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Column entry in the config file is invalid
    #[error("Invalid column in configuration: {0}")]
    InvalidColumn(#[from] FieldError),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smi_not_found_display() {
        let err = SmiError::NotFound("nvidia-smi".to_string());
        assert!(err.to_string().contains("NVIDIA driver"));
        assert!(err.to_string().contains("nvidia-smi"));
    }

    #[test]
    fn test_field_count_display() {
        let err = ParseError::FieldCount {
            line: 2,
            expected: 12,
            found: 3,
        };
        assert_eq!(err.to_string(), "line 2: expected 12 fields, found 3");
    }

    #[test]
    fn test_error_conversion() {
        let field_err = FieldError::UnknownField("fan".to_string());
        let app_err: AppError = field_err.into();
        assert!(matches!(app_err, AppError::Field(_)));

        let parse_err = ParseError::InvalidIndex {
            line: 1,
            value: "x".to_string(),
        };
        let app_err: AppError = parse_err.into();
        assert!(matches!(app_err, AppError::Parse(_)));
    }
}
