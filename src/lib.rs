//! showgpu - nvidia-smi snapshot library
//!
//! This library provides the core functionality for querying NVIDIA GPUs
//! through nvidia-smi and rendering the results as a terminal table.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions and output renderers
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: GPU records and column selections
//! - [`error`]: Error types
//! - [`services`]: Snapshot collection
//! - [`smi`]: nvidia-smi invocation and CSV parsing

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod smi;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
