//! nvidia-smi abstraction layer
//!
//! Provides a trait-based seam over the query program for testability,
//! plus the parser for its CSV output.

pub mod parser;
pub mod query;

pub use parser::{parse_line, parse_output, safe_float};
pub use query::{GpuQuery, NvidiaSmi, DEFAULT_PROGRAM, QUERY_FIELDS};
