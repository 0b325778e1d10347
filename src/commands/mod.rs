//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod fields;
pub mod show;

pub use fields::run_fields;
pub use show::run_show;
