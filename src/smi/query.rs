//! Query program invocation
//!
//! Runs nvidia-smi with a fixed field list and captures its output.

use crate::error::SmiError;

use std::io;
use std::path::PathBuf;
use std::process::Command;

/// Program used when none is configured
pub const DEFAULT_PROGRAM: &str = "nvidia-smi";

/// Columns requested from the query program, in parse order
pub const QUERY_FIELDS: [&str; 12] = [
    "index",
    "uuid",
    "utilization.gpu",
    "memory.total",
    "memory.used",
    "memory.free",
    "driver_version",
    "name",
    "gpu_serial",
    "display_active",
    "display_mode",
    "temperature.gpu",
];

/// Trait for sources of raw GPU query output
///
/// This trait abstracts the subprocess, allowing canned output in tests
/// while running the real program in production.
pub trait GpuQuery {
    /// Run the query and return its decoded standard output
    fn query(&self) -> Result<String, SmiError>;
}

/// Runs nvidia-smi as a blocking subprocess
#[derive(Debug, Clone)]
pub struct NvidiaSmi {
    program: PathBuf,
}

impl NvidiaSmi {
    /// Use the default program from PATH
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Use a specific program path
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Get the program this query runs
    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    /// Arguments passed to the program
    pub fn args() -> [String; 2] {
        [
            format!("--query-gpu={}", QUERY_FIELDS.join(",")),
            "--format=csv,noheader,nounits".to_string(),
        ]
    }
}

impl Default for NvidiaSmi {
    fn default() -> Self {
        Self::new()
    }
}

impl GpuQuery for NvidiaSmi {
    fn query(&self) -> Result<String, SmiError> {
        let program = self.program.display().to_string();
        log::debug!("Running {} {}", program, Self::args().join(" "));

        let output = Command::new(&self.program)
            .args(Self::args())
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => SmiError::NotFound(program.clone()),
                _ => SmiError::Spawn {
                    program: program.clone(),
                    source: e,
                },
            })?;

        if !output.status.success() {
            return Err(SmiError::Failed {
                program,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
