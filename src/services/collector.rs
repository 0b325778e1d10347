//! GPU snapshot collection
//!
//! Runs a query source once and parses its output into records.

use crate::domain::GpuRecord;
use crate::error::{AppError, Result};
use crate::smi::{parse_output, GpuQuery};

/// Collects one snapshot of every GPU
pub struct Collector<Q: GpuQuery> {
    query: Q,
    gpu: Option<u32>,
}

impl<Q: GpuQuery> Collector<Q> {
    /// Create a collector over the given query source
    pub fn new(query: Q) -> Self {
        Self { query, gpu: None }
    }

    /// Restrict results to one GPU index
    pub fn with_gpu(mut self, gpu: Option<u32>) -> Self {
        self.gpu = gpu;
        self
    }

    /// Run the query and parse every line
    pub fn collect(&self) -> Result<Vec<GpuRecord>> {
        let output = self.query.query()?;
        log::debug!("Raw query output:\n{}", output.trim_end());
        let records = parse_output(&output)?;
        log::debug!("Collected {} GPU record(s)", records.len());

        match self.gpu {
            None => Ok(records),
            Some(index) => {
                let selected: Vec<_> = records.into_iter().filter(|r| r.index == index).collect();
                if selected.is_empty() {
                    return Err(AppError::GpuNotFound(index));
                }
                Ok(selected)
            }
        }
    }
}
