//! Mock implementations for testing
//!
//! Provides a canned query source for unit testing without real hardware.

use crate::error::SmiError;
use crate::smi::GpuQuery;

use std::cell::Cell;

/// Mock query that returns fixed output or a fixed failure
#[derive(Debug)]
pub struct MockQuery {
    output: Option<String>,
    calls: Cell<u32>,
}

impl MockQuery {
    /// Mock that succeeds with the given output
    pub fn with_output(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
            calls: Cell::new(0),
        }
    }

    /// Mock that behaves like a missing nvidia-smi
    pub fn missing() -> Self {
        Self {
            output: None,
            calls: Cell::new(0),
        }
    }

    /// Number of times the query was run
    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl GpuQuery for MockQuery {
    fn query(&self) -> Result<String, SmiError> {
        self.calls.set(self.calls.get() + 1);
        self.output
            .clone()
            .ok_or_else(|| SmiError::NotFound("nvidia-smi".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_output() {
        let mock = MockQuery::with_output("abc");
        assert_eq!(mock.query().unwrap(), "abc");
        assert_eq!(mock.calls(), 1);
    }

    #[test]
    fn test_mock_missing() {
        let mock = MockQuery::missing();
        assert!(matches!(mock.query(), Err(SmiError::NotFound(_))));
    }
}
