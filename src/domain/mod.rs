//! Domain models for showgpu
//!
//! This module contains the GPU snapshot record and the column types used
//! to present it. Selections are validated on construction (fail-fast pattern).

pub mod field;
pub mod gpu;
pub mod selection;

pub use field::GpuField;
pub use gpu::GpuRecord;
pub use selection::{Column, FieldSelection, Preset};
