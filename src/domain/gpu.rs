//! GPU snapshot domain type
//!
//! Provides the GpuRecord struct holding one parsed line of query output.

use crate::domain::GpuField;
use serde::Serialize;
use std::fmt;

/// One GPU telemetry snapshot
///
/// Numeric columns that failed to parse hold `f64::NAN`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpuRecord {
    /// GPU index (0-based)
    pub index: u32,
    /// Unique GPU UUID
    pub uuid: String,
    /// GPU utilization as a fraction (0.0-1.0)
    pub utilization: f64,
    /// Total VRAM in MiB
    pub memory_total: f64,
    /// Used VRAM in MiB
    pub memory_used: f64,
    /// Free VRAM in MiB
    pub memory_available: f64,
    /// Driver version
    pub driver_version: String,
    /// GPU name (e.g., "NVIDIA GeForce RTX 4090")
    pub name: String,
    /// Board serial number
    pub serial: String,
    /// Display active flag as reported ("Enabled"/"Disabled")
    pub display_active: String,
    /// Display mode flag as reported
    pub display_mode: String,
    /// Core temperature in Celsius
    pub temperature: f64,
}

impl GpuRecord {
    /// Used memory as a percentage of total
    ///
    /// NaN when either value is missing or total is zero.
    pub fn memory_percent(&self) -> f64 {
        if self.memory_total == 0.0 {
            return f64::NAN;
        }
        self.memory_used / self.memory_total * 100.0
    }

    /// Render one field the way it appears in tables
    pub fn display(&self, field: GpuField) -> String {
        match field {
            GpuField::Id => self.index.to_string(),
            GpuField::Uuid => self.uuid.clone(),
            GpuField::GpuUtilization => format!("{}%", fixed(self.utilization * 100.0, 1)),
            GpuField::MemoryTotal => format!("{}Mb", number(self.memory_total)),
            GpuField::MemoryUsed => format!("{}Mb", number(self.memory_used)),
            GpuField::MemoryAvailable => format!("{}Mb", number(self.memory_available)),
            GpuField::MemoryPercent => format!("{}%", fixed(self.memory_percent(), 2)),
            GpuField::MemoryAll => format!(
                "{}Mb / {}Mb ({}%)",
                number(self.memory_used),
                number(self.memory_total),
                fixed(self.memory_percent(), 2)
            ),
            GpuField::DriverVersion => self.driver_version.clone(),
            GpuField::GpuName => self.name.clone(),
            GpuField::Serial => self.serial.clone(),
            GpuField::DisplayMode => self.display_mode.clone(),
            GpuField::DisplayActive => self.display_active.clone(),
            GpuField::TempGpu => format!("{}C", number(self.temperature)),
        }
    }
}

impl fmt::Display for GpuRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.index, self.name)
    }
}

/// Whole numbers keep a trailing ".0", NaN prints as "nan"
fn number(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.*}", decimals, value)
    }
}

#[cfg(test)]
pub(crate) fn sample_record(index: u32) -> GpuRecord {
    GpuRecord {
        index,
        uuid: format!("GPU-TEST-{:04}", index),
        utilization: 0.5,
        memory_total: 8192.0,
        memory_used: 2048.0,
        memory_available: 6144.0,
        driver_version: "535.154.05".to_string(),
        name: "NVIDIA GeForce RTX 3070".to_string(),
        serial: "[N/A]".to_string(),
        display_active: "Disabled".to_string(),
        display_mode: "Enabled".to_string(),
        temperature: 45.0,
    }
}
