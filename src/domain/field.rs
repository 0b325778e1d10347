//! Displayable GPU fields
//!
//! Provides the GpuField enum naming every column a record can be shown with.

use crate::error::FieldError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A column that can be rendered for a GPU record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GpuField {
    /// GPU index
    Id,
    /// Unique GPU UUID
    Uuid,
    /// GPU compute utilization
    GpuUtilization,
    /// Total VRAM
    MemoryTotal,
    /// Used VRAM
    MemoryUsed,
    /// Free VRAM
    MemoryAvailable,
    /// Used VRAM as a percentage of total
    MemoryPercent,
    /// Used / total VRAM with percentage
    MemoryAll,
    /// Driver version
    DriverVersion,
    /// Product name
    GpuName,
    /// Board serial number
    Serial,
    /// Whether a display can be attached
    DisplayMode,
    /// Whether a display is initialized
    DisplayActive,
    /// Core temperature
    TempGpu,
}

impl GpuField {
    /// Every field, in the order `showgpu fields` lists them
    pub const ALL: [GpuField; 14] = [
        GpuField::Id,
        GpuField::Uuid,
        GpuField::GpuUtilization,
        GpuField::MemoryTotal,
        GpuField::MemoryUsed,
        GpuField::MemoryAvailable,
        GpuField::MemoryPercent,
        GpuField::MemoryAll,
        GpuField::DriverVersion,
        GpuField::GpuName,
        GpuField::Serial,
        GpuField::DisplayMode,
        GpuField::DisplayActive,
        GpuField::TempGpu,
    ];

    /// Machine name accepted on the command line and in config files
    pub fn name(&self) -> &'static str {
        match self {
            GpuField::Id => "id",
            GpuField::Uuid => "uuid",
            GpuField::GpuUtilization => "gpu_utilization",
            GpuField::MemoryTotal => "memory_total",
            GpuField::MemoryUsed => "memory_used",
            GpuField::MemoryAvailable => "memory_available",
            GpuField::MemoryPercent => "memory_percent",
            GpuField::MemoryAll => "memory_all",
            GpuField::DriverVersion => "driver_version",
            GpuField::GpuName => "gpu_name",
            GpuField::Serial => "serial",
            GpuField::DisplayMode => "display_mode",
            GpuField::DisplayActive => "display_active",
            GpuField::TempGpu => "temp_gpu",
        }
    }

    /// Column header used when no label is given
    pub fn default_label(&self) -> &'static str {
        match self {
            GpuField::Id => "ID",
            GpuField::Uuid => "UUID",
            GpuField::GpuUtilization => "GPU Utilization",
            GpuField::MemoryTotal => "Memory(Total)",
            GpuField::MemoryUsed => "Memory(Used)",
            GpuField::MemoryAvailable => "Memory(Avail)",
            GpuField::MemoryPercent => "Memory(%)",
            GpuField::MemoryAll => "MemoryInfo",
            GpuField::DriverVersion => "driver version",
            GpuField::GpuName => "GPU Name",
            GpuField::Serial => "Serial",
            GpuField::DisplayMode => "Display Mode",
            GpuField::DisplayActive => "Display Active",
            GpuField::TempGpu => "temperature",
        }
    }
}

impl FromStr for GpuField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        GpuField::ALL
            .iter()
            .copied()
            .find(|f| f.name() == normalized)
            .ok_or_else(|| FieldError::UnknownField(s.trim().to_string()))
    }
}

impl fmt::Display for GpuField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
