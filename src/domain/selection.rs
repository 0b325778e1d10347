//! Field selection domain types
//!
//! A selection is the ordered list of labelled columns the presenter renders.
//! Selections are validated on construction.

use crate::domain::GpuField;
use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Built-in column sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Index, name and combined memory usage
    #[default]
    Clean,
    /// Utilization, memory breakdown, temperature and driver
    Normal,
    /// Every field
    Full,
}

impl Preset {
    fn columns(&self) -> Vec<Column> {
        let labelled = |pairs: &[(&str, GpuField)]| -> Vec<Column> {
            pairs
                .iter()
                .map(|(label, field)| Column::new(*label, *field))
                .collect()
        };

        match self {
            Preset::Clean => labelled(&[
                ("ID", GpuField::Id),
                ("GPU Name", GpuField::GpuName),
                ("MemoryInfo", GpuField::MemoryAll),
            ]),
            Preset::Normal => labelled(&[
                ("ID", GpuField::Id),
                ("GPU Name", GpuField::GpuName),
                ("GPU Utilization", GpuField::GpuUtilization),
                ("Memory(Total)", GpuField::MemoryTotal),
                ("Memory(Used)", GpuField::MemoryUsed),
                ("Memory(Avail)", GpuField::MemoryAvailable),
                ("temperature", GpuField::TempGpu),
                ("driver version", GpuField::DriverVersion),
            ]),
            Preset::Full => GpuField::ALL.iter().map(|f| Column::from(*f)).collect(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Clean => write!(f, "clean"),
            Preset::Normal => write!(f, "normal"),
            Preset::Full => write!(f, "full"),
        }
    }
}

/// One labelled column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text
    pub label: String,
    /// Field rendered in this column
    pub field: GpuField,
}

impl Column {
    /// Create a column with an explicit label
    pub fn new(label: impl Into<String>, field: GpuField) -> Self {
        Self {
            label: label.into(),
            field,
        }
    }
}

impl From<GpuField> for Column {
    fn from(field: GpuField) -> Self {
        Self::new(field.default_label(), field)
    }
}

/// Parses `LABEL=FIELD` or a bare `FIELD`
impl FromStr for Column {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((label, field)) => {
                let label = label.trim();
                if label.is_empty() || field.trim().is_empty() {
                    return Err(FieldError::InvalidColumn(s.to_string()));
                }
                Ok(Column::new(label, field.parse()?))
            }
            None if s.trim().is_empty() => Err(FieldError::InvalidColumn(s.to_string())),
            None => Ok(Column::from(s.parse::<GpuField>()?)),
        }
    }
}

/// Ordered, non-empty set of columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    columns: Vec<Column>,
}

impl FieldSelection {
    /// Create a selection, rejecting an empty column list or repeated labels
    pub fn new(columns: Vec<Column>) -> Result<Self, FieldError> {
        if columns.is_empty() {
            return Err(FieldError::EmptySelection);
        }

        {
            let mut seen = HashSet::new();
            if let Some(dup) = columns.iter().find(|c| !seen.insert(c.label.as_str())) {
                return Err(FieldError::DuplicateLabel(dup.label.clone()));
            }
        }

        Ok(Self { columns })
    }

    /// Selection for a built-in preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            columns: preset.columns(),
        }
    }

    /// Get the columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header labels in display order
    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }
}

impl Default for FieldSelection {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_clean() {
        let selection = FieldSelection::default();
        assert_eq!(selection.labels(), vec!["ID", "GPU Name", "MemoryInfo"]);
    }

    #[test]
    fn test_normal_preset() {
        let selection = FieldSelection::preset(Preset::Normal);
        assert_eq!(selection.columns().len(), 8);
        assert_eq!(selection.columns()[2].field, GpuField::GpuUtilization);
    }

    #[test]
    fn test_full_preset_has_every_field() {
        let selection = FieldSelection::preset(Preset::Full);
        assert_eq!(selection.columns().len(), GpuField::ALL.len());
    }

    #[test]
    fn test_column_parse_labelled() {
        let column: Column = "Temp=temp_gpu".parse().unwrap();
        assert_eq!(column, Column::new("Temp", GpuField::TempGpu));
    }

    #[test]
    fn test_column_parse_bare() {
        let column: Column = "uuid".parse().unwrap();
        assert_eq!(column.label, "UUID");
    }

    #[test]
    fn test_column_parse_invalid() {
        assert!(matches!(
            "=uuid".parse::<Column>(),
            Err(FieldError::InvalidColumn(_))
        ));
        assert!(matches!(
            "Fan=fan".parse::<Column>(),
            Err(FieldError::UnknownField(_))
        ));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let columns = vec![Column::from(GpuField::Id), Column::from(GpuField::Id)];
        assert_eq!(
            FieldSelection::new(columns).unwrap_err(),
            FieldError::DuplicateLabel("ID".to_string())
        );

        let columns = vec![
            Column::from(GpuField::Id),
            Column::new("ID", GpuField::Uuid),
        ];
        assert!(matches!(
            FieldSelection::new(columns),
            Err(FieldError::DuplicateLabel(_))
        ));
    }

    #[test]
    fn test_same_field_with_distinct_labels() {
        let columns = vec![
            Column::from(GpuField::Id),
            Column::new("Index", GpuField::Id),
        ];
        assert_eq!(FieldSelection::new(columns).unwrap().columns().len(), 2);
    }

    #[test]
    fn test_presets_have_unique_labels() {
        for preset in [Preset::Clean, Preset::Normal, Preset::Full] {
            let columns = FieldSelection::preset(preset).columns().to_vec();
            assert!(FieldSelection::new(columns).is_ok());
        }
    }

    #[test]
    fn test_empty_selection_rejected() {
        assert_eq!(
            FieldSelection::new(vec![]).unwrap_err(),
            FieldError::EmptySelection
        );
    }
}
