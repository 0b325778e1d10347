//! Output formatting utilities
//!
//! Provides table, plain and JSON output formatting for GPU records.

use crate::cli::args::OutputFormat;
use crate::domain::{FieldSelection, GpuRecord};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::{self, Write};

/// Printed before the plain rendering when the table renderer is compiled out
pub const TABLE_UNAVAILABLE_WARNING: &str =
    "[Warning] table rendering is unavailable in this build, falling back to plain output";

/// Trait for the ways a record set can be laid out as text
pub trait Renderer {
    /// Render every record using the selected columns
    fn render(&self, records: &[GpuRecord], selection: &FieldSelection) -> String;
}

/// Aligned table with centered cells
#[cfg(feature = "table")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

#[cfg(feature = "table")]
impl Renderer for TableRenderer {
    fn render(&self, records: &[GpuRecord], selection: &FieldSelection) -> String {
        let labels = selection.labels();
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|r| {
                selection
                    .columns()
                    .iter()
                    .map(|c| r.display(c.field))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                rows.iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(label.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |cells: Vec<String>| cells.join("  ");
        let centered = |cells: &[&str]| {
            line(
                cells
                    .iter()
                    .zip(&widths)
                    .map(|(cell, w)| format!("{:^width$}", cell, width = *w))
                    .collect(),
            )
        };

        let mut output = vec![
            centered(labels.as_slice()),
            line(widths.iter().map(|w| "-".repeat(*w)).collect()),
        ];
        for row in &rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            output.push(centered(cells.as_slice()));
        }

        output.join("\n")
    }
}

/// One `| label: value |` line per record
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl PlainRenderer {
    fn render_record(record: &GpuRecord, selection: &FieldSelection) -> String {
        let mut line = String::from("|");
        for column in selection.columns() {
            line.push_str(&format!(
                " {}: {} |",
                column.label,
                record.display(column.field)
            ));
        }
        line
    }
}

impl Renderer for PlainRenderer {
    fn render(&self, records: &[GpuRecord], selection: &FieldSelection) -> String {
        records
            .iter()
            .map(|r| Self::render_record(r, selection))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Record serialized as a map of label to displayed value, in column order
struct JsonRow<'a> {
    record: &'a GpuRecord,
    selection: &'a FieldSelection,
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns = self.selection.columns();
        let mut map = serializer.serialize_map(Some(columns.len()))?;
        for column in columns {
            map.serialize_entry(&column.label, &self.record.display(column.field))?;
        }
        map.end()
    }
}

/// Render records as a pretty-printed JSON array
pub fn render_json(records: &[GpuRecord], selection: &FieldSelection) -> serde_json::Result<String> {
    let rows: Vec<JsonRow<'_>> = records
        .iter()
        .map(|record| JsonRow { record, selection })
        .collect();
    serde_json::to_string_pretty(&rows)
}

/// Write records in the selected format
pub fn write_output<W: Write>(
    out: &mut W,
    records: &[GpuRecord],
    selection: &FieldSelection,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => write_table(out, records, selection)?,
        OutputFormat::Plain => {
            writeln!(out, "{}", PlainRenderer.render(records, selection))?;
        }
        OutputFormat::Json => {
            let json = render_json(records, selection).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }

    Ok(())
}

#[cfg(feature = "table")]
fn write_table<W: Write>(
    out: &mut W,
    records: &[GpuRecord],
    selection: &FieldSelection,
) -> io::Result<()> {
    writeln!(out, "{}", TableRenderer.render(records, selection))
}

#[cfg(not(feature = "table"))]
fn write_table<W: Write>(
    out: &mut W,
    records: &[GpuRecord],
    selection: &FieldSelection,
) -> io::Result<()> {
    log::warn!("Built without the 'table' feature, using plain output");
    writeln!(out, "{}", TABLE_UNAVAILABLE_WARNING)?;
    writeln!(out, "{}", PlainRenderer.render(records, selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gpu::sample_record;
    use crate::domain::Preset;
    #[cfg(feature = "table")]
    use crate::domain::{Column, GpuField};

    fn render_to_string(records: &[GpuRecord], format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_output(&mut buf, records, &FieldSelection::default(), format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_line() {
        let output = PlainRenderer.render(&[sample_record(0)], &FieldSelection::default());
        assert_eq!(
            output,
            "| ID: 0 | GPU Name: NVIDIA GeForce RTX 3070 | MemoryInfo: 2048.0Mb / 8192.0Mb (25.00%) |"
        );
    }

    #[test]
    fn test_plain_one_line_per_record() {
        let records = [sample_record(0), sample_record(1)];
        let output = PlainRenderer.render(&records, &FieldSelection::preset(Preset::Normal));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("| ID: 1 |"));
        assert!(lines[1].contains("GPU Utilization: 50.0%"));
        assert!(lines[1].ends_with("driver version: 535.154.05 |"));
    }

    #[test]
    fn test_plain_empty() {
        let output = PlainRenderer.render(&[], &FieldSelection::default());
        assert_eq!(output, "");
        assert_eq!(render_to_string(&[], OutputFormat::Plain), "\n");
    }

    #[cfg(feature = "table")]
    #[test]
    fn test_table_layout() {
        let output = TableRenderer.render(&[sample_record(0)], &FieldSelection::default());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            format!("{}  {}  {}", "-".repeat(2), "-".repeat(23), "-".repeat(28))
        );
        assert!(lines[0].contains("GPU Name"));
        assert!(lines[2].contains("NVIDIA GeForce RTX 3070"));
        assert!(lines[2].contains("2048.0Mb / 8192.0Mb (25.00%)"));
        assert!(lines.iter().all(|l| l.len() == lines[1].len()));
    }

    #[cfg(feature = "table")]
    #[test]
    fn test_table_cells_centered() {
        let selection = FieldSelection::new(vec![Column::new("Index", GpuField::Id)]).unwrap();
        let output = TableRenderer.render(&[sample_record(3)], &selection);
        assert_eq!(output, "Index\n-----\n  3  ");
    }

    #[cfg(feature = "table")]
    #[test]
    fn test_table_empty_has_header() {
        let output = render_to_string(&[], OutputFormat::Table);
        assert_eq!(
            output,
            "ID  GPU Name  MemoryInfo\n--  --------  ----------\n"
        );
    }

    #[cfg(not(feature = "table"))]
    #[test]
    fn test_table_falls_back_to_plain() {
        let output = render_to_string(&[sample_record(0)], OutputFormat::Table);
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some(TABLE_UNAVAILABLE_WARNING));
        assert!(lines.next().unwrap().starts_with("| ID: 0 |"));
    }

    #[test]
    fn test_json_keys_in_column_order() {
        let json = render_json(&[sample_record(0)], &FieldSelection::default()).unwrap();
        let id = json.find("\"ID\"").unwrap();
        let name = json.find("\"GPU Name\"").unwrap();
        let memory = json.find("\"MemoryInfo\"").unwrap();
        assert!(id < name && name < memory);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["GPU Name"], "NVIDIA GeForce RTX 3070");
    }

    #[test]
    fn test_json_empty() {
        assert_eq!(render_to_string(&[], OutputFormat::Json), "[]\n");
    }
}
