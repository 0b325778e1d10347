//! Fields command implementation
//!
//! Lists every field name usable in `--fields` and config columns.

use crate::cli::args::OutputFormat;
use crate::domain::GpuField;
use crate::error::Result;
use serde::Serialize;

use std::io::{self, Write};

#[derive(Debug, Serialize)]
struct FieldEntry {
    name: &'static str,
    label: &'static str,
}

/// Execute the fields command
pub fn run_fields(format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_fields(&mut handle, format)
}

fn write_fields<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    let entries: Vec<FieldEntry> = GpuField::ALL
        .iter()
        .map(|f| FieldEntry {
            name: f.name(),
            label: f.default_label(),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Table | OutputFormat::Plain => {
            writeln!(out, "{:<18} Default Label", "Field")?;
            for entry in &entries {
                writeln!(out, "{:<18} {}", entry.name, entry.label)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_table() {
        let mut buf = Vec::new();
        write_fields(&mut buf, OutputFormat::Table).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().count(), GpuField::ALL.len() + 1);
        assert!(output.contains("memory_all         MemoryInfo"));
    }

    #[test]
    fn test_fields_json() {
        let mut buf = Vec::new();
        write_fields(&mut buf, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["name"], "id");
        assert_eq!(value[0]["label"], "ID");
    }
}
