//! CSV output parser
//!
//! Turns `--format=csv,noheader,nounits` output into GPU records.

use crate::domain::GpuRecord;
use crate::error::ParseError;
use crate::smi::QUERY_FIELDS;

/// Separator between columns on one line
const FIELD_SEPARATOR: &str = ", ";

/// Parse a number, yielding NaN instead of an error on malformed input
///
/// nvidia-smi prints values such as `[N/A]` or `[Not Supported]` for
/// unavailable columns.
pub fn safe_float(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the full query output, one record per non-blank line
pub fn parse_output(output: &str) -> Result<Vec<GpuRecord>, ParseError> {
    output
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line, i + 1))
        .collect()
}

/// Parse a single line; `line_no` is 1-based and only used in errors
pub fn parse_line(line: &str, line_no: usize) -> Result<GpuRecord, ParseError> {
    let values: Vec<&str> = line.trim_end_matches('\r').split(FIELD_SEPARATOR).collect();

    if values.len() != QUERY_FIELDS.len() {
        return Err(ParseError::FieldCount {
            line: line_no,
            expected: QUERY_FIELDS.len(),
            found: values.len(),
        });
    }

    let index = values[0]
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidIndex {
            line: line_no,
            value: values[0].to_string(),
        })?;

    let record = GpuRecord {
        index,
        uuid: values[1].to_string(),
        utilization: safe_float(values[2]) / 100.0,
        memory_total: safe_float(values[3]),
        memory_used: safe_float(values[4]),
        memory_available: safe_float(values[5]),
        driver_version: values[6].to_string(),
        name: values[7].to_string(),
        serial: values[8].to_string(),
        display_active: values[9].to_string(),
        display_mode: values[10].to_string(),
        temperature: safe_float(values[11]),
    };

    log::debug!("Parsed GPU line {}: {:?}", line_no, record);

    Ok(record)
}

#[cfg(test)]
pub(crate) const SAMPLE_OUTPUT: &str = "\
0, GPU-4f5c2a1e-0000-1111-2222-333344445555, 50, 8192, 2048, 6144, 535.154.05, NVIDIA GeForce RTX 3070, [N/A], Disabled, Enabled, 45
1, GPU-9a8b7c6d-0000-1111-2222-333344445555, 7, 24576, 12288, 12288, 535.154.05, NVIDIA GeForce RTX 4090, 1324521000123, Enabled, Enabled, 61
";
