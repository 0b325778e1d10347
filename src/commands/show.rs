//! Show command implementation
//!
//! Queries every GPU once and renders the selected columns.

use crate::cli::output::write_output;
use crate::config::Config;
use crate::error::Result;
use crate::services::Collector;
use crate::smi::{GpuQuery, NvidiaSmi};

use std::io::{self, Write};

/// Execute the show command
pub fn run_show(config: &Config, gpu: Option<u32>) -> Result<()> {
    let smi = NvidiaSmi::with_program(&config.smi.program);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    show_with(smi, &mut handle, config, gpu)
}

/// Execute the show command against any query source and writer
pub fn show_with<Q: GpuQuery, W: Write>(
    query: Q,
    out: &mut W,
    config: &Config,
    gpu: Option<u32>,
) -> Result<()> {
    let selection = config.selection()?;
    let records = Collector::new(query).with_gpu(gpu).collect()?;

    write_output(out, &records, &selection, config.display.format)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use crate::config::ConfigBuilder;
    use crate::error::AppError;
    use crate::mock::MockQuery;
    use crate::smi::parser::SAMPLE_OUTPUT;

    fn show_to_string(config: &Config, gpu: Option<u32>) -> Result<String> {
        let mut buf = Vec::new();
        show_with(MockQuery::with_output(SAMPLE_OUTPUT), &mut buf, config, gpu)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_show_plain() {
        let config = ConfigBuilder::new()
            .with_format(Some(OutputFormat::Plain))
            .build();
        let output = show_to_string(&config, None).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "| ID: 1 | GPU Name: NVIDIA GeForce RTX 4090 | MemoryInfo: 12288.0Mb / 24576.0Mb (50.00%) |"
        );
    }

    #[test]
    fn test_show_single_gpu_json() {
        let config = ConfigBuilder::new()
            .with_format(Some(OutputFormat::Json))
            .build();
        let output = show_to_string(&config, Some(0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["ID"], "0");
    }

    #[test]
    fn test_show_missing_program() {
        let mut buf = Vec::new();
        let result = show_with(MockQuery::missing(), &mut buf, &Config::default(), None);
        assert!(matches!(result, Err(AppError::Smi(_))));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_show_no_gpus() {
        let config = ConfigBuilder::new()
            .with_format(Some(OutputFormat::Json))
            .build();
        let mut buf = Vec::new();
        show_with(MockQuery::with_output(""), &mut buf, &config, None).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }
}
