//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::domain::{Column, Preset};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

/// Snapshot of NVIDIA GPU utilization and memory
///
/// Queries nvidia-smi once and prints the selected columns as a table.
#[derive(Parser, Debug)]
#[command(name = "showgpu")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SHOWGPU_CONFIG")]
    pub config: Option<String>,

    /// Query program to run instead of nvidia-smi
    #[arg(long, global = true, env = "SHOWGPU_SMI", value_name = "PATH")]
    pub smi: Option<String>,

    /// Built-in column set
    #[arg(short, long, global = true, value_enum)]
    pub preset: Option<PresetArg>,

    /// Columns to show (format: LABEL=FIELD or FIELD, comma-separated)
    #[arg(
        short,
        long,
        global = true,
        value_delimiter = ',',
        value_name = "COLUMN",
        conflicts_with = "preset"
    )]
    pub fields: Vec<Column>,

    /// Show only the GPU with this index (0-based)
    #[arg(long, global = true)]
    pub gpu: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query GPUs and print the selected columns (default)
    Show,

    /// List field names usable with --fields
    Fields,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Preset argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum PresetArg {
    /// ID, name and memory summary
    Clean,
    /// Utilization, memory breakdown, temperature and driver
    Normal,
    /// Every field
    Full,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Clean => Preset::Clean,
            PresetArg::Normal => Preset::Normal,
            PresetArg::Full => Preset::Full,
        }
    }
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned table
    #[default]
    Table,
    /// One pipe-delimited line per GPU
    Plain,
    /// JSON format for machine parsing
    Json,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
