//! showgpu - quick NVIDIA GPU snapshot
//!
//! A command-line tool that queries nvidia-smi once and prints GPU
//! utilization and memory as a table.

use clap::Parser;
use showgpu::cli::args::{generate_completions, Cli, Commands};
use showgpu::commands::{run_fields, run_show};
use showgpu::config::{Config, ConfigBuilder};
use showgpu::error::{AppError, SmiError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = build_config(&cli).and_then(|config| {
        // Config files can turn on verbose logging too
        if config.general.verbose && !user_log_filter() {
            log::set_max_level(log::LevelFilter::Debug);
        }
        log::debug!("Resolved configuration: {:?}", config);
        run(&cli, &config)
    });

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

/// Whether RUST_LOG is set, in which case it decides the level alone
fn user_log_filter() -> bool {
    std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some()
}

fn init_logging(verbose: bool) {
    // Logger admits debug records; the global max level gates them.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format_timestamp(None)
        .init();

    if !user_log_filter() {
        let level = if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        };
        log::set_max_level(level);
    }
}

fn build_config(cli: &Cli) -> Result<Config, AppError> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose)
        .with_format(cli.format)
        .with_preset(cli.preset.map(Into::into))
        .with_columns(&cli.fields)
        .with_program(cli.smi.clone())
        .build();

    Ok(config)
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    match &cli.command {
        None | Some(Commands::Show) => run_show(config, cli.gpu),

        Some(Commands::Fields) => run_fields(config.display.format),

        Some(Commands::Completions { shell }) => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Smi(SmiError::NotFound(_)) => {
            eprintln!();
            eprintln!("Hint: nvidia-smi ships with the NVIDIA driver.");
            eprintln!("      On Linux, install the nvidia-utils package,");
            eprintln!("      or point --smi / SHOWGPU_SMI at the binary.");
        }
        AppError::Parse(_) => {
            eprintln!();
            eprintln!("Hint: Run with --verbose to see the raw query output.");
        }
        _ => {}
    }
}
