//! stripscan CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{ColorChoice, Parser};
use strip_cli::commands::{resolve_catalog, resolve_seed, run_analyze, run_history};
use strip_cli::logging::{LogConfig, LogFormat, init_logging};
use strip_cli::render::{print_history, print_report, strips_table};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let catalog = resolve_catalog(cli.catalog.as_deref())?;
    match &cli.command {
        Command::Strips => {
            println!("{}", strips_table(&catalog));
        }
        Command::Analyze(args) => {
            let seed = resolve_seed(args.seed);
            let report = run_analyze(&catalog, &args.strip_id, seed, Utc::now())?;
            match args.format {
                OutputFormatArg::Table => print_report(&report),
                OutputFormatArg::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("serialize report")?
                ),
            }
        }
        Command::History(args) => {
            let seed = resolve_seed(args.seed);
            let view = run_history(&catalog, &args.strip_id, seed, args.filter, Utc::now())?;
            match args.format {
                OutputFormatArg::Table => print_history(&view),
                OutputFormatArg::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&view.shown).context("serialize history")?
                ),
            }
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
