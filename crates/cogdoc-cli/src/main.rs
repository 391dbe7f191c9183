//! cogdocs command-line renderer.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cogdoc_cli::commands::{RenderRequest, load_options, parse_toggle, run_ids, run_render};
use cogdoc_cli::logging::{LogConfig, LogFormat, init_logging};
use cogdoc_core::Phase;
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, RenderArgs};
use crate::summary::print_ids;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Render(args) => match render(args) {
            Ok(code) => code,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Ids(args) => match run_ids(&args.file) {
            Ok(report) => {
                print_ids(&report);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Run `render`; a missing document still prints the error view but exits 1.
fn render(args: &RenderArgs) -> Result<i32> {
    let mut options = load_options(args.config.as_deref())?;
    if let Some(affordance) = args.example_affordance {
        options.example_affordance = affordance.into();
    }
    let toggles = args
        .toggles
        .iter()
        .map(|value| parse_toggle(value))
        .collect::<Result<Vec<_>>>()?;
    let request = RenderRequest {
        format: args.format.into(),
        toggles,
        options,
    };

    let outcome = run_render(&args.file, &request)?;
    println!("{}", outcome.output);
    for toggle in &outcome.ignored {
        eprintln!("warning: toggle {toggle} matched no node");
    }
    Ok(if outcome.phase == Phase::Ready { 0 } else { 1 })
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
