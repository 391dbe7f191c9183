//! CLI argument definitions for `cogdocs`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use cogdoc_core::ExampleAffordance;

use cogdoc_cli::commands::OutputFormat;

#[derive(Parser)]
#[command(
    name = "cogdocs",
    version,
    about = "Render cog documentation trees as collapsible sections",
    long_about = "Render a documentation JSON file (groups of commands) as a collapsible page.\n\n\
                  Toggles can be applied before rendering to inspect any expand/collapse state."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a documentation file.
    Render(RenderArgs),

    /// List the derived id of every group and command.
    Ids(IdsArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Documentation JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "outline")]
    pub format: FormatArg,

    /// Apply a toggle before rendering, e.g. `group:Math_expanded` or
    /// `example:add_example_expanded`. May be repeated; applied in order.
    #[arg(long = "toggle", value_name = "TARGET:ID")]
    pub toggles: Vec<String>,

    /// Affordance for commands without an example.
    #[arg(long = "example-affordance", value_enum)]
    pub example_affordance: Option<AffordanceArg>,

    /// TOML file with render options.
    ///
    /// Flags given on the command line take precedence over the file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct IdsArgs {
    /// Documentation JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Outline,
    Html,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Outline => OutputFormat::Outline,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AffordanceArg {
    AlwaysShow,
    HideWhenMissing,
}

impl From<AffordanceArg> for ExampleAffordance {
    fn from(value: AffordanceArg) -> Self {
        match value {
            AffordanceArg::AlwaysShow => ExampleAffordance::AlwaysShow,
            AffordanceArg::HideWhenMissing => ExampleAffordance::HideWhenMissing,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
