//! Command-line argument definitions
//!
//! The binary has two subcommands: `check` validates a TOML registry
//! definition and prints its contents; `show` renders a resolved value
//! mapping read from a JSON file.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Inspect option registry definitions and render resolved values
#[derive(Debug, Parser)]
#[command(name = "optmeta", version, about, long_about = None)]
pub struct Cli {
    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value = "auto")]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a registry definition and list its options
    Check {
        /// Path to the TOML registry definition
        definition: PathBuf,
    },
    /// Render a resolved value mapping as a report
    Show {
        /// Path to a JSON file mapping option names to values
        values: PathBuf,

        /// Omit the OPTION VALUE header line
        #[arg(long)]
        no_headers: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// When to colorize terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Maps to the termcolor choice, downgrading `Auto` when stdout is not
    /// a terminal
    pub fn for_stdout(self) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Auto => {
                if std::io::stdout().is_terminal() {
                    termcolor::ColorChoice::Auto
                } else {
                    termcolor::ColorChoice::Never
                }
            }
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// Output format for the show command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
