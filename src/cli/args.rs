//! Command-line arguments for `t4geom`.
//!
//! Declared with `clap`'s derive API; every option is global so it can be
//! given before or after the subcommand.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use termcolor::ColorChoice;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "t4geom",
    version,
    about = "Inspect MCNP cell geometry trees ahead of TRIPOLI-4 conversion."
)]
pub struct GeomArgs {
    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize text output.
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Log more (-v for debug, -vv for trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the kind of every node of every cell.
    Classify {
        /// Geometry document (JSON, positional trees).
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Print the primary branch chosen for every union node.
    Select {
        /// Geometry document (JSON, positional trees).
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Print every cell in MCNP geometry syntax.
    Render {
        /// Geometry document (JSON, positional trees).
        #[arg(required = true)]
        file: PathBuf,
    },
}

impl Command {
    pub fn file(&self) -> &PathBuf {
        match self {
            Command::Classify { file } | Command::Select { file } | Command::Render { file } => {
                file
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

impl GeomArgs {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "t4_geom_convert=debug",
            _ => "t4_geom_convert=trace",
        }
    }
}
