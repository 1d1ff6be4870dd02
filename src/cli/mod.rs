//! The `t4geom` command-line interface.
//!
//! This module is the entry point for all CLI commands and orchestrates the
//! core library functions: load a document, build the reports, print them.

use termcolor::StandardStream;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Command, GeomArgs, OutputFormat};
use crate::cli::output::{
    write_classify, write_json, write_render, write_select, ClassifyReport, RenderReport,
    SelectReport,
};
use crate::diagnostics::{GeomError, GeomResult};
use crate::document::Document;

pub mod args;
pub mod output;

/// Installs the stderr log subscriber. `RUST_LOG` overrides `-v`.
pub fn init_tracing(args: &GeomArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs the parsed command.
pub fn run(args: &GeomArgs) -> GeomResult<()> {
    let path = args.command.file();
    let document = Document::load(path)?;
    info!(file = %path.display(), cells = document.cells.len(), "processing");

    let mut stdout = StandardStream::stdout(args.color.into());
    let written = match &args.command {
        Command::Classify { .. } => {
            let reports: Vec<_> = document.cells.iter().map(ClassifyReport::for_cell).collect();
            match args.format {
                OutputFormat::Text => write_classify(&mut stdout, &reports),
                OutputFormat::Json => write_json(&mut stdout, &reports),
            }
        }
        Command::Select { .. } => {
            let reports: Vec<_> = document.cells.iter().map(SelectReport::for_cell).collect();
            match args.format {
                OutputFormat::Text => write_select(&mut stdout, &reports),
                OutputFormat::Json => write_json(&mut stdout, &reports),
            }
        }
        Command::Render { .. } => {
            let reports: Vec<_> = document.cells.iter().map(RenderReport::for_cell).collect();
            match args.format {
                OutputFormat::Text => write_render(&mut stdout, &reports),
                OutputFormat::Json => write_json(&mut stdout, &reports),
            }
        }
    };
    written.map_err(|source| GeomError::Output { source })
}
