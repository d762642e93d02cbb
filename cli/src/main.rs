#![deny(missing_docs)]

//! # OAS2FN CLI
//!
//! Command Line Interface for converting OpenAPI documents into LLM
//! function-calling descriptors and client stubs.
//!
//! Supported Commands:
//! - `convert`: OpenAPI (JSON/YAML) -> `[functions, stubs]` JSON file.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use crate::error::CliResult;

mod convert;
mod error;
mod logging;

#[derive(Parser, Debug)]
#[clap(version, about = "OpenAPI to function-calling converter")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an OpenAPI document into function descriptors and stubs.
    Convert(convert::ConvertArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Convert(args) => convert::execute(args).map(|_| ()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("conversion aborted");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
