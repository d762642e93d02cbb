#![deny(missing_docs)]

//! # Convert Command
//!
//! Loads an OpenAPI document, converts it and writes the `[functions, stubs]`
//! pair as indented JSON. The same text is echoed to stdout.

use std::fs;
use std::path::PathBuf;

use oas2fn_core::{transform, Document};
use tracing::info;

use crate::error::CliResult;

/// Arguments for the convert command.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the OpenAPI document (.json, .yaml or .yml).
    #[clap(long, short, env = "OAS2FN_INPUT", default_value = "part.yaml")]
    pub input: PathBuf,

    /// Output path for the generated JSON.
    #[clap(
        long,
        short,
        env = "OAS2FN_OUTPUT",
        default_value = "openai_format_functions.json"
    )]
    pub output: PathBuf,

    /// Do not echo the result to stdout.
    #[clap(long, short)]
    pub quiet: bool,
}

/// Executes the conversion and returns the rendered JSON.
///
/// Nothing is written unless the whole document converts.
pub fn execute(args: &ConvertArgs) -> CliResult<String> {
    let document = Document::load(&args.input)?;
    let conversion = transform(&document)?;
    let rendered = conversion.to_json_pretty()?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&args.output, &rendered)?;

    info!(
        operations = conversion.len(),
        output = %args.output.display(),
        "wrote function descriptors"
    );

    if !args.quiet {
        println!("{}", rendered);
    }

    Ok(rendered)
}
