#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use oas2fn_core::AppError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Conversion failure from the core library.
    #[display("{}", _0)]
    Core(AppError),

    /// IO Error wrapper (writing the output file).
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// The result could not be serialized.
    #[display("Serialization Error: {}", _0)]
    Json(serde_json::Error),

    /// The log subscriber could not be installed.
    #[from(ignore)]
    #[display("Logging Error: {}", _0)]
    Logging(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the `Logging(String)`
/// variant contains a `String`, which does not implement `std::error::Error`.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
