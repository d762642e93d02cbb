//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Every variant is fatal: a conversion either completes for the whole
//! document or stops at the first error.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// String-carrying variants are excluded from `From<String>` so every error
/// has to name its class explicitly.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (unreadable input file).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The input could not be turned into a document tree
    /// (unsupported extension, JSON or YAML syntax error).
    #[from(ignore)]
    #[display("Load Error: {_0}")]
    Load(String),

    /// A `$ref` did not point at an existing node.
    #[from(ignore)]
    #[display("Resolution Error: cannot resolve '{reference}': {reason}")]
    Resolution {
        /// The reference string as written in the document.
        reference: String,
        /// What went wrong while walking it.
        reason: String,
    },

    /// A field the converter depends on is absent or has the wrong kind.
    #[from(ignore)]
    #[display("Schema Shape Error: {_0}")]
    SchemaShape(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

impl AppError {
    /// Shorthand for a `Resolution` error.
    pub fn resolution(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Resolution {
            reference: reference.into(),
            reason: reason.into(),
        }
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
