#![deny(missing_docs)]

//! # OpenAPI Document Loading
//!
//! Reads a JSON or YAML service description into a single in-memory tree.
//! Both formats are parsed into `serde_json::Value` with key order preserved,
//! so `paths` and methods are visited in the order the author wrote them.

use crate::error::{AppError, AppResult};
use crate::resolver::resolve_ref;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Source format of a document, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension (case-sensitive).
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(AppError::Load(format!(
                "Unsupported file format: {:?} (expected .json, .yaml or .yml)",
                path
            ))),
        }
    }
}

/// A parsed OpenAPI document. Read-only for the duration of a conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Wraps an already parsed tree.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parses document text in the given format.
    pub fn parse(text: &str, format: DocumentFormat) -> AppResult<Self> {
        let root: Value = match format {
            DocumentFormat::Json => serde_json::from_str(text)
                .map_err(|e| AppError::Load(format!("Failed to parse OpenAPI JSON: {}", e)))?,
            DocumentFormat::Yaml => serde_yaml::from_str(text)
                .map_err(|e| AppError::Load(format!("Failed to parse OpenAPI YAML: {}", e)))?,
        };
        Ok(Self::from_value(root))
    }

    /// Loads a document from disk. The extension is checked before reading.
    pub fn load(path: &Path) -> AppResult<Self> {
        let format = DocumentFormat::from_path(path)?;
        let text = fs::read_to_string(path)?;
        let document = Self::parse(&text, format)?;
        info!(path = %path.display(), ?format, "loaded OpenAPI document");
        Ok(document)
    }

    /// The document root.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolves a local `#/...` reference against this document.
    pub fn resolve(&self, reference: &str) -> AppResult<&Value> {
        resolve_ref(reference, &self.root)
    }
}
