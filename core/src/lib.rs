#![deny(missing_docs)]

//! # OAS2FN Core
//!
//! Converts an OpenAPI v3 document into LLM function-calling descriptors and
//! matching client stubs.
//!
//! Pipeline: [`Document::load`] ➜ [`transform()`] (using the resolver and the
//! flattener per operation) ➜ [`Conversion`], serialized as `[functions, stubs]`.

/// Shared error types.
pub mod error;

/// Document loading (JSON / YAML).
pub mod document;

/// Local `$ref` resolution.
pub mod resolver;

/// Object schema flattening.
pub mod flatten;

/// Output models.
pub mod models;

/// Client stub text generation.
pub mod stub;

/// Operation to function conversion.
pub mod transform;

pub use document::{Document, DocumentFormat};
pub use error::{AppError, AppResult};
pub use flatten::{flatten_schema, FlattenedSchema};
pub use models::{Conversion, FunctionDescriptor, FunctionParameters, PropertyDescriptor};
pub use resolver::{deref, resolve_ref};
pub use stub::{PythonRequestsStrategy, StubSpec, StubStrategy};
pub use transform::{transform, transform_with_strategy};
