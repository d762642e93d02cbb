#![deny(missing_docs)]

//! # Function Models
//!
//! Output structures of a conversion run: the LLM function-calling descriptors
//! and the pair of parallel lists handed to the emitter.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Default `type` for request-body properties lacking one.
pub const DEFAULT_PROPERTY_TYPE: &str = "object";

/// Default `type` for parameters whose schema lacks one.
pub const DEFAULT_PARAMETER_TYPE: &str = "string";

/// A flattened property: `{ "type": ..., "description": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// JSON Schema type name (e.g. `string`, `integer`, `object`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form description, empty when the source has none.
    pub description: String,
}

impl PropertyDescriptor {
    /// Creates a descriptor from its two fields.
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
        }
    }
}

/// The `parameters` object of a function descriptor.
///
/// `properties` keeps insertion order; re-inserting an existing name replaces
/// the value in place. `required` is kept verbatim, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionParameters {
    /// Always `"object"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Merged parameter and request-body properties.
    pub properties: IndexMap<String, PropertyDescriptor>,
    /// Names declared required, in discovery order.
    pub required: Vec<String>,
}

impl Default for FunctionParameters {
    fn default() -> Self {
        Self {
            kind: "object".to_string(),
            properties: IndexMap::new(),
            required: Vec::new(),
        }
    }
}

/// One callable function, derived from one OpenAPI operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    /// The operation's `operationId`.
    pub name: String,
    /// The operation's `summary`, or empty.
    pub description: String,
    /// Flattened argument schema.
    pub parameters: FunctionParameters,
}

impl FunctionDescriptor {
    /// Creates a descriptor shell with no parameters.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: FunctionParameters::default(),
        }
    }
}

/// Result of converting one document.
///
/// `functions[i]` and `stubs[i]` always describe the same operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Function descriptors in document order.
    pub functions: Vec<FunctionDescriptor>,
    /// Generated client stub source, parallel to `functions`.
    pub stubs: Vec<String>,
}

impl Conversion {
    /// Number of converted operations.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the document contained no operations.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Renders the `[functions, stubs]` pair with two-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Serialized as the two-element array `[functions, stubs]`.
impl Serialize for Conversion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.functions, &self.stubs).serialize(serializer)
    }
}
