#![deny(missing_docs)]

//! # Schema Flattener
//!
//! Reduces one level of an object schema into `type` / `description` property
//! descriptors plus its `required` list.

use crate::error::{AppError, AppResult};
use crate::models::{PropertyDescriptor, DEFAULT_PROPERTY_TYPE};
use crate::resolver::deref;
use indexmap::IndexMap;
use serde_json::Value;

/// Properties and required names of a flattened schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenedSchema {
    /// Property name to descriptor, in schema order.
    pub properties: IndexMap<String, PropertyDescriptor>,
    /// The schema's `required` list, verbatim.
    pub required: Vec<String>,
}

/// Flattens `schema` against `root`.
///
/// A top-level `$ref` is followed once. Each property definition that is a
/// `$ref` is also followed once; nested schemas below the properties are not
/// visited. `required` is not checked against `properties`.
pub fn flatten_schema(schema: &Value, root: &Value) -> AppResult<FlattenedSchema> {
    let schema = deref(schema, root)?;
    let object = schema.as_object().ok_or_else(|| {
        AppError::SchemaShape(format!("schema must be a mapping, found {}", schema))
    })?;

    let mut flattened = FlattenedSchema::default();

    if let Some(props) = object.get("properties") {
        let props = props.as_object().ok_or_else(|| {
            AppError::SchemaShape("schema 'properties' must be a mapping".into())
        })?;
        for (name, definition) in props {
            let definition = deref(definition, root)?;
            let descriptor = PropertyDescriptor::new(
                schema_type(definition, DEFAULT_PROPERTY_TYPE)?,
                description_of(definition)?,
            );
            flattened.properties.insert(name.clone(), descriptor);
        }
    }

    if let Some(required) = object.get("required") {
        flattened.required = string_list(required, "schema 'required'")?;
    }

    Ok(flattened)
}

/// Reads `type` from a schema node, substituting `default` when absent.
///
/// OpenAPI 3.1 type arrays (`["string", "null"]`) yield their first non-null entry.
pub(crate) fn schema_type(node: &Value, default: &str) -> AppResult<String> {
    match node.get("type") {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(Value::String(kind)) => Ok(kind.clone()),
        Some(Value::Array(kinds)) => Ok(kinds
            .iter()
            .filter_map(Value::as_str)
            .find(|kind| *kind != "null")
            .unwrap_or(default)
            .to_string()),
        Some(other) => Err(AppError::SchemaShape(format!(
            "'type' must be a string or a list of strings, found {}",
            other
        ))),
    }
}

/// Reads `description` from a node, empty when absent.
pub(crate) fn description_of(node: &Value) -> AppResult<String> {
    match node.get("description") {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(AppError::SchemaShape(format!(
            "'description' must be a string, found {}",
            other
        ))),
    }
}

fn string_list(node: &Value, what: &str) -> AppResult<Vec<String>> {
    let items = node
        .as_array()
        .ok_or_else(|| AppError::SchemaShape(format!("{} must be a list", what)))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| AppError::SchemaShape(format!("{} entries must be strings", what)))
        })
        .collect()
}
