#![deny(missing_docs)]

//! # Reference Resolver
//!
//! Walks intra-document `$ref` pointers (`#/a/b/c`) against the document root.
//!
//! Only local references are understood. Remote or relative URIs are rejected
//! with a `Resolution` error, and no cycle detection is performed: callers
//! dereference at most one level at a time.

use crate::error::{AppError, AppResult};
use serde_json::Value;
use tracing::trace;

/// Key under which OpenAPI stores reference pointers.
pub const REF_KEY: &str = "$ref";

/// Resolves a local reference such as `#/components/schemas/User`.
///
/// Each `/`-separated segment indexes the current node: mappings by key,
/// sequences by decimal position. Segments are JSON-Pointer decoded
/// (`~1` → `/`, `~0` → `~`).
pub fn resolve_ref<'a>(reference: &str, root: &'a Value) -> AppResult<&'a Value> {
    let pointer = reference.strip_prefix("#/").ok_or_else(|| {
        AppError::resolution(reference, "only '#/'-prefixed local references are supported")
    })?;

    let mut current = root;
    for raw in pointer.split('/') {
        let segment = decode_pointer_segment(raw);
        current = match current {
            Value::Object(map) => map.get(&segment).ok_or_else(|| {
                AppError::resolution(reference, format!("key '{}' not found", segment))
            })?,
            Value::Array(items) => {
                let index: usize = segment.parse().map_err(|_| {
                    AppError::resolution(
                        reference,
                        format!("'{}' is not a valid sequence index", segment),
                    )
                })?;
                items.get(index).ok_or_else(|| {
                    AppError::resolution(
                        reference,
                        format!("index {} out of range (len {})", index, items.len()),
                    )
                })?
            }
            _ => {
                return Err(AppError::resolution(
                    reference,
                    format!("cannot index scalar with '{}'", segment),
                ))
            }
        };
    }

    trace!(reference, "resolved reference");
    Ok(current)
}

/// Returns the referenced node if `node` is a `$ref` object, else `node` itself.
///
/// Exactly one level is followed: a target that is itself a `$ref` is returned as is.
pub fn deref<'a>(node: &'a Value, root: &'a Value) -> AppResult<&'a Value> {
    match node.get(REF_KEY) {
        Some(Value::String(reference)) => resolve_ref(reference, root),
        Some(other) => Err(AppError::SchemaShape(format!(
            "'$ref' must be a string, found {}",
            other
        ))),
        None => Ok(node),
    }
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
