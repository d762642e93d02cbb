#![deny(missing_docs)]

//! # Operation Transformer
//!
//! Walks `paths` in document order and, for every operation, builds a
//! [`FunctionDescriptor`] and the matching client stub.
//!
//! The two artifacts are derived independently from the raw operation:
//! - the descriptor resolves `$ref`s and flattens every request-body content type;
//! - the stub reads parameter locations from the unresolved parameter list and
//!   body property names from the raw `application/json` schema only.

use crate::document::Document;
use crate::error::{AppError, AppResult};
use crate::flatten::{description_of, flatten_schema, schema_type};
use crate::models::{Conversion, FunctionDescriptor, PropertyDescriptor, DEFAULT_PARAMETER_TYPE};
use crate::resolver::deref;
use crate::stub::{PythonRequestsStrategy, StubSpec, StubStrategy};
use serde_json::{Map, Value};
use tracing::debug;

/// Path item keys that denote operations.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Converts every operation of `document`, emitting Python `requests` stubs.
pub fn transform(document: &Document) -> AppResult<Conversion> {
    transform_with_strategy(document, &PythonRequestsStrategy)
}

/// Converts every operation of `document` using `strategy` for stub text.
pub fn transform_with_strategy(
    document: &Document,
    strategy: &impl StubStrategy,
) -> AppResult<Conversion> {
    let root = document.root();
    let paths = root
        .get("paths")
        .ok_or_else(|| AppError::SchemaShape("document is missing 'paths'".into()))?;
    let paths = expect_mapping(paths, "'paths'")?;

    let mut conversion = Conversion::default();

    for (path, item) in paths {
        let item = expect_mapping(item, &format!("path item '{}'", path))?;
        for (method, operation) in item {
            if !HTTP_METHODS.contains(&method.as_str()) {
                continue;
            }
            let operation = expect_mapping(operation, &format!("operation {} {}", method, path))?;

            let function = build_function(operation, root)?;
            debug!(
                path = %path,
                method = %method,
                operation_id = %function.name,
                "transformed operation"
            );

            let stub = build_stub_spec(&function.name, path, operation, root)?;
            conversion.stubs.push(strategy.render(&stub));
            conversion.functions.push(function);
        }
    }

    Ok(conversion)
}

/// Builds the function descriptor of one operation.
pub fn build_function(operation: &Map<String, Value>, root: &Value) -> AppResult<FunctionDescriptor> {
    let name = operation
        .get("operationId")
        .ok_or_else(|| AppError::SchemaShape("operation is missing 'operationId'".into()))?;
    let name = expect_str(name, "'operationId'")?;
    let summary = match operation.get("summary") {
        None | Some(Value::Null) => "",
        Some(summary) => expect_str(summary, "'summary'")?,
    };

    let mut function = FunctionDescriptor::new(name, summary);
    merge_parameters(&mut function, operation, root)?;
    merge_request_body(&mut function, operation, root)?;
    Ok(function)
}

/// Merges `parameters` into the descriptor. Later names overwrite earlier ones.
fn merge_parameters(
    function: &mut FunctionDescriptor,
    operation: &Map<String, Value>,
    root: &Value,
) -> AppResult<()> {
    for param in raw_parameters(operation)? {
        let param = deref(param, root)?;
        let name = param_name(param)?;

        let descriptor = match param.get("schema") {
            Some(schema) => {
                let schema = deref(schema, root)?;
                PropertyDescriptor::new(
                    schema_type(schema, DEFAULT_PARAMETER_TYPE)?,
                    description_of(param)?,
                )
            }
            None => PropertyDescriptor::new(DEFAULT_PARAMETER_TYPE, description_of(param)?),
        };

        let params = &mut function.parameters;
        params.properties.insert(name.to_string(), descriptor);
        if is_required(param)? {
            params.required.push(name.to_string());
        }
    }
    Ok(())
}

/// Merges every request-body content type, later ones winning on name clashes.
fn merge_request_body(
    function: &mut FunctionDescriptor,
    operation: &Map<String, Value>,
    root: &Value,
) -> AppResult<()> {
    let Some(body) = operation.get("requestBody") else {
        return Ok(());
    };
    let body = deref(body, root)?;
    let content = body
        .get("content")
        .ok_or_else(|| AppError::SchemaShape("request body is missing 'content'".into()))?;

    for (media_type, media) in expect_mapping(content, "request body 'content'")? {
        let schema = media.get("schema").ok_or_else(|| {
            AppError::SchemaShape(format!("media type '{}' is missing 'schema'", media_type))
        })?;
        let schema = deref(schema, root)?;
        let flattened = flatten_schema(schema, root)?;

        let params = &mut function.parameters;
        params.properties.extend(flattened.properties);
        params.required.extend(flattened.required);
    }
    Ok(())
}

/// Collects stub inputs from the raw, unresolved operation.
pub fn build_stub_spec(
    name: &str,
    path: &str,
    operation: &Map<String, Value>,
    root: &Value,
) -> AppResult<StubSpec> {
    let raw = raw_parameters(operation)?;

    let body_params = operation
        .get("requestBody")
        .and_then(|body| body.get("content"))
        .and_then(|content| content.get("application/json"))
        .and_then(|media| media.get("schema"))
        .and_then(|schema| schema.get("properties"))
        .and_then(Value::as_object)
        .map(|props| props.keys().cloned().collect())
        .unwrap_or_default();

    Ok(StubSpec {
        name: name.to_string(),
        base_url: base_url(root)?.to_string(),
        path: path.to_string(),
        path_params: names_in(raw, "path")?,
        query_params: names_in(raw, "query")?,
        body_params,
    })
}

/// URL of the first declared server.
pub fn base_url(root: &Value) -> AppResult<&str> {
    let url = root
        .get("servers")
        .and_then(|servers| servers.get(0))
        .and_then(|server| server.get("url"))
        .ok_or_else(|| {
            AppError::SchemaShape("document has no 'servers[0].url' to build stubs against".into())
        })?;
    expect_str(url, "'servers[0].url'")
}

fn raw_parameters(operation: &Map<String, Value>) -> AppResult<&[Value]> {
    match operation.get("parameters") {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(params)) => Ok(params.as_slice()),
        Some(_) => Err(AppError::SchemaShape("operation 'parameters' must be a list".into())),
    }
}

/// Names of raw parameters declared `in: location`. `$ref` entries never match.
fn names_in(params: &[Value], location: &str) -> AppResult<Vec<String>> {
    params
        .iter()
        .filter(|param| param.get("in").and_then(Value::as_str) == Some(location))
        .map(|param| param_name(param).map(str::to_string))
        .collect()
}

fn param_name(param: &Value) -> AppResult<&str> {
    let name = param
        .get("name")
        .ok_or_else(|| AppError::SchemaShape("parameter is missing 'name'".into()))?;
    expect_str(name, "parameter 'name'")
}

fn is_required(param: &Value) -> AppResult<bool> {
    match param.get("required") {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(other) => Err(AppError::SchemaShape(format!(
            "parameter 'required' must be a boolean, found {}",
            other
        ))),
    }
}

fn expect_mapping<'a>(node: &'a Value, what: &str) -> AppResult<&'a Map<String, Value>> {
    node.as_object()
        .ok_or_else(|| AppError::SchemaShape(format!("{} must be a mapping", what)))
}

fn expect_str<'a>(node: &'a Value, what: &str) -> AppResult<&'a str> {
    node.as_str()
        .ok_or_else(|| AppError::SchemaShape(format!("{} must be a string, found {}", what, node)))
}
