#![deny(missing_docs)]

//! # Client Stub Generation
//!
//! Text-only generation of client functions that would call one endpoint.
//! The output is never parsed or executed here.

/// Everything a stub needs to know about one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubSpec {
    /// Function name (the `operationId`).
    pub name: String,
    /// First server URL of the document.
    pub base_url: String,
    /// Raw path template, placeholders included (e.g. `/items/{id}`).
    pub path: String,
    /// Names of `in: path` parameters.
    pub path_params: Vec<String>,
    /// Names of `in: query` parameters.
    pub query_params: Vec<String>,
    /// Property names of the raw `application/json` request body schema.
    pub body_params: Vec<String>,
}

impl StubSpec {
    /// Function arguments: path, then query, then body names, without dedup.
    pub fn arguments(&self) -> Vec<&str> {
        self.path_params
            .iter()
            .chain(&self.query_params)
            .chain(&self.body_params)
            .map(String::as_str)
            .collect()
    }

    /// Whether the stub sends a request body.
    pub fn has_body(&self) -> bool {
        !self.body_params.is_empty()
    }
}

/// A strategy trait for decoupling the target language of generated stubs.
///
/// Implementors supply the individual lines; [`StubStrategy::render`]
/// assembles them in a fixed order.
pub trait StubStrategy {
    /// Function header line.
    fn signature(&self, name: &str, args: &[&str]) -> String;

    /// Assignment of the target URL (base URL and raw path template).
    fn url_assignment(&self, base_url: &str, path: &str) -> String;

    /// Request header setup.
    fn headers(&self) -> String;

    /// Query parameter mapping; empty when `names` is empty.
    fn query_params(&self, names: &[String]) -> String;

    /// JSON body mapping.
    fn body(&self, names: &[String]) -> String;

    /// Call issuing the request with a JSON body.
    fn post_call(&self) -> String;

    /// Call issuing the request with query parameters only.
    fn get_call(&self) -> String;

    /// Return of the decoded JSON response.
    fn return_response(&self) -> String;

    /// Renders the full stub text.
    fn render(&self, stub: &StubSpec) -> String {
        let mut code = self.signature(&stub.name, &stub.arguments());
        code.push_str(&self.url_assignment(&stub.base_url, &stub.path));
        code.push_str(&self.headers());
        code.push_str(&self.query_params(&stub.query_params));
        if stub.has_body() {
            code.push_str(&self.body(&stub.body_params));
            code.push_str(&self.post_call());
        } else {
            code.push_str(&self.get_call());
        }
        code.push_str(&self.return_response());
        code
    }
}

/// Python stubs calling the `requests` library.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonRequestsStrategy;

impl PythonRequestsStrategy {
    fn dict_literal(names: &[String]) -> String {
        let entries: Vec<String> = names
            .iter()
            .map(|name| format!("\"{}\": {}", name, name))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }
}

impl StubStrategy for PythonRequestsStrategy {
    fn signature(&self, name: &str, args: &[&str]) -> String {
        format!("def {}({}):\n", name, args.join(", "))
    }

    fn url_assignment(&self, base_url: &str, path: &str) -> String {
        format!("    url = '{}{}'\n", base_url, path)
    }

    fn headers(&self) -> String {
        "    headers = {'Content-Type': 'application/json'}\n".to_string()
    }

    fn query_params(&self, names: &[String]) -> String {
        format!("    params = {}\n", Self::dict_literal(names))
    }

    fn body(&self, names: &[String]) -> String {
        format!("    body = {}\n", Self::dict_literal(names))
    }

    fn post_call(&self) -> String {
        "    response = requests.post(url, headers=headers, params=params, json=body)\n".to_string()
    }

    fn get_call(&self) -> String {
        "    response = requests.get(url, headers=headers, params=params)\n".to_string()
    }

    fn return_response(&self) -> String {
        "    return response.json()\n".to_string()
    }
}
