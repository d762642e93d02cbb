use oas2fn_core::{transform, AppError, Document, DocumentFormat};
use pretty_assertions::assert_eq;
use serde_json::json;

fn yaml(text: &str) -> Document {
    Document::parse(text, DocumentFormat::Yaml).unwrap()
}

#[test]
fn test_get_with_required_path_parameter() {
    let doc = yaml(
        r#"
openapi: 3.0.0
info: { title: Items, version: 1.0.0 }
servers:
  - url: https://api.example.com
paths:
  /items/{id}:
    get:
      operationId: getItem
      parameters:
        - name: id
          in: path
          required: true
      responses:
        '200': { description: OK }
"#,
    );

    let conversion = transform(&doc).unwrap();

    assert_eq!(
        serde_json::to_value(&conversion.functions[0]).unwrap(),
        json!({
            "name": "getItem",
            "description": "",
            "parameters": {
                "type": "object",
                "properties": { "id": { "type": "string", "description": "" } },
                "required": ["id"]
            }
        })
    );
    assert_eq!(
        conversion.stubs[0],
        "def getItem(id):\n\
         \x20   url = 'https://api.example.com/items/{id}'\n\
         \x20   headers = {'Content-Type': 'application/json'}\n\
         \x20   params = {}\n\
         \x20   response = requests.get(url, headers=headers, params=params)\n\
         \x20   return response.json()\n"
    );
}

#[test]
fn test_post_with_json_body() {
    let doc = yaml(
        r#"
servers:
  - url: http://localhost:8080
paths:
  /things:
    post:
      operationId: createThing
      summary: Create a thing
      requestBody:
        content:
          application/json:
            schema:
              type: object
              properties:
                name: { type: string }
                age: { type: integer }
"#,
    );

    let conversion = transform(&doc).unwrap();
    let function = &conversion.functions[0];
    assert_eq!(function.description, "Create a thing");
    assert!(function.parameters.required.is_empty());
    assert_eq!(function.parameters.properties["age"].kind, "integer");

    let stub = &conversion.stubs[0];
    assert!(stub.starts_with("def createThing(name, age):\n"));
    assert!(stub.contains("    body = {\"name\": name, \"age\": age}\n"));
    assert!(stub.contains("requests.post(url, headers=headers, params=params, json=body)"));
}

#[test]
fn test_parameter_ref_resolves_type() {
    let doc = yaml(
        r#"
servers:
  - url: https://api.example.com
paths:
  /items:
    get:
      operationId: listItems
      parameters:
        - $ref: '#/components/parameters/Limit'
components:
  parameters:
    Limit:
      name: limit
      in: query
      description: Page size
      schema:
        type: integer
"#,
    );

    let conversion = transform(&doc).unwrap();
    let limit = &conversion.functions[0].parameters.properties["limit"];
    assert_eq!(limit.kind, "integer");
    assert_eq!(limit.description, "Page size");

    // The stub only sees the raw, unresolved parameter list.
    assert!(conversion.stubs[0].starts_with("def listItems():\n"));
    assert!(conversion.stubs[0].contains("    params = {}\n"));
}

#[test]
fn test_dangling_reference_aborts() {
    let doc = yaml(
        r#"
servers:
  - url: https://api.example.com
paths:
  /ok:
    get:
      operationId: fine
  /items:
    get:
      operationId: listItems
      parameters:
        - $ref: '#/components/parameters/Missing'
components:
  parameters: {}
"#,
    );

    match transform(&doc) {
        Err(AppError::Resolution { reference, .. }) => {
            assert_eq!(reference, "#/components/parameters/Missing")
        }
        other => panic!("expected a resolution error, got {:?}", other),
    }
}

#[test]
fn test_missing_servers_aborts() {
    let doc = yaml(
        r#"
paths:
  /items:
    get:
      operationId: listItems
"#,
    );
    assert!(matches!(transform(&doc), Err(AppError::SchemaShape(_))));

    let empty = yaml("paths: {}\n");
    assert!(transform(&empty).unwrap().is_empty());
}

#[test]
fn test_document_order_and_parallel_lists() {
    let doc = yaml(
        r#"
servers:
  - url: https://api.example.com
paths:
  /b:
    parameters:
      - { name: shared, in: query }
    post: { operationId: postB }
    get: { operationId: getB }
    x-internal: true
  /a:
    delete: { operationId: deleteA }
"#,
    );

    let conversion = transform(&doc).unwrap();
    let names: Vec<&str> = conversion.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["postB", "getB", "deleteA"]);
    assert_eq!(conversion.stubs.len(), conversion.functions.len());
    for (function, stub) in conversion.functions.iter().zip(&conversion.stubs) {
        assert!(stub.starts_with(&format!("def {}(", function.name)));
    }
}

#[test]
fn test_ref_body_appears_in_function_but_not_stub() {
    let doc = yaml(
        r#"
servers:
  - url: https://api.example.com
paths:
  /pets/{petId}:
    put:
      operationId: updatePet
      parameters:
        - { name: petId, in: path, required: true, schema: { type: integer } }
        - { name: dryRun, in: query, schema: { type: boolean } }
      requestBody:
        $ref: '#/components/requestBodies/PetBody'
components:
  requestBodies:
    PetBody:
      content:
        application/json:
          schema: { $ref: '#/components/schemas/Pet' }
  schemas:
    Pet:
      required: [name]
      properties:
        name: { type: string, description: Pet name }
        owner: { $ref: '#/components/schemas/Owner' }
    Owner:
      type: object
      description: Owner record
"#,
    );

    let conversion = transform(&doc).unwrap();
    assert_eq!(
        serde_json::to_value(&conversion.functions[0].parameters).unwrap(),
        json!({
            "type": "object",
            "properties": {
                "petId": { "type": "integer", "description": "" },
                "dryRun": { "type": "boolean", "description": "" },
                "name": { "type": "string", "description": "Pet name" },
                "owner": { "type": "object", "description": "Owner record" }
            },
            "required": ["petId", "name"]
        })
    );

    let stub = &conversion.stubs[0];
    assert!(stub.starts_with("def updatePet(petId, dryRun):\n"));
    assert!(stub.contains("    url = 'https://api.example.com/pets/{petId}'\n"));
    assert!(stub.contains("    params = {\"dryRun\": dryRun}\n"));
    assert!(stub.contains("requests.get(url, headers=headers, params=params)"));
}

#[test]
fn test_serialized_output_is_pair() {
    let doc = Document::parse(
        r#"{
            "servers": [{"url": "https://x"}],
            "paths": {"/ping": {"get": {"operationId": "ping"}}}
        }"#,
        DocumentFormat::Json,
    )
    .unwrap();

    let value = serde_json::to_value(transform(&doc).unwrap()).unwrap();
    assert_eq!(value[0][0]["name"], "ping");
    assert_eq!(
        value[1][0],
        "def ping():\n    url = 'https://x/ping'\n    headers = {'Content-Type': 'application/json'}\n    params = {}\n    response = requests.get(url, headers=headers, params=params)\n    return response.json()\n"
    );
}
