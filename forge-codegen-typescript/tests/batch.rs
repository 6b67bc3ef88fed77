//! OpenAPI batch generation from document to grouped output.

use hookforge_codegen::pipeline::{Pipeline, TracingPlugin, phases::ValidatePhase};
use hookforge_codegen_typescript::{BatchOutput, DEFAULT_STRIP_PREFIX, EmitPhase, SharedModelsPhase};
use hookforge_ir::FragmentKind;
use hookforge_openapi::{Document, NormalizePhase};

const DOCUMENT: &str = r##"{
  "openapi": "3.0.3",
  "info": {"title": "users", "version": "1"},
  "paths": {
    "/api/v1/users/{id}": {
      "parameters": [{"name": "ignored", "in": "query"}],
      "get": {
        "operationId": "getUser",
        "summary": "Fetch one user",
        "parameters": [{"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}}],
        "responses": {
          "200": {
            "content": {
              "application/json": {
                "schema": {
                  "type": "object",
                  "properties": {
                    "success": {"type": "boolean"},
                    "data": {"$ref": "#/components/schemas/User"}
                  }
                }
              }
            }
          }
        }
      },
      "delete": {
        "operationId": "deleteUser",
        "parameters": [{"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}}],
        "responses": {"204": {"description": "deleted"}}
      }
    },
    "/api/v1/users": {
      "get": {
        "operationId": "listUsers",
        "responses": {
          "200": {
            "content": {
              "application/json": {
                "schema": {
                  "type": "object",
                  "properties": {
                    "success": {"type": "boolean"},
                    "totalRecords": {"type": "integer"},
                    "data": {"type": "array", "items": {"$ref": "#/components/schemas/User"}}
                  }
                }
              }
            }
          }
        }
      },
      "post": {
        "operationId": "createUser",
        "requestBody": {
          "content": {
            "application/json": {
              "schema": {
                "type": "object",
                "properties": {"name": {"type": "string"}},
                "required": ["name"]
              }
            }
          }
        },
        "responses": {
          "201": {"content": {"application/json": {"schema": {"$ref": "#/components/schemas/User"}}}}
        }
      }
    }
  },
  "components": {
    "schemas": {
      "User": {
        "type": "object",
        "properties": {"id": {"type": "integer"}, "name": {"type": "string"}},
        "required": ["id"]
      }
    }
  }
}"##;

fn run(document: &Document, selection: &[&str]) -> BatchOutput {
    let selection: Vec<String> = selection.iter().map(|s| s.to_string()).collect();
    let operations = document.select(&selection).unwrap();
    let ctx = Pipeline::new()
        .phase(NormalizePhase::new(document))
        .phase(ValidatePhase::new())
        .phase(SharedModelsPhase::new())
        .phase(EmitPhase::new(DEFAULT_STRIP_PREFIX))
        .plugin(TracingPlugin::new())
        .run(operations)
        .unwrap();
    BatchOutput::from_context(&ctx)
}

#[test]
fn lists_operations_in_document_order() {
    let document: Document = DOCUMENT.parse().unwrap();
    let labels: Vec<_> = document.operations().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "GET /api/v1/users/{id}",
            "DELETE /api/v1/users/{id}",
            "GET /api/v1/users",
            "POST /api/v1/users",
        ]
    );
    assert_eq!(document.operations()[0].description, "Fetch one user");
    assert_eq!(document.operations()[1].description, "deleteUser");
}

#[test]
fn shared_component_is_declared_once() {
    let document: Document = DOCUMENT.parse().unwrap();
    let output = run(&document, &["getUser", "listUsers", "POST /api/v1/users"]);

    assert_eq!(output.models.matches("export interface User {").count(), 1);
    assert!(output.models.contains("export type GetUserData = User;"));
    assert!(output.models.contains("export type ListUsersData = User[];"));
    assert!(output.models.contains("export type CreateUserResponse = User;"));
    assert!(output.models.contains("export interface CreateUserVariables {"));
    assert!(output.declared.contains(&"User".to_string()));
}

#[test]
fn fragments_follow_selection_order_with_prefix_stripped() {
    let document: Document = DOCUMENT.parse().unwrap();
    let output = run(&document, &["POST /api/v1/users", "get /api/v1/users/{id}"]);

    assert_eq!(output.api.len(), 2);
    assert!(output.api[0].starts_with("export const createUser = async"));
    assert!(output.api[0].contains("getInstance().post(`/v1/users`"));
    assert!(output.api[1].contains("`/v1/users/${id}`"));
    assert!(!output.text(FragmentKind::Api).contains("/api/v1"));

    // Mutations have no cache key.
    assert_eq!(output.query_key.len(), 1);
    assert!(output.query_key[0].starts_with("export const getUserKey = {"));
    assert!(output.hook[0].contains("useMutation"));
}

#[test]
fn missing_success_response_falls_back_to_any() {
    let document: Document = DOCUMENT.parse().unwrap();
    let output = run(&document, &["deleteUser"]);

    assert!(output.models.contains("export type DeleteUserResponse = any;"));
    assert!(output.declared.contains(&"DeleteUserResponse".to_string()));
    assert!(output.models.contains("export interface DeleteUserVariables {"));
}

#[test]
fn unknown_selection_is_rejected() {
    let document: Document = DOCUMENT.parse().unwrap();
    let err = document.select(&["GET /nope".to_string()]).unwrap_err();
    assert_eq!(err.to_string(), "unknown operation 'GET /nope'");
}
