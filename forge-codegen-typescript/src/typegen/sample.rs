//! Type inference from example values.
//!
//! Objects become interfaces named after their path (`{Parent}{Key}`), array
//! elements are merged into one shape named `{Parent}{Key}Item`, and keys that
//! are missing from some of the merged objects become optional.

use hookforge_core::to_pascal_case;
use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::registry::{Registry, array_of, property_key};
use crate::ast::{Interface, InterfaceField, TypeAlias, Union};

/// Declare the type of `sample` under the (already reserved) name `root`.
pub(crate) fn declare_root(registry: &mut Registry, sample: &Value, root: &str) {
    match sample {
        Value::Object(map) => declare_object(registry, &[map], root),
        other => {
            let ty = infer_many(registry, &[other], root);
            registry.define(root, &TypeAlias::new(root, ty));
        }
    }
}

/// Type expression covering every value in `values`.
fn infer_many(registry: &mut Registry, values: &[&Value], hint: &str) -> String {
    let mut union = Union::new();
    let mut objects: Vec<&Map<String, Value>> = Vec::new();
    let mut elements: Vec<&Value> = Vec::new();
    let mut saw_array = false;

    for value in values {
        match value {
            Value::Null => union = union.variant("null"),
            Value::Bool(_) => union = union.variant("boolean"),
            Value::Number(_) => union = union.variant("number"),
            Value::String(_) => union = union.variant("string"),
            Value::Array(items) => {
                saw_array = true;
                elements.extend(items.iter());
            }
            Value::Object(map) => objects.push(map),
        }
    }

    if !objects.is_empty() {
        let name = registry.reserve(hint);
        declare_object(registry, &objects, &name);
        union = union.variant(name);
    }
    if saw_array {
        let element = if elements.is_empty() {
            "any".to_string()
        } else {
            infer_many(registry, &elements, &format!("{}Item", hint))
        };
        union = union.variant(array_of(&element));
    }

    if union.is_empty() {
        "any".to_string()
    } else {
        union.expression()
    }
}

/// Declare one interface merging the shapes of `objects`.
fn declare_object(registry: &mut Registry, objects: &[&Map<String, Value>], name: &str) {
    let mut keys: IndexMap<&str, Vec<&Value>> = IndexMap::new();
    for object in objects {
        for (key, value) in object.iter() {
            keys.entry(key.as_str()).or_default().push(value);
        }
    }

    let mut interface = Interface::new(name);
    for (key, values) in &keys {
        let ty = infer_many(registry, values, &format!("{}{}", name, to_pascal_case(key)));
        let mut field = InterfaceField::new(property_key(key), ty);
        if values.len() < objects.len() {
            field = field.optional();
        }
        interface = interface.field_with(field);
    }
    registry.define(name, &interface);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn compile(sample: Value, root: &str) -> String {
        let mut registry = Registry::new();
        let root = registry.reserve_root(root);
        declare_root(&mut registry, &sample, &root);
        registry.render()
    }

    #[test]
    fn test_flat_object() {
        let code = compile(json!({"id": 1, "name": "Test", "active": true}), "GetUserResponse");
        insta::assert_snapshot!(code, @r"
        export interface GetUserResponse {
          id: number;
          name: string;
          active: boolean;
        }
        ");
    }

    #[test]
    fn test_nested_objects_and_arrays() {
        let code = compile(
            json!({"user": {"id": 1}, "tags": ["a"], "items": [{"id": 1}, {"id": 2, "note": null}]}),
            "ListResponse",
        );
        insta::assert_snapshot!(code, @r"
        export interface ListResponse {
          user: ListResponseUser;
          tags: string[];
          items: ListResponseItemsItem[];
        }

        export interface ListResponseUser {
          id: number;
        }

        export interface ListResponseItemsItem {
          id: number;
          note?: null;
        }
        ");
    }

    #[test]
    fn test_non_object_roots() {
        assert_eq!(compile(json!([]), "Ids"), "export type Ids = any[];");
        assert_eq!(compile(json!([1, "a"]), "Mixed"), "export type Mixed = (number | string)[];");
        assert_eq!(compile(json!(true), "Flag"), "export type Flag = boolean;");
    }

    #[test]
    fn test_quoted_keys() {
        let code = compile(json!({"user-id": 1}), "Vars");
        assert_eq!(code, "export interface Vars {\n  \"user-id\": number;\n}");
    }
}
