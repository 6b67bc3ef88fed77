//! JSON-Schema to TypeScript declarations.
//!
//! Supports the subset of JSON-Schema used by OpenAPI documents: `$ref` into
//! the same document (`#/components/schemas/...`, `#/definitions/...`,
//! `#/$defs/...`), `enum`/`const`, `oneOf`/`anyOf` (union), `allOf`
//! (intersection), `nullable`, `additionalProperties` and tuple `items`.
//! Named sub-schemas are declared once per compile, however many roots
//! reference them.

use hookforge_codegen::{Error, Result};
use hookforge_core::upper_first;
use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::registry::{Registry, array_of, property_key};
use crate::ast::{Interface, InterfaceField, TypeAlias, Union};

/// Converts schema documents into declarations inside one [`Registry`].
pub(crate) struct SchemaConverter<'r> {
    registry: &'r mut Registry,
    /// `$ref` pointer to the declared type name.
    refs: IndexMap<String, String>,
}

impl<'r> SchemaConverter<'r> {
    pub fn new(registry: &'r mut Registry) -> Self {
        Self {
            registry,
            refs: IndexMap::new(),
        }
    }

    /// Declare `doc` under the (already reserved) name `root`.
    ///
    /// `doc` is also the document `$ref`s are resolved against.
    pub fn declare_root(&mut self, doc: &Value, root: &str) -> Result<()> {
        self.declare_named(doc, root, doc)
    }

    fn declare_named(&mut self, schema: &Value, name: &str, doc: &Value) -> Result<()> {
        if let Some(properties) = plain_object_properties(schema) {
            self.declare_interface(schema, properties, name, doc)
        } else {
            let ty = self.convert(schema, name, doc)?;
            let mut alias = TypeAlias::new(name, ty);
            if let Some(description) = description(schema) {
                alias = alias.doc(description);
            }
            self.registry.define(name, &alias);
            Ok(())
        }
    }

    fn declare_interface(
        &mut self,
        schema: &Value,
        properties: &Map<String, Value>,
        name: &str,
        doc: &Value,
    ) -> Result<()> {
        let required: Vec<&str> = schema
            .get("required")
            .and_then(Value::as_array)
            .map(|keys| keys.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut interface = Interface::new(name);
        if let Some(description) = description(schema) {
            interface = interface.doc(description);
        }
        for (key, property) in properties {
            let ty = self.convert(property, &format!("{}{}", name, upper_first(key)), doc)?;
            let mut field = InterfaceField::new(property_key(key), ty);
            if !required.contains(&key.as_str()) {
                field = field.optional();
            }
            if let Some(description) = description(property) {
                field = field.doc(description);
            }
            interface = interface.field_with(field);
        }
        if allows_additional(schema) {
            interface = interface.index_signature("any");
        }
        self.registry.define(name, &interface);
        Ok(())
    }

    /// Type expression for `schema`, declaring named sub-types as needed.
    fn convert(&mut self, schema: &Value, hint: &str, doc: &Value) -> Result<String> {
        let object = match schema {
            Value::Bool(true) => return Ok("any".to_string()),
            Value::Bool(false) => return Ok("never".to_string()),
            Value::Object(object) => object,
            _ => return Ok("any".to_string()),
        };

        let ty = if let Some(pointer) = object.get("$ref").and_then(Value::as_str) {
            self.resolve_ref(pointer, doc)?
        } else if let Some(value) = object.get("const") {
            literal(value)
        } else if let Some(values) = object.get("enum").and_then(Value::as_array) {
            values
                .iter()
                .fold(Union::new(), |union, value| union.variant(literal(value)))
                .expression()
        } else if let Some(parts) = object.get("allOf").and_then(Value::as_array) {
            self.intersection(parts, hint, doc)?
        } else if let Some(variants) = object
            .get("oneOf")
            .or_else(|| object.get("anyOf"))
            .and_then(Value::as_array)
        {
            let mut union = Union::new();
            for variant in variants {
                union = union.variant(self.convert(variant, hint, doc)?);
            }
            union.expression()
        } else {
            match object.get("type") {
                Some(Value::String(ty)) => self.convert_typed(ty, schema, hint, doc)?,
                Some(Value::Array(types)) => {
                    let mut union = Union::new();
                    for ty in types.iter().filter_map(Value::as_str) {
                        union = union.variant(self.convert_typed(ty, schema, hint, doc)?);
                    }
                    union.expression()
                }
                _ if object.contains_key("properties") => {
                    self.convert_typed("object", schema, hint, doc)?
                }
                _ if object.contains_key("items") => {
                    self.convert_typed("array", schema, hint, doc)?
                }
                _ if object.contains_key("additionalProperties") => {
                    self.convert_typed("object", schema, hint, doc)?
                }
                _ => "any".to_string(),
            }
        };

        let nullable = object.get("nullable").and_then(Value::as_bool) == Some(true);
        if nullable && ty != "null" && !ty.ends_with("| null") {
            Ok(format!("{} | null", ty))
        } else {
            Ok(ty)
        }
    }

    fn convert_typed(&mut self, ty: &str, schema: &Value, hint: &str, doc: &Value) -> Result<String> {
        let ty = match ty {
            "string" => "string".to_string(),
            "integer" | "number" => "number".to_string(),
            "boolean" => "boolean".to_string(),
            "null" => "null".to_string(),
            "array" => self.convert_array(schema, hint, doc)?,
            "object" => self.convert_object(schema, hint, doc)?,
            _ => "any".to_string(),
        };
        Ok(ty)
    }

    fn convert_array(&mut self, schema: &Value, hint: &str, doc: &Value) -> Result<String> {
        match schema.get("items") {
            Some(Value::Array(items)) => {
                let mut elements = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    elements.push(self.convert(item, &format!("{}Item{}", hint, i + 1), doc)?);
                }
                Ok(format!("[{}]", elements.join(", ")))
            }
            Some(items) => {
                let element = self.convert(items, &format!("{}Item", hint), doc)?;
                Ok(array_of(&element))
            }
            None => Ok("any[]".to_string()),
        }
    }

    fn convert_object(&mut self, schema: &Value, hint: &str, doc: &Value) -> Result<String> {
        if let Some(properties) = plain_object_properties(schema) {
            let name = self.registry.reserve(title(schema).unwrap_or(hint));
            self.declare_interface(schema, properties, &name, doc)?;
            return Ok(name);
        }

        let value = match schema.get("additionalProperties") {
            Some(Value::Bool(false)) => "never".to_string(),
            Some(additional @ Value::Object(_)) => {
                self.convert(additional, &format!("{}Value", hint), doc)?
            }
            _ => "any".to_string(),
        };
        Ok(format!("Record<string, {}>", value))
    }

    fn intersection(&mut self, parts: &[Value], hint: &str, doc: &Value) -> Result<String> {
        let mut types: Vec<String> = Vec::with_capacity(parts.len());
        for part in parts {
            let ty = self.convert(part, hint, doc)?;
            let ty = if ty.contains(" | ") {
                format!("({})", ty)
            } else {
                ty
            };
            if !types.contains(&ty) {
                types.push(ty);
            }
        }
        Ok(match types.len() {
            0 => "any".to_string(),
            _ => types.join(" & "),
        })
    }

    fn resolve_ref(&mut self, pointer: &str, doc: &Value) -> Result<String> {
        if let Some(name) = self.refs.get(pointer) {
            return Ok(name.clone());
        }

        let target = pointer
            .strip_prefix('#')
            .and_then(|path| doc.pointer(path))
            .ok_or_else(|| Error::TypeCompile(format!("unresolved reference '{}'", pointer)))?;

        let hint = title(target)
            .or_else(|| pointer.rsplit('/').next())
            .unwrap_or("Ref");
        let name = self.registry.reserve(hint);
        tracing::trace!(%pointer, %name, "declaring referenced schema");
        self.refs.insert(pointer.to_string(), name.clone());
        self.declare_named(target, &name, doc)?;
        Ok(name)
    }
}

/// Properties of an object schema that should become an interface.
fn plain_object_properties(schema: &Value) -> Option<&Map<String, Value>> {
    let object = schema.as_object()?;
    let composite = ["$ref", "enum", "const", "allOf", "oneOf", "anyOf"]
        .iter()
        .any(|key| object.contains_key(*key));
    if composite {
        return None;
    }
    let is_object = match object.get("type") {
        None => true,
        Some(Value::String(ty)) => ty == "object",
        Some(_) => false,
    };
    object
        .get("properties")
        .and_then(Value::as_object)
        .filter(|properties| is_object && !properties.is_empty())
}

fn allows_additional(schema: &Value) -> bool {
    match schema.get("additionalProperties") {
        None | Some(Value::Bool(false)) => false,
        Some(_) => true,
    }
}

fn title(schema: &Value) -> Option<&str> {
    schema
        .get("title")
        .and_then(Value::as_str)
        .filter(|title| !title.trim().is_empty())
}

fn description(schema: &Value) -> Option<&str> {
    schema
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty() && !text.contains("*/"))
}

/// TypeScript literal type for a JSON value.
fn literal(value: &Value) -> String {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => value.to_string(),
        _ => "any".to_string(),
    }
}
