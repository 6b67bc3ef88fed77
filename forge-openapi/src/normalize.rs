//! Operation normalization: feature name, response schema, params schema.

use hookforge_core::upper_first;
use hookforge_ir::{Content, NormalizedOperation, OperationDescriptor};
use serde_json::{Map, Value, json};

use crate::enrich::enrich_titles;

const JSON_SCHEMA_DRAFT: &str = "http://json-schema.org/draft-07/schema#";
const PLAIN_WRAPPER: &str = "WithResponse";
const RECORD_WRAPPER: &str = "WithRecordResponse";
const PAGINATION_MARKERS: [&str; 2] = ["totalRecords", "filteredRecords"];

/// Turns operation descriptors into per-feature schema strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer<'a> {
    components: Option<&'a Value>,
    definitions: Option<&'a Value>,
}

impl<'a> Normalizer<'a> {
    /// A normalizer attaching the given reusable schemas to every emitted schema.
    pub fn new(components: Option<&'a Value>, definitions: Option<&'a Value>) -> Self {
        Self {
            components,
            definitions,
        }
    }

    pub fn normalize(&self, op: &OperationDescriptor) -> NormalizedOperation {
        let feature = feature_name(op);
        let (response_schema, wrapper) = match success_schema(op) {
            Some(schema) => {
                let (schema, wrapper) = self.response_schema(schema, &feature);
                (Some(schema), wrapper)
            }
            None => (None, None),
        };
        let params_schema = self.params_schema(op, &feature);

        tracing::debug!(
            operation = %op.label(),
            feature = %feature,
            wrapper = wrapper.unwrap_or("none"),
            has_params = params_schema.is_some(),
            "normalized operation"
        );

        NormalizedOperation {
            feature_name: feature,
            method: op.method,
            path: op.path.clone(),
            response_schema,
            params_schema,
            wrapper: wrapper.map(str::to_string),
        }
    }

    /// Serialized response schema and the envelope wrapper, if any.
    fn response_schema(&self, schema: &Value, feature: &str) -> (String, Option<&'static str>) {
        let properties = schema
            .get("properties")
            .and_then(Value::as_object)
            .filter(|_| schema.get("type").and_then(Value::as_str) == Some("object"));

        let envelope = properties.filter(|p| is_set(p.get("success")) && is_set(p.get("data")));
        let (mut inner, wrapper, base) = match envelope {
            Some(properties) => {
                let wrapper = if PAGINATION_MARKERS.iter().any(|m| is_set(properties.get(*m))) {
                    RECORD_WRAPPER
                } else {
                    PLAIN_WRAPPER
                };
                (
                    properties.get("data").cloned().unwrap_or(Value::Null),
                    Some(wrapper),
                    format!("{}Data", feature),
                )
            }
            None => (schema.clone(), None, format!("{}Response", feature)),
        };

        enrich_titles(&mut inner, &base);
        (self.attach_definitions(inner).to_string(), wrapper)
    }

    /// Draft-07 object schema over query/path parameters and the JSON body.
    fn params_schema(&self, op: &OperationDescriptor, feature: &str) -> Option<String> {
        let mut properties = Map::new();
        let mut required: Vec<Value> = Vec::new();

        for param in op.parameters.iter().filter(|p| p.location.is_variable()) {
            properties.insert(param.name.clone(), param.schema.clone().unwrap_or_else(|| json!({})));
            if param.required {
                required.push(Value::String(param.name.clone()));
            }
        }

        let body = op
            .request_body
            .as_ref()
            .and_then(|content| content.get("application/json"))
            .and_then(|media| media.schema.as_ref());
        if let Some(body) = body {
            let body_properties = body
                .get("properties")
                .and_then(Value::as_object)
                .filter(|_| body.get("type").and_then(Value::as_str) == Some("object"));
            match body_properties {
                Some(body_properties) => {
                    for (key, value) in body_properties {
                        properties.insert(key.clone(), value.clone());
                    }
                    if let Some(Value::Array(body_required)) = body.get("required") {
                        required.extend(body_required.iter().cloned());
                    }
                }
                None => {
                    properties.insert("body".to_string(), body.clone());
                    required.push(Value::String("body".to_string()));
                }
            }
        }

        if properties.is_empty() {
            return None;
        }

        let mut schema = json!({
            "$schema": JSON_SCHEMA_DRAFT,
            "type": "object",
            "properties": properties,
            "required": required,
        });
        enrich_titles(&mut schema, &format!("{}Variables", feature));
        Some(self.attach_definitions(schema).to_string())
    }

    /// Copy the document's reusable schemas next to the root so `$ref`s resolve.
    fn attach_definitions(&self, mut schema: Value) -> Value {
        if let Value::Object(object) = &mut schema {
            if let Some(components) = self.components {
                object.insert("components".to_string(), components.clone());
            }
            if let Some(definitions) = self.definitions {
                object.insert("definitions".to_string(), definitions.clone());
            }
        }
        schema
    }
}

/// Feature name of an operation.
///
/// The operationId when present, else the method followed by the last path
/// segment that is not a parameter. Non-alphanumerics are removed.
pub fn feature_name(op: &OperationDescriptor) -> String {
    let raw = match &op.operation_id {
        Some(id) => id.clone(),
        None => {
            let segment = op
                .path
                .split('/')
                .filter(|part| !part.is_empty() && !part.starts_with('{'))
                .next_back()
                .unwrap_or("feature");
            format!("{}{}", op.method.client_method(), upper_first(segment))
        }
    };

    let mut name: String = raw.chars().filter(char::is_ascii_alphanumeric).collect();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name = format!("Api{}", name);
    }
    if name.is_empty() {
        name = "ApiFeature".to_string();
    }
    name
}

/// Schema of the first 2xx response, preferring a JSON content type.
fn success_schema(op: &OperationDescriptor) -> Option<&Value> {
    let content: &Content = op
        .responses
        .iter()
        .find(|(status, _)| status.starts_with('2'))
        .and_then(|(_, content)| content.as_ref())?;

    let media = content
        .iter()
        .find(|(content_type, _)| content_type.contains("json"))
        .or_else(|| content.first())
        .map(|(_, media)| media)?;
    media.schema.as_ref()
}

fn is_set(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null))
}
