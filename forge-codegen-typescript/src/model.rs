//! Model synthesis: response and variables declarations for one feature.
//!
//! The response type comes from a schema when one is supplied. Otherwise an
//! example is classified:
//!
//! | example                                              | declared       | return type                               |
//! |------------------------------------------------------|----------------|-------------------------------------------|
//! | `{success: true, data}` with both record counts      | `{P}Item`      | `WithRecordResponse<{P}Item[]>`           |
//! | same, records under another key                      | `{P}Item`      | `WithCustomRecordResponse<'key', {P}Item>`|
//! | same, no non-empty array                             | `{P}Data`      | `WithResponse<{P}Data>`                   |
//! | `{success: true, data}` otherwise                    | `{P}Response`  | `WithResponse<{P}Response>`               |
//! | anything else                                        | `{P}Response`  | `{P}Response`                             |

use hookforge_codegen::{
    Artifact, Error, Result,
    json::parse_relaxed,
    language::TypeCompiler,
};
use hookforge_ir::{FeatureSpec, ModelResult, PayloadSource, VariablesType};
use serde_json::{Map, Value, json};

use crate::{names::FeatureNames, url::url_vars};

/// Record-count fields marking a paginated envelope.
pub const PAGINATION_MARKERS: [&str; 2] = ["totalRecords", "filteredRecords"];

/// Conventional key of the records array in a paginated envelope.
pub const RECORDS_KEY: &str = "data";

/// Placeholder example value injected for path variables.
const URL_VAR_PLACEHOLDER: i64 = 123;

/// How an example response is declared and referenced.
#[derive(Debug, PartialEq)]
enum ResponseShape<'a> {
    Paginated { item: &'a Value, records_key: String },
    Envelope { payload: &'a Value, root: String },
    Plain(&'a Value),
}

impl<'a> ResponseShape<'a> {
    fn classify(value: &'a Value, names: &FeatureNames) -> Self {
        let Some(payload) = value
            .as_object()
            .filter(|object| object.get("success") == Some(&Value::Bool(true)))
            .and_then(|object| object.get("data"))
            .filter(|data| is_truthy(data))
        else {
            return ResponseShape::Plain(value);
        };

        let paginated = payload
            .as_object()
            .is_some_and(|data| PAGINATION_MARKERS.iter().all(|k| data.contains_key(*k)));
        if !paginated {
            return ResponseShape::Envelope {
                payload,
                root: names.response(),
            };
        }

        let records = payload.as_object().and_then(|data| {
            data.iter().find_map(|(key, value)| match value {
                Value::Array(items) => items.first().map(|item| (key, item)),
                _ => None,
            })
        });
        match records {
            Some((key, item)) => ResponseShape::Paginated {
                item,
                records_key: key.clone(),
            },
            None => ResponseShape::Envelope {
                payload,
                root: names.data(),
            },
        }
    }
}

/// Synthesize the declarations and type references for one feature.
///
/// With `skip_model_generation` set the declaration text is left empty but
/// every type reference is computed exactly as it would be otherwise.
pub fn synthesize_models(
    spec: &FeatureSpec,
    names: &FeatureNames,
    compiler: &impl TypeCompiler,
) -> Result<ModelResult> {
    let skip = spec.skip_model_generation;
    let url_vars = url_vars(&spec.url);

    let response = synthesize_response(spec, names, compiler)?;

    let variables_interface_name = names.variables();
    let mut variable_keys = url_vars.clone();
    let (variables_definition, variables_type, params_json) = match &spec.params {
        Some(PayloadSource::Schema(schema)) => {
            let definition = if skip {
                String::new()
            } else {
                compiler
                    .compile_schema(schema, &variables_interface_name)
                    .map_err(|e| Error::synthesis(Artifact::Variables, e))?
            };
            extend_unique(&mut variable_keys, schema_property_keys(schema));
            (
                definition,
                VariablesType::Named(variables_interface_name.clone()),
                None,
            )
        }
        params => {
            let mut params_json = match params.as_ref().and_then(PayloadSource::example) {
                Some(text) => example_params(text)?,
                None => Map::new(),
            };
            for var in &url_vars {
                if !params_json.contains_key(var) {
                    params_json.insert(var.clone(), json!(URL_VAR_PLACEHOLDER));
                }
            }
            extend_unique(&mut variable_keys, params_json.keys().cloned());

            if params_json.is_empty() {
                (String::new(), VariablesType::Void, Some(params_json))
            } else {
                let definition = if skip {
                    String::new()
                } else {
                    compiler
                        .compile_sample(&Value::Object(params_json.clone()), &variables_interface_name)
                        .map_err(|e| Error::synthesis(Artifact::Variables, e))?
                };
                (
                    definition,
                    VariablesType::Named(variables_interface_name.clone()),
                    Some(params_json),
                )
            }
        }
    };

    tracing::debug!(
        feature = %spec.name,
        return_type = %response.api_return_type,
        variables = %variables_type.as_str(),
        "synthesized models"
    );

    Ok(ModelResult {
        response_model: response.model,
        api_return_type: response.api_return_type,
        variables_definition,
        variables_type,
        params_json,
        url_vars,
        variables_interface_name,
        variable_keys,
        records_key: response.records_key,
    })
}

struct ResponseModel {
    model: String,
    api_return_type: String,
    records_key: Option<String>,
}

fn synthesize_response(
    spec: &FeatureSpec,
    names: &FeatureNames,
    compiler: &impl TypeCompiler,
) -> Result<ResponseModel> {
    let skip = spec.skip_model_generation;
    let declare = |value: &Value, root: &str| -> Result<String> {
        if skip {
            return Ok(String::new());
        }
        compiler
            .compile_sample(value, root)
            .map_err(|e| Error::synthesis(Artifact::Response, e))
    };

    match &spec.response {
        Some(PayloadSource::Schema(schema)) => {
            let root = names.response_root(spec.wrapper.is_some());
            let model = if skip {
                String::new()
            } else {
                compiler
                    .compile_schema(schema, &root)
                    .map_err(|e| Error::synthesis(Artifact::Response, e))?
            };
            Ok(ResponseModel {
                model,
                api_return_type: root,
                records_key: None,
            })
        }
        Some(PayloadSource::Example(text)) if !text.trim().is_empty() => {
            let parsed = parse_relaxed(text).map_err(|source| Error::InputParse {
                artifact: Artifact::Response,
                source,
            })?;

            let shape = ResponseShape::classify(&parsed, names);
            tracing::debug!(feature = %spec.name, shape = ?shape_label(&shape), "classified example response");
            match shape {
                ResponseShape::Paginated { item, records_key } => {
                    let item_name = names.item();
                    let api_return_type = if records_key == RECORDS_KEY {
                        format!("WithRecordResponse<{}[]>", item_name)
                    } else {
                        format!("WithCustomRecordResponse<'{}', {}>", records_key, item_name)
                    };
                    Ok(ResponseModel {
                        model: declare(item, &item_name)?,
                        api_return_type,
                        records_key: Some(records_key),
                    })
                }
                ResponseShape::Envelope { payload, root } => Ok(ResponseModel {
                    model: declare(payload, &root)?,
                    api_return_type: format!("WithResponse<{}>", root),
                    records_key: None,
                }),
                ResponseShape::Plain(value) => {
                    let root = names.response();
                    Ok(ResponseModel {
                        model: declare(value, &root)?,
                        api_return_type: root,
                        records_key: None,
                    })
                }
            }
        }
        _ => {
            // No response source: the payload is untyped.
            let root = names.response();
            Ok(ResponseModel {
                model: format!("export type {} = any;", root),
                api_return_type: root,
                records_key: None,
            })
        }
    }
}

fn shape_label(shape: &ResponseShape<'_>) -> &'static str {
    match shape {
        ResponseShape::Paginated { .. } => "paginated",
        ResponseShape::Envelope { .. } => "envelope",
        ResponseShape::Plain(_) => "plain",
    }
}

/// Example params as an object; an array contributes its first element.
fn example_params(text: &str) -> Result<Map<String, Value>> {
    let parsed = parse_relaxed(text).map_err(|source| Error::InputParse {
        artifact: Artifact::Variables,
        source,
    })?;
    let representative = match parsed {
        Value::Array(items) => items.into_iter().next().unwrap_or(Value::Null),
        other => other,
    };
    Ok(match representative {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}

/// Top-level property names of a params schema.
pub(crate) fn schema_property_keys(schema: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(schema) {
        Ok(value) => value
            .get("properties")
            .and_then(Value::as_object)
            .map(|properties| properties.keys().cloned().collect())
            .unwrap_or_default(),
        Err(e) => {
            tracing::warn!("params schema is not valid JSON, using URL variables only: {}", e);
            Vec::new()
        }
    }
}

fn extend_unique(keys: &mut Vec<String>, more: impl IntoIterator<Item = String>) {
    for key in more {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
