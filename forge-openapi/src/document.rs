//! Loading a bundled OpenAPI document and listing its operations.

use std::{fs, path::Path, str::FromStr};

use hookforge_ir::{
    Content, HttpMethod, MediaType, OperationDescriptor, OperationParameter, ParamLocation,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOperation {
    operation_id: Option<String>,
    summary: Option<String>,
    #[serde(default)]
    parameters: Vec<RawParameter>,
    request_body: Option<RawRequestBody>,
    #[serde(default)]
    responses: IndexMap<String, RawResponse>,
}

#[derive(Debug, Deserialize)]
struct RawParameter {
    name: Option<String>,
    #[serde(rename = "in")]
    location: Option<String>,
    #[serde(default)]
    required: bool,
    schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawRequestBody {
    content: Option<IndexMap<String, RawMediaType>>,
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    content: Option<IndexMap<String, RawMediaType>>,
}

#[derive(Debug, Deserialize)]
struct RawMediaType {
    schema: Option<Value>,
}

fn to_content(raw: IndexMap<String, RawMediaType>) -> Content {
    raw.into_iter()
        .map(|(content_type, media)| (content_type, MediaType { schema: media.schema }))
        .collect()
}

impl RawParameter {
    fn into_parameter(self) -> Option<OperationParameter> {
        let location = match self.location.as_deref()? {
            "query" => ParamLocation::Query,
            "path" => ParamLocation::Path,
            "header" => ParamLocation::Header,
            "cookie" => ParamLocation::Cookie,
            _ => return None,
        };
        Some(OperationParameter {
            name: self.name?,
            location,
            required: self.required,
            schema: self.schema,
        })
    }
}

/// One operation as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationEntry {
    /// `GET /users/{id}`
    pub label: String,
    /// Summary, else operationId, else empty.
    pub description: String,
    pub descriptor: OperationDescriptor,
}

/// An already-bundled OpenAPI document.
#[derive(Debug, Clone)]
pub struct Document {
    entries: Vec<OperationEntry>,
    components: Option<Value>,
    definitions: Option<Value>,
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(s.trim()).map_err(|e| Error::Parse(e.to_string()))?;
        Self::from_value(value)
    }
}

impl Document {
    /// Read and parse a JSON document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Build a document from parsed JSON.
    pub fn from_value(mut value: Value) -> Result<Self> {
        let Some(Value::Object(paths)) = value.get_mut("paths").map(Value::take) else {
            return Err(Error::Parse("no paths found".to_string()));
        };

        let mut entries = Vec::new();
        for (path, item) in paths {
            let Value::Object(item) = item else {
                continue;
            };
            for (key, operation) in item {
                // Path items also carry `parameters`, `summary`, `servers`, ...
                let Ok(method) = HttpMethod::from_str(&key) else {
                    continue;
                };
                let label = format!("{} {}", method, path);
                let raw: RawOperation = serde_json::from_value(operation)
                    .map_err(|e| Error::Parse(format!("{}: {}", label, e)))?;
                entries.push(OperationEntry {
                    description: raw
                        .summary
                        .clone()
                        .filter(|s| !s.is_empty())
                        .or_else(|| raw.operation_id.clone())
                        .unwrap_or_default(),
                    descriptor: descriptor(&path, method, raw),
                    label,
                });
            }
        }

        tracing::debug!(operations = entries.len(), "loaded OpenAPI document");
        Ok(Self {
            entries,
            components: value.get("components").cloned(),
            definitions: value.get("definitions").cloned(),
        })
    }

    /// Every operation in document order.
    pub fn operations(&self) -> &[OperationEntry] {
        &self.entries
    }

    /// Descriptors of every operation.
    pub fn all(&self) -> Vec<OperationDescriptor> {
        self.entries.iter().map(|e| e.descriptor.clone()).collect()
    }

    /// Resolve labels (`GET /users`) or operationIds to descriptors, in
    /// selection order.
    pub fn select(&self, selection: &[String]) -> Result<Vec<OperationDescriptor>> {
        selection
            .iter()
            .map(|selector| {
                self.find(selector)
                    .map(|entry| entry.descriptor.clone())
                    .ok_or_else(|| Error::UnknownOperation(selector.clone()))
            })
            .collect()
    }

    fn find(&self, selector: &str) -> Option<&OperationEntry> {
        let selector = selector.trim();
        self.entries.iter().find(|entry| {
            entry.label == selector
                || entry.descriptor.operation_id.as_deref() == Some(selector)
                || label_matches(&entry.label, selector)
        })
    }

    /// `components` of the document, attached to emitted schemas.
    pub fn components(&self) -> Option<&Value> {
        self.components.as_ref()
    }

    /// Swagger 2 `definitions`, attached to emitted schemas.
    pub fn definitions(&self) -> Option<&Value> {
        self.definitions.as_ref()
    }
}

/// Labels compare with a case-insensitive method.
fn label_matches(label: &str, selector: &str) -> bool {
    match (label.split_once(' '), selector.split_once(' ')) {
        (Some((method, path)), Some((sel_method, sel_path))) => {
            method.eq_ignore_ascii_case(sel_method) && path == sel_path.trim()
        }
        _ => false,
    }
}

fn descriptor(path: &str, method: HttpMethod, raw: RawOperation) -> OperationDescriptor {
    OperationDescriptor {
        path: path.to_string(),
        method,
        operation_id: raw.operation_id.filter(|id| !id.is_empty()),
        summary: raw.summary,
        parameters: raw
            .parameters
            .into_iter()
            .filter_map(RawParameter::into_parameter)
            .collect(),
        request_body: raw.request_body.and_then(|body| body.content).map(to_content),
        responses: raw
            .responses
            .into_iter()
            .map(|(status, response)| (status, response.content.map(to_content)))
            .collect(),
    }
}
