//! OpenAPI operations as seen by the normalizer.

use indexmap::IndexMap;
use serde_json::Value;

use crate::{FeatureSpec, HookKind, HttpMethod, PayloadSource};

/// Where an operation parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Query,
    Path,
    Header,
    Cookie,
}

impl ParamLocation {
    /// Returns true if the parameter becomes a generated variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, ParamLocation::Query | ParamLocation::Path)
    }
}

/// A declared operation parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationParameter {
    pub name: String,
    pub location: ParamLocation,
    pub required: bool,
    pub schema: Option<Value>,
}

/// One media type entry of a request body or response.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaType {
    pub schema: Option<Value>,
}

/// Content-type keyed media types, in declaration order.
pub type Content = IndexMap<String, MediaType>;

/// One HTTP path + method declared by an OpenAPI document.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDescriptor {
    pub path: String,
    pub method: HttpMethod,
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub parameters: Vec<OperationParameter>,
    pub request_body: Option<Content>,
    /// Status code to response content (`None` when the response declares no content).
    pub responses: IndexMap<String, Option<Content>>,
}

impl OperationDescriptor {
    /// Label in the form `GET /users/{id}`.
    pub fn label(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// An operation after normalization, ready for batch synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedOperation {
    pub feature_name: String,
    pub method: HttpMethod,
    pub path: String,
    pub response_schema: Option<String>,
    pub params_schema: Option<String>,
    pub wrapper: Option<String>,
}

impl NormalizedOperation {
    /// Hook kind used in batch mode: reads become queries, everything else a mutation.
    pub fn hook_kind(&self) -> HookKind {
        match self.method {
            HttpMethod::Get => HookKind::Query,
            _ => HookKind::Mutation,
        }
    }

    /// Build the per-feature [`FeatureSpec`] for the emit pass, removing a gateway prefix
    /// from the path.
    pub fn to_feature_spec(&self, strip_prefix: &str) -> FeatureSpec {
        let url = if strip_prefix.is_empty() {
            self.path.as_str()
        } else {
            self.path.strip_prefix(strip_prefix).unwrap_or(&self.path)
        };

        let mut spec = FeatureSpec::new(&self.feature_name, self.method, url, self.hook_kind());
        spec.response = self.response_schema.clone().map(PayloadSource::Schema);
        spec.params = self.params_schema.clone().map(PayloadSource::Schema);
        spec.wrapper = self.wrapper.clone();
        spec.skip_models()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(method: HttpMethod, path: &str) -> NormalizedOperation {
        NormalizedOperation {
            feature_name: "listUsers".into(),
            method,
            path: path.into(),
            response_schema: Some("{}".into()),
            params_schema: None,
            wrapper: Some("WithResponse".into()),
        }
    }

    #[test]
    fn test_to_feature_spec_strips_prefix() {
        let spec = op(HttpMethod::Get, "/api/v1/users").to_feature_spec("/api");
        assert_eq!(spec.url, "/v1/users");
        assert_eq!(spec.hook, HookKind::Query);
        assert!(spec.skip_model_generation);
        assert_eq!(spec.response, Some(PayloadSource::Schema("{}".into())));
        assert_eq!(spec.wrapper.as_deref(), Some("WithResponse"));
    }

    #[test]
    fn test_to_feature_spec_keeps_unprefixed_path() {
        let spec = op(HttpMethod::Post, "/v1/users").to_feature_spec("/api");
        assert_eq!(spec.url, "/v1/users");
        assert_eq!(spec.hook, HookKind::Mutation);
    }
}
