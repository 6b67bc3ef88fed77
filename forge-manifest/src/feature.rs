//! `[features.<name>]` sections.

use std::{fmt, str::FromStr};

use hookforge_ir::{FeatureSpec, HookKind, HttpMethod, PayloadSource};
use serde::{Deserialize, Deserializer, de};

/// One configured feature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureConfig {
    /// GET, POST, PUT, DELETE or PATCH (any case)
    #[serde(deserialize_with = "from_str")]
    pub method: HttpMethod,

    /// URL template with `{var}` placeholders
    pub url: String,

    /// Hook shape; GET features default to `query`, others to `mutation`
    #[serde(default, deserialize_with = "from_str_opt")]
    pub hook: Option<HookKind>,

    /// Example response payload (JSON or JSON5 text)
    pub response: Option<String>,

    /// Response JSON-Schema document
    pub response_schema: Option<String>,

    /// Example variables payload
    pub params: Option<String>,

    /// Variables JSON-Schema document
    pub params_schema: Option<String>,

    /// Envelope wrapper type name, e.g. `WithResponse`
    pub wrapper: Option<String>,
}

impl FeatureConfig {
    pub fn hook_kind(&self) -> HookKind {
        self.hook.unwrap_or(match self.method {
            HttpMethod::Get => HookKind::Query,
            _ => HookKind::Mutation,
        })
    }

    /// Build the [`FeatureSpec`] consumed by the synthesizers.
    pub fn to_spec(&self, name: &str) -> FeatureSpec {
        let mut spec = FeatureSpec::new(name, self.method, &self.url, self.hook_kind());
        spec.response = payload(&self.response, &self.response_schema);
        spec.params = payload(&self.params, &self.params_schema);
        spec.wrapper = self.wrapper.clone().filter(|w| !w.trim().is_empty());
        spec
    }
}

fn payload(example: &Option<String>, schema: &Option<String>) -> Option<PayloadSource> {
    match (example, schema) {
        (_, Some(schema)) => Some(PayloadSource::Schema(schema.clone())),
        (Some(example), None) => Some(PayloadSource::Example(example.clone())),
        (None, None) => None,
    }
}

fn from_str<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(de::Error::custom)
}

fn from_str_opt<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    from_str(deserializer).map(Some)
}
