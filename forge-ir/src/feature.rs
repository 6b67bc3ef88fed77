//! Feature description consumed by the synthesizers.

use crate::{HookKind, HttpMethod};

/// Where a payload shape comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// Raw example JSON (or JSON5) text.
    Example(String),
    /// JSON-Schema document text.
    Schema(String),
}

impl PayloadSource {
    /// Returns the text if this is a non-blank example.
    pub fn example(&self) -> Option<&str> {
        match self {
            PayloadSource::Example(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }

    /// Returns the text if this is a schema.
    pub fn schema(&self) -> Option<&str> {
        match self {
            PayloadSource::Schema(text) => Some(text),
            PayloadSource::Example(_) => None,
        }
    }
}

/// One named unit of generation: an endpoint plus an interaction kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSpec {
    /// Feature name, source of every generated identifier.
    pub name: String,
    pub method: HttpMethod,
    /// URL template with `{var}` or `${var}` placeholders.
    pub url: String,
    pub hook: HookKind,
    pub response: Option<PayloadSource>,
    pub params: Option<PayloadSource>,
    /// Envelope wrapper type applied around the payload type.
    pub wrapper: Option<String>,
    /// Declarations were emitted by a separate pass; only references are needed.
    pub skip_model_generation: bool,
}

impl FeatureSpec {
    pub fn new(
        name: impl Into<String>,
        method: HttpMethod,
        url: impl Into<String>,
        hook: HookKind,
    ) -> Self {
        Self {
            name: name.into(),
            method,
            url: url.into(),
            hook,
            response: None,
            params: None,
            wrapper: None,
            skip_model_generation: false,
        }
    }

    pub fn with_response(mut self, source: PayloadSource) -> Self {
        self.response = Some(source);
        self
    }

    pub fn with_params(mut self, source: PayloadSource) -> Self {
        self.params = Some(source);
        self
    }

    pub fn with_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.wrapper = Some(wrapper.into());
        self
    }

    pub fn skip_models(mut self) -> Self {
        self.skip_model_generation = true;
        self
    }

    /// Params schema text, if the params were supplied as a schema.
    pub fn params_schema(&self) -> Option<&str> {
        self.params.as_ref().and_then(PayloadSource::schema)
    }
}
