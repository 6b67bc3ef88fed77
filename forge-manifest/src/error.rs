use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// ```ignore
/// let ctx = SourceContext::new(content, "hookforge.toml");
/// ctx.validation_error("format command must not be empty");
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn conflicting_payload_error(
        &self,
        feature: impl Into<String>,
        first: &'static str,
        second: &'static str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ConflictingPayload {
            src: self.named_source(),
            span,
            feature: feature.into(),
            first,
            second,
        })
    }

    pub fn invalid_feature_name_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidFeatureName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }

    pub fn invalid_url_error(
        &self,
        feature: impl Into<String>,
        url: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidUrl {
            src: self.named_source(),
            span,
            feature: feature.into(),
            url: url.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", path.display())]
    #[diagnostic(help("run 'hookforge init' to create a hookforge.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse hookforge.toml")]
    #[diagnostic(code(hookforge::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(hookforge::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("feature '{feature}' sets both '{first}' and '{second}'")]
    #[diagnostic(
        code(hookforge::conflicting_payload),
        help("keep either the example ('{first}') or the schema, not both")
    )]
    ConflictingPayload {
        #[source_code]
        src: NamedSource<String>,
        #[label("conflicts with '{first}'")]
        span: Option<SourceSpan>,
        feature: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("invalid feature name '{name}'")]
    #[diagnostic(
        code(hookforge::invalid_feature_name),
        help("{reason}. Use only letters, numbers, and underscores, not starting with a number.")
    )]
    InvalidFeatureName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid feature name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("url of feature '{feature}' has unbalanced placeholder braces")]
    #[diagnostic(
        code(hookforge::invalid_url),
        help("close every '{{' in '{url}', e.g. '/v1/users/{{id}}'")
    )]
    InvalidUrl {
        #[source_code]
        src: NamedSource<String>,
        #[label("unbalanced braces")]
        span: Option<SourceSpan>,
        feature: String,
        url: String,
    },
}
