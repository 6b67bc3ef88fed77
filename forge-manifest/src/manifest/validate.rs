//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use super::Manifest;
use crate::{FeatureConfig, Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source content, filename and current table path, so nested
/// checks can locate the keys they complain about.
///
/// ```ignore
/// let ctx = ParseContext::new(src, "hookforge.toml");
/// ctx.push("features").push("getUser").key_span("url");
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Shared across nested contexts
    source: Arc<SourceContext>,
    /// Table path, e.g. ["features", "getUser"]
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Current table path joined with dots.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Span of the current table's name, e.g. `getUser` in `[features.getUser]`.
    pub fn name_span(&self) -> Option<SourceSpan> {
        let name = self.path.last()?;
        let header = format!("[{}]", self.path_string());
        let start = self.src().find(&header)? + header.len() - 1 - name.len();
        Some(SourceSpan::from((start, name.len())))
    }

    /// Span of `key` inside the current table.
    pub fn key_span(&self, key: &str) -> Option<SourceSpan> {
        let src = self.src();
        let header = format!("[{}]", self.path_string());
        let body_start = src.find(&header)? + header.len();
        let body_end = src[body_start..]
            .find("\n[")
            .map_or(src.len(), |pos| body_start + pos);

        let mut offset = body_start;
        for line in src[body_start..body_end].split_inclusive('\n') {
            let trimmed = line.trim_start();
            let indent = line.len() - trimmed.len();
            if let Some(rest) = trimmed.strip_prefix(key) {
                if rest.trim_start().starts_with('=') {
                    return Some(SourceSpan::from((offset + indent, key.len())));
                }
            }
            offset += line.len();
        }
        None
    }

    /// Span of the value of `key` inside the current table.
    pub fn value_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        let key_span = self.key_span(key)?;
        let from = key_span.offset() + key_span.len();
        let start = from + self.src()[from..].find(value)?;
        Some(SourceSpan::from((start, value.len())))
    }

    /// Validate that a name is usable as a feature name.
    pub fn validate_feature_name(&self, name: &str) -> Result<()> {
        match invalid_feature_name(name) {
            Some(reason) => Err(self.source.invalid_feature_name_error(
                name,
                reason,
                self.name_span(),
            )),
            None => Ok(()),
        }
    }

    /// Validate one `[features.<name>]` table. The context must point at it.
    pub fn validate_feature(&self, name: &str, feature: &FeatureConfig) -> Result<()> {
        self.validate_feature_name(name)?;

        let pairs = [
            ("response", "response_schema", feature.response.is_some() && feature.response_schema.is_some()),
            ("params", "params_schema", feature.params.is_some() && feature.params_schema.is_some()),
        ];
        for (first, second, conflict) in pairs {
            if conflict {
                let span = self.later_key_span(first, second);
                return Err(self.source.conflicting_payload_error(name, first, second, span));
            }
        }

        if !placeholders_balanced(&feature.url) {
            return Err(self.source.invalid_url_error(
                name,
                &feature.url,
                self.value_span("url", &feature.url),
            ));
        }
        Ok(())
    }

    /// Span of whichever of the two keys appears second.
    fn later_key_span(&self, a: &str, b: &str) -> Option<SourceSpan> {
        match (self.key_span(a), self.key_span(b)) {
            (Some(a), Some(b)) => Some(if a.offset() > b.offset() { a } else { b }),
            (a, b) => b.or(a),
        }
    }
}

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest<'a>(manifest: &'a Manifest, ctx: &ParseContext<'a>) -> Result<()> {
    if let Some(format) = &manifest.format {
        if format.command.first().is_none_or(|program| program.trim().is_empty()) {
            let span = ctx.push("format").key_span("command");
            return Err(ctx
                .source_context()
                .validation_error_at("format command must name a program", span));
        }
    }

    let features = ctx.push("features");
    for (name, feature) in &manifest.features {
        features.push(name).validate_feature(name, feature)?;
    }
    Ok(())
}

/// Returns the reason `name` cannot be a feature name, if any.
pub(crate) fn invalid_feature_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_digit() => return Some("name must not start with a number"),
        Some(_) => {}
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }
    None
}

/// Every `{` closes before the next one opens, and no `}` is unmatched.
pub(crate) fn placeholders_balanced(url: &str) -> bool {
    let mut open = false;
    for c in url.chars() {
        match c {
            '{' if open => return false,
            '{' => open = true,
            '}' if !open => return false,
            '}' => open = false,
            _ => {}
        }
    }
    !open
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = r#"[output]
model = "src/models.ts"

[features.getUser]
method = "GET"
url = "/v1/user/{id"
response = '{}'
  response_schema = '{}'

[features.other]
url = "/x"
"#;

    #[test]
    fn test_feature_names() {
        assert!(invalid_feature_name("getUser").is_none());
        assert!(invalid_feature_name("get_user_2").is_none());
        assert!(invalid_feature_name("_private").is_none());
        assert!(invalid_feature_name("2fa").is_some());
        assert!(invalid_feature_name("get-user").is_some());
        assert!(invalid_feature_name("get.user").is_some());
        assert!(invalid_feature_name("").is_some());
    }

    #[test]
    fn test_placeholders_balanced() {
        assert!(placeholders_balanced("/v1/user/{id}/posts/${postId}"));
        assert!(placeholders_balanced("/v1/users"));
        assert!(!placeholders_balanced("/v1/user/{id"));
        assert!(!placeholders_balanced("/v1/user/id}"));
        assert!(!placeholders_balanced("/v1/{a{b}}"));
    }

    #[test]
    fn test_key_span_stays_inside_table() {
        let ctx = ParseContext::new(SRC, "hookforge.toml");
        let feature = ctx.push("features").push("getUser");

        let span = feature.key_span("url").unwrap();
        assert_eq!(&SRC[span.offset()..span.offset() + span.len()], "url");
        assert!(span.offset() < SRC.find("[features.other]").unwrap());

        let span = feature.key_span("response_schema").unwrap();
        assert_eq!(span.offset(), SRC.find("response_schema").unwrap());
        assert!(feature.key_span("wrapper").is_none());
    }

    #[test]
    fn test_name_and_value_spans() {
        let ctx = ParseContext::new(SRC, "hookforge.toml");
        let feature = ctx.push("features").push("getUser");

        let span = feature.name_span().unwrap();
        assert_eq!(&SRC[span.offset()..span.offset() + span.len()], "getUser");

        let span = feature.value_span("url", "/v1/user/{id").unwrap();
        assert_eq!(span.offset(), SRC.find("/v1/user/{id").unwrap());
    }

    #[test]
    fn test_later_key_is_blamed() {
        let ctx = ParseContext::new(SRC, "hookforge.toml");
        let feature = ctx.push("features").push("getUser");
        let span = feature.later_key_span("response", "response_schema").unwrap();
        assert_eq!(span.offset(), SRC.find("response_schema").unwrap());
    }

    #[test]
    fn test_context_path() {
        let ctx = ParseContext::new("", "hookforge.toml");
        assert_eq!(ctx.path_string(), "");
        assert_eq!(ctx.push("features").push("getUser").path_string(), "features.getUser");
        assert_eq!(ctx.filename(), "hookforge.toml");
    }
}
