//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{
    Manifest,
    validate::{ParseContext, validate_manifest},
};
use crate::{Error, Result};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "hookforge.toml")
    }
}

impl Manifest {
    /// Parse a hookforge.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a hookforge.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = ParseContext::new(content, filename);
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use hookforge_ir::{FragmentKind, HookKind, HttpMethod};

    use super::*;
    use crate::{DEFAULT_OUTPUT, STARTER_MANIFEST};

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest: Manifest = "".parse().unwrap();
        assert_eq!(manifest.output.path(FragmentKind::Hook), Path::new(DEFAULT_OUTPUT));
        assert_eq!(manifest.openapi.strip_prefix, "/api");
        assert_eq!(manifest.workspace.root, PathBuf::from("."));
        assert!(manifest.format.is_none());
        assert!(manifest.features.is_empty());
    }

    #[test]
    fn test_partial_output_defaults_per_key() {
        let manifest: Manifest = "[output]\nmodel = \"src/models.ts\"".parse().unwrap();
        assert_eq!(manifest.output.model, PathBuf::from("src/models.ts"));
        assert_eq!(manifest.output.api, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_starter_manifest_parses() {
        let manifest: Manifest = STARTER_MANIFEST.parse().unwrap();
        let names: Vec<_> = manifest.features.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["getUser", "updateUser"]);

        let specs = manifest.feature_specs();
        assert_eq!(specs[0].method, HttpMethod::Get);
        assert_eq!(specs[0].hook, HookKind::Query);
        assert_eq!(specs[1].hook, HookKind::Mutation);
        assert_eq!(manifest.output.path(FragmentKind::QueryKey), Path::new("src/api/keys.ts"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = "[output]\nmodels = \"x.ts\"".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));

        let err = "[cli]\nname = \"x\"".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_conflicting_payload() {
        let src = r#"
[features.getUser]
method = "GET"
url = "/v1/user"
response = '{"id": 1}'
response_schema = '{"type": "object"}'
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"feature 'getUser' sets both 'response' and 'response_schema'");
        let Error::ConflictingPayload { span: Some(span), .. } = *err else {
            panic!("expected a located ConflictingPayload");
        };
        assert_eq!(span.offset(), src.find("response_schema").unwrap());
    }

    #[test]
    fn test_conflicting_params() {
        let src = "[features.x]\nmethod = \"POST\"\nurl = \"/x\"\nparams_schema = '{}'\nparams = '{}'\n";
        let err = src.parse::<Manifest>().unwrap_err();
        let Error::ConflictingPayload { span: Some(span), second, .. } = *err else {
            panic!("expected a located ConflictingPayload");
        };
        assert_eq!(second, "params_schema");
        assert_eq!(span.offset(), src.find("params =").unwrap());
    }

    #[test]
    fn test_features_keep_declaration_order() {
        let src = "[features.zeta]\nmethod = \"GET\"\nurl = \"/z\"\n\n[features.alpha]\nmethod = \"GET\"\nurl = \"/a\"\n";
        let manifest: Manifest = src.parse().unwrap();
        let names: Vec<_> = manifest.features.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn test_invalid_feature_name() {
        let src = "[features.get-user]\nmethod = \"GET\"\nurl = \"/x\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"invalid feature name 'get-user'");
        let Error::InvalidFeatureName { span: Some(span), .. } = *err else {
            panic!("expected a located InvalidFeatureName");
        };
        assert_eq!(span.offset(), 10);
    }

    #[test]
    fn test_invalid_url() {
        let src = "[features.getUser]\nmethod = \"GET\"\nurl = \"/v1/user/{id\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::InvalidUrl { span: Some(_), .. }));
        assert_eq!(err.to_string(), "url of feature 'getUser' has unbalanced placeholder braces");
    }

    #[test]
    fn test_empty_format_command() {
        let err = "[format]\ncommand = []".parse::<Manifest>().unwrap_err();
        assert_eq!(err.to_string(), "format command must name a program");
    }

    #[test]
    fn test_from_file_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::from_file(dir.path().join("hookforge.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
