//! OpenAPI operation - batch generation over a bundled document.

use std::path::PathBuf;

use eyre::{Context, Result};
use hookforge_codegen::pipeline::{Pipeline, TracingPlugin, phases::ValidatePhase};
use hookforge_codegen_typescript::{BatchOutput, EmitPhase, SharedModelsPhase};
use hookforge_ir::FragmentKind;
use hookforge_manifest::HookforgeToml;
use hookforge_openapi::{Document, NormalizePhase};

use super::sink::Sink;
use crate::reports::{GenerateReport, GenerationResult};

/// Options for the openapi operation.
#[derive(Debug, Default)]
pub struct BatchOptions {
    /// Path to the OpenAPI JSON document.
    pub document: PathBuf,
    /// Operation labels (`GET /users`) or operationIds, in order.
    pub selection: Vec<String>,
    /// Select every operation in document order.
    pub all: bool,
    pub dry_run: bool,
}

/// Execute the openapi operation.
pub fn batch(file: &HookforgeToml, document: &Document, opts: &BatchOptions) -> Result<GenerateReport> {
    let operations = if opts.all {
        document.all()
    } else {
        document.select(&opts.selection)?
    };

    let manifest = file.manifest();
    let ctx = Pipeline::new()
        .phase(NormalizePhase::new(document))
        .phase(ValidatePhase::new())
        .phase(SharedModelsPhase::new())
        .phase(EmitPhase::new(manifest.openapi.strip_prefix.as_str()))
        .plugin(TracingPlugin::new())
        .run(operations)
        .wrap_err_with(|| format!("failed to generate from {}", opts.document.display()))?;

    let output = BatchOutput::from_context(&ctx);
    let sections: Vec<_> = FragmentKind::ALL
        .into_iter()
        .map(|kind| (kind, output.text(kind)))
        .collect();

    let sink = Sink::new(file)
        .with_known_locations(output.known_locations(&file.output_path(FragmentKind::Model)));
    let result = if opts.dry_run {
        GenerationResult::Preview(sink.preview(&sections))
    } else {
        GenerationResult::Written(sink.write_all(&sections))
    };

    Ok(GenerateReport {
        warnings: ctx
            .warnings()
            .map(|diag| match &diag.location {
                Some(loc) => format!("{}\n  --> {}", diag.message, loc),
                None => diag.message.clone(),
            })
            .collect(),
        features: ctx.emitted.iter().map(|f| f.name.clone()).collect(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use hookforge_codegen::testing::{read, temp_workspace};

    use super::*;

    const MANIFEST: &str = r#"
[output]
model = "src/api/models.ts"
api = "src/api/requests.ts"
query_key = "src/api/keys.ts"
hook = "src/api/hooks.ts"

[workspace]
root = "src"
"#;

    const DOCUMENT: &str = r##"{
  "openapi": "3.0.3",
  "paths": {
    "/api/v1/users/{id}": {
      "get": {
        "operationId": "getUser",
        "parameters": [{"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}}],
        "responses": {
          "200": {
            "content": {
              "application/json": {
                "schema": {
                  "type": "object",
                  "properties": {
                    "success": {"type": "boolean"},
                    "data": {"$ref": "#/components/schemas/User"}
                  }
                }
              }
            }
          }
        }
      }
    },
    "/api/v1/users": {
      "post": {
        "operationId": "createUser",
        "responses": {"204": {"description": "created"}}
      }
    }
  },
  "components": {
    "schemas": {
      "User": {"type": "object", "properties": {"id": {"type": "integer"}}}
    }
  }
}"##;

    fn setup() -> (tempfile::TempDir, HookforgeToml, Document) {
        let ws = temp_workspace(&[
            ("hookforge.toml", MANIFEST),
            ("src/client.ts", "export const getInstance = () => axios;\n"),
            (
                "src/types.ts",
                "export type WithResponse<T> = { success: boolean; data: T };\n",
            ),
        ])
        .unwrap();
        let file = HookforgeToml::open(ws.path().join("hookforge.toml")).unwrap();
        (ws, file, DOCUMENT.parse().unwrap())
    }

    #[test]
    fn test_batch_writes_shared_models_and_imports() {
        let (ws, file, document) = setup();
        let opts = BatchOptions {
            all: true,
            ..Default::default()
        };
        let report = batch(&file, &document, &opts).unwrap();

        assert_eq!(report.features, vec!["getUser", "createUser"]);
        // createUser has no success body.
        assert_eq!(report.warnings.len(), 1);
        assert!(!report.has_failures());

        let models = read(ws.path(), "src/api/models.ts");
        assert!(models.contains("export interface User {"));
        assert!(models.contains("export type GetUserData = User;"));
        assert!(models.contains("export type CreateUserResponse = any;"));

        let requests = read(ws.path(), "src/api/requests.ts");
        assert!(requests.contains("import { getInstance } from '../client';"));
        assert!(requests.contains("import { WithResponse } from '../types';"));
        assert!(requests.contains("import { GetUserData } from './models';"));
        assert!(requests.contains("getInstance().get(`/v1/users/${id}`"));
    }

    #[test]
    fn test_batch_dry_run_previews_selection() {
        let (ws, file, document) = setup();
        let opts = BatchOptions {
            selection: vec!["GET /api/v1/users/{id}".into()],
            dry_run: true,
            ..Default::default()
        };
        let report = batch(&file, &document, &opts).unwrap();

        let GenerationResult::Preview(fragments) = &report.result else {
            panic!("expected a preview");
        };
        let kinds: Vec<_> = fragments.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, FragmentKind::ALL.to_vec());
        assert!(!ws.path().join("src/api").exists());
    }

    #[test]
    fn test_batch_rejects_empty_selection() {
        let (_ws, file, document) = setup();
        let err = batch(&file, &document, &BatchOptions::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("validate phase failed"), "{:#}", err);
    }
}
