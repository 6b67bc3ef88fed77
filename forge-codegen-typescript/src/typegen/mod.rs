//! TypeScript type compiler.
//!
//! [`TypeScriptCompiler`] implements the [`TypeCompiler`] collaborator: it
//! infers declarations from example values and translates JSON-Schema
//! documents, always emitting `export`ed interfaces and type aliases.

mod registry;
mod sample;
mod schema;

use hookforge_codegen::{
    Error, Result,
    language::{CompiledModels, SchemaSource, TypeCompiler},
};
use serde_json::Value;

use self::{registry::Registry, schema::SchemaConverter};


/// Built-in TypeScript implementation of [`TypeCompiler`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptCompiler;

impl TypeScriptCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl TypeCompiler for TypeScriptCompiler {
    fn compile_sample(&self, sample: &Value, root: &str) -> Result<String> {
        let mut registry = Registry::new();
        let root = registry.reserve_root(root);
        sample::declare_root(&mut registry, sample, &root);
        Ok(registry.render())
    }

    fn compile_schemas(&self, sources: &[SchemaSource]) -> Result<CompiledModels> {
        let mut registry = Registry::new();

        // Roots keep their exact names, so claim them before any nested type.
        let mut roots = Vec::with_capacity(sources.len());
        for source in sources {
            let doc: Value = serde_json::from_str(&source.schema).map_err(|e| {
                Error::TypeCompile(format!("invalid JSON schema for {}: {}", source.name, e))
            })?;
            roots.push((registry.reserve_root(&source.name), doc));
        }

        let mut converter = SchemaConverter::new(&mut registry);
        for (name, doc) in &roots {
            converter.declare_root(doc, name)?;
        }

        tracing::debug!(roots = sources.len(), "compiled schema roots");
        Ok(CompiledModels {
            text: registry.render(),
            declared: registry.declared(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_compile_sample() {
        let code = TypeScriptCompiler
            .compile_sample(&json!({"id": 1, "name": "Test"}), "GetUserResponse")
            .unwrap();
        assert_eq!(
            code,
            "export interface GetUserResponse {\n  id: number;\n  name: string;\n}"
        );
    }

    #[test]
    fn test_shared_refs_across_roots() {
        let components = json!({
            "schemas": {"User": {"type": "object", "properties": {"id": {"type": "integer"}}}}
        });
        let a = json!({"$ref": "#/components/schemas/User", "components": components});
        let b = json!({
            "type": "array",
            "items": {"$ref": "#/components/schemas/User"},
            "components": components
        });
        let models = TypeScriptCompiler
            .compile_schemas(&[
                SchemaSource::new("GetUserData", a.to_string()),
                SchemaSource::new("ListUsersData", b.to_string()),
            ])
            .unwrap();

        assert_eq!(models.declared, vec!["GetUserData", "ListUsersData", "User"]);
        assert_eq!(models.text.matches("export interface User {").count(), 1);
        assert!(models.text.contains("export type GetUserData = User;"));
        assert!(models.text.contains("export type ListUsersData = User[];"));
    }

    #[test]
    fn test_invalid_schema_text() {
        let err = TypeScriptCompiler
            .compile_schema("{ not json", "Broken")
            .unwrap_err();
        assert!(matches!(err, Error::TypeCompile(_)));
        assert!(err.to_string().starts_with("invalid JSON schema for Broken: "));
    }
}
