//! Normalize phase - turns selected operations into feature schemas.

use hookforge_codegen::{
    Result,
    pipeline::{CompilationContext, Phase},
};

use crate::{Document, normalize::Normalizer};

/// Phase that fills [`CompilationContext::normalized`] from the selected operations.
pub struct NormalizePhase<'a> {
    normalizer: Normalizer<'a>,
}

impl<'a> NormalizePhase<'a> {
    /// Normalize against the reusable schemas of `document`.
    pub fn new(document: &'a Document) -> Self {
        Self {
            normalizer: Normalizer::new(document.components(), document.definitions()),
        }
    }
}

impl Phase for NormalizePhase<'_> {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn description(&self) -> &'static str {
        "Derive feature names and response/params schemas"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.normalized = ctx
            .operations
            .iter()
            .map(|op| self.normalizer.normalize(op))
            .collect();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hookforge_codegen::pipeline::{Pipeline, phases::ValidatePhase};

    use super::*;

    const DOCUMENT: &str = r##"{
        "openapi": "3.0.0",
        "paths": {
            "/api/users": {
                "get": {"responses": {"200": {"content": {"application/json": {"schema": {"$ref": "#/components/schemas/User"}}}}}}
            },
            "/api/v2/users": {
                "get": {"responses": {"204": {"description": "gone"}}}
            }
        },
        "components": {"schemas": {"User": {"type": "object"}}}
    }"##;

    #[test]
    fn test_normalizes_selection_in_order() {
        let document: Document = DOCUMENT.parse().unwrap();
        let ctx = Pipeline::new()
            .phase(NormalizePhase::new(&document))
            .phase(ValidatePhase::new())
            .run(document.all())
            .unwrap();

        let names: Vec<_> = ctx.normalized.iter().map(|o| o.feature_name.as_str()).collect();
        assert_eq!(names, vec!["getUsers", "getUsers2"]);
        assert!(ctx.normalized[0].response_schema.as_deref().unwrap().contains("\"components\""));
        assert_eq!(ctx.normalized[1].response_schema, None);
        assert_eq!(ctx.warnings().count(), 2);
        assert!(!ctx.has_errors());
    }
}
