//! Per-feature generation: models, accessor, cache key and hook.

use hookforge_codegen::{Result, language::TypeCompiler};
use hookforge_ir::{FeatureSpec, Fragments, ModelResult};

use crate::{
    api::generate_accessor, hook::generate_hook, model::synthesize_models, names::FeatureNames,
    query_key::generate_query_key, typegen::TypeScriptCompiler,
};

/// Generates the four fragments of a feature.
///
/// Generation is all-or-nothing: any synthesis failure aborts before a
/// fragment is produced.
#[derive(Debug, Clone, Default)]
pub struct Generator<C = TypeScriptCompiler> {
    compiler: C,
}

impl Generator {
    /// A generator using the built-in TypeScript type compiler.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: TypeCompiler> Generator<C> {
    pub fn with_compiler(compiler: C) -> Self {
        Self { compiler }
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Generate every fragment of `spec`.
    pub fn generate(&self, spec: &FeatureSpec) -> Result<Fragments> {
        self.generate_with_model(spec).map(|(_, fragments)| fragments)
    }

    /// Generate every fragment of `spec`, also returning the synthesized model.
    pub fn generate_with_model(&self, spec: &FeatureSpec) -> Result<(ModelResult, Fragments)> {
        let names = FeatureNames::new(&spec.name);
        let model = synthesize_models(spec, &names, &self.compiler)?;

        tracing::debug!(feature = %spec.name, hook = %spec.hook, "generating fragments");
        let fragments = Fragments {
            model: model_fragment(&model),
            api: generate_accessor(spec, &model, &names),
            query_key: generate_query_key(spec, &model, &names),
            hook: generate_hook(spec, &model, &names),
        };
        Ok((model, fragments))
    }
}

/// Generate every fragment of `spec` with the given type compiler.
pub fn generate_feature(spec: &FeatureSpec, compiler: &impl TypeCompiler) -> Result<Fragments> {
    Generator::with_compiler(compiler).generate(spec)
}

/// Variables declaration then response declaration, skipping empty ones.
fn model_fragment(model: &ModelResult) -> String {
    [
        model.variables_definition.as_str(),
        model.response_model.as_str(),
    ]
    .into_iter()
    .filter(|text| !text.trim().is_empty())
    .collect::<Vec<_>>()
    .join("\n\n")
}
