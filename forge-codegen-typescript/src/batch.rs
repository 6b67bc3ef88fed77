//! Batch phases: one shared type pass, then per-feature emission.
//!
//! The shared pass declares every response and params root together so that
//! named sub-schemas referenced from several operations are declared once.
//! Emission then runs with `skip_model_generation` and only references those
//! names.

use std::path::{Path, PathBuf};

use hookforge_codegen::{
    Result,
    language::{SchemaSource, TypeCompiler},
    pipeline::{CompilationContext, EmittedFeature, Phase},
};
use hookforge_ir::FragmentKind;
use indexmap::IndexMap;

use crate::{generator::Generator, names::FeatureNames, typegen::TypeScriptCompiler};

/// Gateway marker removed from batch paths unless configured otherwise.
pub const DEFAULT_STRIP_PREFIX: &str = "/api";

/// Declares every response and params schema of the batch in one pass.
pub struct SharedModelsPhase<C = TypeScriptCompiler> {
    compiler: C,
}

impl SharedModelsPhase {
    pub fn new() -> Self {
        Self {
            compiler: TypeScriptCompiler,
        }
    }
}

impl Default for SharedModelsPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TypeCompiler> SharedModelsPhase<C> {
    pub fn with_compiler(compiler: C) -> Self {
        Self { compiler }
    }
}

impl<C: TypeCompiler> Phase for SharedModelsPhase<C> {
    fn name(&self) -> &'static str {
        "shared-models"
    }

    fn description(&self) -> &'static str {
        "Declare every response and params type in one pass"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut sources = Vec::new();
        for op in &ctx.normalized {
            let names = FeatureNames::new(&op.feature_name);
            if let Some(schema) = &op.response_schema {
                sources.push(SchemaSource::new(
                    names.response_root(op.wrapper.is_some()),
                    schema,
                ));
            }
            if let Some(schema) = &op.params_schema {
                sources.push(SchemaSource::new(names.variables(), schema));
            }
        }

        if sources.is_empty() {
            ctx.add_info(self.name(), "no schemas to declare");
            ctx.shared_models = Some(Default::default());
            return Ok(());
        }

        match self.compiler.compile_schemas(&sources) {
            Ok(models) => {
                tracing::debug!(declared = models.declared.len(), "declared shared models");
                ctx.shared_models = Some(models);
            }
            Err(e) => ctx.add_error(self.name(), e.to_string()),
        }
        Ok(())
    }
}

/// Runs the per-feature synthesizers in selection order.
pub struct EmitPhase<C = TypeScriptCompiler> {
    generator: Generator<C>,
    strip_prefix: String,
}

impl EmitPhase {
    pub fn new(strip_prefix: impl Into<String>) -> Self {
        Self {
            generator: Generator::new(),
            strip_prefix: strip_prefix.into(),
        }
    }
}

impl<C: TypeCompiler> EmitPhase<C> {
    pub fn with_compiler(strip_prefix: impl Into<String>, compiler: C) -> Self {
        Self {
            generator: Generator::with_compiler(compiler),
            strip_prefix: strip_prefix.into(),
        }
    }
}

impl<C: TypeCompiler> Phase for EmitPhase<C> {
    fn name(&self) -> &'static str {
        "emit"
    }

    fn description(&self) -> &'static str {
        "Generate accessor, cache key and hook for each operation"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut emitted = Vec::with_capacity(ctx.normalized.len());
        let mut failures = Vec::new();

        for op in &ctx.normalized {
            let spec = op.to_feature_spec(&self.strip_prefix);
            match self.generator.generate(&spec) {
                Ok(fragments) => emitted.push(EmittedFeature {
                    name: spec.name,
                    fragments,
                }),
                Err(e) => failures.push(format!("{}: {}", op.feature_name, e)),
            }
        }

        for failure in failures {
            ctx.add_error(self.name(), failure);
        }
        ctx.emitted = emitted;
        Ok(())
    }
}

/// Text produced by a batch run, grouped by fragment kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutput {
    /// Shared declarations followed by any per-feature fallback declarations.
    pub models: String,
    pub api: Vec<String>,
    pub query_key: Vec<String>,
    pub hook: Vec<String>,
    /// Type names declared in `models`.
    pub declared: Vec<String>,
}

impl BatchOutput {
    /// Collect the shared models and emitted fragments of a finished run.
    pub fn from_context(ctx: &CompilationContext) -> Self {
        let mut output = BatchOutput::default();
        let mut models = Vec::new();

        if let Some(shared) = &ctx.shared_models {
            if !shared.text.trim().is_empty() {
                models.push(shared.text.clone());
            }
            output.declared.extend(shared.declared.iter().cloned());
        }

        for feature in &ctx.emitted {
            for (kind, text) in feature.fragments.iter() {
                match kind {
                    // Only `any` fallbacks reach here; everything else is shared.
                    FragmentKind::Model => {
                        models.push(text.to_string());
                        output.declared.push(FeatureNames::new(&feature.name).response());
                    }
                    FragmentKind::Api => output.api.push(text.to_string()),
                    FragmentKind::QueryKey => output.query_key.push(text.to_string()),
                    FragmentKind::Hook => output.hook.push(text.to_string()),
                }
            }
        }

        output.models = models.join("\n\n");
        output
    }

    /// Fragments of one kind joined for appending; empty when there are none.
    pub fn text(&self, kind: FragmentKind) -> String {
        match kind {
            FragmentKind::Model => self.models.clone(),
            FragmentKind::Api => self.api.join("\n\n"),
            FragmentKind::QueryKey => self.query_key.join("\n\n"),
            FragmentKind::Hook => self.hook.join("\n\n"),
        }
    }

    /// Map every declared model name to the file the models are appended to.
    pub fn known_locations(&self, model_path: &Path) -> IndexMap<String, PathBuf> {
        self.declared
            .iter()
            .map(|name| (name.clone(), model_path.to_path_buf()))
            .collect()
    }
}
