//! Generate operation - per-feature synthesis from the manifest.

use eyre::{Context, Result, eyre};
use hookforge_codegen_typescript::Generator;
use hookforge_ir::FeatureSpec;
use hookforge_manifest::HookforgeToml;

use super::sink::{Sink, group_by_kind};
use crate::reports::{GenerateReport, GenerationResult};

/// The named features in the given order, or every feature in file order.
pub fn select(file: &HookforgeToml, names: &[String]) -> Result<Vec<FeatureSpec>> {
    let manifest = file.manifest();
    if names.is_empty() {
        return Ok(manifest.feature_specs());
    }
    names
        .iter()
        .map(|name| {
            manifest
                .feature(name)
                .map(|feature| feature.to_spec(name))
                .ok_or_else(|| eyre!("unknown feature '{}' in {}", name, file.path().display()))
        })
        .collect()
}

/// Execute the generate operation.
///
/// Synthesis is all-or-nothing per run: the first failing feature aborts
/// before anything is written.
pub fn generate(file: &HookforgeToml, names: &[String], dry_run: bool) -> Result<GenerateReport> {
    let specs = select(file, names)?;
    if specs.is_empty() {
        return Err(eyre!("no features defined in {}", file.path().display()));
    }

    let generator = Generator::new();
    let fragments = specs
        .iter()
        .map(|spec| {
            generator
                .generate(spec)
                .wrap_err_with(|| format!("failed to generate feature '{}'", spec.name))
        })
        .collect::<Result<Vec<_>>>()?;

    let sections = group_by_kind(&fragments);
    let sink = Sink::new(file);
    let result = if dry_run {
        GenerationResult::Preview(sink.preview(&sections))
    } else {
        GenerationResult::Written(sink.write_all(&sections))
    };

    Ok(GenerateReport {
        warnings: Vec::new(),
        features: specs.into_iter().map(|spec| spec.name).collect(),
        result,
    })
}
