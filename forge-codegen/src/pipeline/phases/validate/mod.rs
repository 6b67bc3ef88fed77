//! Validate phase - runs lints on the normalized operations.

mod lint;
pub mod lints;

pub use lint::{Lint, LintInfo};
pub use lints::{DuplicateFeatureLint, EmptySelectionLint, MissingResponseLint};

use crate::{
    Result,
    pipeline::{CompilationContext, Phase},
};

/// Phase that validates normalized operations using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(EmptySelectionLint),
                Box::new(DuplicateFeatureLint),
                Box::new(MissingResponseLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check normalized operations and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&mut ctx.normalized, &mut ctx.diagnostics);
        }
        Ok(())
    }
}
