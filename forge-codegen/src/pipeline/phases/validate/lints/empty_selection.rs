//! Lint for an empty batch.

use hookforge_ir::NormalizedOperation;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when no operation was selected.
pub struct EmptySelectionLint;

impl Lint for EmptySelectionLint {
    fn name(&self) -> &'static str {
        "empty-selection"
    }

    fn description(&self) -> &'static str {
        "Require at least one selected operation"
    }

    fn check(&self, operations: &mut [NormalizedOperation], diagnostics: &mut Vec<Diagnostic>) {
        if operations.is_empty() {
            diagnostics.push(Diagnostic::error("validate", "no operations selected"));
        }
    }
}
