//! Lint for operations without a usable success response.

use hookforge_ir::NormalizedOperation;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when an operation has no JSON 2xx response schema.
///
/// Such operations still generate code, typed with `any`.
pub struct MissingResponseLint;

impl Lint for MissingResponseLint {
    fn name(&self) -> &'static str {
        "missing-response"
    }

    fn description(&self) -> &'static str {
        "Warn about operations whose response type falls back to any"
    }

    fn check(&self, operations: &mut [NormalizedOperation], diagnostics: &mut Vec<Diagnostic>) {
        for op in operations.iter().filter(|op| op.response_schema.is_none()) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!(
                        "'{}' has no success response schema, its response is typed as any",
                        op.feature_name
                    ),
                )
                .at(format!("{} {}", op.method, op.path)),
            );
        }
    }
}
