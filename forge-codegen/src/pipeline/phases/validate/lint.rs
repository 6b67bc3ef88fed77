//! Lint trait for normalized operations.

use hookforge_ir::NormalizedOperation;

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    /// The lint name.
    pub name: &'static str,
    /// A human-readable description.
    pub description: &'static str,
}

/// A lint that checks normalized operations for issues.
///
/// A lint may repair what it reports (e.g. renaming a duplicate feature), in
/// which case it should report a warning rather than an error.
pub trait Lint {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the operations and add any diagnostics.
    fn check(&self, operations: &mut [NormalizedOperation], diagnostics: &mut Vec<Diagnostic>);

    /// Get information about this lint.
    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
