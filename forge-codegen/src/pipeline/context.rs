//! Compilation context passed through pipeline phases.

use hookforge_ir::{Fragments, NormalizedOperation, OperationDescriptor};

use super::diagnostic::{Diagnostic, Severity};
use crate::language::CompiledModels;

/// Fragments emitted for one feature of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFeature {
    pub name: String,
    pub fragments: Fragments,
}

/// Context passed through all pipeline phases.
///
/// This struct carries the state of compilation through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug, Default)]
pub struct CompilationContext {
    /// The selected operations, in selection order.
    pub operations: Vec<OperationDescriptor>,
    /// Normalized operations (populated by the normalize phase).
    pub normalized: Vec<NormalizedOperation>,
    /// Declarations shared by every feature (populated by the models phase).
    pub shared_models: Option<CompiledModels>,
    /// Per-feature fragments (populated by the emit phase).
    pub emitted: Vec<EmittedFeature>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from the selected operations.
    pub fn new(operations: Vec<OperationDescriptor>) -> Self {
        Self {
            operations,
            ..Self::default()
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}
