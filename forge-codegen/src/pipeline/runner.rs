//! Pipeline orchestrator.

use hookforge_ir::OperationDescriptor;

use super::{CompilationContext, Phase, Plugin};
use crate::{Error, Result};

/// Runs phases in order over one [`CompilationContext`].
///
/// The pipeline stops at the first phase that returns an error or leaves
/// error diagnostics behind. Warnings never stop it.
pub struct Pipeline<'a> {
    phases: Vec<Box<dyn Phase + 'a>>,
    plugins: Vec<Box<dyn Plugin + 'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Append a phase.
    pub fn phase(mut self, phase: impl Phase + 'a) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Register a plugin.
    pub fn plugin(mut self, plugin: impl Plugin + 'a) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Names of the registered phases, in execution order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        self.phases.iter().map(|p| p.name()).collect()
    }

    /// Run every phase over the selected operations.
    pub fn run(&self, operations: Vec<OperationDescriptor>) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(operations);

        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        if ctx.has_errors() {
            let message = ctx
                .errors()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(Error::Pipeline {
                phase: phase_name.to_string(),
                message,
            });
        }

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline<'_> {
    fn default() -> Self {
        Self::new()
    }
}
