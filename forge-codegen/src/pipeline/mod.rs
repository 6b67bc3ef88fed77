//! Batch compilation pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that drives several
//! selected operations through code generation together. The pipeline provides:
//!
//! - Explicit phase boundaries (normalize → validate → shared models → emit)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! Phases that need an OpenAPI document or a concrete target language live in
//! the crates that own those concerns; this crate provides the framework and
//! the language-neutral [`phases::ValidatePhase`].
//!
//! # Example
//!
//! ```ignore
//! use hookforge_codegen::pipeline::{Pipeline, TracingPlugin};
//!
//! let ctx = Pipeline::new()
//!     .phase(NormalizePhase::new(&document))
//!     .phase(ValidatePhase::new())
//!     .phase(SharedModelsPhase::new(&compiler))
//!     .phase(EmitPhase::new("/api"))
//!     .plugin(TracingPlugin::new())
//!     .run(selected_operations)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{CompilationContext, EmittedFeature};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::{Plugin, TracingPlugin};
pub use runner::Pipeline;
