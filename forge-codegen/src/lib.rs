//! Shared code generation utilities for the hookforge generator.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by language-specific synthesizers (e.g., `hookforge-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (ImportCollector)
//! - [`json`] - Relaxed example parsing with a single repair pass
//! - [`language`] - Collaborator traits (TypeCompiler, SymbolIndex)
//! - [`naming`] - Safe binding names for arbitrary payload keys
//! - [`pipeline`] - Phase-based batch pipeline with lints and plugins
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
mod error;
pub mod generation;
pub mod json;
pub mod language;
pub mod naming;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Artifact, Error, Result};
