//! Collaborator abstractions for a target language.
//!
//! This module provides the traits the synthesizers depend on, so that each
//! collaborator can be swapped for an in-memory fake in tests:
//! - [`TypeCompiler`] - JSON sample / JSON-Schema to type declarations
//! - [`SymbolIndex`] - Workspace-wide declaration lookup
//! - [`CompiledModels`] - Output of a multi-root compile

mod traits;

pub use traits::{
    CompiledModels, SchemaSource, SymbolIndex, SymbolKind, SymbolLocation, TypeCompiler,
};
