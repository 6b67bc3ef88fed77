//! Language-neutral pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the normalized operations

mod validate;

pub use validate::{
    DuplicateFeatureLint, EmptySelectionLint, Lint, MissingResponseLint, ValidatePhase,
};
