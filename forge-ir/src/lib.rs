//! Intermediate representation types for the hookforge code generator.
//!
//! These types are the contract between the input shells (manifest, OpenAPI
//! normalizer) and the synthesizers.
//!
//! # Architecture
//!
//! ```text
//! hookforge.toml ─┐
//!                 ├→ FeatureSpec → ModelResult → Fragments (model, api, queryKey, hook)
//! OpenAPI ops ────┘
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no TypeScript-specific rendering)
//! - Created fresh per invocation and consumed within it

mod feature;
mod model;
mod operation;
mod types;

pub use feature::{FeatureSpec, PayloadSource};
pub use model::{FragmentKind, Fragments, ModelResult, VariablesType};
pub use operation::{
    Content, MediaType, NormalizedOperation, OperationDescriptor, OperationParameter,
    ParamLocation,
};
pub use types::{HookKind, HttpMethod, ParseKindError};
