//! Built-in lints for normalized operations.

mod duplicate_feature;
mod empty_selection;
mod missing_response;

pub use duplicate_feature::DuplicateFeatureLint;
pub use empty_selection::EmptySelectionLint;
pub use missing_response::MissingResponseLint;
