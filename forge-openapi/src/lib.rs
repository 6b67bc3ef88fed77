//! OpenAPI support for the hookforge code generator.
//!
//! A [`Document`] is an already-bundled OpenAPI (or Swagger) JSON document.
//! It lists its operations, resolves a user selection to
//! [`OperationDescriptor`](hookforge_ir::OperationDescriptor)s, and the
//! [`Normalizer`] turns each descriptor into the per-feature schemas consumed
//! by batch generation.
//!
//! ```ignore
//! use hookforge_openapi::{Document, NormalizePhase};
//!
//! let document = Document::from_file("openapi.json")?;
//! let selected = document.select(&["GET /users/{id}".to_string()])?;
//! let ctx = Pipeline::new().phase(NormalizePhase::new(&document)).run(selected)?;
//! ```

mod document;
mod enrich;
mod error;
mod normalize;
mod phase;

pub use document::{Document, OperationEntry};
pub use enrich::enrich_titles;
pub use error::{Error, Result};
pub use normalize::{Normalizer, feature_name};
pub use phase::NormalizePhase;
