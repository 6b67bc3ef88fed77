//! TypeScript code generator for hookforge.
//!
//! This crate turns a [`FeatureSpec`](hookforge_ir::FeatureSpec) into four
//! independently appendable fragments targeting
//! [axios](https://axios-http.com/) and
//! [TanStack Query](https://tanstack.com/query):
//!
//! - model declarations (`{Feature}Response`, `{Feature}Variables`, ...)
//! - the accessor issuing the HTTP call
//! - the cache-key factory (`{feature}Key`)
//! - the hook (`use{Feature}`)
//!
//! # Usage
//!
//! ```ignore
//! use hookforge_codegen_typescript::Generator;
//! use hookforge_ir::{FeatureSpec, HookKind, HttpMethod, PayloadSource};
//!
//! let spec = FeatureSpec::new("getUser", HttpMethod::Get, "/v1/user/{id}", HookKind::Query)
//!     .with_response(PayloadSource::Example(r#"{"id": 1}"#.into()));
//! let fragments = Generator::new().generate(&spec)?;
//! ```
//!
//! Batch generation over OpenAPI operations uses [`SharedModelsPhase`] and
//! [`EmitPhase`] inside a [`Pipeline`](hookforge_codegen::pipeline::Pipeline);
//! [`ImportResolver`] computes the imports each fragment needs in its
//! destination file.

pub mod api;
pub mod ast;
pub mod batch;
mod generator;
pub mod hook;
mod index;
pub mod model;
pub mod names;
pub mod query_key;
pub mod resolve;
mod typegen;
pub mod url;

pub use batch::{BatchOutput, DEFAULT_STRIP_PREFIX, EmitPhase, SharedModelsPhase};
pub use generator::{Generator, generate_feature};
pub use index::{FsSymbolIndex, exported_declarations};
pub use names::FeatureNames;
pub use resolve::ImportResolver;
pub use typegen::TypeScriptCompiler;
