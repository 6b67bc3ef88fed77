//! Parsing and validation of `hookforge.toml` project files.
//!
//! ```ignore
//! let file = HookforgeToml::open("hookforge.toml")?;
//! for spec in file.manifest().feature_specs() {
//!     println!("{} {} {}", spec.name, spec.method, spec.url);
//! }
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod feature;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use feature::FeatureConfig;
pub use manifest::{
    DEFAULT_OUTPUT, FormatConfig, HookforgeToml, Manifest, OpenApiConfig,
    OutputConfig, ParseContext, STARTER_MANIFEST, WorkspaceConfig, parse_manifest,
};
