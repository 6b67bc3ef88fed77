//! Manifest types and parsing for hookforge.toml files.

mod file;
mod parse;
mod starter;
mod validate;

use std::path::{Path, PathBuf};

pub use file::HookforgeToml;
use hookforge_ir::{FeatureSpec, FragmentKind};
use indexmap::IndexMap;
pub use parse::parse_manifest;
use serde::Deserialize;
pub use starter::STARTER_MANIFEST;
pub use validate::ParseContext;

use crate::FeatureConfig;

/// Destination of every fragment kind when `[output]` leaves it unset.
pub const DEFAULT_OUTPUT: &str = "src/api/generated.ts";

/// Root manifest for hookforge.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub openapi: OpenApiConfig,

    /// External pretty-printer; no formatting when absent
    pub format: Option<FormatConfig>,

    #[serde(default)]
    pub workspace: WorkspaceConfig,

    /// Features in file order
    #[serde(default)]
    pub features: IndexMap<String, FeatureConfig>,
}

impl Manifest {
    pub fn feature(&self, name: &str) -> Option<&FeatureConfig> {
        self.features.get(name)
    }

    /// Specs of every feature, in file order.
    pub fn feature_specs(&self) -> Vec<FeatureSpec> {
        self.features
            .iter()
            .map(|(name, feature)| feature.to_spec(name))
            .collect()
    }
}

/// `[output]`: destination file per fragment kind, relative to the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output")]
    pub model: PathBuf,
    #[serde(default = "default_output")]
    pub api: PathBuf,
    #[serde(default = "default_output")]
    pub query_key: PathBuf,
    #[serde(default = "default_output")]
    pub hook: PathBuf,
}

impl OutputConfig {
    pub fn path(&self, kind: FragmentKind) -> &Path {
        match kind {
            FragmentKind::Model => &self.model,
            FragmentKind::Api => &self.api,
            FragmentKind::QueryKey => &self.query_key,
            FragmentKind::Hook => &self.hook,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            model: default_output(),
            api: default_output(),
            query_key: default_output(),
            hook: default_output(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

/// `[openapi]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpenApiConfig {
    /// Gateway marker removed from the front of batch paths
    #[serde(default = "default_strip_prefix")]
    pub strip_prefix: String,
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self {
            strip_prefix: default_strip_prefix(),
        }
    }
}

fn default_strip_prefix() -> String {
    "/api".to_string()
}

/// `[format]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Program and arguments; source is piped through stdin
    pub command: Vec<String>,
}

/// `[workspace]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Root of the TypeScript sources scanned for project symbols
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Directory names skipped while scanning (node_modules always is)
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: Vec::new(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}
