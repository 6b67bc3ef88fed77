//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::RefCell,
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{
    Result,
    language::{CompiledModels, SchemaSource, SymbolIndex, SymbolKind, SymbolLocation, TypeCompiler},
};

/// In-memory [`SymbolIndex`] with a fixed set of declarations.
#[derive(Debug, Default)]
pub struct StaticSymbolIndex {
    symbols: HashMap<String, Vec<SymbolLocation>>,
}

impl StaticSymbolIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` in `path` with the given kind.
    pub fn with(mut self, name: &str, path: impl Into<PathBuf>, kind: SymbolKind) -> Self {
        self.symbols
            .entry(name.to_string())
            .or_default()
            .push(SymbolLocation {
                name: name.to_string(),
                path: path.into(),
                kind,
            });
        self
    }
}

impl SymbolIndex for StaticSymbolIndex {
    fn lookup(&self, name: &str) -> Vec<SymbolLocation> {
        self.symbols.get(name).cloned().unwrap_or_default()
    }
}

/// [`TypeCompiler`] that declares every root as `unknown` and records calls.
#[derive(Debug, Default)]
pub struct StubCompiler {
    calls: RefCell<Vec<String>>,
}

impl StubCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root names requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn declare(&self, root: &str) -> String {
        self.calls.borrow_mut().push(root.to_string());
        format!("export type {} = unknown;", root)
    }
}

impl TypeCompiler for StubCompiler {
    fn compile_sample(&self, _sample: &Value, root: &str) -> Result<String> {
        Ok(self.declare(root))
    }

    fn compile_schemas(&self, sources: &[SchemaSource]) -> Result<CompiledModels> {
        let text = sources
            .iter()
            .map(|source| self.declare(&source.name))
            .collect::<Vec<_>>()
            .join("\n\n");
        Ok(CompiledModels {
            text,
            declared: sources.iter().map(|s| s.name.clone()).collect(),
        })
    }
}

/// Create a temporary directory populated with `files` (relative path, content).
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn temp_workspace(files: &[(&str, &str)]) -> std::io::Result<tempfile::TempDir> {
    let temp_dir = tempfile::TempDir::new()?;
    for (relative, content) in files {
        let path = temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
    }
    Ok(temp_dir)
}

/// Read a file below `root`, panicking with the path on failure.
pub fn read(root: &Path, relative: &str) -> String {
    let path = root.join(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}
