//! Collaborator traits used by the synthesizers.

use std::path::PathBuf;

use serde_json::Value;

use crate::Result;

/// A named JSON-Schema root for a multi-root compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSource {
    /// Root type name (e.g. `GetUserResponse`).
    pub name: String,
    /// Schema document text.
    pub schema: String,
}

impl SchemaSource {
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
        }
    }
}

/// Declarations produced by one compile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledModels {
    /// Declaration text, ready to append.
    pub text: String,
    /// Every type name declared in `text`, in declaration order.
    pub declared: Vec<String>,
}

/// Turns example values and JSON-Schema documents into type declarations.
///
/// Implementations are pure: the same input always yields the same text.
pub trait TypeCompiler {
    /// Declarations for the type inferred from a sample value, rooted at `root`.
    fn compile_sample(&self, sample: &Value, root: &str) -> Result<String>;

    /// Declarations for a JSON-Schema document, rooted at `root`.
    ///
    /// `components`/`definitions` embedded in the document resolve `$ref`s.
    fn compile_schema(&self, schema: &str, root: &str) -> Result<String> {
        self.compile_schemas(&[SchemaSource::new(root, schema)])
            .map(|models| models.text)
    }

    /// Declarations for several roots sharing one pass, so that named
    /// sub-schemas referenced from several roots are declared once.
    fn compile_schemas(&self, sources: &[SchemaSource]) -> Result<CompiledModels>;
}

impl<T: TypeCompiler + ?Sized> TypeCompiler for &T {
    fn compile_sample(&self, sample: &Value, root: &str) -> Result<String> {
        (*self).compile_sample(sample, root)
    }

    fn compile_schema(&self, schema: &str, root: &str) -> Result<String> {
        (*self).compile_schema(schema, root)
    }

    fn compile_schemas(&self, sources: &[SchemaSource]) -> Result<CompiledModels> {
        (*self).compile_schemas(sources)
    }
}

/// Kind of a declaration found by a [`SymbolIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Constant,
    Variable,
    Class,
    Interface,
    TypeAlias,
    Enum,
}

impl SymbolKind {
    /// Returns true if declarations of this kind are auto-imported.
    ///
    /// Type aliases count as variables here, which is how editor symbol
    /// providers report them.
    pub fn is_importable(&self) -> bool {
        matches!(
            self,
            SymbolKind::Function
                | SymbolKind::Constant
                | SymbolKind::Interface
                | SymbolKind::Variable
                | SymbolKind::Class
                | SymbolKind::TypeAlias
        )
    }
}

/// Where a symbol is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolLocation {
    pub name: String,
    pub path: PathBuf,
    pub kind: SymbolKind,
}

/// Workspace-wide symbol lookup.
pub trait SymbolIndex {
    /// Every declaration matching `name`. Implementations may return inexact
    /// matches; callers filter on exact name, kind and location.
    fn lookup(&self, name: &str) -> Vec<SymbolLocation>;
}

impl<T: SymbolIndex + ?Sized> SymbolIndex for &T {
    fn lookup(&self, name: &str) -> Vec<SymbolLocation> {
        (*self).lookup(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importable_kinds() {
        assert!(SymbolKind::Function.is_importable());
        assert!(SymbolKind::Interface.is_importable());
        assert!(SymbolKind::TypeAlias.is_importable());
        assert!(!SymbolKind::Enum.is_importable());
    }
}
