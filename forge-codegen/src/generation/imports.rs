//! Import collection utilities.

use indexmap::{IndexMap, IndexSet};

/// Symbols imported from one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleImports {
    /// Default-style import (`import axios from 'axios'`).
    pub default: Option<String>,
    /// Named imports, in insertion order.
    pub named: IndexSet<String>,
}

impl ModuleImports {
    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.named.is_empty()
    }
}

/// Tracks imports and deduplicates them.
///
/// Maintains insertion order of modules and of symbols within a module, so
/// output follows the order symbols were first requested.
///
/// # Example
///
/// ```
/// use hookforge_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("@tanstack/react-query", "useQuery");
/// imports.add_default("axios", "axios");
/// imports.add("axios", "AxiosResponse");
/// imports.add("@tanstack/react-query", "useQuery");
///
/// let modules: Vec<_> = imports.iter().map(|(module, _)| module).collect();
/// assert_eq!(modules, vec!["@tanstack/react-query", "axios"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, ModuleImports>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .named
            .insert(symbol.to_string());
    }

    /// Set the default import of a module.
    pub fn add_default(&mut self, module: &str, symbol: &str) {
        self.imports.entry(module.to_string()).or_default().default = Some(symbol.to_string());
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            let entry = self.imports.entry(module.clone()).or_default();
            if symbols.default.is_some() {
                entry.default = symbols.default.clone();
            }
            entry.named.extend(symbols.named.iter().cloned());
        }
    }

    /// Check if a module is already imported.
    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports.get(module).is_some_and(|symbols| {
            symbols.default.as_deref() == Some(symbol) || symbols.named.contains(symbol)
        })
    }

    /// Iterate over all non-empty module imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModuleImports)> {
        self.imports
            .iter()
            .filter(|(_, symbols)| !symbols.is_empty())
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupes_and_keeps_order() {
        let mut imports = ImportCollector::new();
        imports.add("@tanstack/react-query", "useQuery");
        imports.add("@tanstack/react-query", "QueryFunctionContext");
        imports.add("@tanstack/react-query", "useQuery");

        let (_, symbols) = imports.iter().next().unwrap();
        let named: Vec<_> = symbols.named.iter().map(String::as_str).collect();
        assert_eq!(named, vec!["useQuery", "QueryFunctionContext"]);
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_default_and_named() {
        let mut imports = ImportCollector::new();
        imports.add("axios", "AxiosResponse");
        imports.add_default("axios", "axios");

        assert!(imports.has_symbol("axios", "axios"));
        assert!(imports.has_symbol("axios", "AxiosResponse"));
        assert!(!imports.has_symbol("axios", "AxiosError"));
    }

    #[test]
    fn test_merge() {
        let mut a = ImportCollector::new();
        a.add("./client", "getInstance");
        let mut b = ImportCollector::new();
        b.add("./client", "WithResponse");
        b.add_default("axios", "axios");

        a.merge(&b);

        assert!(a.has_symbol("./client", "getInstance"));
        assert!(a.has_symbol("./client", "WithResponse"));
        assert!(a.has_module("axios"));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_empty_modules_are_skipped() {
        let mut imports = ImportCollector::new();
        assert!(imports.is_empty());
        imports.merge(&ImportCollector::new());
        assert!(imports.is_empty());
    }
}
