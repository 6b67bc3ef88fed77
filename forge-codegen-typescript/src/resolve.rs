//! Import resolution for appended fragments.
//!
//! Library symbols come from a fixed table. Project symbols are looked up in
//! the caller-supplied known locations first, then in the workspace
//! [`SymbolIndex`]. A symbol already named inside an `import` of the
//! destination is never imported again, and nothing is imported from the
//! destination itself.

use std::{
    path::{Component, Path, PathBuf},
    sync::LazyLock,
};

use hookforge_codegen::{generation::ImportCollector, language::SymbolIndex};
use indexmap::{IndexMap, IndexSet};
use regex::Regex;

use crate::ast::Import;

/// External symbols and the module providing each, in import order.
pub const LIBRARY_IMPORTS: &[(&str, &str)] = &[
    ("useQuery", "@tanstack/react-query"),
    ("useMutation", "@tanstack/react-query"),
    ("useInfiniteQuery", "@tanstack/react-query"),
    ("UseQueryOptions", "@tanstack/react-query"),
    ("QueryFunctionContext", "@tanstack/react-query"),
    ("AxiosResponse", "axios"),
    ("AxiosError", "axios"),
    ("axios", "axios"),
];

/// Symbols imported with the default-import form.
const DEFAULT_IMPORTS: &[&str] = &["axios"];

/// Project-level helpers the generated code expects somewhere in the workspace.
pub const PROJECT_SYMBOLS: &[&str] = &[
    "getInstance",
    "WithResponse",
    "WithCustomRecordResponse",
    "WithRecordResponse",
    "useInvalidateCommonQueries",
    "showSnackbarOnApiError",
];

static IMPORT_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"import\s+[\s\S]*?\bfrom\b").expect("import pattern is valid")
});

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_$][A-Za-z0-9_$]*").expect("identifier pattern is valid"));

/// Computes the import statements a fragment needs in its destination.
#[derive(Debug)]
pub struct ImportResolver<I> {
    index: I,
}

impl<I: SymbolIndex> ImportResolver<I> {
    pub fn new(index: I) -> Self {
        Self { index }
    }

    /// Import statements to prepend to `destination` before appending `content`.
    ///
    /// `existing` is the destination's current text. Library imports come
    /// first, in table order, then project imports.
    pub fn imports_for(
        &self,
        content: &str,
        destination: &Path,
        existing: &str,
        known_locations: &IndexMap<String, PathBuf>,
    ) -> Vec<String> {
        let used = identifiers(content);
        let imported = imported_identifiers(existing);
        let needed = |symbol: &str| {
            used.iter().any(|u| *u == symbol) && !imported.iter().any(|i| *i == symbol)
        };

        let mut libraries = ImportCollector::new();
        for (symbol, module) in LIBRARY_IMPORTS {
            if !needed(*symbol) {
                continue;
            }
            if DEFAULT_IMPORTS.contains(symbol) {
                libraries.add_default(module, symbol);
            } else {
                libraries.add(module, symbol);
            }
        }

        let mut statements: Vec<String> = libraries
            .iter()
            .map(|(module, symbols)| {
                let mut import = Import::new(module).named_all(symbols.named.iter().cloned());
                if let Some(default) = &symbols.default {
                    import = import.default(default);
                }
                import.statement()
            })
            .collect();

        let project = PROJECT_SYMBOLS
            .iter()
            .map(|s| s.to_string())
            .chain(known_locations.keys().cloned())
            .collect::<IndexSet<_>>();
        for symbol in project {
            if !needed(symbol.as_str()) {
                continue;
            }
            let Some(location) = self.locate(&symbol, known_locations) else {
                tracing::debug!(%symbol, "no declaration found, leaving unresolved");
                continue;
            };
            if location == destination {
                continue;
            }
            let specifier = relative_specifier(destination, &location);
            statements.push(Import::new(specifier).named(&symbol).statement());
        }

        statements
    }

    fn locate(&self, symbol: &str, known_locations: &IndexMap<String, PathBuf>) -> Option<PathBuf> {
        if let Some(path) = known_locations.get(symbol) {
            return Some(path.clone());
        }
        self.index
            .lookup(symbol)
            .into_iter()
            .find(|location| {
                location.name == symbol
                    && location.kind.is_importable()
                    && !location
                        .path
                        .components()
                        .any(|c| c.as_os_str() == "node_modules")
            })
            .map(|location| location.path)
    }
}

/// Every identifier-like word in `text`.
fn identifiers(text: &str) -> Vec<&str> {
    IDENTIFIER.find_iter(text).map(|m| m.as_str()).collect()
}

/// Every identifier mentioned between `import` and `from`.
fn imported_identifiers(existing: &str) -> Vec<&str> {
    IMPORT_STATEMENT
        .find_iter(existing)
        .flat_map(|m| identifiers(m.as_str()))
        .collect()
}

/// Module specifier for `target` as seen from the file `from`.
///
/// The result always starts with `.`, uses `/` separators and has the
/// script extension removed.
pub fn relative_specifier(from: &Path, target: &Path) -> String {
    let base: Vec<Component> = from.parent().map(|p| p.components().collect()).unwrap_or_default();
    let target_parts: Vec<Component> = target.components().collect();

    let common = base
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_string(); base.len() - common];
    parts.extend(
        target_parts[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    let mut specifier = parts.join("/");
    if !specifier.starts_with('.') {
        specifier = format!("./{}", specifier);
    }
    strip_script_extension(&specifier).to_string()
}

fn strip_script_extension(specifier: &str) -> &str {
    for ext in [".d.ts", ".tsx", ".ts", ".jsx", ".js"] {
        if let Some(stripped) = specifier.strip_suffix(ext) {
            return stripped;
        }
    }
    specifier
}
