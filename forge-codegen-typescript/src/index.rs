//! Filesystem-backed [`SymbolIndex`].
//!
//! Scans `.ts`/`.tsx` sources under a workspace root for exported
//! declarations. The scan is line-based: it recognizes `export` followed by a
//! declaration keyword, which is how the project helpers the generated code
//! depends on are written.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use hookforge_codegen::language::{SymbolIndex, SymbolKind, SymbolLocation};
use regex::Regex;
use walkdir::{DirEntry, WalkDir};

/// Directory always skipped, whatever the configured exclusions.
const DEPENDENCY_DIR: &str = "node_modules";

static EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*export\s+(?:declare\s+)?(?:default\s+)?(async\s+function|function|const|let|var|abstract\s+class|class|interface|type|enum)\s*\*?\s*([A-Za-z_$][A-Za-z0-9_$]*)",
    )
    .expect("export pattern is valid")
});

/// Exported declarations of a TypeScript workspace, indexed by name.
#[derive(Debug, Default)]
pub struct FsSymbolIndex {
    symbols: HashMap<String, Vec<SymbolLocation>>,
}

impl FsSymbolIndex {
    /// Scan `root`, skipping `node_modules` and every directory named in `exclude`.
    ///
    /// Unreadable entries are skipped; the index is best-effort.
    pub fn scan(root: impl AsRef<Path>, exclude: &[String]) -> Self {
        let root = root.as_ref();
        let mut index = FsSymbolIndex::default();
        let mut files = 0usize;

        for entry in WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !is_excluded(entry, exclude))
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() || !is_typescript(entry.path()) {
                continue;
            }
            match fs::read_to_string(entry.path()) {
                Ok(source) => {
                    files += 1;
                    index.add_source(entry.path(), &source);
                }
                Err(e) => {
                    tracing::debug!(path = %entry.path().display(), "skipping unreadable file: {}", e)
                }
            }
        }

        tracing::debug!(root = %root.display(), files, symbols = index.len(), "indexed workspace symbols");
        index
    }

    /// Record the exported declarations of one source file.
    pub fn add_source(&mut self, path: &Path, source: &str) {
        for (name, kind) in exported_declarations(source) {
            self.symbols.entry(name.clone()).or_default().push(SymbolLocation {
                name,
                path: path.to_path_buf(),
                kind,
            });
        }
    }

    /// Number of distinct exported names.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Every file declaring `name`.
    pub fn paths_of(&self, name: &str) -> Vec<PathBuf> {
        self.lookup(name).into_iter().map(|l| l.path).collect()
    }
}

impl SymbolIndex for FsSymbolIndex {
    fn lookup(&self, name: &str) -> Vec<SymbolLocation> {
        self.symbols.get(name).cloned().unwrap_or_default()
    }
}

/// Exported declarations of `source`, in source order.
pub fn exported_declarations(source: &str) -> Vec<(String, SymbolKind)> {
    EXPORT
        .captures_iter(source)
        .map(|captures| (captures[2].to_string(), declaration_kind(&captures[1])))
        .collect()
}

fn declaration_kind(keyword: &str) -> SymbolKind {
    match keyword.split_whitespace().last().unwrap_or(keyword) {
        "function" => SymbolKind::Function,
        "const" => SymbolKind::Constant,
        "class" => SymbolKind::Class,
        "interface" => SymbolKind::Interface,
        "type" => SymbolKind::TypeAlias,
        "enum" => SymbolKind::Enum,
        _ => SymbolKind::Variable,
    }
}

fn is_excluded(entry: &DirEntry, exclude: &[String]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let Some(name) = entry.file_name().to_str() else {
        return false;
    };
    name == DEPENDENCY_DIR || exclude.iter().any(|excluded| excluded == name)
}

fn is_typescript(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("ts" | "tsx")
    )
}

#[cfg(test)]
mod tests {
    use hookforge_codegen::testing::temp_workspace;

    use super::*;

    #[test]
    fn test_export_kinds() {
        let mut index = FsSymbolIndex::default();
        index.add_source(
            Path::new("/ws/src/api.ts"),
            "export const getInstance = () => axios;\n\
             export async function refresh() {}\n\
             export type WithResponse<T> = { success: boolean; data: T };\n\
             export interface Page { n: number }\n\
             export default class Client {}\n\
             export let counter = 0;\n\
             export enum Mode { A }\n\
             const hidden = 1;\n",
        );

        let kind = |name: &str| index.lookup(name)[0].kind;
        assert_eq!(kind("getInstance"), SymbolKind::Constant);
        assert_eq!(kind("refresh"), SymbolKind::Function);
        assert_eq!(kind("WithResponse"), SymbolKind::TypeAlias);
        assert_eq!(kind("Page"), SymbolKind::Interface);
        assert_eq!(kind("Client"), SymbolKind::Class);
        assert_eq!(kind("counter"), SymbolKind::Variable);
        assert_eq!(kind("Mode"), SymbolKind::Enum);
        assert!(index.lookup("hidden").is_empty());
    }

    #[test]
    fn test_scan_skips_dependencies_and_exclusions() {
        let ws = temp_workspace(&[
            ("src/api/client.ts", "export const getInstance = () => null;"),
            ("src/ui/snack.tsx", "export function showSnackbarOnApiError() {}"),
            ("node_modules/lib/index.ts", "export const getInstance = 1;"),
            ("dist/client.ts", "export const getInstance = 2;"),
            ("src/readme.md", "export const notCode = 1;"),
        ])
        .unwrap();

        let index = FsSymbolIndex::scan(ws.path(), &["dist".to_string()]);
        assert_eq!(
            index.paths_of("getInstance"),
            vec![ws.path().join("src/api/client.ts")]
        );
        assert_eq!(index.lookup("showSnackbarOnApiError").len(), 1);
        assert!(index.lookup("notCode").is_empty());
        assert_eq!(index.len(), 2);
    }
}
