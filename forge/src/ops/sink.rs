//! Formatting, import resolution and appending of fragments.

use std::path::{Path, PathBuf};

use hookforge_codegen_typescript::{FsSymbolIndex, ImportResolver, exported_declarations};
use hookforge_core::{File, Formatter, SinkError, WriteResult};
use hookforge_ir::FragmentKind;
use hookforge_manifest::HookforgeToml;
use indexmap::IndexMap;

use crate::reports::{AppendedFile, PreviewFragment, WrittenResult};

/// Writes fragment text to the destinations configured in a manifest.
pub struct Sink<'a> {
    file: &'a HookforgeToml,
    formatter: Option<Formatter>,
    resolver: ImportResolver<FsSymbolIndex>,
    known_locations: IndexMap<String, PathBuf>,
}

impl<'a> Sink<'a> {
    /// Scan the manifest's workspace for project symbols.
    pub fn new(file: &'a HookforgeToml) -> Self {
        let manifest = file.manifest();
        let formatter = manifest
            .format
            .as_ref()
            .and_then(|format| Formatter::from_command(&format.command))
            .map(|formatter| formatter.current_dir(file.dir()));
        let index = FsSymbolIndex::scan(file.workspace_root(), &manifest.workspace.exclude);

        Self {
            file,
            formatter,
            resolver: ImportResolver::new(index),
            known_locations: IndexMap::new(),
        }
    }

    /// Resolve these names to the given files before consulting the index.
    pub fn with_known_locations(mut self, locations: IndexMap<String, PathBuf>) -> Self {
        self.known_locations.extend(locations);
        self
    }

    /// Append every section to its destination, continuing past failures.
    ///
    /// Names declared by one section are importable from every other.
    pub fn write_all(&self, sections: &[(FragmentKind, String)]) -> WrittenResult {
        let known = self.generated_locations(sections);
        let mut result = WrittenResult::default();
        for (kind, content) in sections {
            let path = self.file.output_path(*kind);
            match self.append(content, &path, &known) {
                Ok(Some(imports)) => result.appended.push(AppendedFile {
                    kind: *kind,
                    path,
                    imports,
                }),
                Ok(None) => tracing::debug!(kind = kind.label(), "nothing to append"),
                Err(e) => {
                    tracing::warn!(kind = kind.label(), path = %path.display(), "append failed: {}", e);
                    result
                        .failures
                        .push(format!("{} → {}: {}", kind.label(), path.display(), e));
                }
            }
        }
        result
    }

    fn generated_locations(&self, sections: &[(FragmentKind, String)]) -> IndexMap<String, PathBuf> {
        let mut known = self.known_locations.clone();
        for (kind, content) in sections {
            let path = self.file.output_path(*kind);
            for (name, symbol) in exported_declarations(content) {
                if symbol.is_importable() {
                    known.entry(name).or_insert_with(|| path.clone());
                }
            }
        }
        known
    }

    /// Sections with their destinations, unformatted and without imports.
    pub fn preview(&self, sections: &[(FragmentKind, String)]) -> Vec<PreviewFragment> {
        sections
            .iter()
            .filter(|(_, content)| !content.trim().is_empty())
            .map(|(kind, content)| PreviewFragment {
                kind: *kind,
                path: self.file.output_path(*kind),
                content: content.clone(),
            })
            .collect()
    }

    /// Format and append one fragment. Returns the number of imports added,
    /// or `None` when there was nothing to append.
    fn append(
        &self,
        content: &str,
        path: &Path,
        known: &IndexMap<String, PathBuf>,
    ) -> Result<Option<usize>, SinkError> {
        let content = match &self.formatter {
            Some(formatter) => formatter.format_or_original(content),
            None => content.to_string(),
        };

        let file = File::new(path);
        let existing = file.read_existing()?;
        let imports = self
            .resolver
            .imports_for(&content, path, &existing, known);
        match file.append_with_imports(&content, &imports)? {
            WriteResult::Appended => Ok(Some(imports.len())),
            WriteResult::Skipped => Ok(None),
        }
    }
}

/// Join per-feature text of each kind, in fragment order.
pub(crate) fn group_by_kind<'f>(
    fragments: impl IntoIterator<Item = &'f hookforge_ir::Fragments> + Clone,
) -> Vec<(FragmentKind, String)> {
    FragmentKind::ALL
        .into_iter()
        .map(|kind| {
            let text = fragments
                .clone()
                .into_iter()
                .map(|f| f.get(kind))
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n\n");
            (kind, text)
        })
        .collect()
}
