use std::path::{Path, PathBuf};

use hookforge_ir::FragmentKind;

use super::Manifest;
use crate::{Error, Result};

/// A hookforge.toml file with both raw content and parsed manifest.
///
/// Relative paths in the manifest are resolved against the file's directory.
#[derive(Debug)]
pub struct HookforgeToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl HookforgeToml {
    /// Open and parse a hookforge.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let manifest = Manifest::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the manifest.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Resolve a manifest-relative path.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir().join(relative)
    }

    /// Destination of a fragment kind. Absolute paths are kept as-is.
    pub fn output_path(&self, kind: FragmentKind) -> PathBuf {
        self.resolve(self.manifest.output.path(kind))
    }

    /// Root of the sources scanned for project symbols.
    pub fn workspace_root(&self) -> PathBuf {
        self.resolve(&self.manifest.workspace.root)
    }
}
