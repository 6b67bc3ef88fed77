use std::path::{Path, PathBuf};

use crate::SinkError;

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// Content was appended
    Appended,
    /// Nothing to append (blank content)
    Skipped,
}

/// A destination file that generated fragments are appended to.
pub struct File {
    path: PathBuf,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Current content of the file, or an empty string if it does not exist yet.
    pub fn read_existing(&self) -> Result<String, SinkError> {
        if !self.exists() {
            return Ok(String::new());
        }
        std::fs::read_to_string(&self.path).map_err(|source| SinkError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Append `content` to the file, prepending `imports` as a prelude.
    ///
    /// The resulting text is `imports + "\n\n" + existing + "\n\n" + content`,
    /// with the import prelude omitted when `imports` is empty.
    pub fn append_with_imports(
        &self,
        content: &str,
        imports: &[String],
    ) -> Result<WriteResult, SinkError> {
        if content.trim().is_empty() {
            return Ok(WriteResult::Skipped);
        }

        let existing = self.read_existing()?;
        let mut output = String::new();
        if !imports.is_empty() {
            output.push_str(&imports.join("\n"));
            output.push_str("\n\n");
        }
        output.push_str(&existing);
        output.push_str("\n\n");
        output.push_str(content);

        write_file(&self.path, &output)?;
        tracing::debug!(
            path = %self.path.display(),
            imports = imports.len(),
            "appended generated content"
        );
        Ok(WriteResult::Appended)
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), SinkError> {
    let io_err = |source| SinkError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, content).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_append_creates_missing_file_and_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src").join("api").join("hooks.ts");

        let result = File::new(&path)
            .append_with_imports("export const a = 1;", &[])
            .unwrap();

        assert_eq!(result, WriteResult::Appended);
        assert_eq!(fs::read_to_string(&path).unwrap(), "\n\nexport const a = 1;");
    }

    #[test]
    fn test_append_places_imports_before_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requests.ts");
        fs::write(&path, "export const old = 0;").unwrap();

        let imports = vec![
            "import axios from 'axios';".to_string(),
            "import { getInstance } from './client';".to_string(),
        ];
        File::new(&path)
            .append_with_imports("export const fresh = 1;", &imports)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "import axios from 'axios';\nimport { getInstance } from './client';\n\n\
             export const old = 0;\n\nexport const fresh = 1;"
        );
    }

    #[test]
    fn test_append_skips_blank_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("keys.ts");

        let result = File::new(&path).append_with_imports("  \n", &[]).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert!(!path.exists());
    }

    #[test]
    fn test_read_existing_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let file = File::new(temp.path().join("none.ts"));
        assert!(!file.exists());
        assert_eq!(file.read_existing().unwrap(), "");
    }
}
