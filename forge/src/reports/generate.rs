//! Generate and openapi command report data structures.

use std::path::PathBuf;

use hookforge_ir::FragmentKind;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Pipeline warnings (duplicate names, missing responses).
    pub warnings: Vec<String>,
    /// Names of the generated features, in order.
    pub features: Vec<String>,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Fragments were appended to their destinations.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFragment>),
}

#[derive(Debug, Default)]
pub struct WrittenResult {
    pub appended: Vec<AppendedFile>,
    /// One message per fragment whose sink failed.
    pub failures: Vec<String>,
}

/// One fragment kind appended to a destination.
#[derive(Debug)]
pub struct AppendedFile {
    pub kind: FragmentKind,
    pub path: PathBuf,
    pub imports: usize,
}

/// A fragment in preview mode.
#[derive(Debug)]
pub struct PreviewFragment {
    pub kind: FragmentKind,
    pub path: PathBuf,
    pub content: String,
}

impl GenerateReport {
    /// Whether any sink failed.
    pub fn has_failures(&self) -> bool {
        matches!(&self.result, GenerationResult::Written(w) if !w.failures.is_empty())
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(fragments) => Self::render_preview(out, fragments),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.section(&format!("Generated {}", self.features.join(", ")));
        for file in &written.appended {
            let imports = match file.imports {
                0 => String::new(),
                1 => ", 1 import".to_string(),
                n => format!(", {} imports", n),
            };
            out.added_item(&format!(
                "{} ({}{})",
                file.path.display(),
                file.kind.label(),
                imports
            ));
        }
        if written.appended.is_empty() {
            out.list_item("nothing to write");
        }
        for failure in &written.failures {
            out.warning(failure);
        }
    }

    fn render_preview(out: &mut dyn Output, fragments: &[PreviewFragment]) {
        for fragment in fragments {
            out.divider(&format!("{} → {}", fragment.kind.label(), fragment.path.display()));
            out.preformatted(&fragment.content);
            out.newline();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            warnings: vec!["operation 'ping' has no success response".into()],
            features: vec!["getUser".into(), "ping".into()],
            result: GenerationResult::Written(WrittenResult {
                appended: vec![
                    AppendedFile {
                        kind: FragmentKind::Model,
                        path: PathBuf::from("src/api/models.ts"),
                        imports: 0,
                    },
                    AppendedFile {
                        kind: FragmentKind::Hook,
                        path: PathBuf::from("src/api/hooks.ts"),
                        imports: 3,
                    },
                ],
                failures: vec!["Query Key → src/api/keys.ts: failed to write to 'src/api/keys.ts'".into()],
            }),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(report.has_failures());
        insta::assert_snapshot!(out.text(), @r"
        warning: operation 'ping' has no success response
        Generated getUser, ping:
          + src/api/models.ts (Model/Types)
          + src/api/hooks.ts (Hook, 3 imports)
        warning: Query Key → src/api/keys.ts: failed to write to 'src/api/keys.ts'
        ");
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            warnings: Vec::new(),
            features: vec!["getUser".into()],
            result: GenerationResult::Preview(vec![PreviewFragment {
                kind: FragmentKind::QueryKey,
                path: PathBuf::from("src/api/keys.ts"),
                content: "export const getUserKey = {};".into(),
            }]),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(!report.has_failures());
        assert_eq!(
            out.lines,
            vec!["── Query Key → src/api/keys.ts ──", "export const getUserKey = {};", ""]
        );
    }
}
