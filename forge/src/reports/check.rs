//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Synthesis outcome of one feature.
#[derive(Debug)]
pub struct FeatureCheck {
    pub name: String,
    /// First synthesis error, if any.
    pub error: Option<String>,
}

/// Report data from manifest validation and dry synthesis.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub features: Vec<FeatureCheck>,
}

impl CheckReport {
    /// Whether every feature synthesized.
    pub fn is_valid(&self) -> bool {
        self.features.iter().all(|f| f.error.is_none())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let failed: Vec<_> = self
            .features
            .iter()
            .filter_map(|f| f.error.as_ref().map(|e| (&f.name, e)))
            .collect();

        for (name, error) in &failed {
            out.warning(&format!("error: feature '{}': {}", name, error));
        }
        if !failed.is_empty() {
            out.newline();
            return;
        }

        let count = self.features.len();
        out.preformatted(&format!(
            "✓ {} is valid ({} feature{})",
            self.config_path.display(),
            count,
            if count == 1 { "" } else { "s" }
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_failures() {
        let report = CheckReport {
            config_path: PathBuf::from("hookforge.toml"),
            features: vec![
                FeatureCheck {
                    name: "getUser".into(),
                    error: None,
                },
                FeatureCheck {
                    name: "broken".into(),
                    error: Some("failed to parse response example: Invalid JSON".into()),
                },
            ],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(!report.is_valid());
        assert_eq!(
            out.lines,
            vec![
                "warning: error: feature 'broken': failed to parse response example: Invalid JSON",
                "",
            ]
        );
    }

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            config_path: PathBuf::from("hookforge.toml"),
            features: vec![FeatureCheck {
                name: "getUser".into(),
                error: None,
            }],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.text(), "✓ hookforge.toml is valid (1 feature)");
    }
}
