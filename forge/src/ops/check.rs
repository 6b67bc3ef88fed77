//! Check operation - dry synthesis of every feature.

use hookforge_codegen_typescript::Generator;
use hookforge_manifest::HookforgeToml;

use crate::reports::{CheckReport, FeatureCheck};

/// Execute the check operation.
///
/// The manifest itself was validated when it was opened; this synthesizes
/// every feature in memory and records the first error of each.
pub fn check(file: &HookforgeToml) -> CheckReport {
    let generator = Generator::new();
    let features = file
        .manifest()
        .feature_specs()
        .into_iter()
        .map(|spec| {
            let error = generator.generate(&spec).err().map(|e| {
                tracing::debug!(feature = %spec.name, "synthesis failed: {}", e);
                e.to_string()
            });
            FeatureCheck {
                name: spec.name,
                error,
            }
        })
        .collect();

    CheckReport {
        config_path: file.path().to_path_buf(),
        features,
    }
}

#[cfg(test)]
mod tests {
    use hookforge_codegen::testing::temp_workspace;

    use super::*;

    #[test]
    fn test_check_records_failing_features() {
        let manifest = r#"
[features.ok]
method = "GET"
url = "/ok"
response = '{"id": 1}'

[features.broken]
method = "POST"
url = "/broken"
params = '{ invalid json }'
"#;
        let ws = temp_workspace(&[("hookforge.toml", manifest)]).unwrap();
        let file = HookforgeToml::open(ws.path().join("hookforge.toml")).unwrap();

        let report = check(&file);
        assert!(!report.is_valid());
        assert_eq!(report.features.len(), 2);
        assert!(report.features[0].error.is_none());
        let error = report.features[1].error.as_deref().unwrap();
        assert!(error.contains("Invalid JSON: "), "{}", error);
        assert!(!ws.path().join("src/api/generated.ts").exists());
    }

    #[test]
    fn test_check_without_features_is_valid() {
        let ws = temp_workspace(&[("hookforge.toml", "")]).unwrap();
        let file = HookforgeToml::open(ws.path().join("hookforge.toml")).unwrap();
        let report = check(&file);
        assert!(report.is_valid());
        assert!(report.features.is_empty());
    }
}
