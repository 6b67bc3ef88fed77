//! Lint for duplicate feature names.

use std::collections::HashSet;

use hookforge_ir::NormalizedOperation;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that renames duplicate feature names with numeric suffixes.
///
/// Two operations deriving the same feature name would otherwise declare the
/// same accessor, hook and type names. The second becomes `name2`, the third
/// `name3`, and so on.
pub struct DuplicateFeatureLint;

impl Lint for DuplicateFeatureLint {
    fn name(&self) -> &'static str {
        "duplicate-feature"
    }

    fn description(&self) -> &'static str {
        "Rename operations that derive the same feature name"
    }

    fn check(&self, operations: &mut [NormalizedOperation], diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashSet<String> = operations
            .iter()
            .map(|op| op.feature_name.clone())
            .collect();
        let mut claimed: HashSet<String> = HashSet::new();

        for op in operations.iter_mut() {
            if claimed.insert(op.feature_name.clone()) {
                continue;
            }

            let base = op.feature_name.clone();
            let mut counter = 2;
            let mut renamed = format!("{}{}", base, counter);
            while seen.contains(&renamed) {
                counter += 1;
                renamed = format!("{}{}", base, counter);
            }
            seen.insert(renamed.clone());
            claimed.insert(renamed.clone());

            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("duplicate feature name '{}' renamed to '{}'", base, renamed),
                )
                .at(format!("{} {}", op.method, op.path)),
            );
            op.feature_name = renamed;
        }
    }
}
