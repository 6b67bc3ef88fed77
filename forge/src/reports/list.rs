//! List report data structures.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct FeatureRow {
    pub name: String,
    pub method: String,
    pub url: String,
    pub hook: String,
}

/// Features configured in hookforge.toml.
#[derive(Debug)]
pub struct FeatureListReport {
    pub features: Vec<FeatureRow>,
}

impl Report for FeatureListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.features.is_empty() {
            out.preformatted("No features defined");
            return;
        }

        let name_width = self.features.iter().map(|f| f.name.len()).max().unwrap_or(0);
        let method_width = self.features.iter().map(|f| f.method.len()).max().unwrap_or(0);
        out.section("Features");
        for f in &self.features {
            out.list_item(&format!(
                "{:name_width$}  {:method_width$}  {}  ({})",
                f.name, f.method, f.url, f.hook
            ));
        }
    }
}

/// Operations of an OpenAPI document: `(label, description)`.
#[derive(Debug)]
pub struct OperationListReport {
    pub operations: Vec<(String, String)>,
}

impl Report for OperationListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.operations.is_empty() {
            out.preformatted("No operations found");
            return;
        }

        out.section("Operations");
        for (label, description) in &self.operations {
            if description.is_empty() {
                out.list_item(label);
            } else {
                out.list_item(&format!("{}  {}", label, description));
            }
        }
    }
}
