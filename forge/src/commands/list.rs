use std::path::Path;

use clap::Args;
use eyre::Result;

use super::open_manifest;
use crate::reports::{FeatureListReport, FeatureRow, Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let file = open_manifest(config);
        let rows = file
            .manifest()
            .features
            .iter()
            .map(|(name, feature)| FeatureRow {
                name: name.clone(),
                method: feature.method.to_string(),
                url: feature.url.clone(),
                hook: feature.hook_kind().to_string(),
            })
            .collect();

        FeatureListReport { features: rows }.render(&mut TerminalOutput::new());
        Ok(())
    }
}
