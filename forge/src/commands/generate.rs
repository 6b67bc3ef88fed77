use std::path::Path;

use clap::Args;
use eyre::Result;

use super::open_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Features to generate (defaults to every feature in hookforge.toml)
    pub features: Vec<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self, config: &Path) -> Result<()> {
        let file = open_manifest(config);
        let report = ops::generate(&file, &self.features, self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
