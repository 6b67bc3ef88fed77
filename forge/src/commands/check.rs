use std::path::Path;

use clap::Args;
use eyre::Result;

use super::open_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self, config: &Path) -> Result<()> {
        let file = open_manifest(config);
        let report = ops::check(&file);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
