use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use hookforge_openapi::Document;

use super::open_manifest;
use crate::{
    ops::{self, BatchOptions},
    reports::{OperationListReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct OpenApiCommand {
    /// Bundled OpenAPI JSON document
    pub document: PathBuf,

    /// Operations to generate, as `METHOD /path` or operationId
    #[arg(
        short,
        long = "select",
        value_name = "OPERATION",
        required_unless_present_any = ["all", "list"]
    )]
    pub select: Vec<String>,

    /// Generate every operation in the document
    #[arg(long, conflicts_with = "select")]
    pub all: bool,

    /// List the document's operations and exit
    #[arg(long, conflicts_with_all = ["select", "all", "dry_run"])]
    pub list: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl OpenApiCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let document = Document::from_file(&self.document)
            .wrap_err_with(|| format!("failed to load {}", self.document.display()))?;
        let mut out = TerminalOutput::new();

        if self.list {
            let operations = document
                .operations()
                .iter()
                .map(|entry| (entry.label.clone(), entry.description.clone()))
                .collect();
            OperationListReport { operations }.render(&mut out);
            return Ok(());
        }

        let file = open_manifest(config);
        let opts = BatchOptions {
            document: self.document.clone(),
            selection: self.select.clone(),
            all: self.all,
            dry_run: self.dry_run,
        };
        let report = ops::batch(&file, &document, &opts)?;
        report.render(&mut out);

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
