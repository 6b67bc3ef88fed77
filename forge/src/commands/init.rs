use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use hookforge_manifest::STARTER_MANIFEST;

use crate::reports::{Output, TerminalOutput};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to write hookforge.toml into
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing hookforge.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.write_starter()?;

        let mut out = TerminalOutput::new();
        out.section("Created");
        out.added_item(&path.display().to_string());
        Ok(())
    }

    fn write_starter(&self) -> Result<PathBuf> {
        let path = self.dir.join("hookforge.toml");
        if path.exists() && !self.force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }

        std::fs::create_dir_all(&self.dir)
            .wrap_err_with(|| format!("failed to create {}", self.dir.display()))?;
        std::fs::write(&path, STARTER_MANIFEST)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
