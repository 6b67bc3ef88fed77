mod check;
mod completions;
mod generate;
mod init;
mod list;
mod openapi;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use hookforge_manifest::HookforgeToml;
use init::InitCommand;
use list::ListCommand;
use openapi::OpenApiCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for hookforge_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "hookforge")]
#[command(version)]
#[command(about = "Generate react-query hooks, axios accessors and TypeScript models")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to hookforge.toml
    #[arg(short, long, global = true, default_value = "hookforge.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(&self.config),
            Commands::Check(cmd) => cmd.run(&self.config),
            Commands::Generate(cmd) => cmd.run(&self.config),
            Commands::Openapi(cmd) => cmd.run(&self.config),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter hookforge.toml
    Init(InitCommand),

    /// List the features defined in hookforge.toml
    List(ListCommand),

    /// Validate hookforge.toml and synthesize every feature without writing
    Check(CheckCommand),

    /// Generate code for the configured features
    Generate(GenerateCommand),

    /// Generate code for operations of an OpenAPI document
    Openapi(OpenApiCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Open the manifest, exiting with a rendered diagnostic on failure.
fn open_manifest(config: &std::path::Path) -> HookforgeToml {
    HookforgeToml::open(config).unwrap_or_exit()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_openapi_requires_a_selection() {
        assert!(Cli::try_parse_from(["hookforge", "openapi", "api.json"]).is_err());
        assert!(Cli::try_parse_from(["hookforge", "openapi", "api.json", "--list"]).is_ok());
        assert!(Cli::try_parse_from(["hookforge", "openapi", "api.json", "--all", "-s", "getUser"]).is_err());
        assert!(
            Cli::try_parse_from(["hookforge", "openapi", "api.json", "-s", "getUser", "-s", "GET /users"]).is_ok()
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["hookforge", "generate", "-vv", "-c", "x/hookforge.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("x/hookforge.toml"));
    }
}
