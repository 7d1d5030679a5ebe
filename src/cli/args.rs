//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Crawl a registry source tree and emit the registry as JSON
//! - `add`: Install registry items into the current project
//! - `init`: Initialize a components.json configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Extract the command, printing help and returning None when absent.
    pub fn with_command_or_help(self) -> Option<Command> {
        match self.command {
            Some(command) => Some(command),
            None => {
                Self::command().print_help().ok();
                None
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Registry source tree root
    #[arg(default_value = "registry")]
    pub registry_root: PathBuf,

    /// Write the registry JSON to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AddCommand {
    /// Names of the registry items to install
    pub components: Vec<String>,

    /// Registry JSON file produced by `build`
    #[arg(long, default_value = "registry.json")]
    pub registry: PathBuf,

    /// Project directory to install into
    #[arg(long, default_value = ".")]
    pub cwd: PathBuf,

    /// Overwrite existing files without prompting
    #[arg(long)]
    pub overwrite: bool,

    /// Overwrite existing component folders without prompting
    #[arg(long)]
    pub force: bool,

    /// Suppress the summary report
    #[arg(long)]
    pub silent: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the component registry from a source tree
    Build(BuildCommand),
    /// Install registry items into a project
    Add(AddCommand),
    /// Initialize a new components.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_command_or_help_passes_command_through() {
        let args = Arguments::parse_from(["veneer", "init"]);
        assert!(matches!(args.with_command_or_help(), Some(Command::Init)));
    }

    #[test]
    fn test_with_command_or_help_none_without_command() {
        let args = Arguments::parse_from(["veneer"]);
        assert!(args.with_command_or_help().is_none());
    }
}
