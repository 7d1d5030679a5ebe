use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{CONFIG_FILE_NAME, ProjectConfig, default_config_json};
use crate::installer::{InstallOptions, install};
use crate::registry::{RegistryItem, build::build_registry, deps::DependencyTable};
use crate::reporter::SUCCESS_MARK;
use crate::transform::IdentityTransform;

use super::args::{AddCommand, BuildCommand, Command};
use super::exit_status::ExitStatus;
use super::prompt::TerminalConfirm;

pub fn run(command: Command) -> Result<ExitStatus> {
    match command {
        Command::Build(cmd) => build(cmd),
        Command::Add(cmd) => add(cmd),
        Command::Init => {
            init()?;
            Ok(ExitStatus::Success)
        }
    }
}

fn build(cmd: BuildCommand) -> Result<ExitStatus> {
    let table = DependencyTable::standard();
    let registry = build_registry(&cmd.registry_root, &table)?;
    let json = serde_json::to_string_pretty(&registry)?;

    match &cmd.out {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write registry: {}", path.display()))?;
            eprintln!(
                "{} Wrote {} items to {}",
                SUCCESS_MARK.green(),
                registry.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(ExitStatus::Success)
}

fn add(cmd: AddCommand) -> Result<ExitStatus> {
    if cmd.components.is_empty() {
        anyhow::bail!("No components requested. Pass at least one item name.");
    }

    let content = fs::read_to_string(&cmd.registry)
        .with_context(|| format!("Failed to read registry: {}", cmd.registry.display()))?;
    let registry: Vec<RegistryItem> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse registry: {}", cmd.registry.display()))?;

    let project = ProjectConfig::load(&cmd.cwd)?;

    let mut files = Vec::new();
    for name in &cmd.components {
        let item = registry
            .iter()
            .find(|item| &item.name == name && item_matches_style(item, &project.config.style))
            .or_else(|| registry.iter().find(|item| &item.name == name))
            .with_context(|| format!("Item '{}' not found in registry", name))?;
        files.extend(item.files.iter().cloned());
    }

    let options = InstallOptions {
        overwrite: cmd.overwrite,
        force: cmd.force,
        silent: cmd.silent,
    };
    let mut confirm = TerminalConfirm::default();
    let summary = install(
        &files,
        &project,
        &options,
        &mut confirm,
        &IdentityTransform,
    )?;

    // Everything declined means nothing was applied.
    if summary.wrote_nothing() && !summary.skipped.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Registry file paths are style-prefixed; prefer the item matching the
/// project's configured style when names repeat across styles.
fn item_matches_style(item: &RegistryItem, style: &str) -> bool {
    item.files
        .first()
        .is_some_and(|f| f.path.starts_with(&format!("{}/", style)))
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
