//! Installer.
//!
//! Takes registry files plus a target project's configuration and writes them
//! to disk. Processing is strictly sequential by design: the folder-level
//! conflict cache must observe folders in order and ask at most once per
//! folder before any file in that folder is written, so prompts never
//! interleave.
//!
//! Failures before completion leave already-written files on disk; the
//! summary still reports everything finished up to the failure point.

pub mod resolve;

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::ProjectConfig;
use crate::registry::{ItemType, RegistryFile};
use crate::transform::{TransformInput, Transformer};

pub use resolve::resolve_destination;

/// Interactive confirmation boundary. The installer only ever asks yes/no
/// questions; anything conforming (a terminal prompt, a scripted fake) works.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InstallOptions {
    /// Overwrite existing non-ui files without prompting.
    pub overwrite: bool,
    /// Overwrite existing component folders without prompting.
    pub force: bool,
    /// Suppress the summary report.
    pub silent: bool,
}

/// Paths touched by an install run, in processing order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallSummary {
    pub created: Vec<PathBuf>,
    pub updated: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl InstallSummary {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty() && self.skipped.is_empty()
    }

    pub fn wrote_nothing(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty()
    }
}

/// Install registry files into the target project.
///
/// Files are processed strictly in the given order. Empty files are skipped
/// outright; declined conflicts are recorded as skipped; everything else is
/// transformed and written, classified as created or updated based on an
/// existence check taken before the write.
///
/// A failed write aborts the remaining sequence, but the summary for files
/// processed before the failure is still reported before the error
/// propagates.
pub fn install(
    files: &[RegistryFile],
    project: &ProjectConfig,
    options: &InstallOptions,
    confirm: &mut dyn Confirm,
    transformer: &dyn Transformer,
) -> Result<InstallSummary> {
    let mut summary = InstallSummary::default();
    let result = install_files(files, project, options, confirm, transformer, &mut summary);

    if !options.silent {
        crate::reporter::print_install_summary(&summary);
    }

    result.map(|()| summary)
}

fn install_files(
    files: &[RegistryFile],
    project: &ProjectConfig,
    options: &InstallOptions,
    confirm: &mut dyn Confirm,
    transformer: &dyn Transformer,
    summary: &mut InstallSummary,
) -> Result<()> {
    // Per-folder overwrite decisions for ui files, keyed by folder name.
    let mut folder_decisions: HashMap<String, bool> = HashMap::new();

    for file in files {
        if file.content.is_empty() {
            continue;
        }

        let destination = resolve_destination(file, project);
        let existed = destination.exists();

        let allowed = match file.file_type {
            ItemType::Ui => {
                resolve_folder_conflict(&destination, options, &mut folder_decisions, confirm)?
            }
            _ => resolve_file_conflict(&destination, existed, options, confirm)?,
        };

        if !allowed {
            summary.skipped.push(destination);
            continue;
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = transformer.transform(TransformInput {
            filename: &file.path,
            raw: &file.content,
            config: &project.config,
            base_color: Some(&project.config.base_color),
        })?;

        fs::write(&destination, content)
            .with_context(|| format!("Failed to write file: {}", destination.display()))?;

        if existed {
            summary.updated.push(destination);
        } else {
            summary.created.push(destination);
        }
    }

    Ok(())
}

/// Folder-granular conflict handling for ui files.
///
/// The decision for a folder name is made once, on the first file destined
/// for it, and reused for every later file with the same folder name. A
/// folder that does not exist yet is an implicit accept; this is cached too,
/// so files written into a fresh folder do not trigger a prompt for their
/// siblings.
fn resolve_folder_conflict(
    destination: &std::path::Path,
    options: &InstallOptions,
    decisions: &mut HashMap<String, bool>,
    confirm: &mut dyn Confirm,
) -> Result<bool> {
    if options.force {
        return Ok(true);
    }

    let Some(folder) = destination.parent() else {
        return Ok(true);
    };
    let name = folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if let Some(&decision) = decisions.get(&name) {
        return Ok(decision);
    }

    let decision = if folder.exists() {
        confirm.confirm(&format!("Component {} already exists. Overwrite?", name))?
    } else {
        true
    };
    decisions.insert(name, decision);
    Ok(decision)
}

/// Per-file conflict handling for everything that is not a ui file.
fn resolve_file_conflict(
    destination: &std::path::Path,
    existed: bool,
    options: &InstallOptions,
    confirm: &mut dyn Confirm,
) -> Result<bool> {
    if !existed || options.overwrite {
        return Ok(true);
    }

    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    confirm.confirm(&format!("File {} already exists. Overwrite?", name))
}
