//! Registry data model.
//!
//! A registry is a flat list of installable items, rebuilt from scratch on
//! every `build` run. Items and their files only live in memory; the `build`
//! command may serialize them to JSON, and the installer consumes them as
//! read-only inputs.

pub mod build;
pub mod crawl;
pub mod deps;
pub mod metadata;

use serde::{Deserialize, Serialize};

/// Style variants crawled by the registry build, in output order.
pub const STYLES: &[&str] = &["default", "new-york"];

/// Path alias prefix marking an import as a reference to another registry item.
pub const REGISTRY_ALIAS_PREFIX: &str = "@/";

/// Fixed destination for block page files, relative to the project source root.
pub const BLOCK_PAGE_TARGET: &str = "pages/dashboard.vue";

/// Re-export barrels are never scanned for dependencies.
pub const BARREL_FILE_NAME: &str = "index.ts";

/// Discriminates install semantics for items and their individual files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Ui,
    Example,
    Block,
    Page,
    Component,
    Hook,
}

/// One physical file belonging to a registry item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryFile {
    /// Source path relative to the registry root, kept for provenance.
    pub path: String,
    /// Raw file text snapshotted at build time.
    pub content: String,
    /// Destination hint. `None` means the per-type convention applies at
    /// install time; `Some` pins the file to a fixed location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(rename = "type")]
    pub file_type: ItemType,
}

/// One installable unit: a ui component, an example, a block, or a hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub files: Vec<RegistryFile>,
    /// External packages, deduplicated in first-discovery order.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Names of other registry items this one references.
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
}
