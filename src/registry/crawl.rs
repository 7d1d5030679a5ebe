//! Directory crawler.
//!
//! The registry source tree is convention-driven: each style variant owns a
//! `ui/`, `example/` and `block/` subtree (plus a reserved `hook/` subtree),
//! and the directory/file shape inside each decides the item layout. The
//! crawler only assembles items and snapshots file contents; dependency
//! resolution happens in [`super::build`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{BLOCK_PAGE_TARGET, ItemType, RegistryFile, RegistryItem};

/// File extension of single-file components.
pub const COMPONENT_EXT: &str = ".vue";

/// Naming convention for the page entry of a multi-file block.
pub const BLOCK_PAGE_FILE: &str = "page.vue";

/// Read a directory's entries sorted by file name.
///
/// `read_dir` order is platform-dependent; sorting keeps discovery order (and
/// therefore registry output) stable across runs.
fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to read directory entry in: {}", dir.display()))?;
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}

fn relative_path(registry_root: &Path, path: &Path) -> String {
    path.strip_prefix(registry_root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Crawl `<style>/ui`: every immediate subdirectory is one multi-file item.
pub fn crawl_ui(registry_root: &Path, style: &str) -> Result<Vec<RegistryItem>> {
    let root = registry_root.join(style).join("ui");
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for entry in sorted_entries(&root)? {
        let dir = entry.path();
        if !dir.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();

        let mut files = Vec::new();
        for file_entry in sorted_entries(&dir)? {
            let file_path = file_entry.path();
            if !file_path.is_file() {
                continue;
            }
            let file_name = file_entry.file_name().to_string_lossy().to_string();
            files.push(RegistryFile {
                path: relative_path(registry_root, &file_path),
                content: read_file(&file_path)?,
                target: Some(format!("{}/{}", name, file_name)),
                file_type: ItemType::Ui,
            });
        }

        items.push(RegistryItem {
            name,
            item_type: ItemType::Ui,
            files,
            dependencies: Vec::new(),
            registry_dependencies: Vec::new(),
        });
    }
    Ok(items)
}

/// Crawl `<style>/example`: every component file is one single-file item.
pub fn crawl_examples(registry_root: &Path, style: &str) -> Result<Vec<RegistryItem>> {
    let root = registry_root.join(style).join("example");
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for entry in sorted_entries(&root)? {
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().to_string();
        if !path.is_file() || !file_name.ends_with(COMPONENT_EXT) {
            continue;
        }
        let name = file_name.trim_end_matches(COMPONENT_EXT).to_string();

        items.push(RegistryItem {
            name,
            item_type: ItemType::Example,
            files: vec![RegistryFile {
                path: relative_path(registry_root, &path),
                content: read_file(&path)?,
                target: None,
                file_type: ItemType::Example,
            }],
            dependencies: Vec::new(),
            registry_dependencies: Vec::new(),
        });
    }
    Ok(items)
}

/// Crawl `<style>/block`.
///
/// A lone component file is a runnable page routed to the fixed dashboard
/// target. A subdirectory holds an optional `page.vue` entry plus supporting
/// files under `components/`; a subdirectory yielding zero files is a
/// placeholder and is dropped.
pub fn crawl_blocks(registry_root: &Path, style: &str) -> Result<Vec<RegistryItem>> {
    let root = registry_root.join(style).join("block");
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for entry in sorted_entries(&root)? {
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().to_string();

        if path.is_file() {
            if !file_name.ends_with(COMPONENT_EXT) {
                continue;
            }
            let name = file_name.trim_end_matches(COMPONENT_EXT).to_string();
            items.push(RegistryItem {
                name,
                item_type: ItemType::Block,
                files: vec![RegistryFile {
                    path: relative_path(registry_root, &path),
                    content: read_file(&path)?,
                    target: Some(BLOCK_PAGE_TARGET.to_string()),
                    file_type: ItemType::Block,
                }],
                dependencies: Vec::new(),
                registry_dependencies: Vec::new(),
            });
            continue;
        }

        if !path.is_dir() {
            continue;
        }

        let mut files = Vec::new();

        let page_path = path.join(BLOCK_PAGE_FILE);
        if page_path.is_file() {
            files.push(RegistryFile {
                path: relative_path(registry_root, &page_path),
                content: read_file(&page_path)?,
                target: Some(BLOCK_PAGE_TARGET.to_string()),
                file_type: ItemType::Page,
            });
        }

        let components_dir = path.join("components");
        if components_dir.is_dir() {
            for component_entry in sorted_entries(&components_dir)? {
                let component_path = component_entry.path();
                if !component_path.is_file() {
                    continue;
                }
                files.push(RegistryFile {
                    path: relative_path(registry_root, &component_path),
                    content: read_file(&component_path)?,
                    target: None,
                    file_type: ItemType::Component,
                });
            }
        }

        // Placeholder directories produce nothing installable.
        if files.is_empty() {
            continue;
        }

        items.push(RegistryItem {
            name: file_name,
            item_type: ItemType::Block,
            files,
            dependencies: Vec::new(),
            registry_dependencies: Vec::new(),
        });
    }
    Ok(items)
}

/// Crawl `<style>/hook`: one flat-installed item per file.
///
/// Reserved: defined by the source-tree convention but not yet wired into the
/// main build entry point.
pub fn crawl_hooks(registry_root: &Path, style: &str) -> Result<Vec<RegistryItem>> {
    let root = registry_root.join(style).join("hook");
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for entry in sorted_entries(&root)? {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().to_string();
        let name = file_name
            .split('.')
            .next()
            .unwrap_or(&file_name)
            .to_string();

        items.push(RegistryItem {
            name,
            item_type: ItemType::Hook,
            files: vec![RegistryFile {
                path: relative_path(registry_root, &path),
                content: read_file(&path)?,
                // Hooks install flat, keeping their own file name.
                target: Some(file_name),
                file_type: ItemType::Hook,
            }],
            dependencies: Vec::new(),
            registry_dependencies: Vec::new(),
        });
    }
    Ok(items)
}
