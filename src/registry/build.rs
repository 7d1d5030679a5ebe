//! Registry assembly.
//!
//! For each style the three item-kind crawls read disjoint subtrees and run
//! as independent rayon tasks; their results are concatenated in ui, example,
//! block order. Dependency resolution then unions per-file classification
//! results into each item.

use std::path::Path;

use anyhow::Result;

use crate::parsers::{extract_module_imports, parse_component_file};

use super::crawl::{COMPONENT_EXT, crawl_blocks, crawl_examples, crawl_ui};
use super::deps::DependencyTable;
use super::{BARREL_FILE_NAME, RegistryItem, STYLES};

/// Build the full registry from a source tree.
///
/// Output order is fixed: for each style in [`STYLES`], all ui items, then
/// all examples, then all blocks.
pub fn build_registry(registry_root: &Path, table: &DependencyTable) -> Result<Vec<RegistryItem>> {
    let mut registry = Vec::new();

    for style in STYLES {
        let (ui, (examples, blocks)) = rayon::join(
            || crawl_ui(registry_root, style),
            || {
                rayon::join(
                    || crawl_examples(registry_root, style),
                    || crawl_blocks(registry_root, style),
                )
            },
        );

        for item in ui?.into_iter().chain(examples?).chain(blocks?) {
            registry.push(resolve_item_dependencies(item, table)?);
        }
    }

    Ok(registry)
}

/// Extract and classify imports across an item's files.
///
/// The two output sequences are insertion-ordered sets: duplicates within a
/// file or across files collapse to the first discovery.
pub fn resolve_item_dependencies(
    mut item: RegistryItem,
    table: &DependencyTable,
) -> Result<RegistryItem> {
    let mut dependencies: Vec<String> = Vec::new();
    let mut registry_dependencies: Vec<String> = Vec::new();

    for file in &item.files {
        if file_name(&file.path) == BARREL_FILE_NAME {
            continue;
        }

        for specifier in extract_file_imports(&file.path, &file.content)? {
            let classification = table.classify(&specifier);
            for dependency in classification.dependencies {
                if !dependencies.contains(&dependency) {
                    dependencies.push(dependency);
                }
            }
            if let Some(reference) = classification.registry_dependency
                && !registry_dependencies.contains(&reference)
            {
                registry_dependencies.push(reference);
            }
        }
    }

    item.dependencies = dependencies;
    item.registry_dependencies = registry_dependencies;
    Ok(item)
}

fn extract_file_imports(path: &str, content: &str) -> Result<Vec<String>> {
    if path.ends_with(COMPONENT_EXT) {
        Ok(parse_component_file(path, content)?.imports)
    } else {
        extract_module_imports(path, content)
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
