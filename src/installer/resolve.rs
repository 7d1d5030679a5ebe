//! Destination path resolution.

use std::path::PathBuf;

use crate::config::{HOME_ALIAS_PREFIX, ProjectConfig};
use crate::registry::{ItemType, RegistryFile};

/// Resolve where a registry file lands inside the consuming project.
///
/// A target with the home marker (`~/`) is pinned relative to the project
/// root. A bare target resolves against the per-type base directory. Files
/// without a target fall back to the per-type directory plus their own
/// basename.
pub fn resolve_destination(file: &RegistryFile, project: &ProjectConfig) -> PathBuf {
    let destination = match file.target.as_deref() {
        Some(target) if !target.is_empty() => {
            if let Some(rest) = target.strip_prefix(HOME_ALIAS_PREFIX) {
                project.paths.root.join(rest)
            } else {
                explicit_target_base(file.file_type, project).join(target)
            }
        }
        _ => type_directory(file.file_type, project).join(basename(&file.path)),
    };

    if project.config.typescript {
        destination
    } else {
        downgrade_extension(destination)
    }
}

/// Base directory for bare-relative explicit targets.
///
/// Ui files carry `{component}/{file}` targets grouped under the ui
/// directory; every other explicit target is a project-source-relative path
/// (e.g. the fixed block page route).
fn explicit_target_base(file_type: ItemType, project: &ProjectConfig) -> PathBuf {
    match file_type {
        ItemType::Ui => project.paths.ui.clone(),
        ItemType::Hook => project.paths.composables.clone(),
        _ => project.paths.src.clone(),
    }
}

/// The standard per-component convention for files without a target.
fn type_directory(file_type: ItemType, project: &ProjectConfig) -> PathBuf {
    match file_type {
        ItemType::Ui => project.paths.ui.clone(),
        ItemType::Example | ItemType::Component | ItemType::Block => {
            project.paths.components.clone()
        }
        ItemType::Hook => project.paths.composables.clone(),
        ItemType::Page => project.paths.src.clone(),
    }
}

/// Untyped projects receive plain script files.
fn downgrade_extension(path: PathBuf) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ts") => path.with_extension("js"),
        _ => path,
    }
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use crate::config::Config;
    use crate::registry::BLOCK_PAGE_TARGET;

    use super::*;

    fn project() -> ProjectConfig {
        ProjectConfig::from_config(Path::new("/proj"), Config::default())
    }

    fn file(path: &str, target: Option<&str>, file_type: ItemType) -> RegistryFile {
        RegistryFile {
            path: path.to_string(),
            content: "x".to_string(),
            target: target.map(|t| t.to_string()),
            file_type,
        }
    }

    #[test]
    fn test_ui_target_resolves_under_ui_directory() {
        let dest = resolve_destination(
            &file(
                "default/ui/button/Button.vue",
                Some("button/Button.vue"),
                ItemType::Ui,
            ),
            &project(),
        );
        assert_eq!(
            dest,
            Path::new("/proj/src/components/ui/button/Button.vue")
        );
    }

    #[test]
    fn test_page_target_resolves_under_source_root() {
        let dest = resolve_destination(
            &file(
                "default/block/Login01/page.vue",
                Some(BLOCK_PAGE_TARGET),
                ItemType::Page,
            ),
            &project(),
        );
        assert_eq!(dest, Path::new("/proj/src/pages/dashboard.vue"));
    }

    #[test]
    fn test_home_marker_resolves_under_project_root() {
        let dest = resolve_destination(
            &file("default/misc/env.ts", Some("~/env.ts"), ItemType::Component),
            &project(),
        );
        assert_eq!(dest, Path::new("/proj/env.ts"));
    }

    #[test]
    fn test_empty_target_uses_type_convention() {
        let dest = resolve_destination(
            &file("default/example/ButtonDemo.vue", None, ItemType::Example),
            &project(),
        );
        assert_eq!(dest, Path::new("/proj/src/components/ButtonDemo.vue"));
    }

    #[test]
    fn test_hook_installs_flat_under_composables() {
        let dest = resolve_destination(
            &file(
                "default/hook/use-toast.ts",
                Some("use-toast.ts"),
                ItemType::Hook,
            ),
            &project(),
        );
        assert_eq!(dest, Path::new("/proj/src/composables/use-toast.ts"));
    }

    #[test]
    fn test_untyped_project_downgrades_ts_extension() {
        let untyped = ProjectConfig::from_config(
            Path::new("/proj"),
            Config {
                typescript: false,
                ..Default::default()
            },
        );
        let dest = resolve_destination(
            &file(
                "default/hook/use-toast.ts",
                Some("use-toast.ts"),
                ItemType::Hook,
            ),
            &untyped,
        );
        assert_eq!(dest, Path::new("/proj/src/composables/use-toast.js"));
    }

    #[test]
    fn test_vue_extension_untouched_for_untyped_project() {
        let untyped = ProjectConfig::from_config(
            Path::new("/proj"),
            Config {
                typescript: false,
                ..Default::default()
            },
        );
        let dest = resolve_destination(
            &file("default/example/Demo.vue", None, ItemType::Example),
            &untyped,
        );
        assert_eq!(dest, Path::new("/proj/src/components/Demo.vue"));
    }
}
