use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::registry::REGISTRY_ALIAS_PREFIX;

pub const CONFIG_FILE_NAME: &str = "components.json";

/// Target marker meaning "relative to the project root" instead of the
/// project source root.
pub const HOME_ALIAS_PREFIX: &str = "~/";

/// Consuming-project configuration, loaded from `components.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_typescript")]
    pub typescript: bool,
    #[serde(default = "default_base_color")]
    pub base_color: String,
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    #[serde(default)]
    pub aliases: Aliases,
}

/// Import aliases the consuming project maps onto its source root.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aliases {
    #[serde(default = "default_components_alias")]
    pub components: String,
    #[serde(default = "default_composables_alias")]
    pub composables: String,
    #[serde(default = "default_utils_alias")]
    pub utils: String,
}

fn default_style() -> String {
    "default".to_string()
}

fn default_typescript() -> bool {
    true
}

fn default_base_color() -> String {
    "zinc".to_string()
}

fn default_source_dir() -> String {
    "src".to_string()
}

fn default_components_alias() -> String {
    "@/components".to_string()
}

fn default_composables_alias() -> String {
    "@/composables".to_string()
}

fn default_utils_alias() -> String {
    "@/lib/utils".to_string()
}

impl Default for Aliases {
    fn default() -> Self {
        Self {
            components: default_components_alias(),
            composables: default_composables_alias(),
            utils: default_utils_alias(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: default_style(),
            typescript: default_typescript(),
            base_color: default_base_color(),
            source_dir: default_source_dir(),
            aliases: Aliases::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Aliases must live under the registry alias prefix so targets can be
    /// mapped back onto the source root.
    pub fn validate(&self) -> Result<()> {
        for (name, alias) in [
            ("components", &self.aliases.components),
            ("composables", &self.aliases.composables),
            ("utils", &self.aliases.utils),
        ] {
            if !alias.starts_with(REGISTRY_ALIAS_PREFIX) {
                anyhow::bail!(
                    "Invalid alias for '{}': \"{}\" must start with \"{}\"",
                    name,
                    alias,
                    REGISTRY_ALIAS_PREFIX
                );
            }
        }

        if self.style.is_empty() {
            anyhow::bail!("'style' must not be empty");
        }

        Ok(())
    }
}

/// Absolute destination directories derived from a [`Config`].
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub root: PathBuf,
    pub src: PathBuf,
    pub components: PathBuf,
    pub ui: PathBuf,
    pub composables: PathBuf,
}

impl ResolvedPaths {
    pub fn resolve(root: &Path, config: &Config) -> Self {
        let src = root.join(&config.source_dir);
        let components = alias_to_path(&src, &config.aliases.components);
        let ui = components.join("ui");
        let composables = alias_to_path(&src, &config.aliases.composables);
        Self {
            root: root.to_path_buf(),
            src,
            components,
            ui,
            composables,
        }
    }
}

fn alias_to_path(src: &Path, alias: &str) -> PathBuf {
    match alias.strip_prefix(REGISTRY_ALIAS_PREFIX) {
        Some(rest) => src.join(rest),
        None => src.join(alias),
    }
}

/// A loaded configuration paired with its resolved directories.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub config: Config,
    pub paths: ResolvedPaths,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl ProjectConfig {
    /// Load the project configuration for `root`, falling back to defaults
    /// when no `components.json` is found between `root` and the repo root.
    pub fn load(root: &Path) -> Result<Self> {
        match find_config_file(root) {
            Some(path) => {
                let content = fs::read_to_string(&path)?;
                let config: Config = serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse config file: {:?}", path))?;
                config.validate()?;
                // Paths resolve against the directory holding the config file.
                let base = path.parent().unwrap_or(root);
                let paths = ResolvedPaths::resolve(base, &config);
                Ok(Self {
                    config,
                    paths,
                    from_file: true,
                })
            }
            None => {
                let config = Config::default();
                let paths = ResolvedPaths::resolve(root, &config);
                Ok(Self {
                    config,
                    paths,
                    from_file: false,
                })
            }
        }
    }

    /// Build a project configuration from an in-memory config, rooted at `root`.
    pub fn from_config(root: &Path, config: Config) -> Self {
        let paths = ResolvedPaths::resolve(root, &config);
        Self {
            config,
            paths,
            from_file: false,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::config::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.style, "default");
        assert!(config.typescript);
        assert_eq!(config.base_color, "zinc");
        assert_eq!(config.aliases.components, "@/components");
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "style": "new-york",
            "typescript": false,
            "baseColor": "slate",
            "aliases": { "components": "@/widgets" }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.style, "new-york");
        assert!(!config.typescript);
        assert_eq!(config.base_color, "slate");
        assert_eq!(config.aliases.components, "@/widgets");
        // Unspecified alias fields fall back to defaults.
        assert_eq!(config.aliases.composables, "@/composables");
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "style": "new-york" }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.style, "new-york");
        assert_eq!(config.source_dir, "src");
        assert!(config.typescript);
    }

    #[test]
    fn test_validate_rejects_bad_alias() {
        let config = Config {
            aliases: Aliases {
                components: "components".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("components"));
    }

    #[test]
    fn test_resolved_paths() {
        let config = Config::default();
        let paths = ResolvedPaths::resolve(Path::new("/proj"), &config);
        assert_eq!(paths.src, Path::new("/proj/src"));
        assert_eq!(paths.components, Path::new("/proj/src/components"));
        assert_eq!(paths.ui, Path::new("/proj/src/components/ui"));
        assert_eq!(paths.composables, Path::new("/proj/src/composables"));
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("components");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert!(found.is_some());
        assert_eq!(found.unwrap(), config_path);
    }

    #[test]
    fn test_find_config_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let found = find_config_file(dir.path());
        assert!(found.is_none());
    }

    #[test]
    fn test_load_project_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "style": "new-york" }"#,
        )
        .unwrap();

        let project = ProjectConfig::load(dir.path()).unwrap();
        assert!(project.from_file);
        assert_eq!(project.config.style, "new-york");
        assert_eq!(project.paths.root, dir.path());
    }

    #[test]
    fn test_load_project_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let project = ProjectConfig::load(dir.path()).unwrap();
        assert!(!project.from_file);
        assert_eq!(project.config.style, "default");
    }

    #[test]
    fn test_load_project_with_invalid_alias_fails() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "aliases": { "components": "no-prefix" } }"#,
        )
        .unwrap();

        assert!(ProjectConfig::load(dir.path()).is_err());
    }
}
