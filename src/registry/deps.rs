//! Dependency classification for import specifiers.
//!
//! Every import found in a registry source file is classified into one of
//! three buckets: an external package (looked up in the [`DependencyTable`]),
//! an internal registry reference (detected via the `@/` alias prefix), or
//! irrelevant (framework and standard-library imports).

use std::collections::HashMap;

use crate::registry::REGISTRY_ALIAS_PREFIX;

/// Static facts about one external package.
#[derive(Debug, Clone, Default)]
pub struct DependencyRecord {
    /// Companion packages that must be installed alongside this one.
    pub peers: Vec<String>,
    /// Alternate distribution specifier (e.g. `v-calendar@next`). When set,
    /// it fully replaces the bare package name in classification output.
    pub override_specifier: Option<String>,
}

impl DependencyRecord {
    pub fn with_peers(peers: &[&str]) -> Self {
        Self {
            peers: peers.iter().map(|p| p.to_string()).collect(),
            override_specifier: None,
        }
    }

    pub fn with_override(specifier: &str) -> Self {
        Self {
            peers: Vec::new(),
            override_specifier: Some(specifier.to_string()),
        }
    }
}

/// Read-only lookup table of known external packages.
///
/// Constructed once at startup and passed explicitly to the build, never
/// referenced as ambient state.
#[derive(Debug, Clone)]
pub struct DependencyTable {
    records: HashMap<String, DependencyRecord>,
}

/// Result of classifying a single import specifier.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Classification {
    /// External packages implied by the specifier (package itself plus peers).
    pub dependencies: Vec<String>,
    /// Registry item name, when the specifier points into the registry alias.
    pub registry_dependency: Option<String>,
}

impl DependencyTable {
    pub fn new(records: HashMap<String, DependencyRecord>) -> Self {
        Self { records }
    }

    /// The packages the stock component set is known to depend on.
    pub fn standard() -> Self {
        let mut records = HashMap::new();
        records.insert("@vueuse/core".to_string(), DependencyRecord::default());
        records.insert("radix-vue".to_string(), DependencyRecord::default());
        records.insert("vue-sonner".to_string(), DependencyRecord::default());
        records.insert("vaul-vue".to_string(), DependencyRecord::default());
        records.insert(
            "@tanstack/vue-table".to_string(),
            DependencyRecord::default(),
        );
        records.insert(
            "vee-validate".to_string(),
            DependencyRecord::with_peers(&["@vee-validate/zod", "zod"]),
        );
        records.insert(
            "@unovis/vue".to_string(),
            DependencyRecord::with_peers(&["@unovis/ts"]),
        );
        records.insert(
            "v-calendar".to_string(),
            DependencyRecord::with_override("v-calendar@next"),
        );
        records.insert(
            "embla-carousel-vue".to_string(),
            DependencyRecord::with_override("embla-carousel-vue@next"),
        );
        Self { records }
    }

    /// Classify one import specifier.
    ///
    /// Known packages yield the (possibly tag-overridden) package name plus
    /// every peer by bare name. Specifiers under the registry alias yield the
    /// last path segment as an internal reference. Everything else is ignored.
    pub fn classify(&self, specifier: &str) -> Classification {
        if let Some(record) = self.records.get(specifier) {
            let name = record
                .override_specifier
                .clone()
                .unwrap_or_else(|| specifier.to_string());
            let mut dependencies = vec![name];
            dependencies.extend(record.peers.iter().cloned());
            return Classification {
                dependencies,
                registry_dependency: None,
            };
        }

        if let Some(rest) = specifier.strip_prefix(REGISTRY_ALIAS_PREFIX) {
            let name = rest.rsplit('/').next().unwrap_or(rest);
            if !name.is_empty() {
                return Classification {
                    dependencies: Vec::new(),
                    registry_dependency: Some(name.to_string()),
                };
            }
        }

        Classification::default()
    }
}
