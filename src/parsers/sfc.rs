use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use swc_ecma_ast::Module;

use super::module::{collect_imports, parse_module};

/// Matches `<script>` / `<script setup>` blocks and captures their contents.
static SCRIPT_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<script([^>]*)>(.*?)</script>").unwrap());

/// A single-file component reduced to its compiled script sections.
///
/// Markup and style sections are irrelevant to dependency analysis and are
/// discarded; only the script blocks are compiled.
pub struct CompiledComponent {
    /// One parsed module per script block, in source order.
    pub modules: Vec<Module>,
    /// Import specifiers across all script blocks, in resolution order.
    pub imports: Vec<String>,
}

impl CompiledComponent {
    /// False when the file carries neither a plain nor a setup script block.
    pub fn has_script(&self) -> bool {
        !self.modules.is_empty()
    }
}

/// Parse a single-file component and compile its script sections.
///
/// A file without any script block is not an error; it simply has nothing to
/// analyze and yields an empty import list. A script block that fails to
/// parse is fatal for the file.
pub fn parse_component_file(file_path: &str, source: &str) -> Result<CompiledComponent> {
    let mut modules = Vec::new();
    let mut imports = Vec::new();

    for caps in SCRIPT_BLOCK_REGEX.captures_iter(source) {
        let body = &caps[2];
        let module = parse_module(file_path, body)?;
        imports.extend(collect_imports(&module));
        modules.push(module);
    }

    Ok(CompiledComponent { modules, imports })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_setup_script_imports() {
        let source = r#"
<script setup lang="ts">
import { useMediaQuery } from '@vueuse/core'
import Bar from '@/components/ui/bar'
</script>

<template>
  <Bar v-if="wide" />
</template>
"#;
        let compiled = parse_component_file("foo.vue", source).unwrap();
        assert!(compiled.has_script());
        assert_eq!(
            compiled.imports,
            vec!["@vueuse/core", "@/components/ui/bar"]
        );
    }

    #[test]
    fn test_plain_and_setup_scripts_combined() {
        let source = r#"
<script lang="ts">
export const description = 'A login form.'
</script>

<script setup lang="ts">
import { ref } from 'vue'
</script>
"#;
        let compiled = parse_component_file("block.vue", source).unwrap();
        assert_eq!(compiled.modules.len(), 2);
        assert_eq!(compiled.imports, vec!["vue"]);
    }

    #[test]
    fn test_no_script_section_is_not_an_error() {
        let source = "<template>\n  <div>static</div>\n</template>\n";
        let compiled = parse_component_file("static.vue", source).unwrap();
        assert!(!compiled.has_script());
        assert_eq!(compiled.imports, Vec::<String>::new());
    }

    #[test]
    fn test_malformed_script_is_an_error() {
        let source = "<script setup>\nimport { from 'vue'\n</script>\n";
        assert!(parse_component_file("broken.vue", source).is_err());
    }

    #[test]
    fn test_style_section_ignored() {
        let source = r#"
<script setup>
import { cva } from 'class-variance-authority'
</script>
<style scoped>
.btn { color: red; }
</style>
"#;
        let compiled = parse_component_file("styled.vue", source).unwrap();
        assert_eq!(compiled.imports, vec!["class-variance-authority"]);
    }
}
