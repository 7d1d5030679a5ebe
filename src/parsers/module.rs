use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap};
use swc_ecma_ast::{ImportDecl, Module};
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};
use swc_ecma_visit::{Visit, VisitWith};

/// Parse TypeScript/JavaScript source into an AST module.
///
/// Malformed source is a hard error: a registry entry with a silently
/// incomplete dependency set is worse than a failed build.
pub fn parse_module(file_path: &str, source: &str) -> Result<Module> {
    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_map: Arc<SourceMap> = Default::default();
        let source_file = source_map
            .new_source_file(FileName::Real(file_path.into()).into(), source.to_string());

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))
    })
}

/// Collects the source specifier of every import declaration, in file order.
struct ImportCollector {
    specifiers: Vec<String>,
}

impl Visit for ImportCollector {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        if let Some(src) = node.src.value.as_str() {
            self.specifiers.push(src.to_string());
        }
    }
}

/// Collect import specifiers from an already-parsed module.
pub fn collect_imports(module: &Module) -> Vec<String> {
    let mut collector = ImportCollector {
        specifiers: Vec::new(),
    };
    module.visit_with(&mut collector);
    collector.specifiers
}

/// Parse a plain module file and return its import specifiers in file order.
pub fn extract_module_imports(file_path: &str, source: &str) -> Result<Vec<String>> {
    let module = parse_module(file_path, source)?;
    Ok(collect_imports(&module))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_extract_imports_in_file_order() {
        let source = r#"
import { ref } from 'vue'
import { useMediaQuery } from '@vueuse/core'
import Button from '@/components/ui/button'

export const x = ref(0)
"#;
        let imports = extract_module_imports("utils.ts", source).unwrap();
        assert_eq!(
            imports,
            vec!["vue", "@vueuse/core", "@/components/ui/button"]
        );
    }

    #[test]
    fn test_extract_imports_none() {
        let imports = extract_module_imports("empty.ts", "export const a = 1\n").unwrap();
        assert_eq!(imports, Vec::<String>::new());
    }

    #[test]
    fn test_extract_imports_type_only() {
        let source = "import type { Ref } from 'vue'\nexport type X = Ref<number>\n";
        let imports = extract_module_imports("types.ts", source).unwrap();
        assert_eq!(imports, vec!["vue"]);
    }

    #[test]
    fn test_malformed_source_is_an_error() {
        let result = extract_module_imports("broken.ts", "import { from 'vue'");
        assert!(result.is_err());
    }
}
