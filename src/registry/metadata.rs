//! Block metadata extraction.
//!
//! Blocks may export a handful of presentation hints (`description`,
//! `iframeHeight`, `containerClass`) as top-level constants in their page
//! file. This is a best-effort sidecar read invoked on demand, separate from
//! the main registry build.

use anyhow::Result;
use swc_ecma_ast::{Decl, Expr, Lit, ModuleDecl, ModuleItem, Pat};

use crate::parsers::parse_component_file;

/// Presentation hints read from a block page file. Missing or non-literal
/// initializers leave the field unset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockMetadata {
    pub description: Option<String>,
    pub iframe_height: Option<String>,
    pub container_class: Option<String>,
}

/// Extract block metadata from a single-file component.
///
/// Walks every top-level exported variable declaration of the compiled
/// script sections; declarations whose name is not one of the known fields
/// are ignored. A file without script sections yields all-unset metadata.
pub fn extract_metadata(file_path: &str, source: &str) -> Result<BlockMetadata> {
    let compiled = parse_component_file(file_path, source)?;
    let mut metadata = BlockMetadata::default();

    for module in &compiled.modules {
        for item in &module.body {
            let ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) = item else {
                continue;
            };
            let Decl::Var(var_decl) = &export.decl else {
                continue;
            };
            for declarator in &var_decl.decls {
                let Pat::Ident(ident) = &declarator.name else {
                    continue;
                };
                let value = declarator.init.as_deref().and_then(literal_string);
                match ident.id.sym.to_string().as_str() {
                    "description" => metadata.description = value,
                    "iframeHeight" => metadata.iframe_height = value,
                    "containerClass" => metadata.container_class = value,
                    _ => {}
                }
            }
        }
    }

    Ok(metadata)
}

fn literal_string(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|v| v.to_string()),
        _ => None,
    }
}
