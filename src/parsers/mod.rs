//! Source parsing adapters.
//!
//! Two file shapes flow through the registry build: plain TypeScript/JavaScript
//! modules and Vue single-file components. Both are reduced to the same thing
//! the classifier needs: the ordered list of module specifiers they import.

pub mod module;
pub mod sfc;

pub use module::extract_module_imports;
pub use sfc::{CompiledComponent, parse_component_file};
