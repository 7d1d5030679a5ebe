//! Veneer - Vue component registry builder and installer
//!
//! Veneer is a CLI tool and library for distributing reusable Vue components.
//! It crawls a style-scoped source tree of single-file components, statically
//! analyzes each file's imports to classify dependencies, assembles a typed
//! registry of installable items, and installs selected items into a consuming
//! project with interactive conflict resolution.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Project configuration (components.json) loading and path resolution
//! - `installer`: File installation with conflict handling
//! - `parsers`: swc-based import extraction from modules and single-file components
//! - `registry`: Registry data model, crawling, assembly, and block metadata
//! - `reporter`: Install summary output
//! - `transform`: Content transformation boundary

pub mod cli;
pub mod config;
pub mod installer;
pub mod parsers;
pub mod registry;
pub mod reporter;
pub mod transform;
