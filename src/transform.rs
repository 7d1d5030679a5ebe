//! Content transformation boundary.
//!
//! The installer hands every file through a [`Transformer`] before writing it
//! (icon-library rewrites, alias rewrites, and the like live behind this
//! trait). Implementations must be deterministic for identical inputs.

use anyhow::Result;

use crate::config::Config;

/// Everything a transformer gets to see for one file.
pub struct TransformInput<'a> {
    /// Source-relative path of the file being installed.
    pub filename: &'a str,
    /// Raw build-time content.
    pub raw: &'a str,
    pub config: &'a Config,
    pub base_color: Option<&'a str>,
}

pub trait Transformer {
    fn transform(&self, input: TransformInput<'_>) -> Result<String>;
}

/// Passes content through untouched. The default when no rewrite rules apply.
pub struct IdentityTransform;

impl Transformer for IdentityTransform {
    fn transform(&self, input: TransformInput<'_>) -> Result<String> {
        Ok(input.raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_identity_transform() {
        let config = Config::default();
        let output = IdentityTransform
            .transform(TransformInput {
                filename: "default/ui/button/Button.vue",
                raw: "<template/>",
                config: &config,
                base_color: Some("zinc"),
            })
            .unwrap();
        assert_eq!(output, "<template/>");
    }
}
