//! Terminal confirmation prompts.
//!
//! Uses dialoguer for the interactive yes/no questions the installer asks
//! during conflict resolution.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;

use crate::installer::Confirm;

pub struct TerminalConfirm {
    theme: ColorfulTheme,
}

impl TerminalConfirm {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalConfirm {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        let confirmed = dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}
