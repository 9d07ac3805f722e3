//! Customization reset command.

use anyhow::Result;
use clap::Args;

use crate::cli::open_session;
use crate::config::Config;

/// Discard all customizations and restore the built-in defaults
#[derive(Debug, Clone, Args)]
pub struct ResetArgs {
    /// Confirm the reset (required; this deletes all custom palettes,
    /// styles, categories, and selections)
    #[arg(long)]
    pub force: bool,
}

impl ResetArgs {
    /// Execute the reset command
    pub fn execute(&self, config: &Config) -> Result<()> {
        if !self.force {
            anyhow::bail!(
                "Reset discards all custom palettes, styles, categories, and selections. \
                 Re-run with --force to confirm."
            );
        }

        let mut session = open_session(config)?;
        session.reset_all();
        println!("All customizations reset to defaults.");
        Ok(())
    }
}
