//! Prompt composition command.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::cli::open_session;
use crate::config::Config;

/// Compose the prompt from the current customization state
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Output language tag (defaults to the configured language)
    #[arg(short, long, value_name = "TAG")]
    pub language: Option<String>,

    /// Copy the prompt to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Write the prompt to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let session = open_session(config)?;
        let language = self
            .language
            .as_deref()
            .unwrap_or(&config.prompt.language);
        let prompt = session.prompt_preview(language)?;

        if let Some(path) = &self.out {
            fs::write(path, &prompt)
                .context(format!("Failed to write prompt to: {}", path.display()))?;
            println!("Prompt written to {}", path.display());
        } else {
            println!("{prompt}");
        }

        if self.copy {
            let mut clipboard =
                arboard::Clipboard::new().context("Failed to access system clipboard")?;
            clipboard
                .set_text(prompt)
                .context("Failed to copy prompt to clipboard")?;
            eprintln!("Copied to clipboard.");
        }

        Ok(())
    }
}
