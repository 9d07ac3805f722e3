//! Configuration management CLI commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;
use crate::prompt::PromptCopy;

/// Configuration management commands
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Set configuration values
#[derive(Debug, Clone, Args)]
pub struct ConfigSetArgs {
    /// Default output language tag (e.g. "en", "zh-TW")
    #[arg(long, value_name = "TAG")]
    pub language: Option<String>,

    /// Customization data directory override
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Debug, Serialize)]
struct ConfigOutput {
    config_file: String,
    data_dir: String,
    language: String,
    supported_languages: Vec<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, config: &Config) -> Result<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config),
            ConfigCommand::Set(args) => args.execute(config),
        }
    }
}

impl ConfigShowArgs {
    /// Execute the show command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let output = ConfigOutput {
            config_file: Config::config_file_path()?.display().to_string(),
            data_dir: config.data_dir()?.display().to_string(),
            language: config.prompt.language.clone(),
            supported_languages: PromptCopy::supported_languages()?,
        };

        if self.json {
            println!("{}", serde_json::to_string(&output)?);
        } else {
            println!("Config file: {}", output.config_file);
            println!("Data dir:    {}", output.data_dir);
            println!("Language:    {}", output.language);
            println!(
                "Supported:   {}",
                output.supported_languages.join(", ")
            );
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute the set command
    pub fn execute(&self, config: &Config) -> Result<()> {
        if self.language.is_none() && self.data_dir.is_none() {
            anyhow::bail!("Nothing to set. Use --language or --data-dir.");
        }

        let mut updated = config.clone();
        if let Some(language) = &self.language {
            updated.prompt.language = language.clone();
        }
        if let Some(data_dir) = &self.data_dir {
            updated.storage.data_dir = Some(data_dir.clone());
        }

        updated.save()?;

        if let Some(language) = &self.language {
            println!("Default language set to {language}.");
        }
        if let Some(data_dir) = &self.data_dir {
            println!("Data directory set to {}.", data_dir.display());
        }
        Ok(())
    }
}
