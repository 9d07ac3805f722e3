//! Style preset management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::open_session;
use crate::config::Config;

/// Manage style presets
#[derive(Debug, Clone, Args)]
pub struct StyleArgs {
    /// Style subcommand
    #[command(subcommand)]
    pub command: StyleCommand,
}

/// Style preset subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum StyleCommand {
    /// List all style presets
    List(ListStylesArgs),
    /// Select a style preset
    Select(SelectStyleArgs),
    /// Add a new custom style preset
    Add(AddStyleArgs),
    /// Delete a custom style preset
    Delete(DeleteStyleArgs),
}

/// List all style presets
#[derive(Debug, Clone, Args)]
pub struct ListStylesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Select a style preset
#[derive(Debug, Clone, Args)]
pub struct SelectStyleArgs {
    /// Style preset id
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Add a new custom style preset
#[derive(Debug, Clone, Args)]
pub struct AddStyleArgs {
    /// Style preset name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Hint text describing the slide tone
    #[arg(value_name = "HINT")]
    pub hint: String,
}

/// Delete a custom style preset
#[derive(Debug, Clone, Args)]
pub struct DeleteStyleArgs {
    /// Style preset id to delete
    #[arg(value_name = "ID")]
    pub id: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct StyleItem {
    id: String,
    name: String,
    prompt_hint: String,
    custom: bool,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct ListStylesResponse {
    styles: Vec<StyleItem>,
    count: usize,
}

impl StyleArgs {
    /// Execute the style command
    pub fn execute(&self, config: &Config) -> Result<()> {
        match &self.command {
            StyleCommand::List(args) => args.execute(config),
            StyleCommand::Select(args) => args.execute(config),
            StyleCommand::Add(args) => args.execute(config),
            StyleCommand::Delete(args) => args.execute(config),
        }
    }
}

impl ListStylesArgs {
    /// Execute the list command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let session = open_session(config)?;
        let state = session.state();

        let styles: Vec<StyleItem> = state
            .styles
            .iter()
            .map(|style| StyleItem {
                id: style.id.clone(),
                name: style.name.clone(),
                prompt_hint: style.prompt_hint.clone(),
                custom: style.is_custom,
                selected: style.id == state.selected_style_id,
            })
            .collect();
        let response = ListStylesResponse {
            count: styles.len(),
            styles,
        };

        if self.json {
            println!("{}", serde_json::to_string(&response)?);
        } else {
            println!("Style presets ({}):", response.count);
            println!();
            for style in response.styles {
                let marker = if style.selected { "*" } else { " " };
                println!("{} {:<28} {:<24} {}", marker, style.id, style.name, style.prompt_hint);
            }
        }

        Ok(())
    }
}

impl SelectStyleArgs {
    /// Execute the select command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        session.select_style(&self.id)?;
        println!(
            "Selected style preset '{}' ({}).",
            session.selected_style().name,
            self.id
        );
        Ok(())
    }
}

impl AddStyleArgs {
    /// Execute the add command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        let id = session.add_style(&self.name, &self.hint)?;
        println!("Style preset '{}' added as {id} and selected.", self.name.trim());
        Ok(())
    }
}

impl DeleteStyleArgs {
    /// Execute the delete command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        session.delete_style(&self.id)?;
        println!("Style preset '{}' deleted.", self.id);
        Ok(())
    }
}
