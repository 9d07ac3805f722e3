//! Palette management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::open_session;
use crate::config::Config;

/// Manage color palettes
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Palette subcommand
    #[command(subcommand)]
    pub command: PaletteCommand,
}

/// Palette management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PaletteCommand {
    /// List all palettes
    List(ListPalettesArgs),
    /// Select a palette and adopt its colors
    Apply(ApplyPaletteArgs),
    /// Save the current working colors as a new custom palette
    Add(AddPaletteArgs),
    /// Delete a custom palette
    Delete(DeletePaletteArgs),
}

/// List all palettes
#[derive(Debug, Clone, Args)]
pub struct ListPalettesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Select a palette and adopt its colors
#[derive(Debug, Clone, Args)]
pub struct ApplyPaletteArgs {
    /// Palette id
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Save the current working colors as a new custom palette
#[derive(Debug, Clone, Args)]
pub struct AddPaletteArgs {
    /// Palette name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Delete a custom palette
#[derive(Debug, Clone, Args)]
pub struct DeletePaletteArgs {
    /// Palette id to delete
    #[arg(value_name = "ID")]
    pub id: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct PaletteItem {
    id: String,
    name: String,
    background: String,
    text: String,
    title: String,
    highlight: String,
    other_colors: Vec<String>,
    custom: bool,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct ListPalettesResponse {
    palettes: Vec<PaletteItem>,
    count: usize,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self, config: &Config) -> Result<()> {
        match &self.command {
            PaletteCommand::List(args) => args.execute(config),
            PaletteCommand::Apply(args) => args.execute(config),
            PaletteCommand::Add(args) => args.execute(config),
            PaletteCommand::Delete(args) => args.execute(config),
        }
    }
}

impl ListPalettesArgs {
    /// Execute the list command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let session = open_session(config)?;
        let state = session.state();

        let palettes: Vec<PaletteItem> = state
            .palettes
            .iter()
            .map(|palette| PaletteItem {
                id: palette.id.clone(),
                name: palette.name.clone(),
                background: palette.colors.background.clone(),
                text: palette.colors.text.clone(),
                title: palette.colors.title.clone(),
                highlight: palette.colors.highlight.clone(),
                other_colors: palette.colors.other_colors.clone(),
                custom: palette.is_custom,
                selected: palette.id == state.selected_palette_id,
            })
            .collect();
        let response = ListPalettesResponse {
            count: palettes.len(),
            palettes,
        };

        if self.json {
            println!("{}", serde_json::to_string(&response)?);
        } else {
            println!("Palettes ({}):", response.count);
            println!();
            for palette in response.palettes {
                let marker = if palette.selected { "*" } else { " " };
                let kind = if palette.custom { "custom" } else { "" };
                println!(
                    "{} {:<30} {:<28} {} {} {} {} {:>6}",
                    marker,
                    palette.id,
                    palette.name,
                    palette.background,
                    palette.text,
                    palette.title,
                    palette.highlight,
                    kind
                );
            }
        }

        Ok(())
    }
}

impl ApplyPaletteArgs {
    /// Execute the apply command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        session.apply_palette(&self.id)?;
        println!(
            "Applied palette '{}' ({}).",
            session.selected_palette().name,
            self.id
        );
        Ok(())
    }
}

impl AddPaletteArgs {
    /// Execute the add command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        let id = session.add_palette(&self.name)?;
        println!("Palette '{}' added as {id} and selected.", self.name.trim());
        Ok(())
    }
}

impl DeletePaletteArgs {
    /// Execute the delete command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        session.delete_palette(&self.id)?;
        println!("Palette '{}' deleted.", self.id);
        Ok(())
    }
}
