//! Working-color management commands.

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::open_session;
use crate::config::Config;
use crate::models::ColorChannel;

/// Manage the working colors
#[derive(Debug, Clone, Args)]
pub struct ColorArgs {
    /// Color subcommand
    #[command(subcommand)]
    pub command: ColorCommand,
}

/// Color management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ColorCommand {
    /// Show the current working colors
    Show(ShowColorsArgs),
    /// Set a named color channel
    Set(SetColorArgs),
    /// Add an accent color
    Add(AddColorArgs),
    /// Remove an accent color
    Remove(RemoveColorArgs),
    /// Move an accent color to another accent color's position
    Move(MoveColorArgs),
    /// List recently used colors
    Recents(RecentColorsArgs),
}

/// Show the current working colors
#[derive(Debug, Clone, Args)]
pub struct ShowColorsArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Set a named color channel
#[derive(Debug, Clone, Args)]
pub struct SetColorArgs {
    /// Channel name (background, text, title, or highlight)
    #[arg(value_name = "CHANNEL")]
    pub channel: String,

    /// Hex color (3 or 6 digits, leading # optional)
    #[arg(value_name = "HEX")]
    pub value: String,
}

/// Add an accent color
#[derive(Debug, Clone, Args)]
pub struct AddColorArgs {
    /// Hex color (3 or 6 digits, leading # optional)
    #[arg(value_name = "HEX")]
    pub value: String,
}

/// Remove an accent color
#[derive(Debug, Clone, Args)]
pub struct RemoveColorArgs {
    /// Accent color to remove, as stored (#RRGGBB)
    #[arg(value_name = "HEX")]
    pub value: String,
}

/// Move an accent color to another accent color's position
#[derive(Debug, Clone, Args)]
pub struct MoveColorArgs {
    /// Accent color to move (#RRGGBB)
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Accent color marking the target position (#RRGGBB)
    #[arg(value_name = "TO")]
    pub to: String,
}

/// List recently used colors
#[derive(Debug, Clone, Args)]
pub struct RecentColorsArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ColorsResponse {
    background: String,
    text: String,
    title: String,
    highlight: String,
    other_colors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RecentColorsResponse {
    colors: Vec<String>,
    count: usize,
}

impl ColorArgs {
    /// Execute the color command
    pub fn execute(&self, config: &Config) -> Result<()> {
        match &self.command {
            ColorCommand::Show(args) => args.execute(config),
            ColorCommand::Set(args) => args.execute(config),
            ColorCommand::Add(args) => args.execute(config),
            ColorCommand::Remove(args) => args.execute(config),
            ColorCommand::Move(args) => args.execute(config),
            ColorCommand::Recents(args) => args.execute(config),
        }
    }
}

impl ShowColorsArgs {
    /// Execute the show command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let session = open_session(config)?;
        let colors = &session.state().colors;
        let response = ColorsResponse {
            background: colors.background.clone(),
            text: colors.text.clone(),
            title: colors.title.clone(),
            highlight: colors.highlight.clone(),
            other_colors: colors.other_colors.clone(),
        };

        if self.json {
            println!("{}", serde_json::to_string(&response)?);
        } else {
            println!("background  {}", response.background);
            println!("text        {}", response.text);
            println!("title       {}", response.title);
            println!("highlight   {}", response.highlight);
            if response.other_colors.is_empty() {
                println!("other       none");
            } else {
                println!("other       {}", response.other_colors.join(", "));
            }
        }

        Ok(())
    }
}

impl SetColorArgs {
    /// Execute the set command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let channel = ColorChannel::parse(&self.channel).ok_or_else(|| {
            anyhow!(
                "Unknown channel '{}' (expected background, text, title, or highlight)",
                self.channel
            )
        })?;
        let mut session = open_session(config)?;
        let normalized = session.set_color(channel, &self.value)?;
        println!("{} set to {normalized}.", channel.name());
        Ok(())
    }
}

impl AddColorArgs {
    /// Execute the add command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        let normalized = session.add_other_color(&self.value)?;
        println!("Accent color {normalized} added.");
        Ok(())
    }
}

impl RemoveColorArgs {
    /// Execute the remove command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        session.remove_other_color(&self.value)?;
        println!("Accent color {} removed.", self.value);
        Ok(())
    }
}

impl MoveColorArgs {
    /// Execute the move command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        session.move_other_color(&self.from, &self.to)?;
        println!(
            "Accent colors: {}.",
            session.state().colors.other_colors.join(", ")
        );
        Ok(())
    }
}

impl RecentColorsArgs {
    /// Execute the recents command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let session = open_session(config)?;
        let colors = session.recent_colors().to_vec();
        let response = RecentColorsResponse {
            count: colors.len(),
            colors,
        };

        if self.json {
            println!("{}", serde_json::to_string(&response)?);
        } else if response.count == 0 {
            println!("No recent colors.");
        } else {
            for color in response.colors {
                println!("{color}");
            }
        }

        Ok(())
    }
}
