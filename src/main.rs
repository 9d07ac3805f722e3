//! Slide Prompt Studio - slide-deck styling prompt generator.
//!
//! Composes structured prompts for slide generation from a persistent
//! customization state: color palettes, style presets, and tag
//! categories. All customizations survive across runs and migrate
//! forward from older storage layouts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use slideprompt::cli::{
    CategoryArgs, ColorArgs, ConfigArgs, PaletteArgs, ResetArgs, ShowArgs, StyleArgs,
};
use slideprompt::config::Config;
use slideprompt::constants::APP_BINARY_NAME;

/// Slide Prompt Studio - slide-deck styling prompt generator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Customization data directory (overrides the configured one)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose the prompt from the current customization state
    Show(ShowArgs),
    /// Manage color palettes
    Palette(PaletteArgs),
    /// Manage style presets
    Style(StyleArgs),
    /// Manage tag categories and their selections
    Category(CategoryArgs),
    /// Manage the working colors
    Color(ColorArgs),
    /// Manage application configuration
    Config(ConfigArgs),
    /// Discard all customizations
    Reset(ResetArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e}");
            eprintln!("Falling back to defaults.");
            Config::new()
        }
    };
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = Some(data_dir);
    }

    match cli.command {
        Command::Show(args) => args.execute(&config),
        Command::Palette(args) => args.execute(&config),
        Command::Style(args) => args.execute(&config),
        Command::Category(args) => args.execute(&config),
        Command::Color(args) => args.execute(&config),
        Command::Config(args) => args.execute(&config),
        Command::Reset(args) => args.execute(&config),
    }
}
