//! CLI command handlers for Slide Prompt Studio.
//!
//! Headless, scriptable access to the customization store and the
//! prompt composer for shell use and automation.

pub mod category;
pub mod color;
pub mod config;
pub mod palette;
pub mod reset;
pub mod show;
pub mod style;

// Re-export types used by main.rs
pub use category::CategoryArgs;
pub use color::ColorArgs;
pub use config::ConfigArgs;
pub use palette::PaletteArgs;
pub use reset::ResetArgs;
pub use show::ShowArgs;
pub use style::StyleArgs;

use anyhow::Result;

use crate::catalog::DefaultCatalog;
use crate::session::Session;
use crate::storage::FileStorage;
use crate::store::CustomizationStore;

/// Opens a session backed by the configured data directory.
pub fn open_session(config: &crate::config::Config) -> Result<Session> {
    let catalog = DefaultCatalog::load()?;
    let storage = FileStorage::open(config.data_dir()?)?;
    Ok(Session::new(CustomizationStore::new(
        catalog,
        Box::new(storage),
    )))
}
