//! Data models for palettes, style presets, categories, and colors.
//!
//! This module contains the core data structures used throughout the
//! application. Models are designed to be independent of UI and
//! persistence logic.

pub mod category;
pub mod color_set;
pub mod palette;
pub mod style_preset;

// Re-export all model types
pub use category::{sanitize_selections, CategoryTemplate, SelectionMap};
pub use color_set::{normalize_hex_color, ColorChannel, ColorSet};
pub use palette::Palette;
pub use style_preset::StylePreset;

use chrono::Utc;
use uuid::Uuid;

/// Generates a practically unique entity id from a prefix, the creation
/// timestamp, and a short random suffix (e.g. `palette-custom-1724380800000-a1b2c3`).
#[must_use]
pub fn make_id(prefix: &str) -> String {
    let stamp = Utc::now().timestamp_millis();
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(6).collect();
    format!("{prefix}-{stamp}-{suffix}")
}
