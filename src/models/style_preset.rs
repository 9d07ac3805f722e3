//! Style preset model: a named prompt hint describing slide tone.

use serde::{Deserialize, Serialize};

/// A named reusable text hint describing the tone of a deck.
///
/// Lifecycle mirrors [`super::Palette`]: defaults are immutable with
/// stable ids (`style-default-<n>`), custom presets can only be deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePreset {
    /// Unique id across defaults and custom entries
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text direction fed into the composed prompt
    pub prompt_hint: String,
    /// True for user-created presets
    pub is_custom: bool,
}

impl StylePreset {
    /// Creates a custom style preset with a freshly generated id.
    #[must_use]
    pub fn custom(name: impl Into<String>, prompt_hint: impl Into<String>) -> Self {
        Self {
            id: super::make_id("style-custom"),
            name: name.into(),
            prompt_hint: prompt_hint.into(),
            is_custom: true,
        }
    }
}
