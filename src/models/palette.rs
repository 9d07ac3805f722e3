//! Palette model: a named, reusable color set.

use serde::{Deserialize, Serialize};

use super::ColorSet;

/// A named reusable [`ColorSet`].
///
/// Default palettes come from the built-in catalog with stable ids
/// (`palette-default-<n>`) and can never be mutated or deleted. Custom
/// palettes are created from the current working colors and can only be
/// deleted, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Unique id across defaults and custom entries
    pub id: String,
    /// Display name
    pub name: String,
    /// The palette colors
    pub colors: ColorSet,
    /// True for user-created palettes
    pub is_custom: bool,
}

impl Palette {
    /// Creates a custom palette with a freshly generated id.
    #[must_use]
    pub fn custom(name: impl Into<String>, colors: ColorSet) -> Self {
        Self {
            id: super::make_id("palette-custom"),
            name: name.into(),
            colors,
            is_custom: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_palette_flags_and_prefix() {
        let colors = ColorSet {
            background: "#FFFFFF".to_string(),
            text: "#000000".to_string(),
            title: "#111111".to_string(),
            highlight: "#222222".to_string(),
            other_colors: Vec::new(),
        };
        let palette = Palette::custom("My Palette", colors.clone());
        assert!(palette.is_custom);
        assert!(palette.id.starts_with("palette-custom-"));
        assert_eq!(palette.name, "My Palette");
        assert_eq!(palette.colors, colors);
    }

    #[test]
    fn test_serde_round_trip_camel_case() {
        let palette = Palette {
            id: "palette-default-1".to_string(),
            name: "Garnet Sunrise".to_string(),
            colors: ColorSet {
                background: "#FFF1F5".to_string(),
                text: "#4A1D2D".to_string(),
                title: "#B4234E".to_string(),
                highlight: "#F97393".to_string(),
                other_colors: vec!["#FDE2E4".to_string()],
            },
            is_custom: false,
        };
        let json = serde_json::to_string(&palette).unwrap();
        assert!(json.contains("\"isCustom\":false"));
        assert!(json.contains("\"otherColors\""));

        let parsed: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, palette);
    }
}
