//! Color set model and hex color normalization.

use serde::{Deserialize, Serialize};

/// The working colors of a slide deck.
///
/// Four required channels plus an ordered list of extra accent colors.
/// All values are hex strings of the form `#RRGGBB`; stored data that
/// predates validation is tolerated on load, but new input must pass
/// [`normalize_hex_color`] before it enters a `ColorSet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSet {
    /// Slide background color
    pub background: String,
    /// Body text color
    pub text: String,
    /// Title text color
    pub title: String,
    /// Highlight/accent color
    pub highlight: String,
    /// Additional accent colors, order-significant, no duplicates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_colors: Vec<String>,
}

impl ColorSet {
    /// Appends an extra color if it is not already present.
    ///
    /// Returns `true` if the color was added.
    pub fn push_other_color(&mut self, color: impl Into<String>) -> bool {
        let color = color.into();
        if self.other_colors.contains(&color) {
            return false;
        }
        self.other_colors.push(color);
        true
    }

    /// Removes an extra color by value. Returns `true` if it was present.
    pub fn remove_other_color(&mut self, color: &str) -> bool {
        let before = self.other_colors.len();
        self.other_colors.retain(|item| item != color);
        self.other_colors.len() != before
    }

    /// The current value of a named channel.
    #[must_use]
    pub fn channel(&self, channel: ColorChannel) -> &str {
        match channel {
            ColorChannel::Background => &self.background,
            ColorChannel::Text => &self.text,
            ColorChannel::Title => &self.title,
            ColorChannel::Highlight => &self.highlight,
        }
    }

    /// Replaces the value of a named channel.
    pub fn set_channel(&mut self, channel: ColorChannel, value: String) {
        match channel {
            ColorChannel::Background => self.background = value,
            ColorChannel::Text => self.text = value,
            ColorChannel::Title => self.title = value,
            ColorChannel::Highlight => self.highlight = value,
        }
    }

    /// Moves an extra color so it sits at the position of another one.
    ///
    /// Mirrors a drag-and-drop reorder: `from` is removed and re-inserted
    /// at the slot `to` occupied before the removal, so a forward move
    /// lands after `to`. Returns `false` if either color is missing or
    /// both are the same.
    pub fn move_other_color(&mut self, from: &str, to: &str) -> bool {
        if from == to {
            return false;
        }
        let Some(from_idx) = self.other_colors.iter().position(|c| c == from) else {
            return false;
        };
        let Some(to_idx) = self.other_colors.iter().position(|c| c == to) else {
            return false;
        };
        let moved = self.other_colors.remove(from_idx);
        self.other_colors.insert(to_idx, moved);
        true
    }
}

/// Named color channel of a [`ColorSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    /// Slide background
    Background,
    /// Body text
    Text,
    /// Title text
    Title,
    /// Highlight/accent
    Highlight,
}

impl ColorChannel {
    /// Parses a channel from its lowercase name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "background" => Some(Self::Background),
            "text" => Some(Self::Text),
            "title" => Some(Self::Title),
            "highlight" => Some(Self::Highlight),
            _ => None,
        }
    }

    /// The lowercase channel name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Text => "text",
            Self::Title => "title",
            Self::Highlight => "highlight",
        }
    }
}

/// Normalizes a user-entered hex color to `#RRGGBB` (uppercase).
///
/// Accepts 3- or 6-digit hex, with or without a leading `#`,
/// case-insensitive; 3-digit input is expanded by doubling each digit.
/// Returns `None` for anything else. This is the single authority for
/// "is this a usable color" throughout the crate.
///
/// # Examples
///
/// ```
/// use slideprompt::models::normalize_hex_color;
///
/// assert_eq!(normalize_hex_color("abc"), Some("#AABBCC".to_string()));
/// assert_eq!(normalize_hex_color("#1a2b3c"), Some("#1A2B3C".to_string()));
/// assert_eq!(normalize_hex_color("xyz"), None);
/// ```
#[must_use]
pub fn normalize_hex_color(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            Some(format!("#{}", expanded.to_ascii_uppercase()))
        }
        6 => Some(format!("#{}", digits.to_ascii_uppercase())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_six_digit() {
        assert_eq!(normalize_hex_color("#1a2b3c"), Some("#1A2B3C".to_string()));
        assert_eq!(normalize_hex_color("1A2B3C"), Some("#1A2B3C".to_string()));
        assert_eq!(normalize_hex_color("  #ffffff "), Some("#FFFFFF".to_string()));
    }

    #[test]
    fn test_normalize_three_digit_expands() {
        assert_eq!(normalize_hex_color("abc"), Some("#AABBCC".to_string()));
        assert_eq!(normalize_hex_color("#f0a"), Some("#FF00AA".to_string()));
    }

    #[test]
    fn test_normalize_rejects_invalid() {
        assert_eq!(normalize_hex_color(""), None);
        assert_eq!(normalize_hex_color("   "), None);
        assert_eq!(normalize_hex_color("#"), None);
        assert_eq!(normalize_hex_color("xyz"), None);
        assert_eq!(normalize_hex_color("#12345"), None);
        assert_eq!(normalize_hex_color("#1234567"), None);
        assert_eq!(normalize_hex_color("12 34 56"), None);
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["abc", "#1a2b3c", "FFFFFF", "#0f0"] {
            let once = normalize_hex_color(input).unwrap();
            let twice = normalize_hex_color(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_push_other_color_dedupes() {
        let mut colors = sample();
        assert!(colors.push_other_color("#AABBCC"));
        assert!(!colors.push_other_color("#AABBCC"));
        assert_eq!(colors.other_colors, vec!["#AABBCC".to_string()]);
    }

    #[test]
    fn test_move_other_color_reorders() {
        let mut colors = sample();
        colors.push_other_color("#111111");
        colors.push_other_color("#222222");
        colors.push_other_color("#333333");

        assert!(colors.move_other_color("#333333", "#111111"));
        assert_eq!(
            colors.other_colors,
            vec!["#333333", "#111111", "#222222"]
        );

        // Forward moves land on the target's pre-removal slot, i.e.
        // after the target once the list has closed up
        assert!(colors.move_other_color("#333333", "#222222"));
        assert_eq!(
            colors.other_colors,
            vec!["#111111", "#222222", "#333333"]
        );

        assert!(!colors.move_other_color("#333333", "#333333"));
        assert!(!colors.move_other_color("#999999", "#111111"));
    }

    #[test]
    fn test_serde_omits_empty_other_colors() {
        let colors = sample();
        let json = serde_json::to_string(&colors).unwrap();
        assert!(!json.contains("otherColors"));

        let parsed: ColorSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, colors);
    }

    fn sample() -> ColorSet {
        ColorSet {
            background: "#FFF1F5".to_string(),
            text: "#4A1D2D".to_string(),
            title: "#B4234E".to_string(),
            highlight: "#F97393".to_string(),
            other_colors: Vec::new(),
        }
    }
}
