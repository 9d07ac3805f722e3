//! Prompt composition from reconciled customization state.
//!
//! `build_prompt_preview` is pure: given the working state and a set of
//! localized field labels it always produces a valid multi-line block,
//! even with zero selections.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::models::{CategoryTemplate, ColorSet, SelectionMap};

/// Localized labels for the per-channel color entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorKeyLabels {
    /// Label for the background channel.
    pub background: String,
    /// Label for the body text channel.
    pub text: String,
    /// Label for the title channel.
    pub title: String,
    /// Label for the highlight channel.
    pub highlight: String,
    /// Label for the accent color list.
    pub other_colors: String,
}

/// Localized field labels for one output language.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptCopy {
    /// Label of the output-language line.
    pub output_language: String,
    /// Label of the palette line.
    pub palette: String,
    /// Label of the style-preset line.
    pub style_preset: String,
    /// Label of the style-direction line.
    pub style_direction: String,
    /// Label of the colors line.
    pub colors: String,
    /// Per-channel labels inside the colors line.
    pub color_keys: ColorKeyLabels,
    /// Placeholder when the accent color list is empty.
    pub none: String,
}

const FALLBACK_LANGUAGE: &str = "en";

fn load_copy_table() -> Result<BTreeMap<String, PromptCopy>> {
    let json_data = include_str!("data/prompt_copy.json");
    serde_json::from_str(json_data).context("Failed to parse embedded prompt copy")
}

impl PromptCopy {
    /// Returns the copy record for `language`, falling back to English
    /// for unknown tags.
    ///
    /// # Errors
    /// Returns an error if the embedded copy data is unparsable or has
    /// no English entry.
    pub fn for_language(language: &str) -> Result<Self> {
        let mut table = load_copy_table()?;
        if let Some(copy) = table.remove(language) {
            return Ok(copy);
        }
        table
            .remove(FALLBACK_LANGUAGE)
            .context("Embedded prompt copy has no fallback language")
    }

    /// Language tags with a shipped copy record.
    ///
    /// # Errors
    /// Returns an error if the embedded copy data is unparsable.
    pub fn supported_languages() -> Result<Vec<String>> {
        Ok(load_copy_table()?.into_keys().collect())
    }
}

/// Everything the composer reads. Borrowed from the working state; the
/// composer never mutates or stores any of it.
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    /// Output language tag to request in the prompt.
    pub language: &'a str,
    /// Display name of the resolved palette.
    pub palette_name: &'a str,
    /// Display name of the resolved style preset.
    pub style_name: &'a str,
    /// Hint text of the resolved style preset.
    pub style_hint: &'a str,
    /// Current working colors.
    pub colors: &'a ColorSet,
    /// Merged category list, in display order.
    pub categories: &'a [CategoryTemplate],
    /// Sanitized selection map.
    pub selections: &'a SelectionMap,
}

/// Composes the output prompt text.
///
/// One line per fixed field (output language, palette, colors, style
/// preset, style direction), then one `<category name>: <options>` line
/// per category with at least one selection, in category list order.
/// Categories with no selection are omitted entirely.
#[must_use]
pub fn build_prompt_preview(input: &PromptInput<'_>, copy: &PromptCopy) -> String {
    let colors = input.colors;
    let keys = &copy.color_keys;
    let other_colors = if colors.other_colors.is_empty() {
        copy.none.clone()
    } else {
        colors.other_colors.join(", ")
    };

    let mut lines = vec![
        format!("{}: {}", copy.output_language, input.language),
        format!("{}: {}", copy.palette, input.palette_name),
        format!(
            "{}: {} {}, {} {}, {} {}, {} {}, {} {}",
            copy.colors,
            keys.background,
            colors.background,
            keys.text,
            colors.text,
            keys.title,
            colors.title,
            keys.highlight,
            colors.highlight,
            keys.other_colors,
            other_colors,
        ),
        format!("{}: {}", copy.style_preset, input.style_name),
        format!("{}: {}", copy.style_direction, input.style_hint),
    ];

    for category in input.categories {
        if let Some(picked) = input.selections.get(&category.id) {
            if !picked.is_empty() {
                lines.push(format!("{}: {}", category.name, picked.join(", ")));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_colors() -> ColorSet {
        ColorSet {
            background: "#FFF1F5".to_string(),
            text: "#4A1D2D".to_string(),
            title: "#B4234E".to_string(),
            highlight: "#F97393".to_string(),
            other_colors: vec!["#FDE2E4".to_string(), "#7A2846".to_string()],
        }
    }

    fn sample_categories() -> Vec<CategoryTemplate> {
        vec![
            CategoryTemplate {
                id: "mood".to_string(),
                name: "Mood".to_string(),
                multi: true,
                options: vec!["Calm".to_string(), "Luxury".to_string()],
                is_custom: false,
            },
            CategoryTemplate {
                id: "purpose".to_string(),
                name: "Purpose".to_string(),
                multi: true,
                options: vec!["Pitch".to_string()],
                is_custom: false,
            },
        ]
    }

    #[test]
    fn test_line_order_and_labels() {
        let colors = sample_colors();
        let categories = sample_categories();
        let selections = SelectionMap::new();
        let copy = PromptCopy::for_language("en").unwrap();
        let input = PromptInput {
            language: "en",
            palette_name: "Garnet Sunrise",
            style_name: "Executive Insight",
            style_hint: "Sharp business framing with concise decisions and outcomes.",
            colors: &colors,
            categories: &categories,
            selections: &selections,
        };

        let prompt = build_prompt_preview(&input, &copy);
        let lines: Vec<&str> = prompt.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Output Language: en");
        assert_eq!(lines[1], "Palette: Garnet Sunrise");
        assert_eq!(
            lines[2],
            "Colors: background #FFF1F5, text #4A1D2D, title #B4234E, \
             highlight #F97393, other colors #FDE2E4, #7A2846"
        );
        assert_eq!(lines[3], "Style Preset: Executive Insight");
        assert!(lines[4].starts_with("Style Direction: Sharp business"));
    }

    #[test]
    fn test_populated_category_gets_one_line_empty_gets_none() {
        let colors = sample_colors();
        let categories = sample_categories();
        let mut selections = SelectionMap::new();
        selections.insert(
            "mood".to_string(),
            vec!["Calm".to_string(), "Luxury".to_string()],
        );
        selections.insert("purpose".to_string(), Vec::new());
        let copy = PromptCopy::for_language("en").unwrap();
        let input = PromptInput {
            language: "en",
            palette_name: "Garnet Sunrise",
            style_name: "Story Arc",
            style_hint: "Narrative-first flow.",
            colors: &colors,
            categories: &categories,
            selections: &selections,
        };

        let prompt = build_prompt_preview(&input, &copy);
        assert_eq!(prompt.lines().filter(|l| l.starts_with("Mood:")).count(), 1);
        assert!(prompt.contains("Mood: Calm, Luxury"));
        assert!(!prompt.contains("Purpose:"));
    }

    #[test]
    fn test_empty_other_colors_uses_placeholder() {
        let mut colors = sample_colors();
        colors.other_colors.clear();
        let categories = sample_categories();
        let selections = SelectionMap::new();
        let copy = PromptCopy::for_language("en").unwrap();
        let input = PromptInput {
            language: "en",
            palette_name: "P",
            style_name: "S",
            style_hint: "H",
            colors: &colors,
            categories: &categories,
            selections: &selections,
        };

        let prompt = build_prompt_preview(&input, &copy);
        assert!(prompt.contains("other colors none"));
    }

    #[test]
    fn test_no_trailing_boilerplate() {
        let colors = sample_colors();
        let categories = sample_categories();
        let selections = SelectionMap::new();
        let copy = PromptCopy::for_language("en").unwrap();
        let input = PromptInput {
            language: "en",
            palette_name: "P",
            style_name: "S",
            style_hint: "H",
            colors: &colors,
            categories: &categories,
            selections: &selections,
        };

        let prompt = build_prompt_preview(&input, &copy);
        assert!(!prompt.contains("Output Requirements"));
        assert!(!prompt.ends_with('\n'));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let copy = PromptCopy::for_language("ko").unwrap();
        assert_eq!(copy.palette, "Palette");
    }

    #[test]
    fn test_localized_copy_loads() {
        let copy = PromptCopy::for_language("zh-TW").unwrap();
        assert_eq!(copy.palette, "調色盤");
        let languages = PromptCopy::supported_languages().unwrap();
        assert!(languages.iter().any(|l| l == "en"));
        assert!(languages.iter().any(|l| l == "ja"));
    }
}
