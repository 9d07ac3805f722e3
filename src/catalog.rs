//! Built-in default catalog of palettes, style presets, and categories.
//!
//! The catalog ships embedded in the binary and is the immutable baseline
//! every load merges custom entries onto. Its `settingsVersion` tag
//! changes whenever the shipped content changes; the store uses it to
//! detect catalog drift between builds.

use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;

use crate::models::{CategoryTemplate, ColorSet, Palette, StylePreset};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogData {
    settings_version: String,
    palettes: Vec<PaletteEntry>,
    styles: Vec<StyleEntry>,
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct PaletteEntry {
    name: String,
    colors: ColorSet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StyleEntry {
    name: String,
    prompt_hint: String,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    id: String,
    name: String,
    multi: bool,
    options: Vec<String>,
}

/// The immutable built-in catalog.
///
/// Default palettes and styles receive stable generated ids
/// (`palette-default-<n>` / `style-default-<n>`); categories carry
/// explicit ids in the embedded data. All accessors return clones so
/// downstream mutation can never alias the catalog.
#[derive(Debug, Clone)]
pub struct DefaultCatalog {
    settings_version: String,
    palettes: Vec<Palette>,
    styles: Vec<StylePreset>,
    categories: Vec<CategoryTemplate>,
}

impl DefaultCatalog {
    /// Loads the catalog from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON cannot be parsed, any list is empty,
    /// or category ids collide.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("data/default_catalog.json");
        let data: CatalogData =
            serde_json::from_str(json_data).context("Failed to parse embedded default catalog")?;

        ensure!(!data.palettes.is_empty(), "Default catalog has no palettes");
        ensure!(!data.styles.is_empty(), "Default catalog has no style presets");
        ensure!(!data.categories.is_empty(), "Default catalog has no categories");

        let mut seen = HashSet::new();
        for entry in &data.categories {
            ensure!(
                seen.insert(entry.id.as_str()),
                "Duplicate category id in default catalog: {}",
                entry.id
            );
        }

        let palettes = data
            .palettes
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Palette {
                id: format!("palette-default-{}", index + 1),
                name: entry.name,
                colors: entry.colors,
                is_custom: false,
            })
            .collect();

        let styles = data
            .styles
            .into_iter()
            .enumerate()
            .map(|(index, entry)| StylePreset {
                id: format!("style-default-{}", index + 1),
                name: entry.name,
                prompt_hint: entry.prompt_hint,
                is_custom: false,
            })
            .collect();

        let categories = data
            .categories
            .into_iter()
            .map(|entry| CategoryTemplate {
                id: entry.id,
                name: entry.name,
                multi: entry.multi,
                options: entry.options,
                is_custom: false,
            })
            .collect();

        Ok(Self {
            settings_version: data.settings_version,
            palettes,
            styles,
            categories,
        })
    }

    /// The version tag of the shipped catalog content.
    #[must_use]
    pub fn settings_version(&self) -> &str {
        &self.settings_version
    }

    /// Cloned list of default palettes, in catalog order.
    #[must_use]
    pub fn palettes(&self) -> Vec<Palette> {
        self.palettes.clone()
    }

    /// Cloned list of default style presets, in catalog order.
    #[must_use]
    pub fn styles(&self) -> Vec<StylePreset> {
        self.styles.clone()
    }

    /// Cloned list of default categories, in catalog order.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryTemplate> {
        self.categories.clone()
    }

    /// The first default palette (the selection fallback).
    #[must_use]
    pub fn first_palette(&self) -> &Palette {
        // Non-emptiness is checked at load time
        &self.palettes[0]
    }

    /// The first default style preset (the selection fallback).
    #[must_use]
    pub fn first_style(&self) -> &StylePreset {
        &self.styles[0]
    }
}
