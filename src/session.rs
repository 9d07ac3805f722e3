//! Working-state controller.
//!
//! `Session` owns the reconciled customization state and the store it
//! came from. Every mutating command updates the in-memory state, then
//! re-saves all slices; execution is single-threaded, so each command
//! persists one consistent snapshot.

use anyhow::{anyhow, bail, ensure, Result};

use crate::models::{
    normalize_hex_color, sanitize_selections, CategoryTemplate, ColorChannel, Palette, StylePreset,
};
use crate::prompt::{build_prompt_preview, PromptCopy, PromptInput};
use crate::store::{CustomizationStore, LoadedCustomizationState, RECENT_COLORS_LIMIT};

/// Controller over the loaded customization state.
pub struct Session {
    store: CustomizationStore,
    state: LoadedCustomizationState,
    recent_colors: Vec<String>,
}

impl Session {
    /// Loads state from the store and starts a session over it.
    #[must_use]
    pub fn new(store: CustomizationStore) -> Self {
        let state = store.load();
        let recent_colors = store.load_recent_colors();
        Self {
            store,
            state,
            recent_colors,
        }
    }

    /// The current working state.
    #[must_use]
    pub fn state(&self) -> &LoadedCustomizationState {
        &self.state
    }

    /// Recently used colors, most recent first.
    #[must_use]
    pub fn recent_colors(&self) -> &[String] {
        &self.recent_colors
    }

    /// The currently selected palette. Load and every mutation keep the
    /// selected id resolvable, so this never misses.
    #[must_use]
    pub fn selected_palette(&self) -> &Palette {
        self.state
            .palettes
            .iter()
            .find(|p| p.id == self.state.selected_palette_id)
            .unwrap_or(&self.state.palettes[0])
    }

    /// The currently selected style preset.
    #[must_use]
    pub fn selected_style(&self) -> &StylePreset {
        self.state
            .styles
            .iter()
            .find(|s| s.id == self.state.selected_style_id)
            .unwrap_or(&self.state.styles[0])
    }

    /// Selects a palette and adopts its colors as the working colors.
    pub fn apply_palette(&mut self, palette_id: &str) -> Result<()> {
        let palette = self
            .state
            .palettes
            .iter()
            .find(|p| p.id == palette_id)
            .ok_or_else(|| anyhow!("Unknown palette: {palette_id}"))?;
        self.state.selected_palette_id = palette.id.clone();
        self.state.colors = palette.colors.clone();
        self.persist();
        Ok(())
    }

    /// Saves the current working colors as a new custom palette and
    /// selects it. Returns the new palette id.
    pub fn add_palette(&mut self, name: &str) -> Result<String> {
        let name = name.trim();
        ensure!(!name.is_empty(), "Palette name cannot be empty");
        let palette = Palette::custom(name, self.state.colors.clone());
        let id = palette.id.clone();
        self.state.palettes.push(palette);
        self.state.selected_palette_id = id.clone();
        self.persist();
        Ok(id)
    }

    /// Deletes a custom palette. When it was selected, selection and
    /// colors fall back to the first default palette.
    pub fn delete_palette(&mut self, palette_id: &str) -> Result<()> {
        let Some(palette) = self.state.palettes.iter().find(|p| p.id == palette_id) else {
            bail!("Unknown palette: {palette_id}");
        };
        ensure!(palette.is_custom, "Built-in palettes cannot be deleted");

        self.state.palettes.retain(|p| p.id != palette_id);
        if self.state.selected_palette_id == palette_id {
            let fallback = self.store.catalog().first_palette();
            self.state.selected_palette_id = fallback.id.clone();
            self.state.colors = fallback.colors.clone();
        }
        self.persist();
        Ok(())
    }

    /// Selects a style preset.
    pub fn select_style(&mut self, style_id: &str) -> Result<()> {
        ensure!(
            self.state.styles.iter().any(|s| s.id == style_id),
            "Unknown style preset: {style_id}"
        );
        self.state.selected_style_id = style_id.to_string();
        self.persist();
        Ok(())
    }

    /// Creates a custom style preset and selects it. Returns the new id.
    pub fn add_style(&mut self, name: &str, hint: &str) -> Result<String> {
        let name = name.trim();
        let hint = hint.trim();
        ensure!(!name.is_empty(), "Style name cannot be empty");
        ensure!(!hint.is_empty(), "Style hint cannot be empty");
        let style = StylePreset::custom(name, hint);
        let id = style.id.clone();
        self.state.styles.push(style);
        self.state.selected_style_id = id.clone();
        self.persist();
        Ok(id)
    }

    /// Deletes a custom style preset, falling back to the first default
    /// preset when it was selected.
    pub fn delete_style(&mut self, style_id: &str) -> Result<()> {
        let Some(style) = self.state.styles.iter().find(|s| s.id == style_id) else {
            bail!("Unknown style preset: {style_id}");
        };
        ensure!(style.is_custom, "Built-in style presets cannot be deleted");

        self.state.styles.retain(|s| s.id != style_id);
        if self.state.selected_style_id == style_id {
            self.state.selected_style_id = self.store.catalog().first_style().id.clone();
        }
        self.persist();
        Ok(())
    }

    /// Creates a custom category with no options. Returns the new id.
    pub fn add_category(&mut self, name: &str, multi: bool) -> Result<String> {
        let name = name.trim();
        ensure!(!name.is_empty(), "Category name cannot be empty");
        let category = CategoryTemplate::custom(name, multi);
        let id = category.id.clone();
        self.state.categories.push(category);
        self.resanitize();
        self.persist();
        Ok(id)
    }

    /// Renames a category. Allowed on defaults as well as custom ones.
    pub fn rename_category(&mut self, category_id: &str, name: &str) -> Result<()> {
        let name = name.trim();
        ensure!(!name.is_empty(), "Category name cannot be empty");
        let category = self.category_mut(category_id)?;
        category.name = name.to_string();
        self.persist();
        Ok(())
    }

    /// Switches a category between multi- and single-select. Shrinking
    /// to single-select truncates its selection to one option.
    pub fn set_category_multi(&mut self, category_id: &str, multi: bool) -> Result<()> {
        let category = self.category_mut(category_id)?;
        category.multi = multi;
        self.resanitize();
        self.persist();
        Ok(())
    }

    /// Deletes a custom category and its selections.
    pub fn delete_category(&mut self, category_id: &str) -> Result<()> {
        let Some(category) = self.state.categories.iter().find(|c| c.id == category_id) else {
            bail!("Unknown category: {category_id}");
        };
        ensure!(category.is_custom, "Built-in categories cannot be deleted");

        self.state.categories.retain(|c| c.id != category_id);
        self.state.selections.remove(category_id);
        self.resanitize();
        self.persist();
        Ok(())
    }

    /// Adds an option to a category. A duplicate label is a no-op.
    pub fn add_option(&mut self, category_id: &str, label: &str) -> Result<()> {
        let label = label.trim();
        ensure!(!label.is_empty(), "Option label cannot be empty");
        let category = self.category_mut(category_id)?;
        category.add_option(label);
        self.persist();
        Ok(())
    }

    /// Removes an option from a category and purges it from selections.
    pub fn remove_option(&mut self, category_id: &str, label: &str) -> Result<()> {
        let category = self.category_mut(category_id)?;
        ensure!(
            category.remove_option(label),
            "Category has no option: {label}"
        );
        self.resanitize();
        self.persist();
        Ok(())
    }

    /// Renames the option at `index`. A selection of the old label no
    /// longer matches any option and is dropped by sanitization.
    pub fn rename_option(&mut self, category_id: &str, index: usize, label: &str) -> Result<()> {
        let label = label.trim();
        ensure!(!label.is_empty(), "Option label cannot be empty");
        let category = self.category_mut(category_id)?;
        ensure!(
            category.rename_option(index, label),
            "Category has no option at index {index}"
        );
        self.resanitize();
        self.persist();
        Ok(())
    }

    /// Toggles an option in a category's selection.
    ///
    /// Multi-select categories toggle the option in and out of the list.
    /// Single-select categories clear the selection when the option was
    /// already picked and replace it otherwise.
    pub fn toggle_option(&mut self, category_id: &str, option: &str) -> Result<()> {
        let Some(category) = self.state.categories.iter().find(|c| c.id == category_id) else {
            bail!("Unknown category: {category_id}");
        };
        ensure!(
            category.options.iter().any(|o| o == option),
            "Category has no option: {option}"
        );

        let multi = category.multi;
        let picked = self.state.selections.entry(category_id.to_string()).or_default();
        if multi {
            if let Some(pos) = picked.iter().position(|item| item == option) {
                picked.remove(pos);
            } else {
                picked.push(option.to_string());
            }
        } else if picked.iter().any(|item| item == option) {
            picked.clear();
        } else {
            *picked = vec![option.to_string()];
        }
        self.persist();
        Ok(())
    }

    /// Sets one color channel from raw user input. Returns the
    /// normalized value.
    pub fn set_color(&mut self, channel: ColorChannel, raw: &str) -> Result<String> {
        let Some(normalized) = normalize_hex_color(raw) else {
            bail!("Invalid hex color: {raw}");
        };
        self.state.colors.set_channel(channel, normalized.clone());
        self.remember_color(&normalized);
        self.persist();
        Ok(normalized)
    }

    /// Adds an accent color from raw user input. Returns the normalized
    /// value; adding a color already present is a no-op.
    pub fn add_other_color(&mut self, raw: &str) -> Result<String> {
        let Some(normalized) = normalize_hex_color(raw) else {
            bail!("Invalid hex color: {raw}");
        };
        self.state.colors.push_other_color(normalized.clone());
        self.remember_color(&normalized);
        self.persist();
        Ok(normalized)
    }

    /// Removes an accent color by value.
    pub fn remove_other_color(&mut self, color: &str) -> Result<()> {
        ensure!(
            self.state.colors.remove_other_color(color),
            "No such accent color: {color}"
        );
        self.persist();
        Ok(())
    }

    /// Reorders an accent color to the position of another one.
    pub fn move_other_color(&mut self, from: &str, to: &str) -> Result<()> {
        ensure!(
            self.state.colors.move_other_color(from, to),
            "Cannot move accent color {from} to {to}"
        );
        self.persist();
        Ok(())
    }

    /// Discards all customizations and reloads the baseline state.
    /// Recent colors survive a reset.
    pub fn reset_all(&mut self) {
        self.store.reset();
        self.state = self.store.load();
    }

    /// Composes the prompt text for the given output language.
    ///
    /// # Errors
    /// Only fails when the embedded copy data is unusable; the
    /// composition itself cannot fail.
    pub fn prompt_preview(&self, language: &str) -> Result<String> {
        let copy = PromptCopy::for_language(language)?;
        let palette = self.selected_palette();
        let style = self.selected_style();
        let input = PromptInput {
            language,
            palette_name: &palette.name,
            style_name: &style.name,
            style_hint: &style.prompt_hint,
            colors: &self.state.colors,
            categories: &self.state.categories,
            selections: &self.state.selections,
        };
        Ok(build_prompt_preview(&input, &copy))
    }

    fn category_mut(&mut self, category_id: &str) -> Result<&mut CategoryTemplate> {
        self.state
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| anyhow!("Unknown category: {category_id}"))
    }

    fn resanitize(&mut self) {
        self.state.selections = sanitize_selections(&self.state.selections, &self.state.categories);
    }

    fn remember_color(&mut self, color: &str) {
        self.recent_colors.retain(|item| item != color);
        self.recent_colors.insert(0, color.to_string());
        self.recent_colors.truncate(RECENT_COLORS_LIMIT);
        self.store.save_recent_colors(&self.recent_colors);
    }

    fn persist(&self) {
        self.store.save(&self.state);
    }
}
