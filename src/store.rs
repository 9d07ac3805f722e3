//! Customization store: load, merge, migrate, and save persisted state.
//!
//! All reads and writes of the keyed persistence medium flow through this
//! module. The load path reconciles built-in defaults with user-created
//! entries across storage generations; the save path re-persists every
//! slice from one consistent in-memory snapshot. Persistence corruption
//! is never fatal: a slice that fails to parse degrades to its empty
//! value without blocking the others.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::catalog::DefaultCatalog;
use crate::models::{
    normalize_hex_color, sanitize_selections, CategoryTemplate, ColorSet, Palette, SelectionMap,
    StylePreset,
};
use crate::storage::Storage;

/// Key holding user-created palettes (`isCustom == true` only).
pub const CUSTOM_PALETTES_KEY: &str = "slide-style-prompt-custom-palettes";
/// Key holding user-created style presets.
pub const CUSTOM_STYLES_KEY: &str = "slide-style-prompt-custom-styles";
/// Key holding the full category list (default categories included,
/// because category edits such as renames can apply to defaults).
pub const CUSTOM_CATEGORIES_KEY: &str = "slide-style-prompt-custom-categories";
/// Key holding the current working choices snapshot.
pub const CUSTOM_STATE_KEY: &str = "slide-style-prompt-custom-state";
/// Key holding the versioned copy of the shipped catalog (drift detector).
pub const SYSTEM_SETTINGS_KEY: &str = "slide-style-prompt-system-settings";
/// Key holding the recently used color list.
pub const RECENT_COLORS_KEY: &str = "slide-style-prompt-recent-colors";
/// Pre-split single-blob key, retained for migration and as a
/// backward-compat mirror for older readers.
pub const LEGACY_CUSTOMIZATION_KEY: &str = "slide-prompt-glass-customization-v1";

/// Maximum number of recent colors retained.
pub const RECENT_COLORS_LIMIT: usize = 12;

const MODERN_KEYS: [&str; 4] = [
    CUSTOM_PALETTES_KEY,
    CUSTOM_STYLES_KEY,
    CUSTOM_CATEGORIES_KEY,
    CUSTOM_STATE_KEY,
];

/// The reconciled state handed to the application on startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCustomizationState {
    /// Defaults first, then custom palettes
    pub palettes: Vec<Palette>,
    /// Defaults first, then custom style presets
    pub styles: Vec<StylePreset>,
    /// Defaults first, then custom categories
    pub categories: Vec<CategoryTemplate>,
    /// Always resolvable against `palettes`
    pub selected_palette_id: String,
    /// Always resolvable against `styles`
    pub selected_style_id: String,
    /// Current working colors
    pub colors: ColorSet,
    /// Sanitized against `categories`
    pub selections: SelectionMap,
}

/// Persisted snapshot of the current working choices.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedCustomState {
    version: u32,
    selected_palette_id: String,
    selected_style_id: String,
    colors: ColorSet,
    selections: SelectionMap,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSystemSettings {
    version: u32,
    settings_version: String,
    palettes: Vec<Palette>,
    styles: Vec<StylePreset>,
    categories: Vec<CategoryTemplate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingVersions {
    palette_library: String,
    style_presets: String,
    category_tags: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LegacyCustomization {
    version: u32,
    setting_versions: SettingVersions,
    custom_palettes: Vec<Palette>,
    custom_styles: Vec<StylePreset>,
    categories: Vec<CategoryTemplate>,
    selected_palette_id: String,
    selected_style_id: String,
    colors: ColorSet,
    selections: SelectionMap,
}

/// Service owning every read and write of the persistence medium.
///
/// Constructed once at startup with the default catalog and an optional
/// storage medium. Without a medium, `load` returns the deterministic
/// baseline state (the headless/test path) and saves are no-ops.
pub struct CustomizationStore {
    catalog: DefaultCatalog,
    storage: Option<Box<dyn Storage>>,
}

impl CustomizationStore {
    /// Creates a store backed by the given persistence medium.
    #[must_use]
    pub fn new(catalog: DefaultCatalog, storage: Box<dyn Storage>) -> Self {
        Self {
            catalog,
            storage: Some(storage),
        }
    }

    /// Creates a store with no persistence medium.
    #[must_use]
    pub fn headless(catalog: DefaultCatalog) -> Self {
        Self {
            catalog,
            storage: None,
        }
    }

    /// The default catalog this store reconciles against.
    #[must_use]
    pub fn catalog(&self) -> &DefaultCatalog {
        &self.catalog
    }

    /// Loads and reconciles the full customization state.
    ///
    /// Ensures the settings snapshot is current, migrates the legacy
    /// single-blob format on first load, merges defaults with stored
    /// custom entries, and resolves selections so every returned id is
    /// resolvable and every selection references an existing option.
    #[must_use]
    pub fn load(&self) -> LoadedCustomizationState {
        let default_categories = self.catalog.categories();
        let baseline = LoadedCustomizationState {
            palettes: self.catalog.palettes(),
            styles: self.catalog.styles(),
            categories: default_categories.clone(),
            selected_palette_id: self.catalog.first_palette().id.clone(),
            selected_style_id: self.catalog.first_style().id.clone(),
            colors: self.catalog.first_palette().colors.clone(),
            selections: sanitize_selections(&SelectionMap::new(), &default_categories),
        };

        let Some(storage) = self.storage.as_deref() else {
            return baseline;
        };

        self.ensure_settings_snapshot(storage);
        self.migrate_legacy(storage);

        let custom_palettes: Vec<Palette> = load_slice(storage, CUSTOM_PALETTES_KEY, |p: &Palette| p.is_custom);
        let custom_styles: Vec<StylePreset> =
            load_slice(storage, CUSTOM_STYLES_KEY, |s: &StylePreset| s.is_custom);
        let custom_categories: Vec<CategoryTemplate> =
            load_slice(storage, CUSTOM_CATEGORIES_KEY, |c: &CategoryTemplate| c.is_custom);
        let custom_state = storage
            .get(CUSTOM_STATE_KEY)
            .and_then(|raw| parse_custom_state(&raw));

        let palettes = merge_by_id(baseline.palettes, custom_palettes, |p| p.id.clone());
        let styles = merge_by_id(baseline.styles, custom_styles, |s| s.id.clone());
        let categories = merge_by_id(default_categories, custom_categories, |c| c.id.clone());

        let selected_palette_id = custom_state
            .as_ref()
            .map(|state| state.selected_palette_id.clone())
            .filter(|id| palettes.iter().any(|p| &p.id == id))
            .unwrap_or_else(|| palettes[0].id.clone());
        let selected_style_id = custom_state
            .as_ref()
            .map(|state| state.selected_style_id.clone())
            .filter(|id| styles.iter().any(|s| &s.id == id))
            .unwrap_or_else(|| styles[0].id.clone());

        // Stored colors win even when the stored palette id dangled;
        // the palette colors are only the no-snapshot fallback.
        let selected_palette = palettes
            .iter()
            .find(|p| p.id == selected_palette_id)
            .unwrap_or(&palettes[0]);
        let colors = custom_state
            .as_ref()
            .map_or_else(|| selected_palette.colors.clone(), |state| state.colors.clone());

        let selections = sanitize_selections(
            custom_state.map(|state| state.selections).as_ref().unwrap_or(&SelectionMap::new()),
            &categories,
        );

        LoadedCustomizationState {
            palettes,
            styles,
            categories,
            selected_palette_id,
            selected_style_id,
            colors,
            selections,
        }
    }

    /// Persists the full working state.
    ///
    /// Writes the four modern slices, refreshes the settings snapshot,
    /// and mirrors everything into the legacy blob for older readers.
    /// Each write is contained: a failure in one slice never blocks the
    /// others.
    pub fn save(&self, state: &LoadedCustomizationState) {
        let Some(storage) = self.storage.as_deref() else {
            return;
        };

        let custom_palettes: Vec<Palette> =
            state.palettes.iter().filter(|p| p.is_custom).cloned().collect();
        let custom_styles: Vec<StylePreset> =
            state.styles.iter().filter(|s| s.is_custom).cloned().collect();

        write_json(storage, CUSTOM_PALETTES_KEY, &custom_palettes);
        write_json(storage, CUSTOM_STYLES_KEY, &custom_styles);
        // Full category list, custom or not: renames can touch defaults
        write_json(storage, CUSTOM_CATEGORIES_KEY, &state.categories);
        write_json(
            storage,
            CUSTOM_STATE_KEY,
            &PersistedCustomState {
                version: 1,
                selected_palette_id: state.selected_palette_id.clone(),
                selected_style_id: state.selected_style_id.clone(),
                colors: state.colors.clone(),
                selections: state.selections.clone(),
            },
        );

        self.write_settings_snapshot(storage);

        let settings_version = self.catalog.settings_version().to_string();
        write_json(
            storage,
            LEGACY_CUSTOMIZATION_KEY,
            &LegacyCustomization {
                version: 1,
                setting_versions: SettingVersions {
                    palette_library: settings_version.clone(),
                    style_presets: settings_version.clone(),
                    category_tags: settings_version,
                },
                custom_palettes,
                custom_styles,
                categories: state.categories.clone(),
                selected_palette_id: state.selected_palette_id.clone(),
                selected_style_id: state.selected_style_id.clone(),
                colors: state.colors.clone(),
                selections: state.selections.clone(),
            },
        );
    }

    /// Removes every customization slice (settings snapshot and recent
    /// colors stay). The next `load` returns the baseline state.
    pub fn reset(&self) {
        let Some(storage) = self.storage.as_deref() else {
            return;
        };
        for key in MODERN_KEYS {
            let _ = storage.remove(key);
        }
        let _ = storage.remove(LEGACY_CUSTOMIZATION_KEY);
    }

    /// Loads the recent color list: normalized, deduplicated, capped.
    #[must_use]
    pub fn load_recent_colors(&self) -> Vec<String> {
        let Some(raw) = self.storage.as_deref().and_then(|s| s.get(RECENT_COLORS_KEY)) else {
            return Vec::new();
        };
        let Ok(Value::Array(items)) = serde_json::from_str(&raw) else {
            return Vec::new();
        };
        let mut colors = Vec::new();
        for item in items {
            if let Some(normalized) = item.as_str().and_then(normalize_hex_color) {
                if !colors.contains(&normalized) {
                    colors.push(normalized);
                }
            }
        }
        colors.truncate(RECENT_COLORS_LIMIT);
        colors
    }

    /// Persists the recent color list.
    pub fn save_recent_colors(&self, colors: &[String]) {
        if let Some(storage) = self.storage.as_deref() {
            write_json(storage, RECENT_COLORS_KEY, &colors);
        }
    }

    /// Rewrites the settings snapshot when it is missing, unparsable, or
    /// tagged with a different catalog version. The snapshot is never
    /// read back into working state; it only records what this build
    /// shipped so a future load can detect drift.
    fn ensure_settings_snapshot(&self, storage: &dyn Storage) {
        let current = match storage.get(SYSTEM_SETTINGS_KEY) {
            None => false,
            Some(raw) => serde_json::from_str::<Value>(&raw).is_ok_and(|value| {
                value.get("version").and_then(Value::as_u64) == Some(1)
                    && value.get("settingsVersion").and_then(Value::as_str)
                        == Some(self.catalog.settings_version())
            }),
        };
        if !current {
            self.write_settings_snapshot(storage);
        }
    }

    fn write_settings_snapshot(&self, storage: &dyn Storage) {
        write_json(
            storage,
            SYSTEM_SETTINGS_KEY,
            &PersistedSystemSettings {
                version: 1,
                settings_version: self.catalog.settings_version().to_string(),
                palettes: self.catalog.palettes(),
                styles: self.catalog.styles(),
                categories: self.catalog.categories(),
            },
        );
    }

    /// One-time split of the legacy single-blob format into the four
    /// modern slices. Skipped entirely when any modern key already
    /// exists or the blob is missing/unparsable, which makes the step
    /// idempotent. Malformed legacy entries are dropped silently.
    fn migrate_legacy(&self, storage: &dyn Storage) {
        if MODERN_KEYS.iter().any(|key| storage.get(key).is_some()) {
            return;
        }
        let Some(raw) = storage.get(LEGACY_CUSTOMIZATION_KEY) else {
            return;
        };
        let Ok(value) = serde_json::from_str::<Value>(&raw) else {
            return;
        };
        let Some(blob) = value.as_object() else {
            return;
        };
        if blob.get("version").and_then(Value::as_u64) != Some(1) {
            return;
        }

        let palettes: Vec<Palette> = blob
            .get("customPalettes")
            .map(|v| parse_entries(v, |p: &Palette| p.is_custom))
            .unwrap_or_default();
        let styles: Vec<StylePreset> = blob
            .get("customStyles")
            .map(|v| parse_entries(v, |s: &StylePreset| s.is_custom))
            .unwrap_or_default();
        let categories: Vec<CategoryTemplate> = blob
            .get("categories")
            .map(|v| parse_entries(v, |c: &CategoryTemplate| c.is_custom))
            .unwrap_or_default();

        let state = PersistedCustomState {
            version: 1,
            selected_palette_id: blob
                .get("selectedPaletteId")
                .and_then(Value::as_str)
                .unwrap_or(&self.catalog.first_palette().id)
                .to_string(),
            selected_style_id: blob
                .get("selectedStyleId")
                .and_then(Value::as_str)
                .unwrap_or(&self.catalog.first_style().id)
                .to_string(),
            colors: blob
                .get("colors")
                .and_then(|v| serde_json::from_value::<ColorSet>(v.clone()).ok())
                .unwrap_or_else(|| self.catalog.first_palette().colors.clone()),
            selections: blob.get("selections").map(parse_selection_map).unwrap_or_default(),
        };

        write_json(storage, CUSTOM_PALETTES_KEY, &palettes);
        write_json(storage, CUSTOM_STYLES_KEY, &styles);
        write_json(storage, CUSTOM_CATEGORIES_KEY, &categories);
        write_json(storage, CUSTOM_STATE_KEY, &state);
    }
}

/// Merges defaults with custom entries. Defaults always sort first; a
/// custom entry whose id collides with anything already merged is
/// dropped, so a custom entry can never shadow a default.
fn merge_by_id<T>(defaults: Vec<T>, custom: Vec<T>, id_of: impl Fn(&T) -> String) -> Vec<T> {
    let mut seen: HashSet<String> = defaults.iter().map(&id_of).collect();
    let mut merged = defaults;
    for item in custom {
        if seen.insert(id_of(&item)) {
            merged.push(item);
        }
    }
    merged
}

/// Parses a catalog slice: missing, unparsable, or non-array raw data
/// resolves to empty, and malformed entries are dropped individually.
fn load_slice<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: &str,
    keep: impl Fn(&T) -> bool,
) -> Vec<T> {
    storage
        .get(key)
        .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
        .map(|value| parse_entries(&value, keep))
        .unwrap_or_default()
}

fn parse_entries<T: DeserializeOwned>(value: &Value, keep: impl Fn(&T) -> bool) -> Vec<T> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| serde_json::from_value::<T>(item.clone()).ok())
        .filter(|item| keep(item))
        .collect()
}

/// Lenient parse of the current-state snapshot. The snapshot as a whole
/// is rejected (`None`) when the version tag or any required field is
/// wrong; inside `selections`, non-array values and non-string entries
/// are dropped silently.
fn parse_custom_state(raw: &str) -> Option<LoadedStateSnapshot> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let obj = value.as_object()?;
    if obj.get("version").and_then(Value::as_u64) != Some(1) {
        return None;
    }
    let selected_palette_id = obj.get("selectedPaletteId")?.as_str()?.to_string();
    let selected_style_id = obj.get("selectedStyleId")?.as_str()?.to_string();
    let colors: ColorSet = serde_json::from_value(obj.get("colors")?.clone()).ok()?;
    let selections_value = obj.get("selections")?;
    selections_value.as_object()?;
    Some(LoadedStateSnapshot {
        selected_palette_id,
        selected_style_id,
        colors,
        selections: parse_selection_map(selections_value),
    })
}

struct LoadedStateSnapshot {
    selected_palette_id: String,
    selected_style_id: String,
    colors: ColorSet,
    selections: SelectionMap,
}

fn parse_selection_map(value: &Value) -> SelectionMap {
    let Some(obj) = value.as_object() else {
        return SelectionMap::new();
    };
    obj.iter()
        .filter_map(|(key, entry)| {
            let picked = entry.as_array()?;
            Some((
                key.clone(),
                picked
                    .iter()
                    .filter_map(|option| option.as_str().map(ToString::to_string))
                    .collect(),
            ))
        })
        .collect()
}

/// Serializes and writes one slice. Serialization or storage failures
/// are contained to this slice.
fn write_json<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        let _ = storage.set(key, &json);
    }
}
