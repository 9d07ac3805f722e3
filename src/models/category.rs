//! Category templates and selection sanitization.
//!
//! A category is a tag group (name + options + single/multi arity) used
//! to build structured selections for the composed prompt.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from category id to the options chosen in that category.
///
/// Entry order within a category follows user action order, not option
/// order. Invariant (enforced by [`sanitize_selections`]): every stored
/// option currently exists in its category, and single-select categories
/// hold at most one entry.
pub type SelectionMap = BTreeMap<String, Vec<String>>;

/// A tag group used to build structured selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTemplate {
    /// Unique id across defaults and custom entries
    pub id: String,
    /// Display name (renameable, defaults included)
    pub name: String,
    /// True when multiple options may be selected at once
    pub multi: bool,
    /// Option labels, order-significant, unique within the category
    pub options: Vec<String>,
    /// True for user-created categories
    pub is_custom: bool,
}

impl CategoryTemplate {
    /// Creates an empty custom category with a freshly generated id.
    #[must_use]
    pub fn custom(name: impl Into<String>, multi: bool) -> Self {
        Self {
            id: super::make_id("category"),
            name: name.into(),
            multi,
            options: Vec::new(),
            is_custom: true,
        }
    }

    /// Appends an option label. Duplicate labels are a no-op.
    ///
    /// Returns `true` if the option was added.
    pub fn add_option(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.options.contains(&label) {
            return false;
        }
        self.options.push(label);
        true
    }

    /// Removes an option by label. Returns `true` if it was present.
    pub fn remove_option(&mut self, label: &str) -> bool {
        let before = self.options.len();
        self.options.retain(|option| option != label);
        self.options.len() != before
    }

    /// Replaces the option label at `index`. Returns `false` when the
    /// index is out of range.
    pub fn rename_option(&mut self, index: usize, label: impl Into<String>) -> bool {
        match self.options.get_mut(index) {
            Some(slot) => {
                *slot = label.into();
                true
            }
            None => false,
        }
    }
}

/// Reconciles a selection map against the current category list.
///
/// For each category, keeps only the option strings that still exist in
/// that category's options, and truncates to a single entry when the
/// category is not multi-select. Selections for unknown category ids are
/// dropped; every known category gets an entry (possibly empty).
#[must_use]
pub fn sanitize_selections(
    selections: &SelectionMap,
    categories: &[CategoryTemplate],
) -> SelectionMap {
    categories
        .iter()
        .map(|category| {
            let mut valid: Vec<String> = selections
                .get(&category.id)
                .map(|picked| {
                    picked
                        .iter()
                        .filter(|option| category.options.contains(option))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
            if !category.multi {
                valid.truncate(1);
            }
            (category.id.clone(), valid)
        })
        .collect()
}
