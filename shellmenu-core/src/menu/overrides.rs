// SPDX-License-Identifier: MIT OR Apache-2.0

//! Override registry
//!
//! The host keeps live values for item text, checked and active state keyed
//! by item id. A present value shadows the item's declared value; each field
//! is overridden independently. The registry outlives a single menu instance,
//! so a checked radio item stays checked across show/hide cycles.

use std::collections::HashMap;

use super::item::MenuItem;

/// A field of an item that can be shadowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideField {
    /// Displayed text.
    Text,
    /// Checked state.
    Checked,
    /// Active (enabled) state.
    Active,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct ItemOverrides {
    text: Option<String>,
    checked: Option<bool>,
    active: Option<bool>,
}

impl ItemOverrides {
    fn is_empty(&self) -> bool {
        self.text.is_none() && self.checked.is_none() && self.active.is_none()
    }
}

/// Per-item overrides keyed by item id.
#[derive(Debug, Clone, Default)]
pub struct OverrideRegistry {
    entries: HashMap<String, ItemOverrides>,
}

impl OverrideRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overridden text, if any.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.entries.get(id).and_then(|e| e.text.as_deref())
    }

    /// Overridden checked state, if any.
    pub fn checked(&self, id: &str) -> Option<bool> {
        self.entries.get(id).and_then(|e| e.checked)
    }

    /// Overridden active state, if any.
    pub fn active(&self, id: &str) -> Option<bool> {
        self.entries.get(id).and_then(|e| e.active)
    }

    /// Override the displayed text.
    pub fn set_text(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.entries.entry(id.into()).or_default().text = Some(text.into());
    }

    /// Override the checked state.
    pub fn set_checked(&mut self, id: impl Into<String>, checked: bool) {
        self.entries.entry(id.into()).or_default().checked = Some(checked);
    }

    /// Override the active state.
    pub fn set_active(&mut self, id: impl Into<String>, active: bool) {
        self.entries.entry(id.into()).or_default().active = Some(active);
    }

    /// Drop one override so the declared value applies again.
    pub fn clear_field(&mut self, id: &str, field: OverrideField) {
        let Some(entry) = self.entries.get_mut(id) else {
            return;
        };
        match field {
            OverrideField::Text => entry.text = None,
            OverrideField::Checked => entry.checked = None,
            OverrideField::Active => entry.active = None,
        }
        if entry.is_empty() {
            self.entries.remove(id);
        }
    }

    /// Drop every override of an item.
    pub fn clear_item(&mut self, id: &str) {
        self.entries.remove(id);
    }

    /// Drop all overrides.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether no overrides are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Effective text of an item.
    pub fn effective_text<'a>(&'a self, item: &'a MenuItem) -> &'a str {
        self.text(&item.id).unwrap_or(&item.text)
    }

    /// Effective checked state of an item.
    pub fn effective_checked(&self, item: &MenuItem) -> bool {
        self.checked(&item.id).unwrap_or(item.checked)
    }

    /// Effective active state of an item.
    pub fn effective_active(&self, item: &MenuItem) -> bool {
        self.active(&item.id).unwrap_or(item.enabled)
    }
}
