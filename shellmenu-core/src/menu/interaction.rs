// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interaction logic for menu content (key mapping, selection scans, shortcut search)

use winit::keyboard::{Key, NamedKey};

use super::item::MenuItem;
use super::overrides::OverrideRegistry;

/// Abstract command produced from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Tear the menu hierarchy down.
    CloseMenu,
    /// Activate the highlighted row.
    ActivateCurrent,
    /// Move the highlight up.
    SelectPrevious,
    /// Move the highlight down.
    SelectNext,
    /// Hand focus to the open submenu.
    FocusSubmenu,
    /// Hand focus back to the parent menu.
    FocusParent,
    /// Jump to the row whose accelerator is this (lower-cased) character.
    JumpToShortcut(char),
}

impl KeyCommand {
    /// Map a logical key to a command.
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::Escape) => Some(Self::CloseMenu),
            Key::Named(NamedKey::Enter) => Some(Self::ActivateCurrent),
            Key::Named(NamedKey::ArrowUp) => Some(Self::SelectPrevious),
            Key::Named(NamedKey::ArrowDown) => Some(Self::SelectNext),
            Key::Named(NamedKey::ArrowRight) => Some(Self::FocusSubmenu),
            Key::Named(NamedKey::ArrowLeft) => Some(Self::FocusParent),
            Key::Named(NamedKey::Space) => Some(Self::JumpToShortcut(' ')),
            Key::Character(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if !ch.is_control() => {
                        let lower = ch.to_lowercase().next().unwrap_or(ch);
                        Some(Self::JumpToShortcut(lower))
                    },
                    _ => None,
                }
            },
            _ => None,
        }
    }
}

/// Whether row `index` may carry the highlight.
pub fn is_selectable(items: &[MenuItem], overrides: &OverrideRegistry, index: usize) -> bool {
    items
        .get(index)
        .is_some_and(|item| !item.is_separator() && overrides.effective_active(item))
}

/// Nearest selectable row strictly below `current`. No wraparound.
pub fn next_selectable(
    items: &[MenuItem],
    overrides: &OverrideRegistry,
    current: Option<usize>,
) -> Option<usize> {
    let start = current.map_or(0, |i| i + 1);
    (start..items.len()).find(|&i| is_selectable(items, overrides, i))
}

/// Nearest selectable row strictly above `current`. No wraparound.
///
/// Without a highlight there is nothing above, so nothing is found.
pub fn previous_selectable(
    items: &[MenuItem],
    overrides: &OverrideRegistry,
    current: Option<usize>,
) -> Option<usize> {
    let end = current?.min(items.len());
    (0..end).rev().find(|&i| is_selectable(items, overrides, i))
}

/// Find the row whose accelerator matches `key`.
///
/// Searches forward from just past `after` to the end, then wraps around and
/// searches the whole list from the top.
pub fn find_shortcut(
    items: &[MenuItem],
    overrides: &OverrideRegistry,
    after: Option<usize>,
    key: char,
) -> Option<usize> {
    let matches = |i: &usize| {
        let item = &items[*i];
        is_selectable(items, overrides, *i) && item.matches_nav_key(key)
    };
    let start = after.map_or(0, |i| i + 1).min(items.len());
    (start..items.len())
        .find(matches)
        .or_else(|| (0..items.len()).find(matches))
}
