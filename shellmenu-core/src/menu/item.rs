// SPDX-License-Identifier: MIT OR Apache-2.0

//! Menu item model
//!
//! A menu is an ordered list of [MenuItem]s. An item with empty text is a
//! separator; an item with a non-empty [MenuTree] opens that tree as a child
//! menu instead of being activated.

/// Icon references for the three visual states of a row.
///
/// The references are opaque to the engine and resolved by the painter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconRefs {
    /// Icon for the normal state.
    pub normal: String,
    /// Icon while highlighted.
    pub hover: String,
    /// Icon while inactive.
    pub inactive: String,
}

impl IconRefs {
    /// Build from a list of up to three references.
    ///
    /// The first entry fills every state, a second replaces the hover icon
    /// and a third replaces the inactive icon.
    pub fn from_list<S: AsRef<str>>(icons: &[S]) -> Self {
        let mut refs = Self::default();
        if let Some(normal) = icons.first() {
            let normal = normal.as_ref().to_string();
            refs.hover = normal.clone();
            refs.inactive = normal.clone();
            refs.normal = normal;
        }
        if let Some(hover) = icons.get(1) {
            refs.hover = hover.as_ref().to_string();
        }
        if let Some(inactive) = icons.get(2) {
            refs.inactive = inactive.as_ref().to_string();
        }
        refs
    }

    /// Whether any state has an icon.
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.hover.is_empty() && self.inactive.is_empty()
    }
}

/// One entry of a menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItem {
    /// Stable identifier, may encode a `group:type` radio scheme.
    pub id: String,
    /// Display text; empty marks a separator.
    pub text: String,
    /// Declared active state.
    pub enabled: bool,
    /// Whether activation toggles the checked state.
    pub checkable: bool,
    /// Declared checked state.
    pub checked: bool,
    /// Draw a checkmark for checked items.
    pub show_checkmark: bool,
    /// Right-aligned shortcut label (e.g., "Ctrl+C").
    pub shortcut: Option<String>,
    /// Single-character accelerator, matched case-insensitively.
    pub nav_key: Option<String>,
    /// Nested menu.
    pub submenu: Option<MenuTree>,
    /// Icons per visual state.
    pub icons: IconRefs,
}

impl MenuItem {
    /// Create a new enabled item.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            enabled: true,
            ..Default::default()
        }
    }

    /// Create a separator item.
    pub fn separator() -> Self {
        Self::default()
    }

    /// Check if this is a separator
    pub fn is_separator(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if this item opens a non-empty submenu
    pub fn has_submenu(&self) -> bool {
        self.submenu.as_ref().is_some_and(|tree| !tree.is_empty())
    }

    /// Set enabled state
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Make the item checkable with the given declared state.
    pub fn with_checkable(mut self, checked: bool) -> Self {
        self.checkable = true;
        self.checked = checked;
        self.show_checkmark = true;
        self
    }

    /// Set whether a checkmark is drawn for this checkable item.
    pub fn with_show_checkmark(mut self, show: bool) -> Self {
        self.show_checkmark = show;
        self
    }

    /// Set the shortcut label
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// Set the navigation key
    pub fn with_nav_key(mut self, key: impl Into<String>) -> Self {
        self.nav_key = Some(key.into());
        self
    }

    /// Set submenu
    pub fn with_submenu(mut self, submenu: MenuTree) -> Self {
        self.submenu = Some(submenu);
        self
    }

    /// Set icons
    pub fn with_icons(mut self, icons: IconRefs) -> Self {
        self.icons = icons;
        self
    }

    /// Whether `key` triggers this item's accelerator.
    pub fn matches_nav_key(&self, key: char) -> bool {
        let Some(nav) = self.nav_key.as_deref() else {
            return false;
        };
        let mut nav = nav.chars().flat_map(char::to_lowercase);
        let mut typed = key.to_lowercase();
        loop {
            match (nav.next(), typed.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => continue,
                _ => return false,
            }
        }
    }
}

/// An ordered list of items, used for both the root menu and submenus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuTree {
    /// Menu items in display order
    pub items: Vec<MenuItem>,
}

impl MenuTree {
    /// Create from a vector of items
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Add a menu item
    pub fn add_item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    /// Check whether the tree has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_fallback() {
        let one = IconRefs::from_list(&["a.png"]);
        assert_eq!(one.hover, "a.png");
        assert_eq!(one.inactive, "a.png");

        let three = IconRefs::from_list(&["a.png", "b.png", "c.png"]);
        assert_eq!(three.normal, "a.png");
        assert_eq!(three.hover, "b.png");
        assert_eq!(three.inactive, "c.png");

        assert!(IconRefs::from_list::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_empty_submenu_is_not_a_submenu() {
        let item = MenuItem::new("open", "Open With").with_submenu(MenuTree::default());
        assert!(!item.has_submenu());

        let item = item.with_submenu(MenuTree::default().add_item(MenuItem::new("gimp", "GIMP")));
        assert!(item.has_submenu());
    }

    #[test]
    fn test_nav_key_is_case_insensitive() {
        let item = MenuItem::new("copy", "Copy").with_nav_key("C");
        assert!(item.matches_nav_key('c'));
        assert!(item.matches_nav_key('C'));
        assert!(!item.matches_nav_key('x'));
        assert!(!MenuItem::new("cut", "Cut").matches_nav_key('c'));
    }
}
