// SPDX-License-Identifier: MIT OR Apache-2.0

//! Check and radio group semantics.
//!
//! Checked state is written to the host's override registry, never to the
//! items themselves, so it survives the menu being rebuilt.

use log::debug;

use super::content::ContentView;
use super::group::CheckGroup;
use super::host::HostMenu;
use super::text::TextMeasure;

impl<H: HostMenu, M: TextMeasure> ContentView<H, M> {
    /// Check row `index`.
    ///
    /// Other members of the same radio group are unchecked silently.
    pub fn check(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        if item.is_separator() {
            return;
        }
        let id = item.id.clone();

        self.host.overrides_mut().set_checked(id.as_str(), true);
        if let Some(group) = CheckGroup::from_id(&id).radio_group() {
            for (other_index, other) in self.items.iter().enumerate() {
                if other_index == index || other.is_separator() {
                    continue;
                }
                if CheckGroup::from_id(&other.id).radio_group() == Some(group) {
                    self.host.overrides_mut().set_checked(other.id.as_str(), false);
                }
            }
        }

        debug!("Checked '{}'", id);
        self.host.item_activated(&id, true);
        self.host.request_redraw();
    }

    /// Uncheck row `index`.
    ///
    /// The last checked member of a radio group stays checked; the
    /// activation then reports `checked = true`.
    pub fn uncheck(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        if item.is_separator() {
            return;
        }
        let id = item.id.clone();

        let keep_checked = match CheckGroup::from_id(&id).radio_group() {
            Some(group) => {
                let overrides = self.host.overrides();
                self.items.iter().enumerate().all(|(other_index, other)| {
                    other_index == index
                        || other.is_separator()
                        || CheckGroup::from_id(&other.id).radio_group() != Some(group)
                        || !overrides.effective_checked(other)
                })
            },
            None => false,
        };

        self.host.overrides_mut().set_checked(id.as_str(), keep_checked);
        if keep_checked {
            debug!("'{}' is the only checked radio item, keeping it", id);
        } else {
            debug!("Unchecked '{}'", id);
        }
        self.host.item_activated(&id, keep_checked);
        self.host.request_redraw();
    }

    /// Effective checked state of row `index`.
    pub fn is_checked(&self, index: usize) -> bool {
        self.items
            .get(index)
            .is_some_and(|item| self.host.overrides().effective_checked(item))
    }
}

#[cfg(test)]
mod tests {
    use vello::kurbo::Point;

    use crate::config::ContentConfig;
    use crate::menu::host::SurfaceOwner;
    use crate::menu::item::{MenuItem, MenuTree};
    use crate::menu::overrides::OverrideRegistry;
    use crate::menu::text::EstimatedMetrics;
    use crate::menu::{ContentView, HostMenu};

    #[derive(Default)]
    struct Host {
        overrides: OverrideRegistry,
        activated: Vec<(String, bool)>,
    }

    impl HostMenu for Host {
        fn overrides(&self) -> &OverrideRegistry {
            &self.overrides
        }

        fn overrides_mut(&mut self) -> &mut OverrideRegistry {
            &mut self.overrides
        }

        fn global_origin(&self) -> Point {
            Point::ZERO
        }

        fn surface_owner_at(&self, _global: Point) -> SurfaceOwner {
            SurfaceOwner::This
        }

        fn show_submenu(&mut self, _at: Point, _submenu: Option<&MenuTree>) {}

        fn close_all(&mut self) {}

        fn item_activated(&mut self, id: &str, checked: bool) {
            self.activated.push((id.to_string(), checked));
        }
    }

    fn view(items: Vec<MenuItem>) -> ContentView<Host> {
        let mut view =
            ContentView::new(Host::default(), EstimatedMetrics::default(), ContentConfig::popup());
        view.set_items(items);
        view
    }

    #[test]
    fn test_independent_toggle() {
        let mut view = view(vec![
            MenuItem::new("view:check:hidden", "Show Hidden").with_checkable(false),
            MenuItem::new("view:check:thumbs", "Thumbnails").with_checkable(true),
        ]);

        view.check(0);
        assert!(view.is_checked(0));
        assert!(view.is_checked(1));

        view.uncheck(0);
        assert!(!view.is_checked(0));
        assert_eq!(
            view.host().activated,
            vec![
                ("view:check:hidden".to_string(), true),
                ("view:check:hidden".to_string(), false)
            ]
        );
    }

    #[test]
    fn test_radio_only_unchecks_its_own_group() {
        let mut view = view(vec![
            MenuItem::new("sort:radio:name", "Name").with_checkable(true),
            MenuItem::new("sort:radio:size", "Size").with_checkable(false),
            MenuItem::new("order:radio:asc", "Ascending").with_checkable(true),
        ]);

        view.check(1);
        assert!(!view.is_checked(0));
        assert!(view.is_checked(1));
        assert!(view.is_checked(2));
        assert_eq!(view.host().activated.len(), 1);
    }

    #[test]
    fn test_last_radio_member_stays_checked() {
        let mut view = view(vec![
            MenuItem::new("sort:radio:name", "Name").with_checkable(true),
            MenuItem::new("sort:radio:size", "Size").with_checkable(false),
        ]);

        view.uncheck(0);
        assert!(view.is_checked(0));
        assert_eq!(view.host().activated, vec![("sort:radio:name".to_string(), true)]);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut view = view(vec![MenuItem::separator()]);
        view.check(0);
        view.uncheck(7);
        assert!(view.host().activated.is_empty());
        assert!(view.host().overrides.is_empty());
    }
}
