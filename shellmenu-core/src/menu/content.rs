// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Menu Content View
//!
//! [ContentView] owns the item list of one menu surface and the highlight
//! state machine on top of it. Pointer and key events come in through
//! [ContentView::pointer_moved], [ContentView::pointer_pressed],
//! [ContentView::pointer_released] and [ContentView::handle_key]; everything
//! that leaves the view (submenu display, teardown, activation events, focus
//! hand-off) goes out through the [HostMenu] it was constructed with.
//!
//! ## Highlight Rules
//!
//! - The highlight is either `None` or a non-separator row whose effective
//!   active state is true. Requests for any other row clear it instead.
//! - Moving the highlight to a row asks the host to show that row's submenu,
//!   or to collapse the open one when the row has none.
//! - Clearing the highlight collapses the open submenu only under
//!   [SubmenuOnClear::Collapse].

use std::time::Instant;

use log::{debug, trace};
use vello::kurbo::{Point, Rect};
use winit::keyboard::Key;

use super::grab::DeferredGrab;
use super::host::{HostMenu, SurfaceOwner};
use super::interaction::{self, KeyCommand};
use super::item::MenuItem;
use super::layout::{Columns, RowLayout};
use super::text::{EstimatedMetrics, TextMeasure};
use crate::config::{ActivationTrigger, ContentConfig, SubmenuOnClear};

/// The content of one menu surface.
pub struct ContentView<H: HostMenu, M: TextMeasure = EstimatedMetrics> {
    pub(super) host: H,
    pub(super) metrics: M,
    pub(super) config: ContentConfig,
    pub(super) items: Vec<MenuItem>,
    pub(super) highlighted: Option<usize>,
    pub(super) rows: RowLayout,
    pub(super) columns: Columns,
    pub(super) width: f64,
    /// A child menu was requested and not collapsed since.
    submenu_open: bool,
    grab: DeferredGrab,
}

impl<H: HostMenu, M: TextMeasure> ContentView<H, M> {
    /// Create an empty view.
    pub fn new(host: H, metrics: M, config: ContentConfig) -> Self {
        let rows = RowLayout::compute(&[], &config);
        let grab = DeferredGrab::new(config.grab_delay());
        Self {
            host,
            metrics,
            config,
            items: Vec::new(),
            highlighted: None,
            rows,
            columns: Columns::default(),
            width: 0.0,
            submenu_open: false,
            grab,
        }
    }

    /// The host this view reports to.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The configuration in use.
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// The current item list.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Replace the item list.
    ///
    /// The highlight is reset and the surface width snaps to the new
    /// content width.
    pub fn set_items(&mut self, items: Vec<MenuItem>) {
        debug!("Menu content populated with {} items", items.len());
        self.items = items;
        self.highlighted = None;
        self.relayout();
        self.width = self.content_width();
        self.host.request_redraw();
    }

    /// Drop every item and cancel the pending input grab.
    pub fn clear_items(&mut self) {
        if self.grab.cancel() {
            debug!("Deferred input grab cancelled");
        }
        self.items.clear();
        self.highlighted = None;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.rows = RowLayout::compute(&self.items, &self.config);
        self.columns = Columns::measure(&self.items, &self.config, &self.metrics);
    }

    /// Width the content wants, clamped to the configured maximum.
    pub fn content_width(&self) -> f64 {
        self.columns.content_width(&self.config)
    }

    /// Height of all rows plus padding.
    pub fn content_height(&self) -> f64 {
        self.rows.content_height()
    }

    /// Width of the surface the rows span.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Set the width the host gave the surface.
    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(0.0);
    }

    /// Rectangle of row `index` in view coordinates.
    pub fn rect_of(&self, index: usize) -> Option<Rect> {
        self.rows.rect_of(index, self.width)
    }

    /// Row under a pointer at `local` (view coordinates) / `global` (screen).
    ///
    /// Returns `None` unless the surface under `global` is this menu.
    pub fn item_index_at(&self, local: Point, global: Point) -> Option<usize> {
        if self.host.surface_owner_at(global) != SurfaceOwner::This {
            return None;
        }
        if local.x < 0.0 || local.x > self.width {
            return None;
        }
        self.rows.index_at_y(local.y)
    }

    /// The highlighted row.
    pub fn current_highlight(&self) -> Option<usize> {
        self.highlighted
    }

    pub(super) fn is_selectable(&self, index: usize) -> bool {
        interaction::is_selectable(&self.items, self.host.overrides(), index)
    }

    /// Screen position where a child menu of row `index` opens.
    fn submenu_anchor(&self, index: usize) -> Point {
        let top = self
            .rows
            .rect_of(index, self.width)
            .map_or(self.config.top_padding, |rect| rect.y0);
        let origin = self.host.global_origin();
        Point::new(origin.x + self.width, origin.y + top)
    }

    /// Move the highlight.
    ///
    /// `None` and out-of-range indices clear it; separators and inactive
    /// rows are refused and also clear it.
    pub fn set_highlight(&mut self, index: Option<usize>) {
        let Some(index) = index.filter(|&i| i < self.items.len()) else {
            self.clear_highlight();
            return;
        };

        if !self.is_selectable(index) {
            trace!("Row {} cannot be highlighted", index);
            let was_highlighted = self.highlighted.take().is_some();
            if was_highlighted {
                self.host.request_redraw();
            }
            if was_highlighted || self.submenu_open {
                let at = self.submenu_anchor(index);
                self.host.show_submenu(at, None);
                self.submenu_open = false;
            }
            return;
        }

        if self.highlighted == Some(index) {
            return;
        }

        trace!("Highlight {:?} -> {}", self.highlighted, index);
        self.highlighted = Some(index);
        self.host.request_redraw();

        let at = self.submenu_anchor(index);
        let submenu = self.items[index].submenu.as_ref().filter(|tree| !tree.is_empty());
        trace!("Submenu request at {:?} (open: {})", at, submenu.is_some());
        self.submenu_open = submenu.is_some();
        self.host.show_submenu(at, submenu);
    }

    fn clear_highlight(&mut self) {
        if self.highlighted.take().is_none() {
            return;
        }
        trace!("Highlight cleared");
        self.host.request_redraw();
        if self.config.submenu_on_clear == SubmenuOnClear::Collapse {
            let origin = self.host.global_origin();
            let at = Point::new(origin.x + self.width, origin.y + self.config.top_padding);
            self.host.show_submenu(at, None);
            self.submenu_open = false;
        }
    }

    /// Highlight the nearest selectable row below the current one.
    pub fn select_next(&mut self) {
        if let Some(next) =
            interaction::next_selectable(&self.items, self.host.overrides(), self.highlighted)
        {
            self.set_highlight(Some(next));
        }
    }

    /// Highlight the nearest selectable row above the current one.
    pub fn select_previous(&mut self) {
        if let Some(previous) =
            interaction::previous_selectable(&self.items, self.host.overrides(), self.highlighted)
        {
            self.set_highlight(Some(previous));
        }
    }

    /// Activate the highlighted row.
    ///
    /// Checkable rows toggle through [ContentView::check] /
    /// [ContentView::uncheck]; other rows emit an activation with
    /// `checked = false`. Either way the menu hierarchy is torn down.
    /// Separators, inactive rows and rows with a submenu are ignored.
    ///
    /// Returns whether the row was activated.
    pub fn activate_current(&mut self) -> bool {
        let Some(index) = self.highlighted else {
            return false;
        };
        let Some(item) = self.items.get(index) else {
            return false;
        };
        let overrides = self.host.overrides();
        if item.is_separator() || !overrides.effective_active(item) || item.has_submenu() {
            return false;
        }

        debug!("Activating menu item '{}'", item.id);
        if item.checkable {
            if overrides.effective_checked(item) {
                self.uncheck(index);
            } else {
                self.check(index);
            }
        } else {
            let id = item.id.clone();
            self.host.item_activated(&id, false);
        }

        self.close();
        true
    }

    /// Jump to the row whose accelerator is `key`.
    ///
    /// When that row is the only match it is activated as well.
    /// Returns whether a row matched.
    pub fn jump_to_shortcut(&mut self, key: char) -> bool {
        let overrides = self.host.overrides();
        let Some(found) = interaction::find_shortcut(&self.items, overrides, self.highlighted, key)
        else {
            return false;
        };
        let unique =
            interaction::find_shortcut(&self.items, overrides, Some(found), key) == Some(found);

        debug!("Shortcut '{}' -> row {} (unique: {})", key, found, unique);
        self.set_highlight(Some(found));
        if unique {
            self.activate_current();
        }
        true
    }

    /// Execute a key command. Returns whether it was handled.
    pub fn dispatch(&mut self, command: KeyCommand) -> bool {
        match command {
            KeyCommand::CloseMenu => {
                self.close();
                true
            },
            KeyCommand::ActivateCurrent => {
                self.activate_current();
                true
            },
            KeyCommand::SelectPrevious => {
                self.select_previous();
                true
            },
            KeyCommand::SelectNext => {
                self.select_next();
                true
            },
            KeyCommand::FocusSubmenu => {
                self.config.right_arrow_focuses_submenu && self.host.focus_open_submenu()
            },
            KeyCommand::FocusParent => self.host.focus_parent(),
            KeyCommand::JumpToShortcut(key) => self.jump_to_shortcut(key),
        }
    }

    /// Handle a key press. Returns whether it was consumed.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        KeyCommand::from_key(key).is_some_and(|command| self.dispatch(command))
    }

    /// Pointer moved over the view.
    ///
    /// A position that does not hit a row of this menu leaves the highlight
    /// as it is.
    pub fn pointer_moved(&mut self, local: Point, global: Point) {
        if let Some(index) = self.item_index_at(local, global) {
            self.set_highlight(Some(index));
        }
    }

    /// Pointer button went down.
    pub fn pointer_pressed(&mut self, local: Point, global: Point) {
        let owner = self.host.surface_owner_at(global);
        if self.config.activation == ActivationTrigger::Press && owner == SurfaceOwner::Outside {
            self.close();
            return;
        }

        let Some(index) = self.item_index_at(local, global) else {
            return;
        };
        self.set_highlight(Some(index));
        if self.config.activation == ActivationTrigger::Press {
            self.activate_current();
        }
    }

    /// Pointer button went up.
    pub fn pointer_released(&mut self, global: Point) {
        if self.config.activation != ActivationTrigger::Release {
            return;
        }
        match self.host.surface_owner_at(global) {
            SurfaceOwner::This | SurfaceOwner::Related => {
                self.activate_current();
            },
            SurfaceOwner::Outside => self.close(),
        }
    }

    /// The menu became visible; schedule the input grab.
    pub fn shown(&mut self, now: Instant) {
        self.grab.schedule(now);
    }

    /// Drive the deferred grab. Returns whether the grab was taken.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.grab.poll(now) {
            return false;
        }
        debug!("Taking input grab");
        self.host.grab_input();
        true
    }

    /// Whether the input grab is still scheduled.
    pub fn is_grab_pending(&self) -> bool {
        self.grab.is_pending()
    }

    /// Tear down the whole menu hierarchy.
    pub fn close(&mut self) {
        if self.grab.cancel() {
            debug!("Deferred input grab cancelled");
        }
        debug!("Closing menu hierarchy");
        self.submenu_open = false;
        self.host.close_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::item::MenuTree;
    use crate::menu::overrides::OverrideRegistry;

    #[derive(Default)]
    struct Host {
        overrides: OverrideRegistry,
        submenus: Vec<(Point, bool)>,
        closed: usize,
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
            Point::new(100.0, 200.0)
        }

        fn surface_owner_at(&self, _global: Point) -> SurfaceOwner {
            SurfaceOwner::This
        }

        fn show_submenu(&mut self, at: Point, submenu: Option<&MenuTree>) {
            self.submenus.push((at, submenu.is_some()));
        }

        fn close_all(&mut self) {
            self.closed += 1;
        }

        fn item_activated(&mut self, id: &str, checked: bool) {
            self.activated.push((id.to_string(), checked));
        }
    }

    fn view(config: ContentConfig) -> ContentView<Host> {
        let mut view = ContentView::new(Host::default(), EstimatedMetrics::default(), config);
        view.set_items(vec![
            MenuItem::new("open", "Open"),
            MenuItem::separator(),
            MenuItem::new("with", "Open With").with_submenu(MenuTree::from_items(vec![
                MenuItem::new("gimp", "GIMP"),
            ])),
            MenuItem::new("off", "Disabled").with_enabled(false),
        ]);
        view
    }

    #[test]
    fn test_highlight_opens_submenu_at_row() {
        let mut view = view(ContentConfig::popup());
        view.set_width(120.0);

        view.set_highlight(Some(2));
        assert_eq!(view.current_highlight(), Some(2));
        assert_eq!(view.host().submenus, vec![(Point::new(220.0, 230.0), true)]);

        // unchanged index is a no-op
        view.set_highlight(Some(2));
        assert_eq!(view.host().submenus.len(), 1);

        view.set_highlight(Some(0));
        assert_eq!(view.host().submenus[1], (Point::new(220.0, 200.0), false));
    }

    #[test]
    fn test_unselectable_rows_clear_highlight() {
        let mut view = view(ContentConfig::popup());
        view.set_highlight(Some(0));

        view.set_highlight(Some(1));
        assert_eq!(view.current_highlight(), None);

        view.set_highlight(Some(0));
        view.set_highlight(Some(3));
        assert_eq!(view.current_highlight(), None);
        assert_eq!(view.host().submenus.last().map(|s| s.1), Some(false));
    }

    #[test]
    fn test_clearing_highlight_follows_config() {
        let mut keep = view(ContentConfig::popup());
        keep.set_highlight(Some(0));
        let before = keep.host().submenus.len();
        keep.set_highlight(None);
        assert_eq!(keep.host().submenus.len(), before);

        let mut collapse = view(ContentConfig::dock());
        collapse.set_highlight(Some(0));
        let before = collapse.host().submenus.len();
        collapse.set_highlight(Some(42));
        assert_eq!(collapse.current_highlight(), None);
        assert_eq!(collapse.host().submenus.len(), before + 1);

        // already clear
        collapse.set_highlight(None);
        assert_eq!(collapse.host().submenus.len(), before + 1);
    }

    #[test]
    fn test_submenu_rows_are_not_activated() {
        let mut view = view(ContentConfig::popup());
        view.set_highlight(Some(2));
        assert!(!view.activate_current());
        assert_eq!(view.host().closed, 0);
        assert!(view.host().activated.is_empty());
    }

    #[test]
    fn test_right_arrow_respects_config() {
        let mut dock = view(ContentConfig::dock());
        assert!(!dock.dispatch(KeyCommand::FocusSubmenu));
    }

    #[test]
    fn test_set_items_resets_state() {
        let mut view = view(ContentConfig::popup());
        view.set_highlight(Some(0));
        view.set_items(vec![MenuItem::new("only", "Only")]);
        assert_eq!(view.current_highlight(), None);
        assert_eq!(view.width(), view.content_width());

        view.clear_items();
        assert!(view.items().is_empty());
        assert_eq!(view.content_height(), 0.0);
        assert!(!view.activate_current());
    }
}
