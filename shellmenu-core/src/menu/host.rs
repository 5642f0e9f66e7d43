// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host menu capability interface
//!
//! The content view never reaches up into its container. Everything it needs
//! from the surrounding menu window (the override registry, submenu display,
//! teardown, focus hand-off and event delivery) goes through [HostMenu],
//! which is handed to the view at construction.

use vello::kurbo::Point;

use super::item::MenuTree;
use super::overrides::OverrideRegistry;

/// Which menu surface lies under a global point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOwner {
    /// This view's own menu.
    This,
    /// Another menu of the same hierarchy (an ancestor or a submenu).
    Related,
    /// No menu of the hierarchy.
    Outside,
}

/// Operations the menu container provides to its content view.
pub trait HostMenu {
    /// Registry of live item overrides, shared by the whole menu hierarchy.
    fn overrides(&self) -> &OverrideRegistry;

    /// Mutable access to the override registry.
    fn overrides_mut(&mut self) -> &mut OverrideRegistry;

    /// Global position of the content view's top-left corner.
    fn global_origin(&self) -> Point;

    /// Which menu surface is under `global`.
    fn surface_owner_at(&self, global: Point) -> SurfaceOwner;

    /// Show `submenu` with its top-left corner at `at`.
    ///
    /// `None` collapses any open child menu.
    fn show_submenu(&mut self, at: Point, submenu: Option<&MenuTree>);

    /// Tear down the whole menu hierarchy.
    fn close_all(&mut self);

    /// Deliver an activation to the outermost menu.
    fn item_activated(&mut self, id: &str, checked: bool);

    /// Take keyboard and pointer capture for this menu.
    fn grab_input(&mut self) {}

    /// Hand input focus to the parent menu, if there is one.
    fn focus_parent(&mut self) -> bool {
        false
    }

    /// Hand input focus to the currently open submenu, if there is one.
    fn focus_open_submenu(&mut self) -> bool {
        false
    }

    /// Ask for the view to be repainted.
    fn request_redraw(&mut self) {}
}
