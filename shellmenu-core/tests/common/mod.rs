#![allow(dead_code)]

use shellmenu_core::menu::{
    ContentView, EstimatedMetrics, HostMenu, MenuItem, MenuTree, OverrideRegistry, SurfaceOwner,
};
use shellmenu_core::ContentConfig;
use vello::kurbo::Point;

/// Something the view asked its host to do.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    ShowSubmenu { at: Point, items: Option<Vec<String>> },
    CloseAll,
    Activated(String, bool),
    GrabInput,
    FocusParent,
    FocusSubmenu,
}

/// Host double that records every call.
pub struct RecordingHost {
    pub overrides: OverrideRegistry,
    pub origin: Point,
    pub owner: SurfaceOwner,
    pub has_parent: bool,
    pub has_open_submenu: bool,
    pub events: Vec<HostEvent>,
    pub redraws: usize,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            overrides: OverrideRegistry::new(),
            origin: Point::new(50.0, 80.0),
            owner: SurfaceOwner::This,
            has_parent: false,
            has_open_submenu: false,
            events: Vec::new(),
            redraws: 0,
        }
    }
}

impl RecordingHost {
    pub fn activations(&self) -> Vec<(String, bool)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HostEvent::Activated(id, checked) => Some((id.clone(), *checked)),
                _ => None,
            })
            .collect()
    }

    pub fn close_count(&self) -> usize {
        self.events.iter().filter(|e| **e == HostEvent::CloseAll).count()
    }

    pub fn submenu_requests(&self) -> Vec<&HostEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, HostEvent::ShowSubmenu { .. }))
            .collect()
    }
}

impl HostMenu for RecordingHost {
    fn overrides(&self) -> &OverrideRegistry {
        &self.overrides
    }

    fn overrides_mut(&mut self) -> &mut OverrideRegistry {
        &mut self.overrides
    }

    fn global_origin(&self) -> Point {
        self.origin
    }

    fn surface_owner_at(&self, _global: Point) -> SurfaceOwner {
        self.owner
    }

    fn show_submenu(&mut self, at: Point, submenu: Option<&MenuTree>) {
        let items = submenu.map(|tree| tree.items.iter().map(|i| i.id.clone()).collect());
        self.events.push(HostEvent::ShowSubmenu { at, items });
    }

    fn close_all(&mut self) {
        self.events.push(HostEvent::CloseAll);
    }

    fn item_activated(&mut self, id: &str, checked: bool) {
        self.events.push(HostEvent::Activated(id.to_string(), checked));
    }

    fn grab_input(&mut self) {
        self.events.push(HostEvent::GrabInput);
    }

    fn focus_parent(&mut self) -> bool {
        if self.has_parent {
            self.events.push(HostEvent::FocusParent);
        }
        self.has_parent
    }

    fn focus_open_submenu(&mut self) -> bool {
        if self.has_open_submenu {
            self.events.push(HostEvent::FocusSubmenu);
        }
        self.has_open_submenu
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

pub fn view_with(config: ContentConfig, items: Vec<MenuItem>) -> ContentView<RecordingHost> {
    let mut view = ContentView::new(RecordingHost::default(), EstimatedMetrics::default(), config);
    view.set_items(items);
    view
}

/// `[Cut, Copy, separator, Paste(disabled)]`
pub fn edit_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("cut", "Cut").with_shortcut("Ctrl+X").with_nav_key("t"),
        MenuItem::new("copy", "Copy").with_shortcut("Ctrl+C").with_nav_key("c"),
        MenuItem::separator(),
        MenuItem::new("paste", "Paste").with_shortcut("Ctrl+V").with_enabled(false),
    ]
}
