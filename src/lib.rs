#![warn(missing_docs)]

//! Menu content for desktop shell popup and dock menus.
//!
//! The engine lays out a vertical list of items, tracks the highlighted row,
//! routes pointer and key input, applies check/radio semantics and resolves
//! what each row should look like. Windowing, painting and the inter-process
//! surface live in the host, which plugs in through [HostMenu](core::menu::HostMenu).

pub use vello::kurbo as geometry;
pub use vello::peniko as color;

pub use shellmenu_core as core;
pub use shellmenu_theme as theme;

/// A "prelude" for users of shellmenu.
///
/// Importing this module brings into scope the most common types
/// needed to host a menu.
///
/// ```rust
/// use shellmenu::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::core::menu::{
        ContentView, EstimatedMetrics, HostMenu, IconRefs, ItemPresentation, KeyCommand,
        MenuItem, MenuTree, OverrideField, OverrideRegistry, SurfaceOwner, TextMeasure,
    };

    // Configuration
    pub use crate::core::{
        ActivationTrigger, ContentConfig, MenuError, MenuResult, MenuVariant, SubmenuOnClear,
    };

    // Styles
    pub use crate::theme::{ItemStyle, MenuStyles, StyleBucket, ThemeError, ThemeResult};

    // Geometry
    pub use crate::geometry::{Point, Rect};
}
