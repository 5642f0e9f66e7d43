// SPDX-License-Identifier: MIT OR Apache-2.0

//! Menu geometry constants
//!
//! Defaults used by the [ContentConfig](crate::config::ContentConfig) presets
//! and by the column measurement.

/// Height of each normal menu row in pixels
pub const ITEM_HEIGHT: f64 = 24.0;

/// Height of a separator row in pixels
pub const SEPARATOR_HEIGHT: f64 = 6.0;

/// Maximum width of the menu content
pub const MAX_WIDTH: f64 = 300.0;

/// Size of an item icon or checkmark
pub const ICON_SIZE: f64 = 14.0;

/// Gap between the icon column and the text
pub const ICON_SPACING: f64 = 6.0;

/// Size of the submenu indicator glyph
pub const SUBMENU_INDICATOR_SIZE: f64 = 14.0;

/// Gap between the shortcut column and the submenu indicator
pub const SUBMENU_INDICATOR_SPACING: f64 = 6.0;

/// Minimum gap between the text and a right-aligned shortcut label
pub const SHORTCUT_SPACING: f64 = 20.0;

/// Slack added to the widest text so that glyph overhang is not clipped
pub const TEXT_SLACK: f64 = 2.0;

/// Top and bottom padding of the dock variant
pub const DOCK_VERTICAL_PADDING: f64 = 4.0;

/// Left and right padding of the dock variant
pub const DOCK_HORIZONTAL_PADDING: f64 = 20.0;

/// Left and right padding of the popup variant
pub const POPUP_HORIZONTAL_PADDING: f64 = 8.0;

/// Delay before keyboard and pointer capture is taken after showing
pub const GRAB_DELAY_MS: u64 = 500;

/// Estimated pixels per character when no shaper is available
pub const TEXT_CHAR_WIDTH: f64 = 7.0;

/// Marker appended to elided text
pub const ELLIPSIS: &str = "...";
