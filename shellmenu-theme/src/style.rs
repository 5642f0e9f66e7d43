// SPDX-License-Identifier: MIT OR Apache-2.0

//! Style buckets for menu rows.
//!
//! Every non-separator row is painted with exactly one bucket, chosen by the
//! engine from the row's effective state:
//!
//! - [StyleBucket::Inactive] when the row is not active,
//! - [StyleBucket::Hover] when the row is the current highlight,
//! - [StyleBucket::Normal] otherwise.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [normal]
//! background = "#00000000"
//! text = "#ffffff"
//! checkmark_icon = "/usr/share/shellmenu/check.png"
//!
//! [hover]
//! background = "#2ca7f8"
//! text = "#ffffff"
//! ```
//!
//! Tables that are left out keep their default values.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use crate::error::{ThemeError, ThemeResult};

/// Environment variable naming a TOML style file.
pub const STYLE_ENV: &str = "SHELLMENU_STYLE";

/// The visual state a row is painted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleBucket {
    /// Active row, not highlighted.
    #[default]
    Normal,
    /// Active row under the highlight.
    Hover,
    /// Row whose effective active state is false.
    Inactive,
}

/// Colors and glyph references for one bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemStyle {
    /// Row background.
    #[serde(with = "crate::serde_color")]
    pub background: Color,
    /// Row text and shortcut label color.
    #[serde(with = "crate::serde_color")]
    pub text: Color,
    /// Opaque reference to the checkmark glyph, resolved by the painter.
    #[serde(default)]
    pub checkmark_icon: String,
    /// Opaque reference to the submenu indicator glyph, resolved by the painter.
    #[serde(default)]
    pub submenu_indicator_icon: String,
}

impl ItemStyle {
    /// Create a style with the given colors and no glyphs.
    pub fn new(background: Color, text: Color) -> Self {
        Self {
            background,
            text,
            checkmark_icon: String::new(),
            submenu_indicator_icon: String::new(),
        }
    }

    /// Set the checkmark glyph reference.
    pub fn with_checkmark_icon(mut self, icon: impl Into<String>) -> Self {
        self.checkmark_icon = icon.into();
        self
    }

    /// Set the submenu indicator glyph reference.
    pub fn with_submenu_indicator_icon(mut self, icon: impl Into<String>) -> Self {
        self.submenu_indicator_icon = icon.into();
        self
    }
}

/// The three buckets a menu is painted with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuStyles {
    /// Style for active, non-highlighted rows.
    #[serde(default = "default_normal")]
    pub normal: ItemStyle,
    /// Style for the highlighted row.
    #[serde(default = "default_hover")]
    pub hover: ItemStyle,
    /// Style for inactive rows.
    #[serde(default = "default_inactive")]
    pub inactive: ItemStyle,
}

fn default_normal() -> ItemStyle {
    ItemStyle::new(Color::from_rgba8(0, 0, 0, 0), Color::from_rgb8(255, 255, 255))
        .with_checkmark_icon("check_light_normal")
        .with_submenu_indicator_icon("arrow_right_normal")
}

fn default_hover() -> ItemStyle {
    ItemStyle::new(Color::from_rgb8(44, 167, 248), Color::from_rgb8(255, 255, 255))
        .with_checkmark_icon("check_light_hover")
        .with_submenu_indicator_icon("arrow_right_hover")
}

fn default_inactive() -> ItemStyle {
    ItemStyle::new(Color::from_rgba8(0, 0, 0, 0), Color::from_rgba8(255, 255, 255, 0x66))
        .with_checkmark_icon("check_light_inactive")
        .with_submenu_indicator_icon("arrow_right_inactive")
}

impl Default for MenuStyles {
    fn default() -> Self {
        Self {
            normal: default_normal(),
            hover: default_hover(),
            inactive: default_inactive(),
        }
    }
}

impl MenuStyles {
    /// Get the style for a bucket.
    pub fn bucket(&self, bucket: StyleBucket) -> &ItemStyle {
        match bucket {
            StyleBucket::Normal => &self.normal,
            StyleBucket::Hover => &self.hover,
            StyleBucket::Inactive => &self.inactive,
        }
    }

    /// Parse styles from TOML content.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        toml::from_str(content).map_err(|e| ThemeError::parse_error("<inline>", e.to_string()))
    }

    /// Load styles from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ThemeError::parse_error(path, e.to_string()))
    }

    /// Load styles from the file named by `SHELLMENU_STYLE`, or use defaults.
    ///
    /// A file that cannot be loaded is logged and ignored.
    pub fn from_env_or_default() -> Self {
        let Ok(path) = env::var(STYLE_ENV) else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(styles) => {
                log::debug!("Loaded menu styles from {}", path);
                styles
            },
            Err(err) => {
                log::warn!("Ignoring menu styles from {}: {}", path, err);
                Self::default()
            },
        }
    }
}
