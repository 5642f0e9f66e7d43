// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Content Configuration
//!
//! The popup menu and the dock menu share one engine. Everything that differs
//! between them lives in [ContentConfig]:
//!
//! - vertical and horizontal padding,
//! - whether the icon and submenu indicator columns are reserved,
//! - whether `ArrowRight` moves focus into an open submenu,
//! - what clearing the highlight does to an open submenu,
//! - which pointer button transition activates a row.
//!
//! ## Environment Variables
//!
//! - `SHELLMENU_VARIANT`: `popup` or `dock`, selects the preset.
//! - `SHELLMENU_CONFIG`: path to a TOML file applied on top of the preset.
//!
//! ## Configuration File Format
//!
//! ```toml
//! variant = "dock"
//! max_width = 360.0
//! submenu_on_clear = "keep"
//! ```
//!
//! Fields that are left out keep the preset's value.

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, MenuResult};
use crate::menu::constants::*;

/// Environment variable selecting the preset.
pub const VARIANT_ENV: &str = "SHELLMENU_VARIANT";

/// Environment variable naming a TOML configuration file.
pub const CONFIG_ENV: &str = "SHELLMENU_CONFIG";

/// The two menu flavours of the desktop shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuVariant {
    /// General popup/context menu.
    #[default]
    Popup,
    /// Dock/taskbar menu.
    Dock,
}

impl FromStr for MenuVariant {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "popup" => Ok(Self::Popup),
            "dock" => Ok(Self::Dock),
            other => Err(MenuError::unknown_variant(other)),
        }
    }
}

/// What clearing the highlight does to an open submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmenuOnClear {
    /// Leave any open submenu alone.
    Keep,
    /// Ask the host to collapse any open submenu.
    Collapse,
}

/// Pointer transition that activates the row under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationTrigger {
    /// Button press highlights and activates.
    Press,
    /// Button release activates, or tears the menu down when released outside.
    Release,
}

/// Layout and behaviour parameters of a menu content view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Preset this configuration started from.
    pub variant: MenuVariant,
    /// Space above the first row.
    pub top_padding: f64,
    /// Space below the last row.
    pub bottom_padding: f64,
    /// Space left and right of the row content.
    pub horizontal_padding: f64,
    /// Hard cap on the content width.
    pub max_width: f64,
    /// Height of a normal row.
    pub item_height: f64,
    /// Height of a separator row.
    pub separator_height: f64,
    /// Reserve and draw the icon/checkmark column.
    pub show_icons: bool,
    /// Reserve and draw the submenu indicator column.
    pub show_submenu_indicators: bool,
    /// `ArrowRight` gives focus to an open submenu.
    pub right_arrow_focuses_submenu: bool,
    /// Submenu handling when the highlight is cleared.
    pub submenu_on_clear: SubmenuOnClear,
    /// Pointer transition that activates rows.
    pub activation: ActivationTrigger,
    /// Delay before input capture is taken once shown.
    pub grab_delay_ms: u64,
}

impl ContentConfig {
    /// Preset for the general popup menu.
    pub fn popup() -> Self {
        Self {
            variant: MenuVariant::Popup,
            top_padding: 0.0,
            bottom_padding: 0.0,
            horizontal_padding: POPUP_HORIZONTAL_PADDING,
            max_width: MAX_WIDTH,
            item_height: ITEM_HEIGHT,
            separator_height: SEPARATOR_HEIGHT,
            show_icons: true,
            show_submenu_indicators: true,
            right_arrow_focuses_submenu: true,
            submenu_on_clear: SubmenuOnClear::Keep,
            activation: ActivationTrigger::Press,
            grab_delay_ms: GRAB_DELAY_MS,
        }
    }

    /// Preset for the dock menu.
    pub fn dock() -> Self {
        Self {
            variant: MenuVariant::Dock,
            top_padding: DOCK_VERTICAL_PADDING,
            bottom_padding: DOCK_VERTICAL_PADDING,
            horizontal_padding: DOCK_HORIZONTAL_PADDING,
            max_width: MAX_WIDTH,
            item_height: ITEM_HEIGHT,
            separator_height: SEPARATOR_HEIGHT,
            show_icons: false,
            show_submenu_indicators: false,
            right_arrow_focuses_submenu: false,
            submenu_on_clear: SubmenuOnClear::Collapse,
            activation: ActivationTrigger::Release,
            grab_delay_ms: GRAB_DELAY_MS,
        }
    }

    /// Preset for a variant.
    pub fn for_variant(variant: MenuVariant) -> Self {
        match variant {
            MenuVariant::Popup => Self::popup(),
            MenuVariant::Dock => Self::dock(),
        }
    }

    /// The deferred grab delay as a [Duration].
    pub fn grab_delay(&self) -> Duration {
        Duration::from_millis(self.grab_delay_ms)
    }

    /// Parse a configuration from TOML content.
    pub fn from_toml(content: &str) -> MenuResult<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| MenuError::parse_error("<inline>", e.to_string()))?;
        Ok(file.resolve())
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> MenuResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MenuError::file_not_found(path));
        }
        let content = fs::read_to_string(path)?;
        let file: ConfigFile =
            toml::from_str(&content).map_err(|e| MenuError::parse_error(path, e.to_string()))?;
        Ok(file.resolve())
    }

    /// Build a configuration from `SHELLMENU_VARIANT` and `SHELLMENU_CONFIG`.
    ///
    /// Invalid values are logged and the popup preset is used instead.
    pub fn from_env_or_default() -> Self {
        let mut config = match env::var(VARIANT_ENV) {
            Ok(name) => match name.parse::<MenuVariant>() {
                Ok(variant) => Self::for_variant(variant),
                Err(err) => {
                    log::warn!("{}: {}", VARIANT_ENV, err);
                    Self::popup()
                },
            },
            Err(_) => Self::popup(),
        };

        if let Ok(path) = env::var(CONFIG_ENV) {
            match fs::read_to_string(&path)
                .map_err(MenuError::from)
                .and_then(|content| {
                    toml::from_str::<ConfigFile>(&content)
                        .map_err(|e| MenuError::parse_error(&path, e.to_string()))
                }) {
                Ok(file) => {
                    // the file may name its own preset; otherwise it patches the env one
                    config = match file.variant {
                        Some(_) => file.resolve(),
                        None => file.apply(config),
                    };
                    log::debug!("Loaded menu config from {}", path);
                },
                Err(err) => log::warn!("Ignoring menu config {}: {}", path, err),
            }
        }

        config
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self::popup()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    variant: Option<MenuVariant>,
    top_padding: Option<f64>,
    bottom_padding: Option<f64>,
    horizontal_padding: Option<f64>,
    max_width: Option<f64>,
    item_height: Option<f64>,
    separator_height: Option<f64>,
    show_icons: Option<bool>,
    show_submenu_indicators: Option<bool>,
    right_arrow_focuses_submenu: Option<bool>,
    submenu_on_clear: Option<SubmenuOnClear>,
    activation: Option<ActivationTrigger>,
    grab_delay_ms: Option<u64>,
}

impl ConfigFile {
    fn resolve(self) -> ContentConfig {
        let base = ContentConfig::for_variant(self.variant.unwrap_or_default());
        self.apply(base)
    }

    fn apply(self, mut config: ContentConfig) -> ContentConfig {
        macro_rules! patch {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = self.$field {
                    config.$field = value;
                })*
            };
        }
        patch!(
            top_padding,
            bottom_padding,
            horizontal_padding,
            max_width,
            item_height,
            separator_height,
            show_icons,
            show_submenu_indicators,
            right_arrow_focuses_submenu,
            submenu_on_clear,
            activation,
            grab_delay_ms,
        );
        config
    }
}
