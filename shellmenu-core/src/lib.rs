// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! Menu content engine for shellmenu => See the `shellmenu` crate.
//!
//! Contains the item model, layout, input handling, highlight state machine,
//! check/radio semantics and the presentation resolver shared by the popup
//! and dock menus.

/// Contains useful types for interacting with winit.
pub mod window {
    pub use winit::keyboard::{Key, NamedKey};
}

/// Contains the [ContentConfig](config::ContentConfig) struct.
pub mod config;

/// Contains the [MenuError](error::MenuError) type.
pub mod error;

/// Contains the menu content engine.
pub mod menu;

pub use config::{ActivationTrigger, ContentConfig, MenuVariant, SubmenuOnClear};
pub use error::{MenuError, MenuResult};
