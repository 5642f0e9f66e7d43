// SPDX-License-Identifier: MIT OR Apache-2.0

//! Menu content engine
//!
//! One engine drives both the popup menu and the dock menu; the differences
//! between them are carried by [ContentConfig](crate::config::ContentConfig).

pub mod constants;
pub mod content;
pub mod grab;
pub mod group;
pub mod host;
pub mod interaction;
pub mod item;
pub mod layout;
pub mod overrides;
pub mod presentation;
pub mod text;

mod check;

// Re-export core types
pub use content::ContentView;
pub use grab::DeferredGrab;
pub use group::CheckGroup;
pub use host::{HostMenu, SurfaceOwner};
pub use interaction::KeyCommand;
pub use item::{IconRefs, MenuItem, MenuTree};
pub use layout::{Columns, RowLayout};
pub use overrides::{OverrideField, OverrideRegistry};
pub use presentation::{ItemPresentation, ResolvedItem};
pub use text::{elide, trim_tags, EstimatedMetrics, TextMeasure};
