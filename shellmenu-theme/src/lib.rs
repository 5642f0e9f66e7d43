// SPDX-License-Identifier: MIT OR Apache-2.0
#![warn(missing_docs)]

//! Item styles for shellmenu => See the `shellmenu` crate for more.
//!
//! A menu row is painted with one of three style buckets: `normal`, `hover`
//! and `inactive`. The buckets are owned by the host and only read by the
//! menu engine.

/// Contains the [ThemeError](error::ThemeError) type.
pub mod error;

/// Hex color (de)serialization for [vello::peniko::Color].
pub mod serde_color;

/// Contains [MenuStyles](style::MenuStyles) and its buckets.
pub mod style;

pub use error::{ThemeError, ThemeResult};
pub use style::{ItemStyle, MenuStyles, StyleBucket};
