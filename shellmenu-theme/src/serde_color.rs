// SPDX-License-Identifier: MIT OR Apache-2.0

//! Custom serialization helpers for vello::peniko::Color
//!
//! Colors are written as `#rrggbb`, or `#rrggbbaa` when not fully opaque.

use serde::{Deserialize, Deserializer, Serializer};
use vello::peniko::Color;

use crate::error::{ThemeError, ThemeResult};

/// Serialize a Color as a hex string.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_hex(*color))
}

/// Deserialize a Color from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    parse_hex_color(&hex).map_err(Error::custom)
}

/// Format a color as `#rrggbb` or `#rrggbbaa`.
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.components.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Parse `#rrggbb` / `#rrggbbaa` (the leading `#` is optional).
pub fn parse_hex_color(hex: &str) -> ThemeResult<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.is_ascii() {
        return Err(ThemeError::invalid_color(hex, "non-ascii characters"));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ThemeError::invalid_color(hex, "invalid hex digit"))
    };

    match digits.len() {
        6 => Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(ThemeError::invalid_color(hex, "must be 6 or 8 hex digits")),
    }
}
