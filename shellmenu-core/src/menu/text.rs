// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text measurement and elision.
//!
//! Glyph shaping belongs to the painter; the engine only needs a width for a
//! string, supplied through [TextMeasure].

use super::constants::{ELLIPSIS, TEXT_CHAR_WIDTH};

/// Measures the rendered width of a string under the menu font.
pub trait TextMeasure {
    /// Width of `text` in pixels.
    fn measure(&self, text: &str) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f64,
{
    fn measure(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Fixed-advance estimate for hosts without a shaper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedMetrics {
    /// Advance of every character.
    pub char_width: f64,
}

impl Default for EstimatedMetrics {
    fn default() -> Self {
        Self {
            char_width: TEXT_CHAR_WIDTH,
        }
    }
}

impl TextMeasure for EstimatedMetrics {
    fn measure(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }
}

/// Shorten `text` to fit `max_width`, ending it with an ellipsis.
///
/// Text narrower than `max_width` is returned unchanged. Otherwise characters
/// are taken from the front while the prefix plus the ellipsis still measures
/// under `max_width`. When not even the ellipsis fits, the result is empty.
pub fn elide<M: TextMeasure + ?Sized>(metrics: &M, text: &str, max_width: f64) -> String {
    if metrics.measure(text) < max_width {
        return text.to_string();
    }
    if metrics.measure(ELLIPSIS) >= max_width {
        return String::new();
    }

    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        let mut candidate = String::with_capacity(result.len() + ch.len_utf8() + ELLIPSIS.len());
        candidate.push_str(&result);
        candidate.push(ch);
        candidate.push_str(ELLIPSIS);
        if metrics.measure(&candidate) >= max_width {
            break;
        }
        result.push(ch);
    }
    result.push_str(ELLIPSIS);
    result
}

/// Strip inline underline markup before measuring.
pub fn trim_tags(text: &str) -> String {
    text.replace("<u>", "").replace("</u>", "")
}
