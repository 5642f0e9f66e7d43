// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layout calculation for menu content
//!
//! Rows are stacked vertically: a separator is `separator_height` tall, every
//! other row `item_height`. Row tops are kept as a prefix sum which is rebuilt
//! whenever the item list is replaced.

use vello::kurbo::Rect;

use super::item::MenuItem;
use super::text::{trim_tags, TextMeasure};
use crate::config::ContentConfig;
use crate::menu::constants::*;

/// Height of one row.
pub fn row_height(item: &MenuItem, config: &ContentConfig) -> f64 {
    if item.is_separator() {
        config.separator_height
    } else {
        config.item_height
    }
}

/// Vertical placement of every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowLayout {
    /// `tops[i]` is the top of row `i`; the last entry is the bottom of the last row.
    tops: Vec<f64>,
    bottom_padding: f64,
}

impl RowLayout {
    /// Compute row offsets for an item list.
    pub fn compute(items: &[MenuItem], config: &ContentConfig) -> Self {
        let mut tops = Vec::with_capacity(items.len() + 1);
        let mut y = config.top_padding;
        tops.push(y);
        for item in items {
            y += row_height(item, config);
            tops.push(y);
        }
        Self {
            tops,
            bottom_padding: config.bottom_padding,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.tops.len().saturating_sub(1)
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rectangle of row `index` for a surface `width` wide.
    pub fn rect_of(&self, index: usize, width: f64) -> Option<Rect> {
        let top = *self.tops.get(index)?;
        let bottom = *self.tops.get(index + 1)?;
        Some(Rect::new(0.0, top, width, bottom))
    }

    /// Total content height including padding.
    pub fn content_height(&self) -> f64 {
        self.tops.last().copied().unwrap_or(0.0) + self.bottom_padding
    }

    /// Row whose `[top, bottom)` span contains `y`.
    pub fn index_at_y(&self, y: f64) -> Option<usize> {
        if self.is_empty() || y < self.tops[0] {
            return None;
        }
        // first top strictly greater than y, minus one
        let index = self.tops.partition_point(|top| *top <= y).checked_sub(1)?;
        (index < self.len()).then_some(index)
    }
}

/// Reserved horizontal space, measured once per item list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Columns {
    /// Widest item text after markup stripping, plus slack.
    pub text: f64,
    /// Icon/checkmark column, zero when unused.
    pub icon: f64,
    /// Shortcut label column, zero when no item has a shortcut.
    pub shortcut: f64,
    /// Submenu indicator column, zero when no item has a submenu.
    pub submenu: f64,
}

impl Columns {
    /// Measure the columns for an item list.
    pub fn measure<M: TextMeasure + ?Sized>(
        items: &[MenuItem],
        config: &ContentConfig,
        metrics: &M,
    ) -> Self {
        let mut columns = Self::default();
        let mut widest: Option<f64> = None;

        for item in items.iter().filter(|item| !item.is_separator()) {
            widest = Some(widest.unwrap_or(0.0).max(metrics.measure(&trim_tags(&item.text))));

            if config.show_icons && (!item.icons.is_empty() || item.checkable) {
                columns.icon = ICON_SIZE + ICON_SPACING;
            }
            if let Some(shortcut) = item.shortcut.as_deref().filter(|s| !s.is_empty()) {
                columns.shortcut = columns
                    .shortcut
                    .max(metrics.measure(shortcut) + SHORTCUT_SPACING);
            }
            if config.show_submenu_indicators && item.has_submenu() {
                columns.submenu = SUBMENU_INDICATOR_SIZE + SUBMENU_INDICATOR_SPACING;
            }
        }

        columns.text = widest.map_or(0.0, |w| w + TEXT_SLACK);
        columns
    }

    /// Sum of the non-text columns.
    pub fn reserved(&self) -> f64 {
        self.icon + self.shortcut + self.submenu
    }

    /// Content width, clamped to the configured maximum.
    pub fn content_width(&self, config: &ContentConfig) -> f64 {
        let width = self.text + self.reserved() + config.horizontal_padding * 2.0;
        width.min(config.max_width)
    }

    /// Room left for item text in a row `row_width` wide.
    pub fn text_width(&self, row_width: f64, config: &ContentConfig) -> f64 {
        (row_width - config.horizontal_padding * 2.0 - self.reserved()).max(0.0)
    }
}
