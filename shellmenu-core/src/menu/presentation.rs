// SPDX-License-Identifier: MIT OR Apache-2.0

//! Presentation data handed to the painter.
//!
//! The engine draws nothing. For every row it resolves the effective values
//! (override first, declared value otherwise), picks a style bucket and
//! prepares the elided label; the painter turns that into pixels.

use shellmenu_theme::{ItemStyle, MenuStyles, StyleBucket};
use vello::kurbo::Rect;

use super::content::ContentView;
use super::host::HostMenu;
use super::text::{elide, trim_tags, TextMeasure};

/// Effective values of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedItem<'a> {
    /// Text after overrides.
    pub text: &'a str,
    /// Checked state after overrides.
    pub checked: bool,
    /// Active state after overrides.
    pub active: bool,
    /// Style bucket to paint with.
    pub bucket: StyleBucket,
}

/// Everything the painter needs for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPresentation {
    /// Row index.
    pub index: usize,
    /// Row rectangle in view coordinates.
    pub rect: Rect,
    /// Draw a separator line instead of content.
    pub separator: bool,
    /// Effective text, elided to the text column.
    pub text: String,
    /// Shortcut label.
    pub shortcut: Option<String>,
    /// Effective checked state.
    pub checked: bool,
    /// Effective active state.
    pub active: bool,
    /// Style bucket.
    pub bucket: StyleBucket,
    /// Icon reference for the bucket, if the icon column is shown.
    pub icon: Option<String>,
    /// Draw the bucket's checkmark glyph.
    pub checkmark: bool,
    /// Draw the bucket's submenu indicator glyph.
    pub submenu_indicator: bool,
}

impl ItemPresentation {
    /// Style for this row out of the host's styles.
    pub fn style<'s>(&self, styles: &'s MenuStyles) -> &'s ItemStyle {
        styles.bucket(self.bucket)
    }
}

impl<H: HostMenu, M: TextMeasure> ContentView<H, M> {
    /// Resolve the effective values of row `index`.
    pub fn resolve(&self, index: usize) -> Option<ResolvedItem<'_>> {
        let item = self.items.get(index)?;
        let overrides = self.host.overrides();
        let active = overrides.effective_active(item);
        let bucket = if !active {
            StyleBucket::Inactive
        } else if self.highlighted == Some(index) {
            StyleBucket::Hover
        } else {
            StyleBucket::Normal
        };
        Some(ResolvedItem {
            text: overrides.effective_text(item),
            checked: overrides.effective_checked(item),
            active,
            bucket,
        })
    }

    /// Presentation of every row, top to bottom.
    pub fn presentations(&self) -> Vec<ItemPresentation> {
        let text_width = self.columns.text_width(self.width, &self.config);

        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let resolved = self.resolve(index)?;
                let rect = self.rect_of(index)?;

                let text = if item.is_separator() {
                    String::new()
                } else {
                    let plain = trim_tags(resolved.text);
                    if self.metrics.measure(&plain) < text_width {
                        resolved.text.to_string()
                    } else {
                        elide(&self.metrics, &plain, text_width)
                    }
                };

                let icon = if self.config.show_icons {
                    let icon = match resolved.bucket {
                        StyleBucket::Normal => &item.icons.normal,
                        StyleBucket::Hover => &item.icons.hover,
                        StyleBucket::Inactive => &item.icons.inactive,
                    };
                    (!icon.is_empty()).then(|| icon.clone())
                } else {
                    None
                };

                Some(ItemPresentation {
                    index,
                    rect,
                    separator: item.is_separator(),
                    text,
                    shortcut: item.shortcut.clone().filter(|s| !s.is_empty()),
                    checked: resolved.checked,
                    active: resolved.active,
                    bucket: resolved.bucket,
                    icon,
                    checkmark: item.checkable
                        && item.show_checkmark
                        && resolved.checked
                        && item.icons.is_empty(),
                    submenu_indicator: self.config.show_submenu_indicators && item.has_submenu(),
                })
            })
            .collect()
    }
}
