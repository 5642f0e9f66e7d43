// SPDX-License-Identifier: MIT OR Apache-2.0

//! Check group membership derived from item ids.
//!
//! Ids of the form `group:type[:rest]` join `group`. A `radio` type makes the
//! members mutually exclusive; any other type is an independent checkable.
//! Ids without a usable `group:type` prefix are ungrouped.

/// How a checkable item relates to its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckGroup<'a> {
    /// No group prefix.
    Ungrouped,
    /// Grouped, but not mutually exclusive.
    Independent {
        /// The group name.
        group: &'a str,
    },
    /// Member of a radio group.
    Radio {
        /// The group name.
        group: &'a str,
    },
}

impl<'a> CheckGroup<'a> {
    /// Parse the group scheme out of an item id.
    pub fn from_id(id: &'a str) -> Self {
        let mut parts = id.split(':');
        let (Some(group), Some(kind)) = (parts.next(), parts.next()) else {
            return Self::Ungrouped;
        };
        if group.is_empty() || kind.is_empty() {
            return Self::Ungrouped;
        }
        if kind == "radio" {
            Self::Radio { group }
        } else {
            Self::Independent { group }
        }
    }

    /// Radio group name, if this is a radio member.
    pub fn radio_group(&self) -> Option<&'a str> {
        match *self {
            Self::Radio { group } => Some(group),
            _ => None,
        }
    }
}
