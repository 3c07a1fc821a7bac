//! The user's one-choice-per-group modifier picks for the item being configured.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from modifier-group name to the chosen option name.
///
/// A key is present only if the user actively chose an option in that group;
/// selecting again in the same group replaces the prior entry, which is what
/// makes every group single-select. Absence of a group is a valid state; the
/// data model has no "required" flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    chosen: BTreeMap<String, String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a choice, unconditionally overwriting any prior selection for
    /// the group. Validation against the item's catalog entry is the screen's
    /// job; the state itself accepts any pair.
    pub fn select(&mut self, group: impl Into<String>, option: impl Into<String>) {
        self.chosen.insert(group.into(), option.into());
    }

    /// The chosen option for a group, if any.
    pub fn chosen(&self, group: &str) -> Option<&str> {
        self.chosen.get(group).map(String::as_str)
    }

    /// Iterates over `(group, option)` pairs in group-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.chosen.iter().map(|(g, o)| (g.as_str(), o.as_str()))
    }

    /// The chosen option names, in group-name order (what the basket lists).
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.chosen.values().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }
}
