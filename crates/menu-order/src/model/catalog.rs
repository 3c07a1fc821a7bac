//! Catalog wire document: sections → items → modifier groups → options.
//!
//! The remote menu endpoint is loosely typed; real responses routinely omit
//! images, descriptions, or whole modifier lists. Only `name` and `price` are
//! required anywhere; everything else is optional or defaulted so a partial
//! document still parses.

use crate::model::Money;
use serde::{Deserialize, Serialize};

/// Top-level menu document returned by the catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub sections: Vec<MenuSection>,
}

impl CatalogDocument {
    /// Looks up an item by section and item name.
    pub fn find_item(&self, section: &str, item: &str) -> Option<&MenuItem> {
        self.sections
            .iter()
            .find(|s| s.name == section)
            .and_then(|s| s.items.iter().find(|i| i.name == item))
    }
}

/// A named menu section (e.g. "Burgers").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSection {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Reference to a remotely hosted image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRef {
    pub image: String,
}

/// A single orderable item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageRef>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<ModifierGroup>,
}

impl MenuItem {
    /// Looks up a modifier group by name.
    pub fn modifier_group(&self, name: &str) -> Option<&ModifierGroup> {
        self.modifiers.iter().find(|g| g.name == name)
    }

    /// True if the named group exists and contains the named option.
    pub fn has_option(&self, group: &str, option: &str) -> bool {
        self.modifier_group(group)
            .and_then(|g| g.option(option))
            .is_some()
    }
}

/// A named set of mutually exclusive options attached to an item.
///
/// The wire format calls the option list `items`; single-select is a policy of
/// the selection state, not something the document enforces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierGroup {
    pub name: String,
    #[serde(rename = "items")]
    pub options: Vec<ModifierOption>,
}

impl ModifierGroup {
    /// Looks up an option by name.
    pub fn option(&self, name: &str) -> Option<&ModifierOption> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// One choice within a modifier group, carrying its price delta.
///
/// Deltas are zero or positive in practice; negative values are not rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierOption {
    pub name: String,
    pub price: Money,
}
