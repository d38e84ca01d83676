//! Item catalog - candidate items grouped by equipment slot

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Item, Slot};

/// Candidate items grouped by slot, in stable catalog order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    slots: BTreeMap<Slot, Vec<Item>>,
}

impl Catalog {
    /// An empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Build a catalog from a flat item list, grouping by each item's slot
    /// and preserving the input order within every slot
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert(item);
        }
        catalog
    }

    /// Append an item to its slot's sequence
    pub fn insert(&mut self, item: Item) {
        self.slots.entry(item.slot).or_default().push(item);
    }

    /// The items available in a slot, in catalog order
    ///
    /// Returns an empty slice for slots the catalog has no items for.
    #[must_use]
    pub fn items(&self, slot: Slot) -> &[Item] {
        self.slots.get(&slot).map_or(&[], Vec::as_slice)
    }

    /// Find an item anywhere in the catalog by instance id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.slots.values().flatten().find(|item| item.id == id)
    }

    /// Total number of items across all slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Whether the catalog holds no items at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.values().all(Vec::is_empty)
    }
}
