//! Candidate gear items
//!
//! Items are immutable value records supplied by the catalog on every
//! filtering call. Two copies of the same gear share a definition `hash`
//! but carry distinct instance `id`s.

use serde::{Deserialize, Serialize};

use super::Slot;

/// One candidate piece of gear
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique instance id
    pub id: String,

    /// Definition hash shared by all copies of the same gear
    pub hash: u32,

    /// Display name
    pub name: String,

    /// The slot this item equips into
    pub slot: Slot,

    /// Whether this is an exotic (at most one equippable per loadout)
    #[serde(default)]
    pub exotic: bool,

    /// Current energy capacity, before any masterwork assumption
    #[serde(default)]
    pub energy_capacity: u8,
}

impl Item {
    /// Create a new item
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        hash: u32,
        name: impl Into<String>,
        slot: Slot,
        exotic: bool,
        energy_capacity: u8,
    ) -> Self {
        Self {
            id: id.into(),
            hash,
            name: name.into(),
            slot,
            exotic,
            energy_capacity,
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
