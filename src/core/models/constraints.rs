//! User constraints for one filtering request
//!
//! A [`ConstraintSet`] is constructed fresh per request and discarded after
//! use. The caller guarantees at most one pinned item per slot.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{EnergyAssumptions, Item, ModDef, Slot};

/// The user's exotic lock
///
/// Exotic locking is per-slot in effect: a lock on one slot does not strip
/// exotics from other slots. Cross-slot exotic exclusivity (at most one
/// exotic across the whole loadout) is the optimizer's concern, not this
/// filter's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExoticChoice {
    /// No exotic constraint
    #[default]
    Any,
    /// A specific exotic, identified by its definition hash
    Locked(u32),
    /// No exotic may be used anywhere
    NoExotic,
}

/// Everything the user has pinned, excluded, or locked for one request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConstraintSet {
    /// At most one user-forced item per slot
    #[serde(default)]
    pub pinned: HashMap<Slot, Item>,

    /// Instance ids the user has forced out, per slot
    #[serde(default)]
    pub excluded: HashMap<Slot, HashSet<String>>,

    /// Mods the optimizer must be able to place, across all slots
    #[serde(default)]
    pub locked_mods: Vec<ModDef>,

    /// The exotic lock
    #[serde(default)]
    pub exotic: ExoticChoice,

    /// Energy policy for mod-compatibility checks
    #[serde(default)]
    pub energy: EnergyAssumptions,
}

impl ConstraintSet {
    /// An empty constraint set (nothing pinned, excluded, or locked)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin an item into its slot, replacing any previous pin there
    pub fn pin(&mut self, item: Item) {
        self.pinned.insert(item.slot, item);
    }

    /// Exclude an item instance from a slot
    pub fn exclude(&mut self, slot: Slot, id: impl Into<String>) {
        self.excluded.entry(slot).or_default().insert(id.into());
    }

    /// Lock a mod into the build
    pub fn lock_mod(&mut self, def: ModDef) {
        self.locked_mods.push(def);
    }

    /// Whether an instance id is excluded from a slot
    #[must_use]
    pub fn is_excluded(&self, slot: Slot, id: &str) -> bool {
        self.excluded.get(&slot).is_some_and(|ids| ids.contains(id))
    }
}
