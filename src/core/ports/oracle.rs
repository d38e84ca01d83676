//! Mod assignment oracle port
//!
//! Defines the interface for deciding whether a set of mods can be placed
//! on a given item under stated energy rules.

use super::super::models::{EnergyAssumptions, Item, ModDef};

/// Outcome of one assignment attempt
#[derive(Debug, Clone, Default)]
pub struct ModAssignment {
    /// Mods that could not be placed on the item
    pub unassigned: Vec<ModDef>,
}

impl ModAssignment {
    /// Whether every submitted mod was placed
    #[must_use]
    pub fn fits(&self) -> bool {
        self.unassigned.is_empty()
    }
}

/// Capability that places mods onto items
///
/// The filter only inspects whether `unassigned` is empty; which specific
/// mods failed is the caller's concern. Implementations should report
/// unplaceable mods through `unassigned` and reserve `Err` for malformed
/// inputs - errors are propagated to the filter's caller unchanged.
pub trait ModAssignmentOracle: Send + Sync {
    /// Attempt to place `mods` on `item` under the given energy policy
    ///
    /// `min_energy` is the floor the item's capacity is raised to before
    /// placement is attempted.
    fn assign(
        &self,
        item: &Item,
        mods: &[ModDef],
        assumptions: EnergyAssumptions,
        min_energy: u8,
    ) -> anyhow::Result<ModAssignment>;
}
