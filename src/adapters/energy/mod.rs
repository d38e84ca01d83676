//! Energy-ledger mod assignment oracle
//!
//! Places mods against an item's energy budget. The effective budget is
//! [`MAX_ITEM_ENERGY`] when the policy assumes masterworked items, otherwise
//! the item's own capacity raised to the requested floor. Mods are laid in
//! submission order; a mod whose cost no longer fits is reported as
//! unassigned rather than failing the call.

use log::debug;
use thiserror::Error;

use crate::core::models::{EnergyAssumptions, Item, MAX_ITEM_ENERGY, ModDef};
use crate::core::ports::{ModAssignment, ModAssignmentOracle};

/// Errors for malformed mod records
#[derive(Debug, Error)]
pub enum EnergyError {
    /// A mod declares a cost no item could ever pay
    #[error("mod {name} has energy cost {cost}, exceeding the {max} capacity cap")]
    CostExceedsCap {
        /// The offending mod's name
        name: String,
        /// Its declared cost
        cost: u8,
        /// The hard capacity cap
        max: u8,
    },
}

/// Mod assignment oracle backed by a simple energy ledger
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyLedgerOracle;

impl EnergyLedgerOracle {
    /// Create a new oracle
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The energy budget an item is evaluated at
    const fn effective_capacity(
        item: &Item,
        assumptions: EnergyAssumptions,
        min_energy: u8,
    ) -> u8 {
        if assumptions.assume_masterworked {
            MAX_ITEM_ENERGY
        } else if item.energy_capacity > min_energy {
            item.energy_capacity
        } else {
            min_energy
        }
    }
}

impl ModAssignmentOracle for EnergyLedgerOracle {
    fn assign(
        &self,
        item: &Item,
        mods: &[ModDef],
        assumptions: EnergyAssumptions,
        min_energy: u8,
    ) -> anyhow::Result<ModAssignment> {
        let capacity = Self::effective_capacity(item, assumptions, min_energy);
        let mut remaining = capacity;
        let mut unassigned = Vec::new();

        for def in mods {
            if def.energy_cost > MAX_ITEM_ENERGY {
                return Err(EnergyError::CostExceedsCap {
                    name: def.name.clone(),
                    cost: def.energy_cost,
                    max: MAX_ITEM_ENERGY,
                }
                .into());
            }
            if def.energy_cost <= remaining {
                remaining -= def.energy_cost;
            } else {
                unassigned.push(def.clone());
            }
        }

        debug!(
            "{}: capacity {capacity}, {} of {} mods unassigned",
            item.id,
            unassigned.len(),
            mods.len()
        );
        Ok(ModAssignment { unassigned })
    }
}
