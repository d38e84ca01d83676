//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without a real mod-assignment implementation.

use std::collections::HashSet;

use gearbench::core::models::{EnergyAssumptions, Item, ModDef};
use gearbench::core::ports::{ModAssignment, ModAssignmentOracle};

/// Mock implementation of `ModAssignmentOracle`
///
/// Reports the configured item ids as infeasible and everything else as a
/// clean fit. Can also be configured to fail outright.
pub struct MockOracle {
    infeasible: HashSet<String>,
    fail: bool,
}

impl MockOracle {
    /// Oracle that fits every item
    pub fn new() -> Self {
        Self {
            infeasible: HashSet::new(),
            fail: false,
        }
    }

    /// Oracle that reports the given instance ids as infeasible
    pub fn rejecting(ids: &[&str]) -> Self {
        Self {
            infeasible: ids.iter().map(|s| (*s).to_string()).collect(),
            fail: false,
        }
    }

    /// Oracle that fails every call
    pub fn failing() -> Self {
        Self {
            infeasible: HashSet::new(),
            fail: true,
        }
    }
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl ModAssignmentOracle for MockOracle {
    fn assign(
        &self,
        item: &Item,
        mods: &[ModDef],
        _assumptions: EnergyAssumptions,
        _min_energy: u8,
    ) -> anyhow::Result<ModAssignment> {
        if self.fail {
            anyhow::bail!("mock oracle failure for {}", item.id);
        }
        if self.infeasible.contains(&item.id) {
            // Report at least one unassigned mod even when none were required
            let unassigned = if mods.is_empty() {
                vec![ModDef::new(0, "phantom", item.slot.mod_category(), 1)]
            } else {
                mods.to_vec()
            };
            return Ok(ModAssignment { unassigned });
        }
        Ok(ModAssignment::default())
    }
}
