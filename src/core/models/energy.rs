//! Energy policy for mod-compatibility checks

use serde::{Deserialize, Serialize};

/// Maximum energy capacity any item can reach
pub const MAX_ITEM_ENERGY: u8 = 10;

/// Fixed minimum energy floor every candidate is evaluated at
pub const MIN_ITEM_ENERGY: u8 = 7;

/// Policy describing at which upgrade level items are evaluated for
/// mod-energy compatibility
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub struct EnergyAssumptions {
    /// Treat every item as upgraded to [`MAX_ITEM_ENERGY`]
    #[serde(default)]
    pub assume_masterworked: bool,
}

impl EnergyAssumptions {
    /// Policy that evaluates items at their current capacity
    #[must_use]
    pub const fn current() -> Self {
        Self {
            assume_masterworked: false,
        }
    }

    /// Policy that treats every item as masterworked
    #[must_use]
    pub const fn masterworked() -> Self {
        Self {
            assume_masterworked: true,
        }
    }
}
