//! Mod definitions
//!
//! A mod the optimizer must be able to place on some item in its target
//! slot. The `category` field names the slot's mod-category identifier
//! (see [`super::Slot::mod_category`]).

use serde::{Deserialize, Serialize};

/// A mod the user has locked into the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModDef {
    /// Definition hash of the mod
    pub hash: u32,

    /// Display name
    pub name: String,

    /// Mod-category identifier declaring which slot this mod targets
    pub category: String,

    /// Energy the mod consumes when socketed
    #[serde(default)]
    pub energy_cost: u8,
}

impl ModDef {
    /// Create a new mod definition
    #[must_use]
    pub fn new(
        hash: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        energy_cost: u8,
    ) -> Self {
        Self {
            hash,
            name: name.into(),
            category: category.into(),
            energy_cost,
        }
    }
}

impl std::fmt::Display for ModDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} energy)", self.name, self.energy_cost)
    }
}
