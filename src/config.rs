//! Constraint file loading
//!
//! User constraints live in a TOML file (`gearbench.toml` by convention):
//!
//! ```toml
//! locked_exotic = "none"        # omit for no constraint, or an item hash
//!
//! [energy]
//! assume_masterworked = true
//!
//! [pinned]
//! helmet = "item-instance-id"
//!
//! [excluded]
//! legs = ["id-1", "id-2"]
//!
//! [[locked_mods]]
//! hash = 111
//! name = "Recuperation"
//! category = "legs"
//! energy_cost = 3
//! ```
//!
//! Pinned entries reference catalog items by instance id and are resolved
//! against the loaded catalog before filtering.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{Catalog, ConstraintSet, EnergyAssumptions, ExoticChoice, ModDef, Slot};

/// Errors that can occur when loading or resolving a constraint file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML
    #[error("invalid constraint file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A pinned instance id was not found in the loaded catalog
    #[error("pinned item {id} for {slot} not found in catalog")]
    PinnedNotInCatalog {
        /// The slot the pin was declared for
        slot: Slot,
        /// The missing instance id
        id: String,
    },

    /// A pinned instance id resolved to an item in a different slot
    #[error("pinned item {id} belongs to {actual}, not {slot}")]
    PinnedSlotMismatch {
        /// The slot the pin was declared for
        slot: Slot,
        /// The slot the item actually equips into
        actual: Slot,
        /// The instance id
        id: String,
    },

    /// The `locked_exotic` field held an unrecognized keyword
    #[error("invalid locked_exotic: {0:?}. Use an item hash or \"none\"")]
    InvalidExoticLock(String),
}

/// The `locked_exotic` field: an item hash or the keyword `"none"`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ExoticLockField {
    Hash(u32),
    Keyword(String),
}

/// Deserialized constraint file, before catalog resolution
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConstraintFile {
    /// Pinned instance id per slot
    #[serde(default)]
    pinned: HashMap<Slot, String>,

    /// Excluded instance ids per slot
    #[serde(default)]
    excluded: HashMap<Slot, Vec<String>>,

    /// Mods the optimizer must be able to place
    #[serde(default)]
    locked_mods: Vec<ModDef>,

    /// Exotic lock: an item hash, or `"none"` for the no-exotic sentinel
    #[serde(default)]
    locked_exotic: Option<ExoticLockField>,

    /// Energy policy
    #[serde(default)]
    energy: EnergyAssumptions,
}

impl ConstraintFile {
    /// Resolve file-level references into a [`ConstraintSet`]
    ///
    /// Pinned ids are looked up in the catalog; with no catalog loaded any
    /// pin is unresolvable and reported as missing.
    pub fn resolve(self, catalog: Option<&Catalog>) -> Result<ConstraintSet, ConfigError> {
        let mut constraints = ConstraintSet::new();

        for (slot, id) in self.pinned {
            let item = catalog
                .and_then(|c| c.find(&id))
                .ok_or_else(|| ConfigError::PinnedNotInCatalog {
                    slot,
                    id: id.clone(),
                })?;
            if item.slot != slot {
                return Err(ConfigError::PinnedSlotMismatch {
                    slot,
                    actual: item.slot,
                    id,
                });
            }
            constraints.pin(item.clone());
        }

        for (slot, ids) in self.excluded {
            for id in ids {
                constraints.exclude(slot, id);
            }
        }

        constraints.locked_mods = self.locked_mods;
        constraints.exotic = match self.locked_exotic {
            None => ExoticChoice::Any,
            Some(ExoticLockField::Hash(hash)) => ExoticChoice::Locked(hash),
            Some(ExoticLockField::Keyword(word)) if word == "none" => ExoticChoice::NoExotic,
            Some(ExoticLockField::Keyword(word)) => {
                return Err(ConfigError::InvalidExoticLock(word));
            },
        };
        constraints.energy = self.energy;

        Ok(constraints)
    }
}

/// Load a constraint file from disk
pub fn load(path: impl AsRef<Path>) -> Result<ConstraintFile, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Parse constraint file TOML
pub fn parse(content: &str) -> Result<ConstraintFile, ConfigError> {
    Ok(toml::from_str(content)?)
}
