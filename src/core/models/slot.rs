//! Equipment slot enumeration
//!
//! The fixed set of slot positions a loadout fills. Every filter result
//! contains an entry for each of these, even when the catalog has no items
//! for one of them.

use serde::{Deserialize, Serialize};

/// One equipment slot in a loadout
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Slot {
    /// Head armor
    Helmet,
    /// Arm armor
    Gauntlets,
    /// Chest armor
    Chest,
    /// Leg armor
    Legs,
    /// Class-specific item
    ClassItem,
}

impl Slot {
    /// Every slot, in canonical loadout order
    pub const ALL: [Self; 5] =
        [Self::Helmet, Self::Gauntlets, Self::Chest, Self::Legs, Self::ClassItem];

    /// The mod-category identifier mods use to declare which slot they target
    #[must_use]
    pub const fn mod_category(self) -> &'static str {
        match self {
            Self::Helmet => "helmet",
            Self::Gauntlets => "arms",
            Self::Chest => "chest",
            Self::Legs => "legs",
            Self::ClassItem => "class",
        }
    }

    /// Look up the slot a mod-category identifier targets
    #[must_use]
    pub fn from_mod_category(category: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.mod_category() == category)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Helmet => write!(f, "helmet"),
            Self::Gauntlets => write!(f, "gauntlets"),
            Self::Chest => write!(f, "chest"),
            Self::Legs => write!(f, "legs"),
            Self::ClassItem => write!(f, "class-item"),
        }
    }
}

impl std::str::FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "helmet" => Ok(Self::Helmet),
            "gauntlets" => Ok(Self::Gauntlets),
            "chest" => Ok(Self::Chest),
            "legs" => Ok(Self::Legs),
            "class-item" | "class_item" => Ok(Self::ClassItem),
            _ => Err(format!(
                "Invalid slot: {s}. Use: helmet, gauntlets, chest, legs, class-item"
            )),
        }
    }
}
