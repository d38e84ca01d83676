//! Domain models for gearbench
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Item`] - One candidate piece of gear
//! - [`Slot`] - The fixed equipment slot enumeration
//! - [`ModDef`] - A mod the optimizer must be able to place
//! - [`ConstraintSet`] - Everything the user has locked, pinned, or excluded
//! - [`Catalog`] - Candidate items grouped by slot

mod catalog;
mod constraints;
mod energy;
mod item;
mod mods;
mod slot;

pub use catalog::Catalog;
pub use constraints::{ConstraintSet, ExoticChoice};
pub use energy::{EnergyAssumptions, MAX_ITEM_ENERGY, MIN_ITEM_ENERGY};
pub use item::Item;
pub use mods::ModDef;
pub use slot::Slot;
