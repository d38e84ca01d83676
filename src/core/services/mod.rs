//! Filtering services
//!
//! Pure logic only; collaborators come in through the port traits.

mod filter;

pub use filter::{SlotItems, filter_slots};
