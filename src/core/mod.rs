//! Core domain logic for gearbench
//!
//! This module contains pure filtering logic with no I/O dependencies.
//! All external collaborators are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Item, Slot, ModDef, ConstraintSet, Catalog)
//! - `services/` - The slot item filter algorithm
//! - `ports/` - Trait definitions for external collaborators

pub mod models;
pub mod ports;
pub mod services;
