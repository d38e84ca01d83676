//! gearbench - a CLI tool and library for narrowing per-slot gear candidates
//! for automated loadout generation
//!
//! This library provides the core functionality for selecting, per equipment
//! slot, the items that remain eligible for outfit optimization after user
//! constraints (pins, exclusions, exotic locks, required mods, search) are
//! applied.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod catalog_file;
pub mod cli;
pub mod config;
pub mod core;
pub mod output;
