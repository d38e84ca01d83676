//! gearbench - a CLI tool for narrowing per-slot gear candidates for
//! automated loadout generation

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

/// Main entry point for the gearbench CLI
fn main() {
    if let Err(err) = gearbench::cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
