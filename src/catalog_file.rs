//! Catalog file loading
//!
//! The catalog is a JSON array of items:
//!
//! ```json
//! [
//!   { "id": "a1", "hash": 100, "name": "Wormhusk Crown",
//!     "slot": "helmet", "exotic": true, "energy_capacity": 9 }
//! ]
//! ```
//!
//! Items are grouped by slot in input order.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::core::models::{Catalog, Item};

/// Errors that can occur when loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed catalog JSON
    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a catalog from a JSON file
pub fn load(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Parse catalog JSON
pub fn parse(content: &str) -> Result<Catalog, CatalogError> {
    let items: Vec<Item> = serde_json::from_str(content)?;
    Ok(Catalog::from_items(items))
}
