//! Adapter implementations of the core port traits
//!
//! - `energy/` - mod assignment oracle backed by an energy-capacity ledger
//! - `query/` - free-text query parser producing a search filter

pub mod energy;
pub mod query;
