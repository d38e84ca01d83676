//! Command implementations
//!
//! One module per subcommand, each taking its parsed arguments plus the
//! selected output mode.

pub mod filter;
pub mod slots;
