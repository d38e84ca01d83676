//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the filtering core and the
//! subsystems it consumes but does not own: mod assignment and search
//! parsing.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core filter depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap implementations without changing filter logic
//! - **Clarity**: Clear boundaries between layers

mod oracle;
mod search;

pub use oracle::{ModAssignment, ModAssignmentOracle};
pub use search::SearchFilter;
