//! Search filter port
//!
//! The free-text search subsystem hands the filter an opaque predicate
//! over items. The filter never interprets the query itself.

use super::super::models::Item;

/// An opaque boolean test over an item
///
/// Any closure `Fn(&Item) -> bool` is a valid filter.
pub trait SearchFilter: Send + Sync {
    /// Whether the item matches the search
    fn matches(&self, item: &Item) -> bool;
}

impl<F> SearchFilter for F
where
    F: Fn(&Item) -> bool + Send + Sync,
{
    fn matches(&self, item: &Item) -> bool {
        self(item)
    }
}
