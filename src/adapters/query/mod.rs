//! Free-text query filter
//!
//! Parses the search box's query string into a [`SearchFilter`]. Terms are
//! whitespace-separated and ANDed together:
//!
//! - `is:exotic` / `not:exotic` - exotic flag
//! - `energy:>=N` - energy capacity at least N
//! - `energy:N` - energy capacity exactly N
//! - anything else - case-insensitive substring match on the item name
//!
//! An empty query matches every item.

use thiserror::Error;

use crate::core::models::Item;
use crate::core::ports::SearchFilter;

/// Errors that can occur when parsing a query
#[derive(Debug, Error)]
pub enum QueryError {
    /// An `is:`/`not:` term named something other than a known keyword
    #[error("unknown keyword: {0}. Use: exotic")]
    UnknownKeyword(String),

    /// An `energy:` term did not carry a number
    #[error("invalid energy term: {0}")]
    InvalidEnergy(String),
}

/// One parsed query term
#[derive(Debug, Clone, PartialEq, Eq)]
enum Term {
    /// `is:exotic` (true) or `not:exotic` (false)
    Exotic(bool),
    /// `energy:>=N`
    EnergyAtLeast(u8),
    /// `energy:N`
    EnergyExactly(u8),
    /// Bare term, matched against the lowercased item name
    Name(String),
}

impl Term {
    fn parse(raw: &str) -> Result<Self, QueryError> {
        if let Some(keyword) = raw.strip_prefix("is:") {
            return match keyword {
                "exotic" => Ok(Self::Exotic(true)),
                other => Err(QueryError::UnknownKeyword(other.to_string())),
            };
        }
        if let Some(keyword) = raw.strip_prefix("not:") {
            return match keyword {
                "exotic" => Ok(Self::Exotic(false)),
                other => Err(QueryError::UnknownKeyword(other.to_string())),
            };
        }
        if let Some(value) = raw.strip_prefix("energy:") {
            let (at_least, number) = value
                .strip_prefix(">=")
                .map_or((false, value), |rest| (true, rest));
            let parsed: u8 = number
                .parse()
                .map_err(|_| QueryError::InvalidEnergy(raw.to_string()))?;
            return Ok(if at_least {
                Self::EnergyAtLeast(parsed)
            } else {
                Self::EnergyExactly(parsed)
            });
        }
        Ok(Self::Name(raw.to_lowercase()))
    }

    fn matches(&self, item: &Item) -> bool {
        match self {
            Self::Exotic(wanted) => item.exotic == *wanted,
            Self::EnergyAtLeast(n) => item.energy_capacity >= *n,
            Self::EnergyExactly(n) => item.energy_capacity == *n,
            Self::Name(needle) => item.name.to_lowercase().contains(needle),
        }
    }
}

/// A parsed search query
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    terms: Vec<Term>,
}

impl QueryFilter {
    /// Parse a query string
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let terms = query
            .split_whitespace()
            .map(Term::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { terms })
    }

    /// A filter that matches every item
    #[must_use]
    pub const fn match_all() -> Self {
        Self { terms: Vec::new() }
    }

    /// Whether this query has no terms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl SearchFilter for QueryFilter {
    fn matches(&self, item: &Item) -> bool {
        self.terms.iter().all(|term| term.matches(item))
    }
}
