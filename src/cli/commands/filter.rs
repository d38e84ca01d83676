//! Filter command - run the slot item filter over a catalog

use std::path::Path;

use log::warn;

use crate::adapters::energy::EnergyLedgerOracle;
use crate::adapters::query::QueryFilter;
use crate::catalog_file;
use crate::config;
use crate::core::models::ConstraintSet;
use crate::core::services::filter_slots;
use crate::output::{FilterReport, OutputMode};

/// Run the filter and print the per-slot candidates
///
/// A missing catalog file degrades to an all-empty result rather than an
/// error, matching the filter's own missing-catalog behavior.
pub fn run(
    catalog_path: &Path,
    constraints_path: Option<&Path>,
    search: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let catalog = if catalog_path.exists() {
        Some(catalog_file::load(catalog_path)?)
    } else {
        warn!("catalog {} not found; every slot will be empty", catalog_path.display());
        None
    };

    let constraints = match constraints_path {
        Some(path) => config::load(path)?.resolve(catalog.as_ref())?,
        None => ConstraintSet::new(),
    };

    let query = match search {
        Some(raw) => QueryFilter::parse(raw)?,
        None => QueryFilter::match_all(),
    };

    let oracle = EnergyLedgerOracle::new();
    let results = filter_slots(catalog.as_ref(), &constraints, &query, &oracle)?;

    FilterReport::new(&results, catalog.as_ref()).print(mode)
}
