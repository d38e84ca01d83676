//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Catalog, Item, Slot};
use crate::core::services::SlotItems;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a filter run
#[derive(Debug, Serialize)]
pub struct FilterReport {
    /// Per-slot results, in canonical slot order
    pub slots: Vec<SlotReport>,
}

/// One slot's filter result
#[derive(Debug, Serialize)]
pub struct SlotReport {
    /// The slot
    pub slot: Slot,
    /// Items kept as candidates, in catalog order
    pub kept: Vec<ItemLine>,
    /// How many items the catalog offered for this slot
    pub total: usize,
}

/// One kept item
#[derive(Debug, Serialize)]
pub struct ItemLine {
    /// Instance id
    pub id: String,
    /// Display name
    pub name: String,
    /// Exotic flag
    pub exotic: bool,
    /// Energy capacity
    pub energy_capacity: u8,
}

impl From<&Item> for ItemLine {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            exotic: item.exotic,
            energy_capacity: item.energy_capacity,
        }
    }
}

impl FilterReport {
    /// Build a report from filter results and the catalog they came from
    #[must_use]
    pub fn new(results: &SlotItems, catalog: Option<&Catalog>) -> Self {
        let slots = Slot::ALL
            .into_iter()
            .map(|slot| SlotReport {
                slot,
                kept: results
                    .get(&slot)
                    .map_or_else(Vec::new, |items| items.iter().map(ItemLine::from).collect()),
                total: catalog.map_or(0, |c| c.items(slot).len()),
            })
            .collect();
        Self { slots }
    }

    /// Render the report to stdout
    pub fn print(&self, mode: OutputMode) -> anyhow::Result<()> {
        match mode {
            OutputMode::Json => println!("{}", serde_json::to_string_pretty(self)?),
            OutputMode::Human => self.print_human(),
        }
        Ok(())
    }

    fn print_human(&self) {
        for report in &self.slots {
            let header = format!("{} ({}/{})", report.slot, report.kept.len(), report.total);
            println!("{}", header.bold());
            if report.kept.is_empty() {
                println!("  {}", "(no candidates)".dimmed());
            }
            for item in &report.kept {
                let tag = if item.exotic {
                    "exotic".yellow().to_string()
                } else {
                    "legendary".cyan().to_string()
                };
                println!(
                    "  {} [{tag}] {} energy {}",
                    item.name,
                    item.energy_capacity,
                    item.id.dimmed()
                );
            }
        }
    }
}

/// The fixed slot enumeration, for `gearbench slots`
#[derive(Debug, Serialize)]
pub struct SlotListing {
    /// Every slot with its mod-category identifier
    pub slots: Vec<SlotInfo>,
}

/// One slot in the listing
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SlotInfo {
    /// The slot
    pub slot: Slot,
    /// Mod-category identifier mods use to target this slot
    pub mod_category: &'static str,
}

impl SlotListing {
    /// Build the fixed listing
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Slot::ALL
                .into_iter()
                .map(|slot| SlotInfo {
                    slot,
                    mod_category: slot.mod_category(),
                })
                .collect(),
        }
    }

    /// Render the listing to stdout
    pub fn print(&self, mode: OutputMode) -> anyhow::Result<()> {
        match mode {
            OutputMode::Json => println!("{}", serde_json::to_string_pretty(self)?),
            OutputMode::Human => {
                for info in &self.slots {
                    println!("{:<12} mod category: {}", info.slot.to_string().bold(), info.mod_category);
                }
            },
        }
        Ok(())
    }
}

impl Default for SlotListing {
    fn default() -> Self {
        Self::new()
    }
}
