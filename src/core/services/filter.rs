//! Slot item filter - selects per-slot candidates for loadout generation
//!
//! For each equipment slot, narrows the catalog down to the items still
//! eligible for optimization under the user's constraints. Slots are
//! independent; processing order does not affect the output.

use std::collections::{BTreeMap, HashMap};

use crate::core::models::{
    Catalog, ConstraintSet, ExoticChoice, Item, MIN_ITEM_ENERGY, ModDef, Slot,
};
use crate::core::ports::{ModAssignmentOracle, SearchFilter};

/// Per-slot filter output, in stable catalog order
///
/// Always contains an entry for every slot in [`Slot::ALL`], possibly empty.
pub type SlotItems = BTreeMap<Slot, Vec<Item>>;

/// First-pass candidate set for one slot
///
/// Resolved in strict priority order: a pin beats an exotic lock, which
/// beats the no-exotic sentinel, which beats the unrestricted default.
/// Keeping this a tagged variant keeps the precedence auditable per branch.
#[derive(Debug)]
enum FirstPass {
    /// A pinned item; absolute, bypasses every later narrowing stage
    Pinned(Item),
    /// All copies of the locked exotic present in this slot
    ExoticCopies(Vec<Item>),
    /// The slot's catalog with exotic-flagged items removed
    NonExotics(Vec<Item>),
    /// The slot's full catalog, unchanged
    Unrestricted(Vec<Item>),
}

/// Select, per slot, the items still eligible for loadout optimization
///
/// Pure function of its inputs: no I/O, no retained state. With no catalog
/// loaded every slot maps to an empty sequence; this is a defined degenerate
/// output, not an error. An oracle failure is propagated unchanged.
pub fn filter_slots(
    catalog: Option<&Catalog>,
    constraints: &ConstraintSet,
    search: &dyn SearchFilter,
    oracle: &dyn ModAssignmentOracle,
) -> anyhow::Result<SlotItems> {
    let mut out: SlotItems = Slot::ALL.into_iter().map(|slot| (slot, Vec::new())).collect();

    let Some(catalog) = catalog else {
        return Ok(out);
    };

    // Partitioned once per call, not per item
    let mods_by_slot = group_mods_by_slot(&constraints.locked_mods);

    for slot in Slot::ALL {
        let candidates = catalog.items(slot);
        if candidates.is_empty() {
            continue;
        }

        let kept = match resolve_first_pass(slot, candidates, constraints) {
            // A pin is not re-validated against exclusions, mods, or search
            FirstPass::Pinned(item) => vec![item],
            FirstPass::ExoticCopies(items)
            | FirstPass::NonExotics(items)
            | FirstPass::Unrestricted(items) => {
                let slot_mods: &[ModDef] =
                    mods_by_slot.get(&slot).map_or(&[], Vec::as_slice);
                let feasible =
                    narrow_feasible(slot, items, constraints, slot_mods, oracle)?;
                apply_search(feasible, search)
            },
        };

        out.insert(slot, kept);
    }

    Ok(out)
}

/// Partition the locked mods by the slot their category targets
///
/// Mods whose category matches no slot are dropped; they can never be
/// required of any candidate here.
fn group_mods_by_slot(mods: &[ModDef]) -> HashMap<Slot, Vec<ModDef>> {
    let mut grouped: HashMap<Slot, Vec<ModDef>> = HashMap::new();
    for def in mods {
        if let Some(slot) = Slot::from_mod_category(&def.category) {
            grouped.entry(slot).or_default().push(def.clone());
        }
    }
    grouped
}

/// Resolve the first-pass candidate set for one slot
///
/// First matching rule wins: pin, then locked exotic (only when at least
/// one copy is present in this slot), then the no-exotic sentinel, then
/// the full catalog.
fn resolve_first_pass(
    slot: Slot,
    candidates: &[Item],
    constraints: &ConstraintSet,
) -> FirstPass {
    if let Some(pinned) = constraints.pinned.get(&slot) {
        return FirstPass::Pinned(pinned.clone());
    }

    match constraints.exotic {
        ExoticChoice::Locked(hash) => {
            // Duplicate copies are all retained as interchangeable stock
            let copies: Vec<Item> =
                candidates.iter().filter(|item| item.hash == hash).cloned().collect();
            if !copies.is_empty() {
                return FirstPass::ExoticCopies(copies);
            }
        },
        ExoticChoice::NoExotic => {
            return FirstPass::NonExotics(
                candidates.iter().filter(|item| !item.exotic).cloned().collect(),
            );
        },
        ExoticChoice::Any => {},
    }

    FirstPass::Unrestricted(candidates.to_vec())
}

/// Drop excluded items and items the oracle cannot fit this slot's mods on
fn narrow_feasible(
    slot: Slot,
    items: Vec<Item>,
    constraints: &ConstraintSet,
    slot_mods: &[ModDef],
    oracle: &dyn ModAssignmentOracle,
) -> anyhow::Result<Vec<Item>> {
    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        if constraints.is_excluded(slot, &item.id) {
            continue;
        }
        let assignment =
            oracle.assign(&item, slot_mods, constraints.energy, MIN_ITEM_ENERGY)?;
        if assignment.fits() {
            kept.push(item);
        }
    }
    Ok(kept)
}

/// Narrow by search, falling back to the unsearched set when nothing matches
///
/// Never return empty if a non-empty predecessor set exists: emptying a
/// slot that still has feasible items would make optimization over that
/// slot impossible.
fn apply_search(items: Vec<Item>, search: &dyn SearchFilter) -> Vec<Item> {
    let matched: Vec<Item> =
        items.iter().filter(|item| search.matches(item)).cloned().collect();
    if matched.is_empty() { items } else { matched }
}
