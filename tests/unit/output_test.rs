//! Tests for filter report construction and serialization

use gearbench::core::models::{ConstraintSet, Item, Slot};
use gearbench::core::services::filter_slots;
use gearbench::output::{FilterReport, SlotListing};

use crate::common::fixtures::helmet_catalog;
use crate::common::mocks::MockOracle;

fn match_all(_: &Item) -> bool {
    true
}

#[test]
fn test_report_counts_kept_and_total() {
    let catalog = helmet_catalog();
    let oracle = MockOracle::rejecting(&["h2"]);
    let results =
        filter_slots(Some(&catalog), &ConstraintSet::new(), &match_all, &oracle).unwrap();

    let report = FilterReport::new(&results, Some(&catalog));
    assert_eq!(report.slots.len(), Slot::ALL.len());

    let helmet = &report.slots[0];
    assert_eq!(helmet.slot, Slot::Helmet);
    assert_eq!(helmet.kept.len(), 2);
    assert_eq!(helmet.total, 3);
}

#[test]
fn test_report_serializes_to_json() {
    let catalog = helmet_catalog();
    let results =
        filter_slots(Some(&catalog), &ConstraintSet::new(), &match_all, &MockOracle::new())
            .unwrap();

    let report = FilterReport::new(&results, Some(&catalog));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["slots"][0]["slot"], "helmet");
    assert_eq!(json["slots"][0]["kept"][0]["id"], "h-ex");
    assert_eq!(json["slots"][0]["kept"][0]["exotic"], true);
}

#[test]
fn test_slot_listing_covers_every_slot() {
    let listing = SlotListing::new();
    assert_eq!(listing.slots.len(), Slot::ALL.len());
    assert_eq!(listing.slots[0].mod_category, "helmet");
    assert_eq!(listing.slots[4].mod_category, "class");
}
