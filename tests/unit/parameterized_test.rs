//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use gearbench::adapters::query::QueryFilter;
use gearbench::core::models::{Item, Slot};
use gearbench::core::ports::SearchFilter;
use test_case::test_case;

// =============================================================================
// Slot Tests
// =============================================================================

#[test_case("helmet", Some(Slot::Helmet) ; "helmet category")]
#[test_case("arms", Some(Slot::Gauntlets) ; "arms category")]
#[test_case("chest", Some(Slot::Chest) ; "chest category")]
#[test_case("legs", Some(Slot::Legs) ; "legs category")]
#[test_case("class", Some(Slot::ClassItem) ; "class category")]
#[test_case("weapon", None ; "unknown category")]
#[test_case("", None ; "empty category")]
fn test_slot_from_mod_category(category: &str, expected: Option<Slot>) {
    assert_eq!(Slot::from_mod_category(category), expected);
}

#[test_case("helmet", Slot::Helmet ; "helmet name")]
#[test_case("HELMET", Slot::Helmet ; "uppercase helmet")]
#[test_case("class-item", Slot::ClassItem ; "kebab class item")]
#[test_case("class_item", Slot::ClassItem ; "snake class item")]
fn test_slot_parsing(input: &str, expected: Slot) {
    let parsed: Slot = input.parse().unwrap();
    assert_eq!(parsed, expected);
}

#[test_case("boots" ; "unknown slot")]
#[test_case("" ; "empty string")]
fn test_slot_parsing_errors(input: &str) {
    let result: Result<Slot, _> = input.parse();
    assert!(result.is_err(), "Expected error for input: {input:?}");
}

// =============================================================================
// Query Tests
// =============================================================================

fn sample_item() -> Item {
    Item::new("i1", 1, "Wormhusk Crown", Slot::Helmet, true, 9)
}

#[test_case("is:exotic", true ; "exotic flag matches")]
#[test_case("not:exotic", false ; "not exotic rejects exotic")]
#[test_case("wormhusk", true ; "name substring matches")]
#[test_case("WORMHUSK", true ; "name match ignores case")]
#[test_case("sunspot", false ; "absent substring rejects")]
#[test_case("energy:9", true ; "exact energy matches")]
#[test_case("energy:8", false ; "wrong exact energy rejects")]
#[test_case("energy:>=7", true ; "at least energy matches")]
#[test_case("energy:>=10", false ; "too high floor rejects")]
#[test_case("is:exotic wormhusk energy:>=9", true ; "terms combine with and")]
#[test_case("is:exotic sunspot", false ; "one failing term rejects")]
fn test_query_matching(query: &str, expected: bool) {
    let filter = QueryFilter::parse(query).unwrap();
    assert_eq!(filter.matches(&sample_item()), expected, "query={query:?}");
}

#[test_case("is:sparkly" ; "unknown is keyword")]
#[test_case("not:legendary" ; "unknown not keyword")]
#[test_case("energy:lots" ; "non numeric energy")]
#[test_case("energy:>=" ; "empty energy bound")]
fn test_query_parse_errors(query: &str) {
    assert!(QueryFilter::parse(query).is_err(), "Expected error for query: {query:?}");
}
