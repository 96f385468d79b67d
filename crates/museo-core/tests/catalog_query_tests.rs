mod common;

use common::{add_key_object, add_museum, add_section, new_store, setup_two_floor_museum};
use museo_core::queries::catalog_queries;

// ===== LIST MUSEUMS TESTS =====

#[test]
fn test_list_museums_sorted_case_insensitively() {
    let mut store = new_store();
    add_museum(&mut store, "m1", "uffizi Gallery", "Florence");
    add_museum(&mut store, "m2", "British Museum", "London");
    add_museum(&mut store, "m3", "Prado", "Madrid");

    let names: Vec<_> = catalog_queries::list_museums(&store)
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, vec!["British Museum", "Prado", "uffizi Gallery"]);
}

#[test]
fn test_list_museums_is_idempotent() {
    let mut store = new_store();
    add_museum(&mut store, "m2", "Louvre", "Paris");
    add_museum(&mut store, "m1", "Louvre", "Paris");

    let first: Vec<_> = catalog_queries::list_museums(&store)
        .iter()
        .map(|m| m.id.clone())
        .collect();
    let second: Vec<_> = catalog_queries::list_museums(&store)
        .iter()
        .map(|m| m.id.clone())
        .collect();

    assert_eq!(first, second);
    // Duplicate names tie-break by id ascending
    assert_eq!(first, vec!["m1", "m2"]);
}

#[test]
fn test_get_museum_absent_is_none_not_error() {
    let store = new_store();
    assert!(catalog_queries::get_museum(&store, "nonexistent").is_none());
}

// ===== NESTED PROJECTION TESTS =====

#[test]
fn test_get_museum_with_sections_orders_by_floor_then_name() {
    let mut store = new_store();
    let (museum_id, upper, ground) = setup_two_floor_museum(&mut store);

    let details = catalog_queries::get_museum_with_sections(&store, &museum_id)
        .unwrap()
        .unwrap();

    let ids: Vec<_> = details
        .sections
        .iter()
        .map(|s| s.section.id.as_str())
        .collect();
    // Floor 0 before floor 1
    assert_eq!(ids, vec![ground.as_str(), upper.as_str()]);
}

#[test]
fn test_get_museum_with_sections_same_floor_sorted_by_name() {
    let mut store = new_store();
    let museum_id = add_museum(&mut store, "m1", "British Museum", "London");
    add_section(&mut store, &museum_id, "s1", "ceramics", 1);
    add_section(&mut store, &museum_id, "s2", "Armoury", 1);

    let details = catalog_queries::get_museum_with_sections(&store, &museum_id)
        .unwrap()
        .unwrap();
    let names: Vec<_> = details
        .sections
        .iter()
        .map(|s| s.section.name.as_str())
        .collect();
    // Case-insensitive name comparison
    assert_eq!(names, vec!["Armoury", "ceramics"]);
}

#[test]
fn test_key_objects_stay_in_insertion_order() {
    let mut store = new_store();
    let museum_id = add_museum(&mut store, "m1", "British Museum", "London");
    let section_id = add_section(&mut store, &museum_id, "s1", "Egyptian Art", 1);

    // Names deliberately reverse-alphabetical: order must follow insertion
    add_key_object(&mut store, &section_id, "k1", "Zeus Statue");
    add_key_object(&mut store, &section_id, "k2", "Amphora");

    let details = catalog_queries::get_section_with_key_objects(&store, &section_id)
        .unwrap()
        .unwrap();
    let ids: Vec<_> = details.key_objects.iter().map(|k| k.id.as_str()).collect();
    assert_eq!(ids, vec!["k1", "k2"]);

    let museum = catalog_queries::get_museum_with_sections(&store, &museum_id)
        .unwrap()
        .unwrap();
    let nested_ids: Vec<_> = museum.sections[0]
        .key_objects
        .iter()
        .map(|k| k.id.as_str())
        .collect();
    assert_eq!(nested_ids, ids);
}

#[test]
fn test_get_museum_with_sections_unknown_id_is_none() {
    let store = new_store();
    let result = catalog_queries::get_museum_with_sections(&store, "nonexistent").unwrap();
    assert!(result.is_none());
}

#[test]
fn test_list_sections_by_museum_empty_for_unknown_or_childless() {
    let mut store = new_store();
    add_museum(&mut store, "m1", "Prado", "Madrid");

    // Unknown museum: empty sequence, not absence
    assert!(catalog_queries::list_sections_by_museum(&store, "ghost")
        .unwrap()
        .is_empty());
    // Known but childless museum: also empty
    assert!(catalog_queries::list_sections_by_museum(&store, "m1")
        .unwrap()
        .is_empty());
}

#[test]
fn test_get_section_with_key_objects_unknown_id_is_none() {
    let store = new_store();
    let result = catalog_queries::get_section_with_key_objects(&store, "nonexistent").unwrap();
    assert!(result.is_none());
}

// ===== SERIALIZATION CONTRACT =====

#[test]
fn test_museum_details_serializes_to_json() {
    let mut store = new_store();
    let (museum_id, _, _) = setup_two_floor_museum(&mut store);

    let details = catalog_queries::get_museum_with_sections(&store, &museum_id)
        .unwrap()
        .unwrap();

    let json = serde_json::to_value(&details).unwrap();
    assert_eq!(json["museum"]["id"], "m1");
    assert_eq!(json["sections"].as_array().unwrap().len(), 2);
}
