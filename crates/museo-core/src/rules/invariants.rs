//! Invariant finder functions
//!
//! Each finder scans the whole store for one class of violation and returns
//! the offending id tuples (empty means the invariant holds). Finders are
//! pure reads; `rules::validation::validate_catalog` composes them into a
//! single first-error check.

use std::collections::{HashMap, HashSet};

use crate::ops::Store;

/// Sections whose museum_id references a museum not in the store
///
/// Returns (section_id, museum_id) pairs.
pub fn find_sections_with_unknown_museum(store: &Store) -> Vec<(String, String)> {
    store
        .sections
        .values()
        .filter(|s| !store.museums.contains_key(&s.museum_id))
        .map(|s| (s.id.clone(), s.museum_id.clone()))
        .collect()
}

/// Museum section_ids entries that name a section not in the store
///
/// Returns (museum_id, section_id) pairs.
pub fn find_unknown_section_refs(store: &Store) -> Vec<(String, String)> {
    let mut refs = Vec::new();
    for museum in store.museums.values() {
        for section_id in &museum.section_ids {
            if !store.sections.contains_key(section_id) {
                refs.push((museum.id.clone(), section_id.clone()));
            }
        }
    }
    refs
}

/// Sections listed by a museum whose own museum_id points elsewhere
///
/// Returns (section_id, section_museum_id, owner_museum_id) triples.
pub fn find_section_membership_inconsistencies(store: &Store) -> Vec<(String, String, String)> {
    let mut inconsistencies = Vec::new();
    for museum in store.museums.values() {
        for section_id in &museum.section_ids {
            if let Some(section) = store.sections.get(section_id) {
                if section.museum_id != museum.id {
                    inconsistencies.push((
                        section.id.clone(),
                        section.museum_id.clone(),
                        museum.id.clone(),
                    ));
                }
            }
        }
    }
    inconsistencies
}

/// Sections whose museum exists but does not list them in section_ids
///
/// Returns (section_id, museum_id) pairs.
pub fn find_section_orphans(store: &Store) -> Vec<(String, String)> {
    store
        .sections
        .values()
        .filter(|s| {
            store
                .museums
                .get(&s.museum_id)
                .is_some_and(|m| !m.section_ids.contains(&s.id))
        })
        .map(|s| (s.id.clone(), s.museum_id.clone()))
        .collect()
}

/// Key objects whose section_id references a section not in the store
///
/// Returns (key_object_id, section_id) pairs.
pub fn find_key_objects_with_unknown_section(store: &Store) -> Vec<(String, String)> {
    store
        .key_objects
        .values()
        .filter(|k| !store.sections.contains_key(&k.section_id))
        .map(|k| (k.id.clone(), k.section_id.clone()))
        .collect()
}

/// Section key_object_ids entries that name a key object not in the store
///
/// Returns (section_id, key_object_id) pairs.
pub fn find_unknown_key_object_refs(store: &Store) -> Vec<(String, String)> {
    let mut refs = Vec::new();
    for section in store.sections.values() {
        for key_object_id in &section.key_object_ids {
            if !store.key_objects.contains_key(key_object_id) {
                refs.push((section.id.clone(), key_object_id.clone()));
            }
        }
    }
    refs
}

/// Key objects listed by a section whose own section_id points elsewhere
///
/// Returns (key_object_id, key_object_section_id, owner_section_id) triples.
pub fn find_key_object_membership_inconsistencies(store: &Store) -> Vec<(String, String, String)> {
    let mut inconsistencies = Vec::new();
    for section in store.sections.values() {
        for key_object_id in &section.key_object_ids {
            if let Some(key_object) = store.key_objects.get(key_object_id) {
                if key_object.section_id != section.id {
                    inconsistencies.push((
                        key_object.id.clone(),
                        key_object.section_id.clone(),
                        section.id.clone(),
                    ));
                }
            }
        }
    }
    inconsistencies
}

/// Key objects whose section exists but does not list them
///
/// Returns (key_object_id, section_id) pairs.
pub fn find_key_object_orphans(store: &Store) -> Vec<(String, String)> {
    store
        .key_objects
        .values()
        .filter(|k| {
            store
                .sections
                .get(&k.section_id)
                .is_some_and(|s| !s.key_object_ids.contains(&k.id))
        })
        .map(|k| (k.id.clone(), k.section_id.clone()))
        .collect()
}

/// Tours whose museum_id references a museum not in the store
///
/// Returns (tour_id, museum_id) pairs.
pub fn find_tours_with_unknown_museum(store: &Store) -> Vec<(String, String)> {
    store
        .tours
        .values()
        .filter(|t| !store.museums.contains_key(&t.museum_id))
        .map(|t| (t.id.clone(), t.museum_id.clone()))
        .collect()
}

/// Tour section rows that name a section not in the store
///
/// Returns (tour_id, section_id) pairs.
pub fn find_tour_sections_with_unknown_section(store: &Store) -> Vec<(String, String)> {
    let mut dangling = Vec::new();
    for rows in store.tour_sections.values() {
        for row in rows {
            if !store.sections.contains_key(&row.section_id) {
                dangling.push((row.tour_id.clone(), row.section_id.clone()));
            }
        }
    }
    dangling
}

/// Tour section rows whose section belongs to a different museum than the tour
///
/// Returns (tour_id, section_id, tour_museum_id) triples.
pub fn find_cross_museum_tour_sections(store: &Store) -> Vec<(String, String, String)> {
    let mut crossing = Vec::new();
    for tour in store.tours.values() {
        for row in store.tour_sections(&tour.id) {
            if let Some(section) = store.sections.get(&row.section_id) {
                if section.museum_id != tour.museum_id {
                    crossing.push((
                        tour.id.clone(),
                        section.id.clone(),
                        tour.museum_id.clone(),
                    ));
                }
            }
        }
    }
    crossing
}

/// Tours with no section rows (empty tours are invalid)
pub fn find_empty_tours(store: &Store) -> Vec<String> {
    store
        .tours
        .values()
        .filter(|t| store.tour_sections(&t.id).is_empty())
        .map(|t| t.id.clone())
        .collect()
}

/// Tours that include the same section more than once
///
/// Returns (tour_id, section_id) pairs, one per duplicated section.
pub fn find_duplicate_tour_sections(store: &Store) -> Vec<(String, String)> {
    let mut duplicates = Vec::new();
    for (tour_id, rows) in &store.tour_sections {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for row in rows {
            *counts.entry(row.section_id.as_str()).or_default() += 1;
        }
        let mut reported: HashSet<&str> = HashSet::new();
        for row in rows {
            if counts[row.section_id.as_str()] > 1 && reported.insert(row.section_id.as_str()) {
                duplicates.push((tour_id.clone(), row.section_id.clone()));
            }
        }
    }
    duplicates
}
