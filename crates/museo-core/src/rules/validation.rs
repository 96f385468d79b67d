use crate::errors::{MuseoError, Result};
use crate::ops::Store;

use super::invariants;

/// Validate the entire catalog.
///
/// Runs all invariant checks and returns the first violation found as a
/// typed error. The checks cover:
///
/// 1. Referential integrity: every Section references an existing Museum,
///    every KeyObject an existing Section, every Tour an existing Museum
/// 2. Bidirectional membership consistency (Section.museum_id ↔
///    Museum.section_ids, KeyObject.section_id ↔ Section.key_object_ids)
/// 3. Tour section rows resolve, stay inside the tour's museum, are
///    non-empty per tour, and never repeat a section
///
/// A store produced exclusively through the ops layer always passes; this
/// entry point exists for seed data and for stores hydrated from an
/// external source.
///
/// # Errors
/// Returns the first validation error encountered. For exhaustive
/// reporting, call the individual invariant finders directly.
pub fn validate_catalog(store: &Store) -> Result<()> {
    // 1. Referential integrity
    let unknown_museums = invariants::find_sections_with_unknown_museum(store);
    if let Some((section_id, museum_id)) = unknown_museums.first() {
        return Err(MuseoError::SectionWithUnknownMuseum {
            section_id: section_id.clone(),
            museum_id: museum_id.clone(),
        });
    }

    let unknown_sections = invariants::find_key_objects_with_unknown_section(store);
    if let Some((key_object_id, section_id)) = unknown_sections.first() {
        return Err(MuseoError::KeyObjectWithUnknownSection {
            key_object_id: key_object_id.clone(),
            section_id: section_id.clone(),
        });
    }

    let tour_museums = invariants::find_tours_with_unknown_museum(store);
    if let Some((tour_id, museum_id)) = tour_museums.first() {
        return Err(MuseoError::TourWithUnknownMuseum {
            tour_id: tour_id.clone(),
            museum_id: museum_id.clone(),
        });
    }

    // 2. Bidirectional membership consistency
    let unknown_refs = invariants::find_unknown_section_refs(store);
    if let Some((museum_id, section_id)) = unknown_refs.first() {
        return Err(MuseoError::SectionListContainsUnknownId {
            museum_id: museum_id.clone(),
            section_id: section_id.clone(),
        });
    }

    let section_inconsistencies = invariants::find_section_membership_inconsistencies(store);
    if let Some((section_id, section_museum_id, owner_museum_id)) = section_inconsistencies.first()
    {
        return Err(MuseoError::SectionMembershipInconsistent {
            section_id: section_id.clone(),
            section_museum_id: section_museum_id.clone(),
            owner_museum_id: owner_museum_id.clone(),
        });
    }

    let section_orphans = invariants::find_section_orphans(store);
    if let Some((section_id, museum_id)) = section_orphans.first() {
        return Err(MuseoError::SectionOrphaned {
            section_id: section_id.clone(),
            museum_id: museum_id.clone(),
        });
    }

    let unknown_key_object_refs = invariants::find_unknown_key_object_refs(store);
    if let Some((section_id, key_object_id)) = unknown_key_object_refs.first() {
        return Err(MuseoError::KeyObjectListContainsUnknownId {
            section_id: section_id.clone(),
            key_object_id: key_object_id.clone(),
        });
    }

    let key_object_inconsistencies = invariants::find_key_object_membership_inconsistencies(store);
    if let Some((key_object_id, key_object_section_id, owner_section_id)) =
        key_object_inconsistencies.first()
    {
        return Err(MuseoError::KeyObjectMembershipInconsistent {
            key_object_id: key_object_id.clone(),
            key_object_section_id: key_object_section_id.clone(),
            owner_section_id: owner_section_id.clone(),
        });
    }

    let key_object_orphans = invariants::find_key_object_orphans(store);
    if let Some((key_object_id, section_id)) = key_object_orphans.first() {
        return Err(MuseoError::KeyObjectOrphaned {
            key_object_id: key_object_id.clone(),
            section_id: section_id.clone(),
        });
    }

    // 3. Tour section row integrity
    let dangling_rows = invariants::find_tour_sections_with_unknown_section(store);
    if let Some((tour_id, section_id)) = dangling_rows.first() {
        return Err(MuseoError::TourSectionUnknownSection {
            tour_id: tour_id.clone(),
            section_id: section_id.clone(),
        });
    }

    let crossing = invariants::find_cross_museum_tour_sections(store);
    if let Some((tour_id, section_id, museum_id)) = crossing.first() {
        return Err(MuseoError::TourSectionOutsideMuseum {
            tour_id: tour_id.clone(),
            section_id: section_id.clone(),
            museum_id: museum_id.clone(),
        });
    }

    let empty_tours = invariants::find_empty_tours(store);
    if let Some(tour_id) = empty_tours.first() {
        return Err(MuseoError::EmptyTour {
            tour_id: tour_id.clone(),
        });
    }

    let duplicates = invariants::find_duplicate_tour_sections(store);
    if let Some((tour_id, section_id)) = duplicates.first() {
        return Err(MuseoError::DuplicateTourSection {
            tour_id: tour_id.clone(),
            section_id: section_id.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Museum, Section};

    #[test]
    fn test_validate_catalog_empty_store() {
        let store = Store::new();
        assert!(validate_catalog(&store).is_ok());
    }

    #[test]
    fn test_validate_catalog_consistent_pair() {
        let mut store = Store::new();
        let mut museum = Museum::new("m1".to_string(), "Louvre".to_string(), "Paris".to_string());
        museum.add_section_id("s1".to_string());
        store.insert_museum(museum);
        store.insert_section(Section::new(
            "s1".to_string(),
            "m1".to_string(),
            "Paintings".to_string(),
            1,
        ));

        assert!(validate_catalog(&store).is_ok());
    }

    #[test]
    fn test_validate_catalog_detects_dangling_section() {
        let mut store = Store::new();
        store.insert_section(Section::new(
            "s1".to_string(),
            "ghost".to_string(),
            "Paintings".to_string(),
            1,
        ));

        let result = validate_catalog(&store);
        assert!(matches!(
            result,
            Err(MuseoError::SectionWithUnknownMuseum { .. })
        ));
    }
}
