use crate::errors::{MuseoError, Result};
use crate::model::{KeyObject, Museum, Section, Tour};
use crate::ops::Store;

/// Returns the Sections of a Museum in presentation order.
///
/// Ordering is (floor ascending, name ascending case-insensitive), with a
/// final tie-break on id so equal names order deterministically. Membership
/// is validated both ways: every id in `museum.section_ids` must resolve,
/// and each resolved Section must point back at the owning Museum.
///
/// # Errors
/// - `SectionListContainsUnknownId` - museum.section_ids contains an id not in the store
/// - `SectionMembershipInconsistent` - Section.museum_id doesn't match the owning Museum
pub fn ordered_sections<'a>(store: &'a Store, museum: &Museum) -> Result<Vec<&'a Section>> {
    let mut sections = Vec::with_capacity(museum.section_ids.len());

    for section_id in &museum.section_ids {
        let section = store.sections.get(section_id).ok_or_else(|| {
            MuseoError::SectionListContainsUnknownId {
                museum_id: museum.id.clone(),
                section_id: section_id.clone(),
            }
        })?;

        if section.museum_id != museum.id {
            return Err(MuseoError::SectionMembershipInconsistent {
                section_id: section.id.clone(),
                section_museum_id: section.museum_id.clone(),
                owner_museum_id: museum.id.clone(),
            });
        }

        sections.push(section);
    }

    sections.sort_by(|a, b| {
        a.floor
            .cmp(&b.floor)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.id.cmp(&b.id))
    });

    Ok(sections)
}

/// Returns the KeyObjects of a Section in insertion order.
///
/// # Errors
/// - `KeyObjectListContainsUnknownId` - section.key_object_ids contains an id not in the store
/// - `KeyObjectMembershipInconsistent` - KeyObject.section_id doesn't match the owning Section
pub fn ordered_key_objects<'a>(store: &'a Store, section: &Section) -> Result<Vec<&'a KeyObject>> {
    let mut key_objects = Vec::with_capacity(section.key_object_ids.len());

    for key_object_id in &section.key_object_ids {
        let key_object = store.key_objects.get(key_object_id).ok_or_else(|| {
            MuseoError::KeyObjectListContainsUnknownId {
                section_id: section.id.clone(),
                key_object_id: key_object_id.clone(),
            }
        })?;

        if key_object.section_id != section.id {
            return Err(MuseoError::KeyObjectMembershipInconsistent {
                key_object_id: key_object.id.clone(),
                key_object_section_id: key_object.section_id.clone(),
                owner_section_id: section.id.clone(),
            });
        }

        key_objects.push(key_object);
    }

    Ok(key_objects)
}

/// Returns the Sections of a Tour in display order.
///
/// Rows are ordered by display_order ascending; the sort is stable, so ties
/// fall back to row insertion order as required for determinism. Every row
/// must resolve to a Section of the tour's museum.
///
/// # Errors
/// - `TourSectionUnknownSection` - a row references a section not in the store
/// - `TourSectionOutsideMuseum` - a row references a section of another museum
pub fn ordered_tour_sections<'a>(store: &'a Store, tour: &Tour) -> Result<Vec<&'a Section>> {
    let mut rows: Vec<_> = store.tour_sections(&tour.id).iter().collect();
    rows.sort_by_key(|row| row.display_order);

    let mut sections = Vec::with_capacity(rows.len());
    for row in rows {
        let section = store.sections.get(&row.section_id).ok_or_else(|| {
            MuseoError::TourSectionUnknownSection {
                tour_id: tour.id.clone(),
                section_id: row.section_id.clone(),
            }
        })?;

        if section.museum_id != tour.museum_id {
            return Err(MuseoError::TourSectionOutsideMuseum {
                tour_id: tour.id.clone(),
                section_id: section.id.clone(),
                museum_id: tour.museum_id.clone(),
            });
        }

        sections.push(section);
    }

    Ok(sections)
}
