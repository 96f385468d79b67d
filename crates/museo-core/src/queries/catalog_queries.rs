//! Catalog query operations
//!
//! Read-only projections over museums, sections, and key objects, with
//! deterministic ordering and the free-text filter used by search UIs.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{KeyObject, Museum, Section};
use crate::ops::projection::{ordered_key_objects, ordered_sections};
use crate::ops::Store;

/// Museum with its nested ordered Sections, each carrying its KeyObjects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuseumDetails {
    /// The museum
    pub museum: Museum,

    /// Sections ordered by (floor ascending, name ascending)
    pub sections: Vec<SectionDetails>,
}

/// Section with its nested KeyObjects in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDetails {
    /// The section
    pub section: Section,

    /// Key objects in insertion order
    pub key_objects: Vec<KeyObject>,
}

/// List all museums, sorted by name (case-insensitive) ascending.
///
/// Equal names order stably by id ascending, so the sequence is
/// deterministic for any seed set.
pub fn list_museums(store: &Store) -> Vec<&Museum> {
    let mut museums = store.list_museums();
    museums.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });
    museums
}

/// Get a museum by id. Absence is not an error.
pub fn get_museum<'a>(store: &'a Store, id: &str) -> Option<&'a Museum> {
    store.get_museum(id)
}

/// Get a museum with its nested ordered sections and key objects.
///
/// Returns `Ok(None)` for an unknown museum id.
///
/// # Errors
/// Store-integrity violations only (unknown child refs, membership
/// inconsistencies) - never raised against a store that passes
/// `rules::validate_catalog`.
pub fn get_museum_with_sections(store: &Store, id: &str) -> Result<Option<MuseumDetails>> {
    let museum = match store.get_museum(id) {
        Some(m) => m,
        None => return Ok(None),
    };

    let mut sections = Vec::new();
    for section in ordered_sections(store, museum)? {
        let key_objects = ordered_key_objects(store, section)?;
        sections.push(SectionDetails {
            section: section.clone(),
            key_objects: key_objects.into_iter().cloned().collect(),
        });
    }

    Ok(Some(MuseumDetails {
        museum: museum.clone(),
        sections,
    }))
}

/// List the sections of a museum, ordered by (floor ascending, name
/// ascending).
///
/// Returns an empty sequence (not absence) for an unknown or childless
/// museum id.
///
/// # Errors
/// Store-integrity violations only.
pub fn list_sections_by_museum<'a>(store: &'a Store, museum_id: &str) -> Result<Vec<&'a Section>> {
    match store.get_museum(museum_id) {
        Some(museum) => ordered_sections(store, museum),
        None => Ok(Vec::new()),
    }
}

/// Get a section with its key objects in insertion order.
///
/// Returns `Ok(None)` for an unknown section id.
///
/// # Errors
/// Store-integrity violations only.
pub fn get_section_with_key_objects(store: &Store, id: &str) -> Result<Option<SectionDetails>> {
    let section = match store.get_section(id) {
        Some(s) => s,
        None => return Ok(None),
    };

    let key_objects = ordered_key_objects(store, section)?;
    Ok(Some(SectionDetails {
        section: section.clone(),
        key_objects: key_objects.into_iter().cloned().collect(),
    }))
}

/// Free-text museum filter for search UIs.
///
/// Matches the query case-insensitively as a substring against name, city,
/// description, and theme (whichever are present); absent optional fields
/// never match. A blank query returns the full list. Results are ordered
/// like [`list_museums`].
pub fn search_museums<'a>(store: &'a Store, query: &str) -> Vec<&'a Museum> {
    let query = query.trim();
    if query.is_empty() {
        return list_museums(store);
    }

    list_museums(store)
        .into_iter()
        .filter(|m| m.matches_query(query))
        .collect()
}
