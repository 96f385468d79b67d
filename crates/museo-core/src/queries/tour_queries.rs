//! Tour query operations
//!
//! Read-only assembly of tour aggregates: the tour itself, its resolved
//! museum, and its sections in display order.

use serde::{Deserialize, Serialize};

use crate::errors::{MuseoError, Result};
use crate::model::{Museum, Section, Tour};
use crate::ops::projection::ordered_tour_sections;
use crate::ops::Store;

/// Tour with its resolved Museum and ordered Sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourWithDetails {
    /// The tour
    pub tour: Tour,

    /// The museum the tour is scoped to
    pub museum: Museum,

    /// Sections in display order (display_order ascending, ties by
    /// insertion order)
    pub sections: Vec<Section>,
}

/// Build the aggregate view for a tour.
///
/// # Errors
/// - `TourWithUnknownMuseum` - the tour references a museum not in the store
/// - projection errors if a section row is dangling or cross-museum
pub fn tour_with_details(store: &Store, tour: &Tour) -> Result<TourWithDetails> {
    let museum = store
        .get_museum(&tour.museum_id)
        .ok_or_else(|| MuseoError::TourWithUnknownMuseum {
            tour_id: tour.id.clone(),
            museum_id: tour.museum_id.clone(),
        })?;

    let sections = ordered_tour_sections(store, tour)?;

    Ok(TourWithDetails {
        tour: tour.clone(),
        museum: museum.clone(),
        sections: sections.into_iter().cloned().collect(),
    })
}

/// List a user's tours as full aggregates, newest first.
///
/// Ordered by created_at descending; equal timestamps order by id
/// descending so the sequence is deterministic.
///
/// # Errors
/// Store-integrity violations only.
pub fn list_tours_by_user(store: &Store, user_id: &str) -> Result<Vec<TourWithDetails>> {
    let mut tours: Vec<&Tour> = store
        .list_tours()
        .into_iter()
        .filter(|t| t.user_id == user_id)
        .collect();

    tours.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });

    tours
        .into_iter()
        .map(|tour| tour_with_details(store, tour))
        .collect()
}

/// Get a tour aggregate by id.
///
/// Returns `Ok(None)` for an unknown tour id.
///
/// # Errors
/// Store-integrity violations only.
pub fn get_tour_with_details(store: &Store, id: &str) -> Result<Option<TourWithDetails>> {
    match store.get_tour(id) {
        Some(tour) => tour_with_details(store, tour).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TourSection;

    fn seeded_store() -> Store {
        let mut store = Store::new();
        let mut museum = Museum::new("m1".to_string(), "Louvre".to_string(), "Paris".to_string());
        for id in ["s1", "s2"] {
            let section = Section::new(id.to_string(), "m1".to_string(), id.to_string(), 0);
            museum.add_section_id(id.to_string());
            store.insert_section(section);
        }
        store.insert_museum(museum);
        store
    }

    fn add_tour(store: &mut Store, id: &str, user: &str) {
        let tour = Tour::new(
            id.to_string(),
            user.to_string(),
            "m1".to_string(),
            format!("Tour {id}"),
        );
        store.insert_tour(tour);
        store.set_tour_sections(
            id,
            vec![TourSection::new(id.to_string(), "s1".to_string(), 0)],
        );
    }

    #[test]
    fn test_get_tour_with_details_unknown_is_none() {
        let store = seeded_store();
        assert!(get_tour_with_details(&store, "nonexistent")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_tour_with_details_resolves_museum_and_sections() {
        let mut store = seeded_store();
        add_tour(&mut store, "t1", "user-1");

        let details = get_tour_with_details(&store, "t1").unwrap().unwrap();
        assert_eq!(details.museum.id, "m1");
        assert_eq!(details.sections.len(), 1);
        assert_eq!(details.sections[0].id, "s1");
    }

    #[test]
    fn test_list_tours_by_user_filters_and_sorts_newest_first() {
        let mut store = seeded_store();
        add_tour(&mut store, "t1", "user-1");
        add_tour(&mut store, "t2", "user-1");
        add_tour(&mut store, "t3", "user-2");

        // Force identical timestamps to exercise the id tie-break
        let fixed = chrono::Utc::now();
        for id in ["t1", "t2"] {
            store.get_tour_mut(id).unwrap().created_at = fixed;
        }

        let tours = list_tours_by_user(&store, "user-1").unwrap();
        let ids: Vec<_> = tours.iter().map(|t| t.tour.id.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t1"]);
    }

    #[test]
    fn test_tour_with_unknown_museum_is_integrity_error() {
        let mut store = Store::new();
        let tour = Tour::new(
            "t1".to_string(),
            "user-1".to_string(),
            "ghost-museum".to_string(),
            "Broken".to_string(),
        );
        store.insert_tour(tour);

        let result = get_tour_with_details(&store, "t1");
        assert!(matches!(
            result,
            Err(MuseoError::TourWithUnknownMuseum { .. })
        ));
    }
}
