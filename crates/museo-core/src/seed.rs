//! Demo catalog seed
//!
//! Builds the fixture dataset the application ships with: three museums,
//! their sections and key objects, and one demo tour owned by
//! [`DEMO_USER_ID`]. The seed satisfies every invariant in
//! [`crate::rules::validate_catalog`] and uses a fixed seed timestamp so
//! listings are reproducible across runs.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{KeyObject, Museum, Section, Tour, TourSection};
use crate::ops::Store;

/// Owner of the demo tour
pub const DEMO_USER_ID: &str = "demo-user";

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Build the demo catalog.
pub fn demo_catalog() -> Store {
    let mut store = Store::new();
    let at = seeded_at();

    // ===== Museums =====
    let mut met = Museum::new(
        "museum-met".to_string(),
        "Metropolitan Museum of Art".to_string(),
        "New York".to_string(),
    );
    met.description =
        Some("One of the world's largest and most comprehensive art museums.".to_string());
    met.theme = Some("Art & Culture".to_string());
    met.official_page = Some("https://www.metmuseum.org/".to_string());

    let mut british = Museum::new(
        "museum-british".to_string(),
        "British Museum".to_string(),
        "London".to_string(),
    );
    british.description =
        Some("A public museum dedicated to human history, art and culture.".to_string());
    british.theme = Some("History".to_string());
    british.official_page = Some("https://www.britishmuseum.org/".to_string());

    let mut louvre = Museum::new(
        "museum-louvre".to_string(),
        "Louvre Museum".to_string(),
        "Paris".to_string(),
    );
    louvre.description =
        Some("The world's most-visited museum and a historic monument in Paris.".to_string());
    louvre.theme = Some("Art & Culture".to_string());
    louvre.official_page = Some("https://www.louvre.fr/".to_string());

    // ===== Sections =====
    let mut egyptian = Section::new(
        "section-egyptian-art".to_string(),
        "museum-met".to_string(),
        "Egyptian Art".to_string(),
        1,
    );
    egyptian.description = Some("Ancient Egyptian artifacts and sculptures.".to_string());

    let mut medieval = Section::new(
        "section-medieval-art".to_string(),
        "museum-met".to_string(),
        "Medieval Art".to_string(),
        2,
    );
    medieval.description = Some("European medieval art and manuscripts.".to_string());

    let mut greece = Section::new(
        "section-ancient-greece".to_string(),
        "museum-british".to_string(),
        "Ancient Greece".to_string(),
        1,
    );
    greece.description = Some("Greek sculptures and pottery.".to_string());

    // ===== Key objects =====
    let mut rosetta = KeyObject::new(
        "key-object-rosetta".to_string(),
        "section-egyptian-art".to_string(),
        "Rosetta Stone Replica".to_string(),
    );
    rosetta.description = Some("Ancient Egyptian hieroglyphic text.".to_string());

    let mut manuscript = KeyObject::new(
        "key-object-manuscript".to_string(),
        "section-medieval-art".to_string(),
        "Medieval Manuscript".to_string(),
    );
    manuscript.description = Some("Illuminated medieval text.".to_string());

    // Wire memberships
    met.add_section_id(egyptian.id.clone());
    met.add_section_id(medieval.id.clone());
    british.add_section_id(greece.id.clone());
    egyptian.add_key_object_id(rosetta.id.clone());
    medieval.add_key_object_id(manuscript.id.clone());

    // ===== Demo tour =====
    let tour = Tour::new(
        "tour-ancient-civilizations".to_string(),
        DEMO_USER_ID.to_string(),
        "museum-met".to_string(),
        "Ancient Civilizations Tour".to_string(),
    );
    let tour_rows = vec![
        TourSection::new(tour.id.clone(), egyptian.id.clone(), 0),
        TourSection::new(tour.id.clone(), medieval.id.clone(), 1),
    ];

    // Fix timestamps so the seed is reproducible
    for museum in [&mut met, &mut british, &mut louvre] {
        museum.created_at = at;
        museum.updated_at = at;
    }
    for section in [&mut egyptian, &mut medieval, &mut greece] {
        section.created_at = at;
        section.updated_at = at;
    }
    for key_object in [&mut rosetta, &mut manuscript] {
        key_object.created_at = at;
        key_object.updated_at = at;
    }
    let mut tour = tour;
    tour.created_at = at;
    tour.updated_at = at;

    let tour_id = tour.id.clone();
    store.insert_museum(met);
    store.insert_museum(british);
    store.insert_museum(louvre);
    store.insert_section(egyptian);
    store.insert_section(medieval);
    store.insert_section(greece);
    store.insert_key_object(rosetta);
    store.insert_key_object(manuscript);
    store.insert_tour(tour);
    store.set_tour_sections(&tour_id, tour_rows);

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::validate_catalog;

    #[test]
    fn test_demo_catalog_is_valid() {
        let store = demo_catalog();
        validate_catalog(&store).unwrap();
    }

    #[test]
    fn test_demo_catalog_counts() {
        let store = demo_catalog();
        assert_eq!(store.list_museums().len(), 3);
        assert_eq!(store.list_sections().len(), 3);
        assert_eq!(store.list_key_objects().len(), 2);
        assert_eq!(store.list_tours().len(), 1);
    }

    #[test]
    fn test_demo_tour_belongs_to_demo_user() {
        let store = demo_catalog();
        let tour = store.get_tour("tour-ancient-civilizations").unwrap();
        assert_eq!(tour.user_id, DEMO_USER_ID);
        assert_eq!(store.tour_sections(&tour.id).len(), 2);
    }
}
