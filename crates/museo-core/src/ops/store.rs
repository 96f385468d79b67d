use std::collections::HashMap;

use crate::model::{KeyObject, Museum, Section, Tour, TourSection};

/// In-memory entity store for the catalog
///
/// HashMap-based storage for the four entity kinds plus the TourSection
/// join relation. Not thread-safe (no Arc/RwLock) - designed for
/// single-threaded use: shared `&Store` borrows give callers immutable
/// snapshot reads, and `&mut Store` serializes all mutations. All storage
/// access is encapsulated here so a remote relational store can replace it
/// without touching the services above.
///
/// Lookups return `Option`: absence of an entity is not an error on this
/// surface. Typed errors are raised by the operations layer where a
/// missing referenced entity violates a precondition.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Map of Museum ID to Museum
    pub(crate) museums: HashMap<String, Museum>,
    /// Map of Section ID to Section
    pub(crate) sections: HashMap<String, Section>,
    /// Map of KeyObject ID to KeyObject
    pub(crate) key_objects: HashMap<String, KeyObject>,
    /// Map of Tour ID to Tour
    pub(crate) tours: HashMap<String, Tour>,
    /// TourSection join rows, keyed by tour ID, kept in insertion order
    pub(crate) tour_sections: HashMap<String, Vec<TourSection>>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Museums =====

    /// Get a Museum by ID
    pub fn get_museum(&self, id: &str) -> Option<&Museum> {
        self.museums.get(id)
    }

    /// Get a mutable reference to a Museum by ID
    pub fn get_museum_mut(&mut self, id: &str) -> Option<&mut Museum> {
        self.museums.get_mut(id)
    }

    /// List all Museums (unordered; the query layer owns ordering)
    pub fn list_museums(&self) -> Vec<&Museum> {
        self.museums.values().collect()
    }

    /// Insert a Museum into the store
    pub fn insert_museum(&mut self, museum: Museum) {
        self.museums.insert(museum.id.clone(), museum);
    }

    /// Check if a Museum exists
    pub fn museum_exists(&self, id: &str) -> bool {
        self.museums.contains_key(id)
    }

    // ===== Sections =====

    /// Get a Section by ID
    pub fn get_section(&self, id: &str) -> Option<&Section> {
        self.sections.get(id)
    }

    /// Get a mutable reference to a Section by ID
    pub fn get_section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.get_mut(id)
    }

    /// List all Sections (unordered)
    pub fn list_sections(&self) -> Vec<&Section> {
        self.sections.values().collect()
    }

    /// Insert a Section into the store
    pub fn insert_section(&mut self, section: Section) {
        self.sections.insert(section.id.clone(), section);
    }

    /// Check if a Section exists
    pub fn section_exists(&self, id: &str) -> bool {
        self.sections.contains_key(id)
    }

    // ===== Key objects =====

    /// Get a KeyObject by ID
    pub fn get_key_object(&self, id: &str) -> Option<&KeyObject> {
        self.key_objects.get(id)
    }

    /// List all KeyObjects (unordered)
    pub fn list_key_objects(&self) -> Vec<&KeyObject> {
        self.key_objects.values().collect()
    }

    /// Insert a KeyObject into the store
    pub fn insert_key_object(&mut self, key_object: KeyObject) {
        self.key_objects.insert(key_object.id.clone(), key_object);
    }

    // ===== Tours =====

    /// Get a Tour by ID
    pub fn get_tour(&self, id: &str) -> Option<&Tour> {
        self.tours.get(id)
    }

    /// Get a mutable reference to a Tour by ID
    pub fn get_tour_mut(&mut self, id: &str) -> Option<&mut Tour> {
        self.tours.get_mut(id)
    }

    /// List all Tours (unordered)
    pub fn list_tours(&self) -> Vec<&Tour> {
        self.tours.values().collect()
    }

    /// Insert a Tour into the store (join rows are set separately)
    pub fn insert_tour(&mut self, tour: Tour) {
        self.tours.insert(tour.id.clone(), tour);
    }

    /// Check if a Tour exists
    pub fn tour_exists(&self, id: &str) -> bool {
        self.tours.contains_key(id)
    }

    /// The TourSection rows for a tour, in insertion order
    ///
    /// Returns an empty slice for an unknown tour id.
    pub fn tour_sections(&self, tour_id: &str) -> &[TourSection] {
        self.tour_sections
            .get(tour_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replace the TourSection rows for a tour
    pub fn set_tour_sections(&mut self, tour_id: &str, rows: Vec<TourSection>) {
        self.tour_sections.insert(tour_id.to_string(), rows);
    }

    /// Remove a Tour and all its TourSection rows
    ///
    /// Returns the removed Tour, or None if the id is unknown.
    pub fn remove_tour(&mut self, id: &str) -> Option<Tour> {
        self.tour_sections.remove(id);
        self.tours.remove(id)
    }
}
