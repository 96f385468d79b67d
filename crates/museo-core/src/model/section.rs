use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Section - a named sub-area of a Museum, associated with a floor
///
/// A Section belongs to exactly one Museum for its lifetime (reassignment
/// is not supported) and exclusively owns zero or more KeyObjects. The
/// `key_object_ids` list is kept in insertion order, which is the
/// presentation order for key objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique identifier for this Section (opaque stable string)
    pub id: String,

    /// ID of the owning Museum
    pub museum_id: String,

    /// Display name
    pub name: String,

    /// Floor number; may be zero or negative (basement levels)
    pub floor: i32,

    /// Optional free-form description
    pub description: Option<String>,

    /// List of KeyObject IDs owned by this Section, in insertion order
    pub key_object_ids: Vec<String>,

    /// Timestamp when this Section was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this Section was last updated
    pub updated_at: DateTime<Utc>,
}

impl Section {
    /// Create a new Section owned by the given museum
    pub fn new(id: String, museum_id: String, name: String, floor: i32) -> Self {
        let now = Utc::now();
        Self {
            id,
            museum_id,
            name,
            floor,
            description: None,
            key_object_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this Section has any key objects
    pub fn has_key_objects(&self) -> bool {
        !self.key_object_ids.is_empty()
    }

    /// Add a KeyObject ID to this Section's list (insertion order preserved)
    pub fn add_key_object_id(&mut self, key_object_id: String) {
        if !self.key_object_ids.contains(&key_object_id) {
            self.key_object_ids.push(key_object_id);
        }
    }
}
