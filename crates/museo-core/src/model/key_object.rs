use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// KeyObject - a notable item described within a Section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyObject {
    /// Unique identifier for this KeyObject (opaque stable string)
    pub id: String,

    /// ID of the owning Section
    pub section_id: String,

    /// Display name
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Optional image reference (URL)
    pub image_url: Option<String>,

    /// Timestamp when this KeyObject was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this KeyObject was last updated
    pub updated_at: DateTime<Utc>,
}

impl KeyObject {
    /// Create a new KeyObject owned by the given section
    pub fn new(id: String, section_id: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            section_id,
            name,
            description: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_key_object() {
        let ko = KeyObject::new(
            "k1".to_string(),
            "s1".to_string(),
            "Rosetta Stone".to_string(),
        );

        assert_eq!(ko.id, "k1");
        assert_eq!(ko.section_id, "s1");
        assert!(ko.description.is_none());
        assert!(ko.image_url.is_none());
    }
}
