use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Museum - top-level catalog entity representing a physical institution
///
/// A Museum exclusively owns zero or more Sections. Ownership is recorded
/// bidirectionally: each Section carries `museum_id`, and the Museum lists
/// the Section ids in `section_ids`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Museum {
    /// Unique identifier for this Museum (opaque stable string)
    pub id: String,

    /// Display name
    pub name: String,

    /// City where the museum is located
    pub city: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Optional theme (e.g. "Art & Culture", "History")
    pub theme: Option<String>,

    /// Optional URL of the museum's official page
    pub official_page: Option<String>,

    /// List of Section IDs owned by this Museum
    pub section_ids: Vec<String>,

    /// Timestamp when this Museum was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this Museum was last updated
    pub updated_at: DateTime<Utc>,
}

impl Museum {
    /// Create a new Museum with the given id, name, and city
    ///
    /// Optional fields start absent; sections are attached afterwards.
    pub fn new(id: String, name: String, city: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            city,
            description: None,
            theme: None,
            official_page: None,
            section_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this Museum has any sections
    pub fn has_sections(&self) -> bool {
        !self.section_ids.is_empty()
    }

    /// Add a Section ID to this Museum's section list
    pub fn add_section_id(&mut self, section_id: String) {
        if !self.section_ids.contains(&section_id) {
            self.section_ids.push(section_id);
        }
    }

    /// Case-insensitive substring match against name, city, description,
    /// and theme. Absent optional fields never match.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.city.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
            || self
                .theme
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&needle))
    }
}
