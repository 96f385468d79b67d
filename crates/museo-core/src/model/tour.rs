use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tour - a user-owned, ordered selection of Sections scoped to one Museum
///
/// The section selection itself lives in [`TourSection`] join rows held by
/// the store; a Tour holds only the owning user and the museum it is
/// scoped to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Unique identifier for this Tour (UUID v7)
    pub id: String,

    /// ID of the owning user
    pub user_id: String,

    /// ID of the single Museum this tour is scoped to
    pub museum_id: String,

    /// Display name
    pub name: String,

    /// Timestamp when this Tour was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this Tour was last updated
    pub updated_at: DateTime<Utc>,
}

impl Tour {
    /// Create a new Tour for the given user, scoped to the given museum
    pub fn new(id: String, user_id: String, museum_id: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            museum_id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the given user owns this tour
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// TourSection - join row recording a Tour's inclusion of one Section and
/// its display position
///
/// `display_order` is a dense, caller-assigned integer establishing the
/// presentation sequence. It is not required to be contiguous; ties are
/// broken by row insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourSection {
    /// ID of the Tour
    pub tour_id: String,

    /// ID of the included Section
    pub section_id: String,

    /// Presentation position within the tour
    pub display_order: u32,
}

impl TourSection {
    /// Create a new join row
    pub fn new(tour_id: String, section_id: String, display_order: u32) -> Self {
        Self {
            tour_id,
            section_id,
            display_order,
        }
    }
}
