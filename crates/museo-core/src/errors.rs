use thiserror::Error;

/// Result type alias using MuseoError
pub type Result<T> = std::result::Result<T, MuseoError>;

/// Canonical error kind taxonomy
///
/// Every [`MuseoError`] variant maps onto exactly one kind, and each kind
/// carries a stable error code for programmatic handling, testing, and
/// external API responses. Absence of a looked-up entity on the read-only
/// query surface is *not* an error (queries return `Option`); the `NotFound`
/// kind covers referenced entities that mutations require to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced entity is absent
    NotFound,
    /// Caller-supplied data violates a stated precondition
    InvalidInput,
    /// Authorization mismatch (tour ownership)
    Forbidden,
    /// Operation disabled in a read-only deployment
    Unsupported,
    /// Backing store unreachable
    Unavailable,
    /// Store-integrity violation (programmer-error contract breach)
    Internal,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ErrorKind::Forbidden => "ERR_FORBIDDEN",
            ErrorKind::Unsupported => "ERR_UNSUPPORTED",
            ErrorKind::Unavailable => "ERR_UNAVAILABLE",
            ErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Comprehensive error taxonomy for catalog and tour operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MuseoError {
    // ===== Not-found errors =====
    /// Museum not found in store
    #[error("Museum not found: {museum_id}")]
    MuseumNotFound { museum_id: String },

    /// Section not found in store
    #[error("Section not found: {section_id}")]
    SectionNotFound { section_id: String },

    /// Tour not found in store
    #[error("Tour not found: {tour_id}")]
    TourNotFound { tour_id: String },

    // ===== Validation errors =====
    /// Invalid tour name (empty or whitespace-only)
    #[error("Invalid tour name: {reason}")]
    InvalidTourName { reason: String },

    /// Tour creation requires at least one section
    #[error("No sections selected: a tour must reference at least one section")]
    NoSectionsSelected,

    /// Selected section does not belong to the tour's museum (or does not exist)
    #[error("Section {section_id} does not belong to museum {museum_id}")]
    SectionNotInMuseum {
        section_id: String,
        museum_id: String,
    },

    /// The same section appears more than once in the selection
    #[error("Duplicate section in selection: {section_id}")]
    DuplicateSectionSelection { section_id: String },

    // ===== Authorization errors =====
    /// The requesting user does not own the tour
    #[error("User {user_id} is not the owner of tour {tour_id}")]
    NotTourOwner { tour_id: String, user_id: String },

    // ===== Deployment errors =====
    /// Write operations are disabled in this deployment
    #[error("Write operation '{op}' is disabled in a read-only deployment")]
    WritesDisabled { op: String },

    /// Backing store is unreachable or timed out
    #[error("Entity store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    // ===== Integrity errors =====
    /// Section references a museum that doesn't exist
    #[error("Section {section_id} references unknown museum: {museum_id}")]
    SectionWithUnknownMuseum {
        section_id: String,
        museum_id: String,
    },

    /// Key object references a section that doesn't exist
    #[error("Key object {key_object_id} references unknown section: {section_id}")]
    KeyObjectWithUnknownSection {
        key_object_id: String,
        section_id: String,
    },

    /// Museum's section_ids contains an unknown section id
    #[error("Museum {museum_id} section_ids contains unknown section: {section_id}")]
    SectionListContainsUnknownId {
        museum_id: String,
        section_id: String,
    },

    /// Bidirectional membership inconsistency: Section.museum_id doesn't match owning Museum
    #[error(
        "Section {section_id} has museum_id={section_museum_id} but is owned by museum {owner_museum_id}"
    )]
    SectionMembershipInconsistent {
        section_id: String,
        section_museum_id: String,
        owner_museum_id: String,
    },

    /// Section points to a museum but is not listed in its section_ids
    #[error("Section {section_id} points to museum {museum_id} but is not listed in its section_ids")]
    SectionOrphaned {
        section_id: String,
        museum_id: String,
    },

    /// Section's key_object_ids contains an unknown key object id
    #[error("Section {section_id} key_object_ids contains unknown key object: {key_object_id}")]
    KeyObjectListContainsUnknownId {
        section_id: String,
        key_object_id: String,
    },

    /// Bidirectional membership inconsistency: KeyObject.section_id doesn't match owning Section
    #[error(
        "Key object {key_object_id} has section_id={key_object_section_id} but is owned by section {owner_section_id}"
    )]
    KeyObjectMembershipInconsistent {
        key_object_id: String,
        key_object_section_id: String,
        owner_section_id: String,
    },

    /// Key object points to a section but is not listed in its key_object_ids
    #[error(
        "Key object {key_object_id} points to section {section_id} but is not listed in its key_object_ids"
    )]
    KeyObjectOrphaned {
        key_object_id: String,
        section_id: String,
    },

    /// Tour references a museum that doesn't exist
    #[error("Tour {tour_id} references unknown museum: {museum_id}")]
    TourWithUnknownMuseum { tour_id: String, museum_id: String },

    /// Tour section row references a section that doesn't exist
    #[error("Tour {tour_id} references unknown section: {section_id}")]
    TourSectionUnknownSection { tour_id: String, section_id: String },

    /// Tour section row references a section outside the tour's museum
    #[error("Tour {tour_id} includes section {section_id} which is outside museum {museum_id}")]
    TourSectionOutsideMuseum {
        tour_id: String,
        section_id: String,
        museum_id: String,
    },

    /// Tour has no section rows (empty tours are invalid)
    #[error("Tour {tour_id} has no sections")]
    EmptyTour { tour_id: String },

    /// Tour includes the same section more than once
    #[error("Tour {tour_id} includes section {section_id} more than once")]
    DuplicateTourSection { tour_id: String, section_id: String },
}

impl MuseoError {
    /// Classify this error into the canonical kind taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            MuseoError::MuseumNotFound { .. }
            | MuseoError::SectionNotFound { .. }
            | MuseoError::TourNotFound { .. } => ErrorKind::NotFound,

            MuseoError::InvalidTourName { .. }
            | MuseoError::NoSectionsSelected
            | MuseoError::SectionNotInMuseum { .. }
            | MuseoError::DuplicateSectionSelection { .. } => ErrorKind::InvalidInput,

            MuseoError::NotTourOwner { .. } => ErrorKind::Forbidden,

            MuseoError::WritesDisabled { .. } => ErrorKind::Unsupported,

            MuseoError::StoreUnavailable { .. } => ErrorKind::Unavailable,

            MuseoError::SectionWithUnknownMuseum { .. }
            | MuseoError::KeyObjectWithUnknownSection { .. }
            | MuseoError::SectionListContainsUnknownId { .. }
            | MuseoError::SectionMembershipInconsistent { .. }
            | MuseoError::SectionOrphaned { .. }
            | MuseoError::KeyObjectListContainsUnknownId { .. }
            | MuseoError::KeyObjectMembershipInconsistent { .. }
            | MuseoError::KeyObjectOrphaned { .. }
            | MuseoError::TourWithUnknownMuseum { .. }
            | MuseoError::TourSectionUnknownSection { .. }
            | MuseoError::TourSectionOutsideMuseum { .. }
            | MuseoError::EmptyTour { .. }
            | MuseoError::DuplicateTourSection { .. } => ErrorKind::Internal,
        }
    }

    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let err = MuseoError::MuseumNotFound {
            museum_id: "m1".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.code(), "ERR_NOT_FOUND");

        let err = MuseoError::NoSectionsSelected;
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = MuseoError::NotTourOwner {
            tour_id: "t1".to_string(),
            user_id: "u1".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Forbidden);

        let err = MuseoError::WritesDisabled {
            op: "create_tour".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Unsupported);

        let err = MuseoError::StoreUnavailable {
            reason: "timeout".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Unavailable);
    }

    #[test]
    fn test_unsupported_is_distinct_from_not_found_and_invalid_input() {
        // Callers in a read-only deployment must be able to message this
        // case distinctly.
        assert_ne!(ErrorKind::Unsupported.code(), ErrorKind::NotFound.code());
        assert_ne!(
            ErrorKind::Unsupported.code(),
            ErrorKind::InvalidInput.code()
        );
    }

    #[test]
    fn test_display_carries_context() {
        let err = MuseoError::SectionNotInMuseum {
            section_id: "s9".to_string(),
            museum_id: "m1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("s9"));
        assert!(msg.contains("m1"));
    }
}
