//! Query module for read-only operations
//!
//! Read-only projections over the entity store, assembled into the nested
//! view types the presentation layer consumes.
//!
//! Key principles:
//! - All queries are pure reads (no mutations, no side effects)
//! - Results are deterministically ordered
//! - Absence of a looked-up entity is `None`, never an error
//! - Typed errors are reserved for store-integrity violations

pub mod catalog_queries;
pub mod tour_queries;

pub use catalog_queries::{
    get_museum, get_museum_with_sections, get_section_with_key_objects, list_museums,
    list_sections_by_museum, search_museums, MuseumDetails, SectionDetails,
};
pub use tour_queries::{get_tour_with_details, list_tours_by_user, tour_with_details, TourWithDetails};
