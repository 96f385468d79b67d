//! Museo Core - catalog query and tour composition layer
//!
//! This crate provides the foundational data structures and operations for
//! the Museo catalog-and-planning application, including:
//! - Museum / Section / KeyObject / Tour models with bidirectional
//!   membership and full referential-integrity validation
//! - An in-memory, pre-seedable entity store
//! - Read-only catalog queries with deterministic ordering and free-text
//!   search
//! - Tour composition: create, rename, re-select, and delete user tours
//!   with atomic all-or-nothing validation
//! - Write-policy gating for read-only deployments
//! - A structured logging facility
//!
//! The crate is a library invoked by a presentation layer; it owns no
//! network surface and no persistence format.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod queries;
pub mod rules;
pub mod seed;

// Re-export commonly used types
pub use errors::{ErrorKind, MuseoError, Result};
pub use museo_core_types::{RequestContext, RequestId};
pub use model::{KeyObject, Museum, Section, Tour, TourSection};
pub use ops::Store;
pub use policy::{ReadOnlyPolicy, ReadWritePolicy, WritePolicy};
pub use queries::{MuseumDetails, SectionDetails, TourWithDetails};
