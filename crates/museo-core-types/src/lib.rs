//! Core types shared across Museo facilities
//!
//! This crate provides foundational types used by both the catalog core
//! and its logging facility:
//!
//! - **Correlation types**: RequestId, RequestContext (request-scoped
//!   caller identity)
//! - **Schema constants**: Canonical field keys and event names for
//!   structured logging

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId};
