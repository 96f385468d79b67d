//! Correlation types for request tracking
//!
//! Every mutating operation in the catalog core receives a
//! [`RequestContext`] carrying the identity of the calling user alongside a
//! request id for log correlation. Identity is always passed explicitly -
//! there is no ambient "current user" state anywhere in the core.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single request or operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request-scoped context: the calling user's identity plus a request id
/// for correlating log events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Request id, generated per call unless supplied by the caller
    pub request_id: RequestId,

    /// Identity of the user issuing the request (opaque stable string)
    pub user_id: String,
}

impl RequestContext {
    /// Create a context for the given user with a fresh request id
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::new(),
            user_id: user_id.into(),
        }
    }

    /// Create a context with an explicit request id (e.g. propagated from
    /// an upstream API gateway)
    pub fn with_request_id(user_id: impl Into<String>, request_id: RequestId) -> Self {
        Self {
            request_id,
            user_id: user_id.into(),
        }
    }

    /// The calling user's id
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}
