//! Write policy hook and implementations
//!
//! Every mutating operation checks an injected [`WritePolicy`] before
//! touching the store. A read-only deployment (the statically exported
//! build of the original application) injects [`ReadOnlyPolicy`], which
//! denies all writes with a `WritesDisabled` error - an `Unsupported` kind
//! distinct from `NotFound` and `InvalidInput`, so callers can message the
//! condition to users distinctly.

use crate::errors::{MuseoError, Result};

/// Policy hook: allow or deny a write operation before any validation.
pub trait WritePolicy: Send + Sync {
    /// Check whether the named write operation is allowed.
    ///
    /// # Errors
    ///
    /// Returns `WritesDisabled` if writes are denied by policy.
    fn check_write(&self, op: &str) -> Result<()>;
}

/// Always allows (the default for read-write deployments and tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadWritePolicy;

impl WritePolicy for ReadWritePolicy {
    fn check_write(&self, _op: &str) -> Result<()> {
        Ok(())
    }
}

/// Always denies (read-only deployment mode).
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnlyPolicy;

impl WritePolicy for ReadOnlyPolicy {
    fn check_write(&self, op: &str) -> Result<()> {
        Err(MuseoError::WritesDisabled { op: op.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_read_write_policy_allows() {
        let policy = ReadWritePolicy;
        assert!(policy.check_write("create_tour").is_ok());
    }

    #[test]
    fn test_read_only_policy_denies_with_unsupported_kind() {
        let policy = ReadOnlyPolicy;
        let result = policy.check_write("create_tour");

        match result {
            Err(MuseoError::WritesDisabled { op }) => {
                assert_eq!(op, "create_tour");
            }
            other => panic!("Expected WritesDisabled, got {other:?}"),
        }

        let err = policy.check_write("delete_tour").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }
}
