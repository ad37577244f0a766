//! Error Types

use thiserror::Error;

/// Errors raised while encoding, decoding, or configuring role claims.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleTokenError {
    /// An encoded record could not be parsed.
    ///
    /// Raised before any table lookup happens, so it signals corruption of the
    /// claim rather than a role this build does not know about.
    #[error("Failed to read user's role permissions: malformed role record {record:?} ({reason})")]
    MalformedRecord {
        /// The literal record as it appeared in the claim.
        record: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An organization id cannot be written without breaking the wire format.
    #[error("Invalid organization id {id:?}: {reason}")]
    InvalidOrganizationId {
        /// String form of the rejected id.
        id: String,
        /// Why it was rejected.
        reason: String,
    },

    /// No enumerated value carries the given label.
    #[error("Unknown label: {0}")]
    UnknownLabel(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RoleTokenError {
    pub(crate) fn malformed(record: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record: record.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the encoded claim itself is corrupt.
    #[must_use]
    pub const fn is_decode_corruption(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}

/// Result type for role token operations.
pub type Result<T> = std::result::Result<T, RoleTokenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_names_the_record() {
        let err = RoleTokenError::malformed("10:x:20", "organization id is not valid");
        assert!(err.to_string().contains("\"10:x:20\""));
        assert!(err.is_decode_corruption());
    }

    #[test]
    fn test_other_errors_are_not_corruption() {
        assert!(!RoleTokenError::UnknownLabel("owner".into()).is_decode_corruption());
        assert!(!RoleTokenError::Config("bad".into()).is_decode_corruption());
        assert!(!RoleTokenError::InvalidOrganizationId {
            id: "a|b".into(),
            reason: "contains '|'".into(),
        }
        .is_decode_corruption());
    }
}
