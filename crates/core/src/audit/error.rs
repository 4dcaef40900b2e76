//! Audit error types.

use lifecycle_shared::RecordId;
use thiserror::Error;

use crate::audit::types::OperationKind;

/// Errors raised by audit trail hooks and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditError {
    /// A mutating hook fired without actor context on a non-system operation.
    #[error("No actor context for {operation} operation")]
    MissingActor {
        /// The hook that was attempted.
        operation: OperationKind,
    },

    /// The record already has an identity.
    #[error("Record identity already assigned: {0}")]
    IdentityAlreadyAssigned(RecordId),

    /// A provenance field exceeds its configured maximum length.
    #[error("Field {field} exceeds maximum length {max} (got {actual})")]
    FieldTooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Configured maximum length.
        max: usize,
        /// Actual length in characters.
        actual: usize,
    },
}

impl AuditError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MissingActor { .. } | Self::FieldTooLong { .. } => 400,
            Self::IdentityAlreadyAssigned(_) => 409,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingActor { .. } => "MISSING_ACTOR",
            Self::IdentityAlreadyAssigned(_) => "IDENTITY_ALREADY_ASSIGNED",
            Self::FieldTooLong { .. } => "FIELD_TOO_LONG",
        }
    }
}
