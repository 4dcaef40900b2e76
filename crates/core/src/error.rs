//! Unified error type for host record operations.

use lifecycle_shared::AppError;
use thiserror::Error;

use crate::approval::IllegalApprovalState;
use crate::audit::AuditError;
use crate::status::IllegalStatusTransition;

/// Any failure a host record operation can report.
///
/// Every variant leaves the record exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// Status transition not in the table.
    #[error(transparent)]
    Status(#[from] IllegalStatusTransition),

    /// Approval transition not in the table.
    #[error(transparent)]
    Approval(#[from] IllegalApprovalState),

    /// Audit hook or validation failure.
    #[error(transparent)]
    Audit(#[from] AuditError),
}

impl LifecycleError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Status(err) => err.status_code(),
            Self::Approval(err) => err.status_code(),
            Self::Audit(err) => err.status_code(),
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Status(err) => err.error_code(),
            Self::Approval(err) => err.error_code(),
            Self::Audit(err) => err.error_code(),
        }
    }
}

impl From<LifecycleError> for AppError {
    fn from(err: LifecycleError) -> Self {
        let message = err.to_string();
        match err {
            LifecycleError::Status(_) | LifecycleError::Approval(_) => {
                AppError::BusinessRule(message)
            }
            LifecycleError::Audit(AuditError::IdentityAlreadyAssigned(_)) => {
                AppError::Conflict(message)
            }
            LifecycleError::Audit(
                AuditError::MissingActor { .. } | AuditError::FieldTooLong { .. },
            ) => AppError::Validation(message),
        }
    }
}
