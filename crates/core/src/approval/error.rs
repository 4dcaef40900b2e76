//! Approval transition error.

use thiserror::Error;

use crate::approval::types::ApprovalStatus;

/// A requested approval transition is not in the transition table.
///
/// The workflow that raised it is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot transition from {from} to {to}")]
pub struct IllegalApprovalState {
    /// The current approval status.
    pub from: ApprovalStatus,
    /// The rejected target status.
    pub to: ApprovalStatus,
}

impl IllegalApprovalState {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        422
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        "ILLEGAL_APPROVAL_STATE"
    }
}
