//! Status transition error.

use thiserror::Error;

use crate::status::types::EntityStatus;

/// A requested status transition is not in the transition table.
///
/// The workflow that raised it is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot transition from {from} to {to}")]
pub struct IllegalStatusTransition {
    /// The current status.
    pub from: EntityStatus,
    /// The rejected target status.
    pub to: EntityStatus,
}

impl IllegalStatusTransition {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        422
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        "ILLEGAL_STATUS_TRANSITION"
    }
}
