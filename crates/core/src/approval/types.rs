//! Approval status type and transition table.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::transition::LifecycleState;

/// Status of a record in the approval workflow.
///
/// The valid transitions are:
/// - PendingApproval → InReview (submit), Rejected (reject)
/// - InReview → Approved (approve), Rejected (reject)
/// - Approved → Revoked (revoke)
///
/// Approved, Rejected and Revoked are final. Only Approved keeps an outgoing
/// edge; Rejected and Revoked are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    /// Awaiting initial approval.
    #[default]
    PendingApproval,
    /// Under review.
    InReview,
    /// Approved and valid.
    Approved,
    /// Rejected with comments.
    Rejected,
    /// Previously approved, now revoked.
    Revoked,
}

impl ApprovalStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingApproval => "PENDING_APPROVAL",
            Self::InReview => "IN_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Revoked => "REVOKED",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PENDING_APPROVAL" => Some(Self::PendingApproval),
            "IN_REVIEW" => Some(Self::InReview),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            "REVOKED" => Some(Self::Revoked),
            _ => None,
        }
    }

    /// Human-readable description of the status.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::PendingApproval => "Awaiting initial approval",
            Self::InReview => "Under review process",
            Self::Approved => "Approved and valid",
            Self::Rejected => "Rejected with comments",
            Self::Revoked => "Previously approved, now revoked",
        }
    }
}

impl LifecycleState for ApprovalStatus {
    const ALL: &'static [Self] = &[
        Self::PendingApproval,
        Self::InReview,
        Self::Approved,
        Self::Rejected,
        Self::Revoked,
    ];

    fn allowed_targets(self) -> &'static [Self] {
        match self {
            Self::PendingApproval => &[Self::InReview, Self::Rejected],
            Self::InReview => &[Self::Approved, Self::Rejected],
            Self::Approved => &[Self::Revoked],
            Self::Rejected | Self::Revoked => &[],
        }
    }

    fn is_final(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Revoked)
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
