//! Owned approval workflow component.
//!
//! The detail groups (approval, rejection, revocation) are held in a single
//! `ApprovalOutcome`, so at most one of them is present and it always belongs
//! to the last successful transition.

use serde::{Deserialize, Serialize};

use crate::approval::error::IllegalApprovalState;
use crate::approval::types::ApprovalStatus;
use crate::time::{self, Timestamp};
use crate::transition::{LifecycleState, validate_transition};

/// Who made a decision and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Actor who made the decision.
    pub by: String,
    /// When the decision was applied.
    pub at: Timestamp,
}

/// A decision that carries a reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonedDecision {
    /// Actor who made the decision.
    pub by: String,
    /// When the decision was applied.
    pub at: Timestamp,
    /// Free-form reason supplied by the actor.
    pub reason: String,
}

/// Detail group recorded by the last decisive transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// Set by `approve`.
    Approved(Decision),
    /// Set by `reject`.
    Rejected(ReasonedDecision),
    /// Set by `revoke`.
    Revoked(ReasonedDecision),
}

/// A successfully applied approval transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalTransition {
    /// Status before the transition.
    pub from: ApprovalStatus,
    /// Status after the transition.
    pub to: ApprovalStatus,
    /// Who requested the transition.
    pub actor: String,
    /// When the transition was applied.
    pub at: Timestamp,
}

/// Approval state machine embedded in an approvable record.
///
/// Starts in `PendingApproval` with no outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovalWorkflow {
    status: ApprovalStatus,
    outcome: Option<ApprovalOutcome>,
}

impl ApprovalWorkflow {
    /// Creates a workflow in the initial `PendingApproval` status.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current approval status.
    #[must_use]
    pub fn status(&self) -> ApprovalStatus {
        self.status
    }

    /// Returns true if the current status is final.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.status.is_final()
    }

    /// Detail group of the last decisive transition.
    #[must_use]
    pub fn outcome(&self) -> Option<&ApprovalOutcome> {
        self.outcome.as_ref()
    }

    fn approval(&self) -> Option<&Decision> {
        match &self.outcome {
            Some(ApprovalOutcome::Approved(decision)) => Some(decision),
            _ => None,
        }
    }

    fn rejection(&self) -> Option<&ReasonedDecision> {
        match &self.outcome {
            Some(ApprovalOutcome::Rejected(decision)) => Some(decision),
            _ => None,
        }
    }

    fn revocation(&self) -> Option<&ReasonedDecision> {
        match &self.outcome {
            Some(ApprovalOutcome::Revoked(decision)) => Some(decision),
            _ => None,
        }
    }

    /// When the record was approved.
    #[must_use]
    pub fn approved_at(&self) -> Option<Timestamp> {
        self.approval().map(|d| d.at)
    }

    /// Who approved the record.
    #[must_use]
    pub fn approved_by(&self) -> Option<&str> {
        self.approval().map(|d| d.by.as_str())
    }

    /// When the record was rejected.
    #[must_use]
    pub fn rejected_at(&self) -> Option<Timestamp> {
        self.rejection().map(|d| d.at)
    }

    /// Who rejected the record.
    #[must_use]
    pub fn rejected_by(&self) -> Option<&str> {
        self.rejection().map(|d| d.by.as_str())
    }

    /// Why the record was rejected.
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection().map(|d| d.reason.as_str())
    }

    /// When the approval was revoked.
    #[must_use]
    pub fn revoked_at(&self) -> Option<Timestamp> {
        self.revocation().map(|d| d.at)
    }

    /// Who revoked the approval.
    #[must_use]
    pub fn revoked_by(&self) -> Option<&str> {
        self.revocation().map(|d| d.by.as_str())
    }

    /// Why the approval was revoked.
    #[must_use]
    pub fn revocation_reason(&self) -> Option<&str> {
        self.revocation().map(|d| d.reason.as_str())
    }

    /// Submit for review (`PendingApproval` → `InReview`).
    pub fn submit_for_approval(
        &mut self,
        submitted_by: impl Into<String>,
    ) -> Result<ApprovalTransition, IllegalApprovalState> {
        self.apply(ApprovalStatus::InReview, submitted_by.into(), |_| None)
    }

    /// Approve a record under review.
    ///
    /// Records the approver and clears any rejection details.
    pub fn approve(
        &mut self,
        approved_by: impl Into<String>,
    ) -> Result<ApprovalTransition, IllegalApprovalState> {
        self.apply(ApprovalStatus::Approved, approved_by.into(), |t| {
            Some(ApprovalOutcome::Approved(Decision {
                by: t.actor.clone(),
                at: t.at,
            }))
        })
    }

    /// Reject a pending or in-review record.
    ///
    /// Records the rejection details and clears any approval details.
    pub fn reject(
        &mut self,
        rejected_by: impl Into<String>,
        reason: impl Into<String>,
    ) -> Result<ApprovalTransition, IllegalApprovalState> {
        let reason = reason.into();
        self.apply(ApprovalStatus::Rejected, rejected_by.into(), |t| {
            Some(ApprovalOutcome::Rejected(ReasonedDecision {
                by: t.actor.clone(),
                at: t.at,
                reason,
            }))
        })
    }

    /// Revoke an approved record.
    pub fn revoke(
        &mut self,
        revoked_by: impl Into<String>,
        reason: impl Into<String>,
    ) -> Result<ApprovalTransition, IllegalApprovalState> {
        let reason = reason.into();
        self.apply(ApprovalStatus::Revoked, revoked_by.into(), |t| {
            Some(ApprovalOutcome::Revoked(ReasonedDecision {
                by: t.actor.clone(),
                at: t.at,
                reason,
            }))
        })
    }

    fn apply<F>(
        &mut self,
        target: ApprovalStatus,
        actor: String,
        outcome: F,
    ) -> Result<ApprovalTransition, IllegalApprovalState>
    where
        F: FnOnce(&ApprovalTransition) -> Option<ApprovalOutcome>,
    {
        validate_transition(self.status, target, |from, to| IllegalApprovalState {
            from,
            to,
        })?;

        let transition = ApprovalTransition {
            from: self.status,
            to: target,
            actor,
            at: time::now(),
        };

        self.status = target;
        self.outcome = outcome(&transition);

        Ok(transition)
    }

    /// Immutable snapshot for transport.
    #[must_use]
    pub fn to_view(&self) -> ApprovalView {
        ApprovalView {
            approval_status: self.status,
            approved_at: self.approved_at(),
            approved_by: self.approved_by().map(str::to_owned),
            rejected_at: self.rejected_at(),
            rejected_by: self.rejected_by().map(str::to_owned),
            rejection_reason: self.rejection_reason().map(str::to_owned),
            revoked_at: self.revoked_at(),
            revoked_by: self.revoked_by().map(str::to_owned),
            revocation_reason: self.revocation_reason().map(str::to_owned),
        }
    }
}

/// Transport snapshot of an `ApprovalWorkflow`.
///
/// Consumers detect the active detail group by field presence, so absent
/// groups are omitted rather than serialized as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalView {
    approval_status: ApprovalStatus,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::time::iso_millis"
    )]
    approved_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    approved_by: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::time::iso_millis"
    )]
    rejected_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rejected_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rejection_reason: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::time::iso_millis"
    )]
    revoked_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    revoked_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    revocation_reason: Option<String>,
}

impl ApprovalView {
    /// Approval status at snapshot time.
    #[must_use]
    pub fn approval_status(&self) -> ApprovalStatus {
        self.approval_status
    }

    /// Approver, if the record was approved.
    #[must_use]
    pub fn approved_by(&self) -> Option<&str> {
        self.approved_by.as_deref()
    }

    /// Rejection reason, if the record was rejected.
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    /// Revocation reason, if the approval was revoked.
    #[must_use]
    pub fn revocation_reason(&self) -> Option<&str> {
        self.revocation_reason.as_deref()
    }
}
