//! Property-based tests for ApprovalWorkflow.
//!
//! Arbitrary sequences of approval actions are replayed against the workflow
//! and checked against the transition table and the detail-group rules.

use proptest::prelude::*;

use crate::approval::error::IllegalApprovalState;
use crate::approval::types::ApprovalStatus;
use crate::approval::workflow::{ApprovalTransition, ApprovalWorkflow};
use crate::transition::{LifecycleState, all_pairs};

/// An approval action a caller may request.
#[derive(Debug, Clone)]
enum Action {
    Submit(String),
    Approve(String),
    Reject(String, String),
    Revoke(String, String),
}

impl Action {
    fn target(&self) -> ApprovalStatus {
        match self {
            Self::Submit(_) => ApprovalStatus::InReview,
            Self::Approve(_) => ApprovalStatus::Approved,
            Self::Reject(..) => ApprovalStatus::Rejected,
            Self::Revoke(..) => ApprovalStatus::Revoked,
        }
    }

    fn apply(
        &self,
        workflow: &mut ApprovalWorkflow,
    ) -> Result<ApprovalTransition, IllegalApprovalState> {
        match self {
            Self::Submit(by) => workflow.submit_for_approval(by.clone()),
            Self::Approve(by) => workflow.approve(by.clone()),
            Self::Reject(by, reason) => workflow.reject(by.clone(), reason.clone()),
            Self::Revoke(by, reason) => workflow.revoke(by.clone(), reason.clone()),
        }
    }
}

/// Strategy for generating actor names.
fn arb_actor() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

/// Strategy for generating reasons.
fn arb_reason() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,40}"
}

/// Strategy for generating random approval actions.
fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        arb_actor().prop_map(Action::Submit),
        arb_actor().prop_map(Action::Approve),
        (arb_actor(), arb_reason()).prop_map(|(by, r)| Action::Reject(by, r)),
        (arb_actor(), arb_reason()).prop_map(|(by, r)| Action::Revoke(by, r)),
    ]
}

/// Checks that the detail groups agree with the current status.
fn assert_groups_consistent(workflow: &ApprovalWorkflow) -> Result<(), TestCaseError> {
    let approved = workflow.approved_by().is_some();
    let rejected = workflow.rejected_by().is_some();
    let revoked = workflow.revoked_by().is_some();

    prop_assert!(!(approved && rejected));
    prop_assert_eq!(approved, workflow.status() == ApprovalStatus::Approved);
    prop_assert_eq!(rejected, workflow.status() == ApprovalStatus::Rejected);
    prop_assert_eq!(revoked, workflow.status() == ApprovalStatus::Revoked);
    prop_assert_eq!(approved, workflow.approved_at().is_some());
    prop_assert_eq!(rejected, workflow.rejection_reason().is_some());
    prop_assert_eq!(revoked, workflow.revocation_reason().is_some());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Each action succeeds iff its target is reachable from the current status,
    /// and failed actions leave every field untouched.
    #[test]
    fn prop_actions_follow_table(actions in prop::collection::vec(arb_action(), 1..15)) {
        let mut workflow = ApprovalWorkflow::new();

        for action in actions {
            let from = workflow.status();
            let before = workflow.clone();
            let result = action.apply(&mut workflow);

            if from.can_transition_to(action.target()) {
                let transition = result.unwrap();
                prop_assert_eq!(transition.from, from);
                prop_assert_eq!(transition.to, action.target());
                prop_assert_eq!(workflow.status(), action.target());
            } else {
                prop_assert_eq!(result, Err(IllegalApprovalState { from, to: action.target() }));
                prop_assert_eq!(&workflow, &before);
            }

            assert_groups_consistent(&workflow)?;
        }
    }

    /// Rejection details always carry the actor and reason that were supplied.
    #[test]
    fn prop_rejection_records_reason(by in arb_actor(), reason in arb_reason()) {
        let mut workflow = ApprovalWorkflow::new();
        workflow.submit_for_approval("submitter").unwrap();
        workflow.reject(by.clone(), reason.clone()).unwrap();

        prop_assert_eq!(workflow.rejected_by(), Some(by.as_str()));
        prop_assert_eq!(workflow.rejection_reason(), Some(reason.as_str()));
        prop_assert!(workflow.approved_by().is_none());
    }
}

#[cfg(test)]
mod edge_case_tests {
    use super::*;

    /// Drives a fresh workflow to `status`.
    fn workflow_in(status: ApprovalStatus) -> ApprovalWorkflow {
        let mut workflow = ApprovalWorkflow::new();
        match status {
            ApprovalStatus::PendingApproval => {}
            ApprovalStatus::InReview => {
                workflow.submit_for_approval("setup").unwrap();
            }
            ApprovalStatus::Approved => {
                workflow.submit_for_approval("setup").unwrap();
                workflow.approve("setup").unwrap();
            }
            ApprovalStatus::Rejected => {
                workflow.reject("setup", "setup").unwrap();
            }
            ApprovalStatus::Revoked => {
                workflow.submit_for_approval("setup").unwrap();
                workflow.approve("setup").unwrap();
                workflow.revoke("setup", "setup").unwrap();
            }
        }
        workflow
    }

    fn request(workflow: &mut ApprovalWorkflow, to: ApprovalStatus) -> bool {
        match to {
            ApprovalStatus::PendingApproval => false,
            ApprovalStatus::InReview => workflow.submit_for_approval("actor").is_ok(),
            ApprovalStatus::Approved => workflow.approve("actor").is_ok(),
            ApprovalStatus::Rejected => workflow.reject("actor", "reason").is_ok(),
            ApprovalStatus::Revoked => workflow.revoke("actor", "reason").is_ok(),
        }
    }

    #[test]
    fn test_every_pair_checked_mechanically() {
        for (from, to) in all_pairs::<ApprovalStatus>() {
            let mut workflow = workflow_in(from);
            assert_eq!(workflow.status(), from);
            assert_eq!(
                request(&mut workflow, to),
                from.can_transition_to(to),
                "{from} -> {to}"
            );
        }
    }

    #[test]
    fn test_no_action_returns_to_pending_approval() {
        assert!(
            ApprovalStatus::ALL
                .iter()
                .all(|s| !s.can_transition_to(ApprovalStatus::PendingApproval))
        );
    }
}
