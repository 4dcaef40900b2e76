//! Approval workflow.
//!
//! This module implements the approval state machine (submit, review,
//! approve, reject, revoke) together with the per-transition detail groups
//! recorded for approvals, rejections and revocations.
//!
//! # Modules
//!
//! - `types` - `ApprovalStatus` and its transition table
//! - `error` - Rejected transition error
//! - `workflow` - The owned `ApprovalWorkflow` component and its transport view

pub mod error;
pub mod types;
pub mod workflow;

#[cfg(test)]
mod workflow_props;

pub use error::IllegalApprovalState;
pub use types::ApprovalStatus;
pub use workflow::{
    ApprovalOutcome, ApprovalTransition, ApprovalView, ApprovalWorkflow, Decision,
    ReasonedDecision,
};
