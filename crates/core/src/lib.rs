//! Core lifecycle logic for Lifecycle.
//!
//! This crate contains pure lifecycle logic with ZERO web or database dependencies.
//! It computes what a record must say at each lifecycle hook and whether a
//! requested state transition is legal; persistence decides when to write.
//!
//! # Modules
//!
//! - `audit` - Actor/request provenance and versioned timestamps
//! - `status` - Generic entity status state machine
//! - `approval` - Approval workflow state machine
//! - `transition` - Shared transition-table plumbing
//! - `host` - Capability traits for records embedding the components above

pub mod approval;
pub mod audit;
pub mod error;
pub mod host;
pub mod status;
pub mod time;
pub mod transition;

pub use approval::{
    ApprovalStatus, ApprovalTransition, ApprovalView, ApprovalWorkflow, IllegalApprovalState,
};
pub use audit::{
    ActorContext, AuditError, AuditTrail, AuditView, HttpVerb, OperationKind, VersionCheck,
};
pub use error::LifecycleError;
pub use host::{Approvable, Audited, HostView, Trackable, WorkflowView};
pub use status::{EntityStatus, IllegalStatusTransition, StatusChange, StatusView, StatusWorkflow};
pub use time::Timestamp;
pub use transition::LifecycleState;
