//! Capability traits for records that embed lifecycle components.
//!
//! A host record owns an `AuditTrail` and at most one workflow by value. It
//! exposes them through these traits and gets transition operations that
//! validate, apply, run the host's hook, and finally hand the actor to the
//! audit trail for the next persistence hook. A failed transition touches
//! neither the workflow nor the trail.
//!
//! ```
//! use lifecycle_core::{ActorContext, Audited, AuditTrail, EntityStatus, StatusWorkflow, Trackable};
//!
//! #[derive(Default)]
//! struct Project {
//!     audit: AuditTrail,
//!     status: StatusWorkflow,
//! }
//!
//! impl Audited for Project {
//!     fn audit_trail(&self) -> &AuditTrail { &self.audit }
//!     fn audit_trail_mut(&mut self) -> &mut AuditTrail { &mut self.audit }
//! }
//!
//! impl Trackable for Project {
//!     fn status_workflow(&self) -> &StatusWorkflow { &self.status }
//!     fn status_workflow_mut(&mut self) -> &mut StatusWorkflow { &mut self.status }
//! }
//!
//! let mut project = Project::default();
//! project.update_status(EntityStatus::Pending, ActorContext::named("alice")).unwrap();
//! project.audit_trail_mut().on_update(None, 0).unwrap();
//! assert_eq!(project.audit_trail().actor().unwrap().principal_name, "alice");
//! ```

use serde::Serialize;

use crate::approval::{ApprovalStatus, ApprovalTransition, ApprovalView, ApprovalWorkflow};
use crate::audit::{ActorContext, AuditTrail, AuditView};
use crate::error::LifecycleError;
use crate::status::{EntityStatus, StatusChange, StatusView, StatusWorkflow};

/// A record carrying an audit trail.
pub trait Audited {
    /// The embedded audit trail.
    fn audit_trail(&self) -> &AuditTrail;

    /// The embedded audit trail, mutably.
    fn audit_trail_mut(&mut self) -> &mut AuditTrail;

    /// Transport view of the embedded workflow, if the record has one.
    fn workflow_view(&self) -> Option<WorkflowView> {
        None
    }

    /// Immutable snapshot of the whole record's lifecycle metadata.
    fn to_transport_view(&self) -> HostView {
        HostView {
            audit: self.audit_trail().to_transport_view(),
            workflow: self.workflow_view(),
        }
    }
}

/// A record with a generic status lifecycle.
pub trait Trackable: Audited {
    /// The embedded status workflow.
    fn status_workflow(&self) -> &StatusWorkflow;

    /// The embedded status workflow, mutably.
    fn status_workflow_mut(&mut self) -> &mut StatusWorkflow;

    /// Runs after a successful status transition.
    fn on_status_change(&mut self, _change: &StatusChange) {}

    /// Current status.
    fn status(&self) -> EntityStatus {
        self.status_workflow().status()
    }

    /// Transition to `target` on behalf of `actor`.
    fn update_status(
        &mut self,
        target: EntityStatus,
        actor: ActorContext,
    ) -> Result<StatusChange, LifecycleError> {
        let change = self
            .status_workflow_mut()
            .transition_to(target, actor.principal_name.clone())?;
        self.on_status_change(&change);
        self.audit_trail_mut().set_actor(actor);
        Ok(change)
    }
}

/// A record going through the approval workflow.
pub trait Approvable: Audited {
    /// The embedded approval workflow.
    fn approval_workflow(&self) -> &ApprovalWorkflow;

    /// The embedded approval workflow, mutably.
    fn approval_workflow_mut(&mut self) -> &mut ApprovalWorkflow;

    /// Runs after a successful submission.
    fn on_submit_for_approval(&mut self, _transition: &ApprovalTransition) {}

    /// Runs after a successful approval.
    fn on_approve(&mut self, _transition: &ApprovalTransition) {}

    /// Runs after a successful rejection.
    fn on_reject(&mut self, _transition: &ApprovalTransition) {}

    /// Runs after a successful revocation.
    fn on_revoke(&mut self, _transition: &ApprovalTransition) {}

    /// Current approval status.
    fn approval_status(&self) -> ApprovalStatus {
        self.approval_workflow().status()
    }

    /// Submit for review on behalf of `actor`.
    fn submit_for_approval(
        &mut self,
        actor: ActorContext,
    ) -> Result<ApprovalTransition, LifecycleError> {
        let transition = self
            .approval_workflow_mut()
            .submit_for_approval(actor.principal_name.clone())?;
        self.on_submit_for_approval(&transition);
        self.audit_trail_mut().set_actor(actor);
        Ok(transition)
    }

    /// Approve on behalf of `actor`.
    fn approve(&mut self, actor: ActorContext) -> Result<ApprovalTransition, LifecycleError> {
        let transition = self
            .approval_workflow_mut()
            .approve(actor.principal_name.clone())?;
        self.on_approve(&transition);
        self.audit_trail_mut().set_actor(actor);
        Ok(transition)
    }

    /// Reject on behalf of `actor`.
    fn reject(
        &mut self,
        actor: ActorContext,
        reason: impl Into<String>,
    ) -> Result<ApprovalTransition, LifecycleError> {
        let transition = self
            .approval_workflow_mut()
            .reject(actor.principal_name.clone(), reason)?;
        self.on_reject(&transition);
        self.audit_trail_mut().set_actor(actor);
        Ok(transition)
    }

    /// Revoke an approval on behalf of `actor`.
    fn revoke(
        &mut self,
        actor: ActorContext,
        reason: impl Into<String>,
    ) -> Result<ApprovalTransition, LifecycleError> {
        let transition = self
            .approval_workflow_mut()
            .revoke(actor.principal_name.clone(), reason)?;
        self.on_revoke(&transition);
        self.audit_trail_mut().set_actor(actor);
        Ok(transition)
    }
}

/// Transport view of whichever workflow a record embeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WorkflowView {
    /// Status lifecycle snapshot.
    Status(StatusView),
    /// Approval workflow snapshot.
    Approval(ApprovalView),
}

impl From<StatusView> for WorkflowView {
    fn from(view: StatusView) -> Self {
        Self::Status(view)
    }
}

impl From<ApprovalView> for WorkflowView {
    fn from(view: ApprovalView) -> Self {
        Self::Approval(view)
    }
}

/// Snapshot of a host record: audit fields plus the workflow fields, flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostView {
    #[serde(flatten)]
    audit: AuditView,
    #[serde(flatten)]
    workflow: Option<WorkflowView>,
}

impl HostView {
    /// Audit part of the snapshot.
    #[must_use]
    pub fn audit(&self) -> &AuditView {
        &self.audit
    }

    /// Workflow part of the snapshot.
    #[must_use]
    pub fn workflow(&self) -> Option<&WorkflowView> {
        self.workflow.as_ref()
    }

    /// Copy of this view with a different version.
    #[must_use]
    pub fn with_version(&self, version: u64) -> Self {
        Self {
            audit: self.audit.with_version(version),
            workflow: self.workflow.clone(),
        }
    }
}
