//! Host records used by the walkthrough.

use lifecycle_core::{
    ApprovalTransition, ApprovalWorkflow, Approvable, Audited, AuditTrail, StatusChange,
    StatusWorkflow, Trackable, WorkflowView,
};
use lifecycle_shared::RecordId;
use tracing::{debug, info};

/// A document that must be approved before publication.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub title: String,
    audit: AuditTrail,
    approval: ApprovalWorkflow,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Identity assigned by the store, if inserted.
    pub fn id(&self) -> Option<RecordId> {
        self.audit.id()
    }
}

impl Audited for Document {
    fn audit_trail(&self) -> &AuditTrail {
        &self.audit
    }

    fn audit_trail_mut(&mut self) -> &mut AuditTrail {
        &mut self.audit
    }

    fn workflow_view(&self) -> Option<WorkflowView> {
        Some(self.approval.to_view().into())
    }
}

impl Approvable for Document {
    fn approval_workflow(&self) -> &ApprovalWorkflow {
        &self.approval
    }

    fn approval_workflow_mut(&mut self) -> &mut ApprovalWorkflow {
        &mut self.approval
    }

    fn on_submit_for_approval(&mut self, transition: &ApprovalTransition) {
        debug!(title = %self.title, submitted_by = %transition.actor, "document submitted");
    }

    fn on_approve(&mut self, transition: &ApprovalTransition) {
        info!(title = %self.title, approved_by = %transition.actor, "document approved");
    }

    fn on_reject(&mut self, transition: &ApprovalTransition) {
        debug!(title = %self.title, rejected_by = %transition.actor, "document rejected");
    }

    fn on_revoke(&mut self, transition: &ApprovalTransition) {
        info!(title = %self.title, revoked_by = %transition.actor, "document approval revoked");
    }
}

/// A project with a generic status lifecycle.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub name: String,
    audit: AuditTrail,
    status: StatusWorkflow,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A project maintained by scheduled jobs rather than users.
    pub fn system_managed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            audit: AuditTrail::for_system_operation(),
            status: StatusWorkflow::default(),
        }
    }

    /// Identity assigned by the store, if inserted.
    pub fn id(&self) -> Option<RecordId> {
        self.audit.id()
    }
}

impl Audited for Project {
    fn audit_trail(&self) -> &AuditTrail {
        &self.audit
    }

    fn audit_trail_mut(&mut self) -> &mut AuditTrail {
        &mut self.audit
    }

    fn workflow_view(&self) -> Option<WorkflowView> {
        Some(self.status.to_view().into())
    }
}

impl Trackable for Project {
    fn status_workflow(&self) -> &StatusWorkflow {
        &self.status
    }

    fn status_workflow_mut(&mut self) -> &mut StatusWorkflow {
        &mut self.status
    }

    fn on_status_change(&mut self, change: &StatusChange) {
        info!(
            project = %self.name,
            from = %change.from,
            to = %change.to,
            meaning = change.to.description(),
            "project status changed"
        );
    }
}
