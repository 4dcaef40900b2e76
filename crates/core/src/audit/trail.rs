//! The audit trail component and its lifecycle hooks.

use lifecycle_shared::{FieldLimits, RecordId};

use crate::audit::error::AuditError;
use crate::audit::types::{ActorContext, HttpVerb, OperationKind};
use crate::audit::view::AuditView;
use crate::time::{self, Timestamp};

/// Compare-and-swap data handed to the persistence collaborator on update.
///
/// The collaborator writes only if the stored version still equals
/// `expected`, and stores `next` on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionCheck {
    /// Version the caller read before mutating.
    pub expected: u64,
    /// Version the record carries after this update.
    pub next: u64,
}

impl VersionCheck {
    /// Returns true if `stored` matches the version the caller read.
    #[must_use]
    pub fn matches(&self, stored: u64) -> bool {
        stored == self.expected
    }
}

/// Provenance and version metadata embedded in an audited record.
///
/// Operation kind and timestamp are only ever written by the lifecycle hooks.
/// The identity is written once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditTrail {
    id: Option<RecordId>,
    version: u64,
    operation_kind: Option<OperationKind>,
    actor: Option<ActorContext>,
    pending_actor: Option<ActorContext>,
    timestamp: Option<Timestamp>,
    request_path: Option<String>,
    http_verb: Option<HttpVerb>,
    system_managed: bool,
    system_declared: bool,
}

impl AuditTrail {
    /// Creates an empty trail for a record that has not been persisted yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a trail for a record maintained by the system itself.
    ///
    /// Every hook without an actor falls back to the system actor.
    #[must_use]
    pub fn for_system_operation() -> Self {
        Self {
            system_managed: true,
            ..Self::default()
        }
    }

    /// Record identity, once assigned.
    #[must_use]
    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    /// Optimistic-concurrency version.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Kind of the most recent lifecycle hook.
    #[must_use]
    pub fn operation_kind(&self) -> Option<OperationKind> {
        self.operation_kind
    }

    /// Actor recorded by the most recent lifecycle hook.
    #[must_use]
    pub fn actor(&self) -> Option<&ActorContext> {
        self.actor.as_ref()
    }

    /// Time of the most recent lifecycle hook.
    #[must_use]
    pub fn timestamp(&self) -> Option<Timestamp> {
        self.timestamp
    }

    /// Path of the triggering request.
    #[must_use]
    pub fn request_path(&self) -> Option<&str> {
        self.request_path.as_deref()
    }

    /// Verb of the triggering request.
    #[must_use]
    pub fn http_verb(&self) -> Option<HttpVerb> {
        self.http_verb
    }

    /// Returns true if the next hook may fall back to the system actor.
    #[must_use]
    pub fn is_system_operation(&self) -> bool {
        self.system_managed || self.system_declared
    }

    /// Marks the current operation as system-initiated.
    ///
    /// Applies to the next successful hook only.
    pub fn declare_system_operation(&mut self) {
        self.system_declared = true;
    }

    /// Assigns the record identity on first insert.
    pub fn assign_identity(&mut self, id: RecordId) -> Result<(), AuditError> {
        if let Some(existing) = self.id {
            return Err(AuditError::IdentityAlreadyAssigned(existing));
        }
        self.id = Some(id);
        Ok(())
    }

    /// Supplies the actor for the next lifecycle hook.
    pub fn set_actor(&mut self, actor: ActorContext) {
        self.pending_actor = Some(actor);
    }

    /// Records the request that triggered the current operation.
    pub fn set_request(&mut self, path: impl Into<String>, verb: HttpVerb) {
        self.request_path = Some(path.into());
        self.http_verb = Some(verb);
    }

    /// Before-insert hook.
    pub fn on_create(&mut self, actor: Option<ActorContext>) -> Result<(), AuditError> {
        self.stamp(OperationKind::Create, actor)
    }

    /// Before-update hook.
    ///
    /// Bumps the version and returns the check the persistence collaborator
    /// must enforce. The trail itself never compares versions.
    pub fn on_update(
        &mut self,
        actor: Option<ActorContext>,
        expected_version: u64,
    ) -> Result<VersionCheck, AuditError> {
        self.stamp(OperationKind::Update, actor)?;
        self.version = self.version.saturating_add(1);
        Ok(VersionCheck {
            expected: expected_version,
            next: self.version,
        })
    }

    /// Before-delete hook.
    pub fn on_delete(&mut self, actor: Option<ActorContext>) -> Result<(), AuditError> {
        self.stamp(OperationKind::Delete, actor)
    }

    fn stamp(
        &mut self,
        operation: OperationKind,
        supplied: Option<ActorContext>,
    ) -> Result<(), AuditError> {
        let pending = self.pending_actor.take();
        let actor = match supplied.or(pending) {
            Some(actor) => actor,
            None if self.is_system_operation() => ActorContext::system(),
            None => return Err(AuditError::MissingActor { operation }),
        };
        self.system_declared = false;

        // Never step backwards if the wall clock does.
        let now = time::now();
        let timestamp = match self.timestamp {
            Some(previous) if previous > now => previous,
            _ => now,
        };

        self.operation_kind = Some(operation);
        self.timestamp = Some(timestamp);
        self.actor = Some(actor);
        Ok(())
    }

    /// Checks provenance fields against the configured limits.
    ///
    /// Reports the first field that is too long.
    pub fn validate(&self, limits: &FieldLimits) -> Result<(), AuditError> {
        for actor in [self.actor.as_ref(), self.pending_actor.as_ref()]
            .into_iter()
            .flatten()
        {
            check_len("principal_name", &actor.principal_name, limits.principal_name)?;
            if let Some(address) = &actor.source_address {
                check_len("source_address", address, limits.source_address)?;
            }
            if let Some(agent) = &actor.client_agent {
                check_len("client_agent", agent, limits.client_agent)?;
            }
        }
        if let Some(path) = &self.request_path {
            check_len("request_path", path, limits.request_path)?;
        }
        Ok(())
    }

    /// Immutable snapshot for transport.
    #[must_use]
    pub fn to_transport_view(&self) -> AuditView {
        AuditView::from_trail(self)
    }
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), AuditError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(AuditError::FieldTooLong { field, max, actual });
    }
    Ok(())
}
