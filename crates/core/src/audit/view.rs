//! Immutable transport snapshot of an audit trail.

use lifecycle_shared::RecordId;
use serde::{Deserialize, Serialize};

use crate::audit::trail::AuditTrail;
use crate::audit::types::{HttpVerb, OperationKind};
use crate::time::Timestamp;

/// Snapshot of an `AuditTrail` with the actor fields flattened.
///
/// Absent fields are omitted when serialized. The `with_*` methods return
/// modified copies so a post-write representation can be produced without
/// re-reading the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<RecordId>,
    version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    request_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    principal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    client_agent: Option<String>,
    system_actor: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    operation_kind: Option<OperationKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    http_verb: Option<HttpVerb>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::time::iso_millis"
    )]
    timestamp: Option<Timestamp>,
}

impl AuditView {
    pub(crate) fn from_trail(trail: &AuditTrail) -> Self {
        let actor = trail.actor();
        Self {
            id: trail.id(),
            version: trail.version(),
            request_path: trail.request_path().map(str::to_owned),
            principal_name: actor.map(|a| a.principal_name.clone()),
            source_address: actor.and_then(|a| a.source_address.clone()),
            client_agent: actor.and_then(|a| a.client_agent.clone()),
            system_actor: actor.is_some_and(|a| a.is_system_actor),
            operation_kind: trail.operation_kind(),
            http_verb: trail.http_verb(),
            timestamp: trail.timestamp(),
        }
    }

    /// Copy of this view with a different version.
    #[must_use]
    pub fn with_version(&self, version: u64) -> Self {
        Self {
            version,
            ..self.clone()
        }
    }

    /// Copy of this view with a different operation kind.
    #[must_use]
    pub fn with_operation_kind(&self, operation_kind: OperationKind) -> Self {
        Self {
            operation_kind: Some(operation_kind),
            ..self.clone()
        }
    }

    /// Record identity.
    #[must_use]
    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    /// Record version.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Path of the triggering request.
    #[must_use]
    pub fn request_path(&self) -> Option<&str> {
        self.request_path.as_deref()
    }

    /// Principal of the last operation.
    #[must_use]
    pub fn principal_name(&self) -> Option<&str> {
        self.principal_name.as_deref()
    }

    /// Source address of the last operation.
    #[must_use]
    pub fn source_address(&self) -> Option<&str> {
        self.source_address.as_deref()
    }

    /// Client agent of the last operation.
    #[must_use]
    pub fn client_agent(&self) -> Option<&str> {
        self.client_agent.as_deref()
    }

    /// Whether the last operation was performed by the system actor.
    #[must_use]
    pub fn system_actor(&self) -> bool {
        self.system_actor
    }

    /// Kind of the last operation.
    #[must_use]
    pub fn operation_kind(&self) -> Option<OperationKind> {
        self.operation_kind
    }

    /// Verb of the triggering request.
    #[must_use]
    pub fn http_verb(&self) -> Option<HttpVerb> {
        self.http_verb
    }

    /// Time of the last operation.
    #[must_use]
    pub fn timestamp(&self) -> Option<Timestamp> {
        self.timestamp
    }
}
