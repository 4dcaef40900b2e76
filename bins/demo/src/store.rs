//! In-memory persistence collaborator.
//!
//! Calls the audit hooks at insert/update/delete, assigns identities on first
//! insert, and enforces the optimistic version check before every write.

use std::collections::HashMap;

use lifecycle_core::{Audited, HostView, LifecycleError};
use lifecycle_shared::{AppError, AppResult, FieldLimits, RecordId};
use tracing::{info, warn};

/// Map-backed store for any audited record.
#[derive(Debug)]
pub struct InMemoryStore<T> {
    limits: FieldLimits,
    records: HashMap<RecordId, T>,
}

impl<T> InMemoryStore<T>
where
    T: Audited + Clone,
{
    /// Creates an empty store validating provenance against `limits`.
    pub fn new(limits: FieldLimits) -> Self {
        Self {
            limits,
            records: HashMap::new(),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Inserts a new record, returning it as stored.
    pub fn insert(&mut self, mut record: T) -> AppResult<T> {
        let id = RecordId::new();
        let trail = record.audit_trail_mut();
        trail.assign_identity(id).map_err(LifecycleError::from)?;
        trail.on_create(None).map_err(LifecycleError::from)?;
        trail.validate(&self.limits).map_err(LifecycleError::from)?;

        self.records.insert(id, record.clone());
        info!(%id, "record inserted");
        Ok(record)
    }

    /// Loads a copy of a stored record.
    pub fn load(&self, id: RecordId) -> AppResult<T> {
        self.records
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("record {id}")))
    }

    /// Writes back a modified record if nobody else wrote it first.
    pub fn update(&mut self, mut record: T) -> AppResult<T> {
        let id = identity(&record)?;
        let expected = record.audit_trail().version();
        let check = record
            .audit_trail_mut()
            .on_update(None, expected)
            .map_err(LifecycleError::from)?;
        record
            .audit_trail()
            .validate(&self.limits)
            .map_err(LifecycleError::from)?;

        let stored = self.stored_version(id)?;
        if !check.matches(stored) {
            warn!(%id, expected, stored, "stale write rejected");
            return Err(stale(id, expected, stored));
        }

        self.records.insert(id, record.clone());
        info!(%id, version = check.next, "record updated");
        Ok(record)
    }

    /// Deletes a record, returning its final snapshot.
    pub fn delete(&mut self, mut record: T) -> AppResult<HostView> {
        let id = identity(&record)?;
        let expected = record.audit_trail().version();
        let stored = self.stored_version(id)?;
        if expected != stored {
            warn!(%id, expected, stored, "stale delete rejected");
            return Err(stale(id, expected, stored));
        }

        record
            .audit_trail_mut()
            .on_delete(None)
            .map_err(LifecycleError::from)?;
        self.records.remove(&id);
        info!(%id, "record deleted");
        Ok(record.to_transport_view())
    }

    fn stored_version(&self, id: RecordId) -> AppResult<u64> {
        self.records
            .get(&id)
            .map(|stored| stored.audit_trail().version())
            .ok_or_else(|| AppError::NotFound(format!("record {id}")))
    }
}

fn identity<T: Audited>(record: &T) -> AppResult<RecordId> {
    record
        .audit_trail()
        .id()
        .ok_or_else(|| AppError::Validation("record has not been inserted".to_string()))
}

fn stale(id: RecordId, expected: u64, stored: u64) -> AppError {
    AppError::Conflict(format!(
        "record {id} was modified concurrently (read version {expected}, stored version {stored})"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Document;
    use lifecycle_core::{ActorContext, Approvable, ApprovalStatus, OperationKind};

    fn store() -> InMemoryStore<Document> {
        InMemoryStore::new(FieldLimits::default())
    }

    fn new_document(actor: &str) -> Document {
        let mut document = Document::new("Quarterly report");
        document
            .audit_trail_mut()
            .set_actor(ActorContext::named(actor));
        document
    }

    #[test]
    fn test_insert_assigns_identity() {
        let mut store = store();
        let document = store.insert(new_document("alice")).unwrap();

        let trail = document.audit_trail();
        assert!(trail.id().is_some());
        assert_eq!(trail.version(), 0);
        assert_eq!(trail.operation_kind(), Some(OperationKind::Create));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_without_actor_is_validation_error() {
        let mut store = store();
        let err = store.insert(Document::new("Orphan")).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_insert_rejects_long_principal() {
        let mut store = store();
        let err = store.insert(new_document(&"x".repeat(60))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_update_after_transition() {
        let mut store = store();
        let id = store.insert(new_document("alice")).unwrap().id().unwrap();

        let mut document = store.load(id).unwrap();
        document
            .submit_for_approval(ActorContext::named("bob"))
            .unwrap();
        let document = store.update(document).unwrap();

        assert_eq!(document.audit_trail().version(), 1);
        assert_eq!(
            document.audit_trail().actor().unwrap().principal_name,
            "bob"
        );
        assert_eq!(
            store.load(id).unwrap().approval_status(),
            ApprovalStatus::InReview
        );
    }

    #[test]
    fn test_stale_update_conflicts() {
        let mut store = store();
        let id = store.insert(new_document("alice")).unwrap().id().unwrap();

        let mut first = store.load(id).unwrap();
        let mut second = store.load(id).unwrap();

        first.submit_for_approval(ActorContext::named("bob")).unwrap();
        store.update(first).unwrap();

        second
            .reject(ActorContext::named("carol"), "duplicate")
            .unwrap();
        let err = store.update(second).unwrap_err();

        assert_eq!(err.status_code(), 409);
        assert_eq!(
            store.load(id).unwrap().approval_status(),
            ApprovalStatus::InReview
        );
    }

    #[test]
    fn test_delete_removes_record() {
        let mut store = store();
        let id = store.insert(new_document("alice")).unwrap().id().unwrap();

        let mut document = store.load(id).unwrap();
        document
            .audit_trail_mut()
            .set_actor(ActorContext::named("alice"));
        let view = store.delete(document).unwrap();

        assert_eq!(view.audit().operation_kind(), Some(OperationKind::Delete));
        assert!(matches!(store.load(id), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_update_unknown_record() {
        let mut store = store();
        let err = store.update(new_document("alice")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
