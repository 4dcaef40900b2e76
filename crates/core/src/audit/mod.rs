//! Auditable-entity lifecycle.
//!
//! An `AuditTrail` records who touched a record, from where, when, and under
//! which version. The persistence collaborator calls its hooks before insert,
//! update and delete; the trail never performs I/O itself.
//!
//! # Modules
//!
//! - `types` - Actor context, operation kinds and HTTP verbs
//! - `error` - Audit error types
//! - `trail` - The `AuditTrail` component and its lifecycle hooks
//! - `view` - Immutable transport snapshot of a trail

pub mod error;
pub mod trail;
pub mod types;
pub mod view;

#[cfg(test)]
mod trail_props;

pub use error::AuditError;
pub use trail::{AuditTrail, VersionCheck};
pub use types::{ActorContext, HttpVerb, OperationKind, SYSTEM_PRINCIPAL};
pub use view::AuditView;
