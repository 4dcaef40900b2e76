//! Owned status workflow component.
//!
//! A host record embeds a `StatusWorkflow` by value. The only way to change
//! its state is `transition_to`, which validates against the transition table
//! before touching any field.

use serde::{Deserialize, Serialize};

use crate::status::error::IllegalStatusTransition;
use crate::status::types::EntityStatus;
use crate::time::{self, Timestamp};
use crate::transition::validate_transition;

/// A successfully applied status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    /// Status before the transition.
    pub from: EntityStatus,
    /// Status after the transition.
    pub to: EntityStatus,
    /// Who requested the change.
    pub changed_by: String,
    /// When the change was applied.
    pub changed_at: Timestamp,
}

/// Status state machine embedded in a trackable record.
///
/// Starts in `Draft` with no change metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusWorkflow {
    status: EntityStatus,
    changed_at: Option<Timestamp>,
    changed_by: Option<String>,
}

impl StatusWorkflow {
    /// Creates a workflow in the initial `Draft` status.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> EntityStatus {
        self.status
    }

    /// When the status last changed.
    #[must_use]
    pub fn changed_at(&self) -> Option<Timestamp> {
        self.changed_at
    }

    /// Who last changed the status.
    #[must_use]
    pub fn changed_by(&self) -> Option<&str> {
        self.changed_by.as_deref()
    }

    /// Returns true if the current status is `Active`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Move to `target`.
    ///
    /// # Returns
    /// * `Ok(StatusChange)` describing the applied transition
    /// * `Err(IllegalStatusTransition)` if `target` is not reachable; the
    ///   workflow is unchanged
    pub fn transition_to(
        &mut self,
        target: EntityStatus,
        changed_by: impl Into<String>,
    ) -> Result<StatusChange, IllegalStatusTransition> {
        self.transition_to_with(target, changed_by, |_| {})
    }

    /// Move to `target`, then run `on_change` with the applied transition.
    ///
    /// The hook only runs on success.
    pub fn transition_to_with<F>(
        &mut self,
        target: EntityStatus,
        changed_by: impl Into<String>,
        on_change: F,
    ) -> Result<StatusChange, IllegalStatusTransition>
    where
        F: FnOnce(&StatusChange),
    {
        validate_transition(self.status, target, |from, to| IllegalStatusTransition {
            from,
            to,
        })?;

        let change = StatusChange {
            from: self.status,
            to: target,
            changed_by: changed_by.into(),
            changed_at: time::now(),
        };

        self.status = change.to;
        self.changed_at = Some(change.changed_at);
        self.changed_by = Some(change.changed_by.clone());

        on_change(&change);
        Ok(change)
    }

    /// Immutable snapshot for transport.
    #[must_use]
    pub fn to_view(&self) -> StatusView {
        StatusView {
            status: self.status,
            active: self.status.is_active(),
            changed_at: self.changed_at,
            changed_by: self.changed_by.clone(),
        }
    }
}

/// Transport snapshot of a `StatusWorkflow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    status: EntityStatus,
    active: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::time::iso_millis"
    )]
    changed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    changed_by: Option<String>,
}

impl StatusView {
    /// Status at snapshot time.
    #[must_use]
    pub fn status(&self) -> EntityStatus {
        self.status
    }

    /// Whether the status was `Active`.
    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }

    /// Last change time, if any.
    #[must_use]
    pub fn changed_at(&self) -> Option<Timestamp> {
        self.changed_at
    }

    /// Last changer, if any.
    #[must_use]
    pub fn changed_by(&self) -> Option<&str> {
        self.changed_by.as_deref()
    }
}
