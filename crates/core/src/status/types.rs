//! Entity status type and transition table.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::transition::LifecycleState;

/// Lifecycle status of a trackable record.
///
/// The valid transitions are:
/// - Draft → Pending, Deleted
/// - Pending → Active, Draft, Deleted
/// - Active → Suspended, Archived, Deleted
/// - Suspended → Active, Archived, Deleted
///
/// Archived and Deleted are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    /// Initial draft state.
    #[default]
    Draft,
    /// Awaiting action or review.
    Pending,
    /// Currently active and valid.
    Active,
    /// Temporarily inactive.
    Suspended,
    /// No longer active but preserved.
    Archived,
    /// Marked for deletion.
    Deleted,
}

impl EntityStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Archived => "ARCHIVED",
            Self::Deleted => "DELETED",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DRAFT" => Some(Self::Draft),
            "PENDING" => Some(Self::Pending),
            "ACTIVE" => Some(Self::Active),
            "SUSPENDED" => Some(Self::Suspended),
            "ARCHIVED" => Some(Self::Archived),
            "DELETED" => Some(Self::Deleted),
            _ => None,
        }
    }

    /// Returns true if the record is live and usable.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Human-readable description of the status.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Draft => "Initial draft state",
            Self::Pending => "Awaiting action or review",
            Self::Active => "Currently active and valid",
            Self::Suspended => "Temporarily inactive",
            Self::Archived => "No longer active but preserved",
            Self::Deleted => "Marked for deletion",
        }
    }
}

impl LifecycleState for EntityStatus {
    const ALL: &'static [Self] = &[
        Self::Draft,
        Self::Pending,
        Self::Active,
        Self::Suspended,
        Self::Archived,
        Self::Deleted,
    ];

    fn allowed_targets(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Pending, Self::Deleted],
            Self::Pending => &[Self::Active, Self::Draft, Self::Deleted],
            Self::Active => &[Self::Suspended, Self::Archived, Self::Deleted],
            Self::Suspended => &[Self::Active, Self::Archived, Self::Deleted],
            Self::Archived | Self::Deleted => &[],
        }
    }

    fn is_final(self) -> bool {
        matches!(self, Self::Archived | Self::Deleted)
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
