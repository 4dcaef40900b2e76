//! Audit domain types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Principal name of the well-known system actor.
pub const SYSTEM_PRINCIPAL: &str = "SYSTEM";

/// Kind of the most recent lifecycle hook applied to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationKind {
    /// Record inserted.
    Create,
    /// Record updated.
    Update,
    /// Record deleted.
    Delete,
}

impl OperationKind {
    /// Returns the string representation of the operation kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// HTTP verb of the request that triggered an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// PATCH
    Patch,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
    /// TRACE
    Trace,
}

impl HttpVerb {
    /// Returns the string representation of the verb.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
        }
    }

    /// Stable numeric code used by storage mappings.
    #[must_use]
    pub fn code(&self) -> u8 {
        match self {
            Self::Get => 1,
            Self::Post => 2,
            Self::Put => 3,
            Self::Delete => 4,
            Self::Patch => 5,
            Self::Head => 6,
            Self::Options => 7,
            Self::Trace => 8,
        }
    }

    /// Looks up a verb by its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Get),
            2 => Some(Self::Post),
            3 => Some(Self::Put),
            4 => Some(Self::Delete),
            5 => Some(Self::Patch),
            6 => Some(Self::Head),
            7 => Some(Self::Options),
            8 => Some(Self::Trace),
            _ => None,
        }
    }

    /// Parses a verb from a string, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            "PATCH" => Some(Self::Patch),
            "HEAD" => Some(Self::Head),
            "OPTIONS" => Some(Self::Options),
            "TRACE" => Some(Self::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provenance of a mutating operation.
///
/// Supplied by the request-handling layer before any lifecycle hook fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    /// Username or identifier of the principal.
    pub principal_name: String,
    /// Address the request originated from.
    pub source_address: Option<String>,
    /// User agent of the client application.
    pub client_agent: Option<String>,
    /// True for operations initiated by the system itself.
    pub is_system_actor: bool,
}

impl ActorContext {
    /// The well-known system actor.
    #[must_use]
    pub fn system() -> Self {
        Self {
            principal_name: SYSTEM_PRINCIPAL.to_string(),
            source_address: None,
            client_agent: None,
            is_system_actor: true,
        }
    }

    /// A user actor with full request provenance.
    #[must_use]
    pub fn user(
        principal_name: impl Into<String>,
        source_address: impl Into<String>,
        client_agent: impl Into<String>,
    ) -> Self {
        Self {
            principal_name: principal_name.into(),
            source_address: Some(source_address.into()),
            client_agent: Some(client_agent.into()),
            is_system_actor: false,
        }
    }

    /// A user actor known only by name.
    #[must_use]
    pub fn named(principal_name: impl Into<String>) -> Self {
        Self {
            principal_name: principal_name.into(),
            source_address: None,
            client_agent: None,
            is_system_actor: false,
        }
    }
}
