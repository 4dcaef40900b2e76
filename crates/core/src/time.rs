//! Timestamps with explicit offsets.

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

/// Point in time carrying its UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

/// Current local time with its offset.
#[must_use]
pub fn now() -> Timestamp {
    Local::now().fixed_offset()
}

/// Formats a timestamp as ISO-8601 with milliseconds and offset (`Z` for UTC).
#[must_use]
pub fn format(timestamp: &Timestamp) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for optional timestamps in transport views.
pub mod iso_millis {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Timestamp;

    /// Serializes `Some` as an ISO-8601 string with milliseconds.
    pub fn serialize<S>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => serializer.serialize_str(&super::format(timestamp)),
            None => serializer.serialize_none(),
        }
    }

    /// Parses an optional RFC 3339 string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| Timestamp::parse_from_rfc3339(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}
