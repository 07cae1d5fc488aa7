//! Datetime helpers.
//!
//! Serde support for backend timestamps (ISO 8601 strings as written by the
//! backend, or Unix seconds/milliseconds) and the relative age labels shown
//! next to feed entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Number(i64),
}

impl RawTimestamp {
    fn into_datetime<E: serde::de::Error>(self) -> Result<DateTime<Utc>, E> {
        match self {
            Self::Text(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| E::custom(format!("Invalid timestamp {s:?}: {e}"))),
            Self::Number(ts) => {
                from_unix(ts).ok_or_else(|| E::custom(format!("Invalid Unix timestamp {ts}")))
            }
        }
    }
}

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from RFC3339 or a Unix timestamp.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    RawTimestamp::deserialize(deserializer)?.into_datetime()
}

/// `Option<DateTime<Utc>>` variant of the helpers above.
pub mod option {
    use super::{DateTime, Deserialize, Deserializer, RawTimestamp, Serializer, Utc};

    pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<RawTimestamp>::deserialize(deserializer)?
            .map(RawTimestamp::into_datetime)
            .transpose()
    }
}

/// Values above 10^11 are taken as milliseconds.
fn from_unix(ts: i64) -> Option<DateTime<Utc>> {
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

/// Human-readable age of `then` relative to `now`, e.g. "5 minutes ago".
///
/// Timestamps in the future read as "just now".
#[must_use]
pub fn relative_label(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let seconds = elapsed.num_seconds();
    if seconds < 45 {
        return "just now".to_string();
    }

    let (value, unit) = if seconds < 90 {
        (1, "minute")
    } else if elapsed.num_minutes() < 45 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_minutes() < 90 {
        (1, "hour")
    } else if elapsed.num_hours() < 22 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_hours() < 36 {
        (1, "day")
    } else if elapsed.num_days() < 26 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_days() < 320 {
        ((elapsed.num_days() / 30).max(1), "month")
    } else {
        ((elapsed.num_days() / 365).max(1), "year")
    };

    if value == 1 {
        format!("a{} {unit} ago", if unit == "hour" { "n" } else { "" })
    } else {
        format!("{value} {unit}s ago")
    }
}
