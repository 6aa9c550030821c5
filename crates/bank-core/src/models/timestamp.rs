//! Timestamps as the API sends them
//!
//! Columns are stored without a time zone, so most values arrive as naive
//! ISO 8601 (`2025-03-01T12:00:00.123456`). Those are read as UTC; values
//! that do carry an offset are converted to UTC.
//!
//! Use with `#[serde(with = "timestamp")]`, or `timestamp::option` for
//! nullable fields.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an API timestamp, with or without an offset
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

pub fn serialize<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp {:?}", raw)))
}

/// Nullable timestamps
pub mod option {
    use super::*;

    pub fn serialize<S>(at: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match at {
            Some(at) => super::serialize(at, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp {:?}", raw))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "super")]
        created_at: DateTime<Utc>,
        #[serde(default, with = "super::option")]
        updated_at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_parse_naive_as_utc() {
        let at = parse("2025-03-01T12:00:00.123456").unwrap();
        assert_eq!(at.date_naive(), Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap().date_naive());
        assert_eq!(at.hour(), 12);
        assert_eq!(at.nanosecond(), 123_456_000);

        assert_eq!(
            parse("2025-03-01T12:00:00"),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(
            parse("2025-03-01 12:00:00"),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_with_offset() {
        assert_eq!(
            parse("2025-03-01T15:00:00+03:00"),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(
            parse("2025-03-01T12:00:00Z"),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(parse("yesterday"), None);
    }

    #[test]
    fn test_fields() {
        let stamped: Stamped =
            serde_json::from_str(r#"{"created_at":"2025-03-01T12:00:00.5","updated_at":null}"#)
                .unwrap();
        assert_eq!(stamped.created_at.hour(), 12);
        assert!(stamped.updated_at.is_none());

        let stamped: Stamped =
            serde_json::from_str(r#"{"created_at":"2025-03-01T12:00:00","updated_at":""}"#).unwrap();
        assert!(stamped.updated_at.is_none());

        let err = serde_json::from_str::<Stamped>(r#"{"created_at":"soon"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid timestamp"));

        let value = serde_json::to_value(&stamped).unwrap();
        assert_eq!(value["created_at"], "2025-03-01T12:00:00Z");
    }
}
