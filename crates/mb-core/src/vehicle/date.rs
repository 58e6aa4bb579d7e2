//! Date values collected by the wizard and their canonical serialization.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Backend timestamp shape: seconds and nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendTimestamp {
    pub seconds: i64,
    pub nanoseconds: u32,
}

impl BackendTimestamp {
    pub fn to_date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanoseconds)
    }
}

/// A date as it may arrive from a date input or a previously stored record.
///
/// Deserialization tries the timestamp object first, then an RFC 3339 string,
/// and keeps any other string as raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Timestamp(BackendTimestamp),
    DateTime(DateTime<Utc>),
    Text(String),
}

impl From<DateTime<Utc>> for DateValue {
    fn from(value: DateTime<Utc>) -> Self {
        DateValue::DateTime(value)
    }
}

/// Serialize a date value to RFC 3339 UTC with millisecond precision.
///
/// Returns `None` when the value is absent, when text is not a recognizable date,
/// or when a timestamp is out of range.
pub fn serialize_date(value: Option<&DateValue>) -> Option<String> {
    let date = match value? {
        DateValue::DateTime(dt) => Some(*dt),
        DateValue::Text(text) => parse_date_text(text),
        DateValue::Timestamp(ts) => ts.to_date(),
    }?;
    Some(date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Parse RFC 3339 or plain `YYYY-MM-DD` (taken as midnight UTC).
pub fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_datetime_with_millis() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        assert_eq!(
            serialize_date(Some(&DateValue::DateTime(dt))).as_deref(),
            Some("2024-03-01T08:30:00.000Z")
        );
    }

    #[test]
    fn normalizes_plain_date_text() {
        let value = DateValue::Text("2025-06-30".into());
        assert_eq!(
            serialize_date(Some(&value)).as_deref(),
            Some("2025-06-30T00:00:00.000Z")
        );
    }

    #[test]
    fn normalizes_offset_text_to_utc() {
        let value = DateValue::Text("2025-06-30T02:00:00+02:00".into());
        assert_eq!(
            serialize_date(Some(&value)).as_deref(),
            Some("2025-06-30T00:00:00.000Z")
        );
    }

    #[test]
    fn converts_backend_timestamp_through_to_date() {
        let value = DateValue::Timestamp(BackendTimestamp {
            seconds: 1_700_000_000,
            nanoseconds: 500_000_000,
        });
        assert_eq!(
            serialize_date(Some(&value)).as_deref(),
            Some("2023-11-14T22:13:20.500Z")
        );
    }

    #[test]
    fn yields_none_when_nothing_applies() {
        assert_eq!(serialize_date(None), None);
        assert_eq!(serialize_date(Some(&DateValue::Text("".into()))), None);
        assert_eq!(
            serialize_date(Some(&DateValue::Text("next tuesday".into()))),
            None
        );
        let out_of_range = DateValue::Timestamp(BackendTimestamp {
            seconds: i64::MAX,
            nanoseconds: 0,
        });
        assert_eq!(serialize_date(Some(&out_of_range)), None);
    }

    #[test]
    fn deserializes_each_shape() {
        let ts: DateValue =
            serde_json::from_str(r#"{"seconds": 10, "nanoseconds": 0}"#).unwrap();
        assert!(matches!(ts, DateValue::Timestamp(_)));

        let dt: DateValue = serde_json::from_str(r#""2024-01-01T00:00:00Z""#).unwrap();
        assert!(matches!(dt, DateValue::DateTime(_)));

        let text: DateValue = serde_json::from_str(r#""2024-01-01""#).unwrap();
        assert_eq!(text, DateValue::Text("2024-01-01".into()));
    }
}
