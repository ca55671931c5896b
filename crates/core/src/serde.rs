//! Serde helper functions for event dates.
//!
//! Event dates arrive either as a plain calendar date (`YYYY-MM-DD`, taken as
//! local midnight) or as an RFC 3339 timestamp, which is converted to the
//! host's local time zone.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer};

/// Parses an event date in either accepted format.
pub fn parse_event_date(s: &str) -> Result<DateTime<Local>, String> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let midnight = date.and_time(chrono::NaiveTime::MIN);
        return Local
            .from_local_datetime(&midnight)
            .earliest()
            .ok_or_else(|| format!("{s} does not exist in the local time zone"));
    }

    DateTime::parse_from_rfc3339(s)
        .map(|date| date.with_timezone(&Local))
        .map_err(|e| format!("invalid date {s:?}: expected YYYY-MM-DD or RFC 3339 ({e})"))
}

/// Deserialize a required event date.
pub fn deserialize_event_date<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_event_date(&s).map_err(serde::de::Error::custom)
}

/// Deserialize an optional event date, treating empty strings as None.
pub fn deserialize_optional_event_date<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Local>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_event_date(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_event_date")]
        date_field: Option<DateTime<Local>>,
    }

    #[test]
    fn test_parse_plain_date_is_local_midnight() {
        let parsed = parse_event_date("2025-01-15").unwrap();
        assert_eq!(parsed, Local.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_keeps_instant() {
        let parsed = parse_event_date("2025-01-15T10:30:00+02:00").unwrap();
        let expected = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 15, 10, 30, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!(parse_event_date("15/01/2025").is_err());
        assert!(parse_event_date("2025-13-01").is_err());
    }

    #[test]
    fn test_deserialize_optional_event_date_empty() {
        let result: TestStruct = serde_json::from_str(r#"{"date_field": ""}"#).unwrap();
        assert_eq!(result.date_field, None);
    }

    #[test]
    fn test_deserialize_optional_event_date_missing() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.date_field, None);
    }

    #[test]
    fn test_deserialize_optional_event_date_invalid() {
        let result: Result<TestStruct, _> = serde_json::from_str(r#"{"date_field": "soon"}"#);
        assert!(result.is_err());
    }
}
