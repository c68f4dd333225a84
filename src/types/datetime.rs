//! Serde helpers for Shortcut timestamps
//!
//! Date-times arrive as RFC 3339 strings (`2023-01-01T00:00:00Z`), iteration
//! boundaries as calendar dates (`2023-01-01`). Parse failures carry the
//! [`MALFORMED_TIMESTAMP`] prefix so the decoder can report them as
//! [`crate::ShortcutError::MalformedTimestamp`].

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::MALFORMED_TIMESTAMP;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("{MALFORMED_TIMESTAMP} `{raw}`: {e}"))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| format!("{MALFORMED_TIMESTAMP} `{raw}`: {e}"))
}

fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// `Option<DateTime<Utc>>` fields. Use with `#[serde(default)]`.
pub mod optional {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&format_datetime(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_datetime(&raw).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

/// `Option<NaiveDate>` fields. Use with `#[serde(default)]`.
pub mod optional_date {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_date(&raw).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

/// Required `NaiveDate` fields on inputs.
pub mod date {
    use super::*;

    pub fn serialize<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_datetime_utc_and_offset() {
        let utc = parse_datetime("2023-01-01T00:00:00Z").unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());

        let offset = parse_datetime("2023-01-01T02:00:00+02:00").unwrap();
        assert_eq!(offset, utc);
    }

    #[test]
    fn test_parse_datetime_malformed() {
        let err = parse_datetime("yesterday").unwrap_err();
        assert!(err.starts_with(MALFORMED_TIMESTAMP));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-02-29").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(parse_date("2023-02-30").is_err());
        assert!(parse_date("2023-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2023, 5, 6, 7, 8, 9).unwrap();
        assert_eq!(format_datetime(&dt), "2023-05-06T07:08:09Z");
    }
}
