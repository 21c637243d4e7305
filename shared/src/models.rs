//! Shared data models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A race on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Display name, e.g. "Canadian Grand Prix"
    pub name: String,
    /// Race day (UTC), serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// OpenF1 meeting identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_key: Option<i64>,
}

impl Event {
    /// An event with only a name and date, as listed in the fallback calendar.
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            location: None,
            country: None,
            meeting_key: None,
        }
    }
}

/// Where an event list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOrigin {
    /// Fetched from the OpenF1 API
    Live,
    /// Hardcoded fallback calendar
    Fallback,
}

/// OpenF1 meeting record.
#[derive(Debug, Deserialize)]
pub struct Meeting {
    pub meeting_key: i64,
    pub meeting_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
}

/// OpenF1 session record. Only the start time is used.
#[derive(Debug, Deserialize)]
pub struct Session {
    pub date_start: DateTime<Utc>,
}

/// Lambda response, shaped like an API Gateway proxy result.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl CheckResponse {
    /// The fixed response returned whether or not a race was found.
    pub fn complete() -> Self {
        Self {
            status_code: 200,
            body: "\"Check complete.\"".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_plain_date() {
        let event = Event::new(
            "Canadian Grand Prix",
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Canadian Grand Prix", "date": "2025-06-15"})
        );
    }

    #[test]
    fn test_session_start_converted_to_utc() {
        let session: Session =
            serde_json::from_str(r#"{"date_start":"2025-03-16T04:00:00+00:00","session_name":"Race"}"#)
                .unwrap();
        assert_eq!(
            session.date_start.date_naive(),
            NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()
        );

        // Late local start that is already the next day in UTC.
        let session: Session =
            serde_json::from_str(r#"{"date_start":"2025-11-22T22:00:00-08:00"}"#).unwrap();
        assert_eq!(
            session.date_start.date_naive(),
            NaiveDate::from_ymd_opt(2025, 11, 23).unwrap()
        );
    }

    #[test]
    fn test_complete_response_body() {
        let response = CheckResponse::complete();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"statusCode": 200, "body": "\"Check complete.\""})
        );
    }
}
