use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One physical measurement event as reported by the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReading {
    pub timestamp: String,
    pub sensor_measurement_type: String,
    pub value: f64,
}

impl RawReading {
    pub fn new(
        timestamp: impl Into<String>,
        sensor_measurement_type: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            sensor_measurement_type: sensor_measurement_type.into(),
            value,
        }
    }
}

/// Naive layouts accepted after RFC 3339; all are interpreted as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse an upstream timestamp.
///
/// Accepts RFC 3339 with any offset, or a naive date-time which is taken as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
