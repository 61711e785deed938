use serde::Deserialize;

use crate::error::FetchError;
use crate::telemetry::RawReading;

/// One element of the `data` array returned by `/v1/data`.
#[derive(Debug, Clone, Deserialize)]
pub struct LicorReading {
    pub timestamp: String,
    pub sensor_measurement_type: String,
    /// Null when the logger recorded no value for the interval
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub sensor_sn: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
}

impl LicorReading {
    #[must_use]
    pub fn into_raw(self) -> Option<RawReading> {
        let value = self.value?;
        Some(RawReading {
            timestamp: self.timestamp,
            sensor_measurement_type: self.sensor_measurement_type,
            value,
        })
    }
}

/// Body of a non-2xx response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Server-supplied message, or `Unknown error` when the body has none.
    #[must_use]
    pub fn message_from(body: &str) -> String {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

/// Extract readings from a successful `/v1/data` body.
///
/// Elements that are not reading-shaped or carry a null value are skipped.
///
/// # Errors
///
/// Returns `FetchError::Decode` for invalid JSON and `FetchError::NotAnArray`
/// when `data` is missing or not an array.
pub fn parse_data_response(body: &str) -> Result<Vec<RawReading>, FetchError> {
    let mut root: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let Some(serde_json::Value::Array(items)) = root.get_mut("data").map(serde_json::Value::take)
    else {
        return Err(FetchError::NotAnArray);
    };

    let total = items.len();
    let readings: Vec<RawReading> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<LicorReading>(item) {
            Ok(reading) => reading.into_raw(),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed reading");
                None
            }
        })
        .collect();

    if readings.len() < total {
        tracing::debug!(
            total,
            kept = readings.len(),
            "Dropped readings without a usable value"
        );
    }
    Ok(readings)
}
