use serde::Serialize;

use crate::telemetry::FieldKey;
use crate::views::latest::LatestSnapshot;
use crate::views::windrose::cardinal;

const THERMOMETER_MIN_C: f64 = -10.0;
const THERMOMETER_MAX_C: f64 = 50.0;

const BATTERY_EMPTY_V: f64 = 3.5;
const BATTERY_FULL_V: f64 = 4.2;

fn percent_of(value: f64, min: f64, max: f64) -> f64 {
    ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThermometerGauge {
    pub celsius: f64,
    /// Fill height over the -10..50 °C scale
    pub fill_percent: f64,
}

impl ThermometerGauge {
    #[must_use]
    pub fn from_latest(latest: &LatestSnapshot) -> Option<Self> {
        let celsius = latest.get(FieldKey::AirTemperature)?.value;
        Some(Self {
            celsius,
            fill_percent: percent_of(celsius, THERMOMETER_MIN_C, THERMOMETER_MAX_C),
        })
    }
}

/// Half doughnut: `[percent, remainder]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumidityGauge {
    pub percent: f64,
    pub remainder: f64,
}

impl HumidityGauge {
    #[must_use]
    pub fn from_latest(latest: &LatestSnapshot) -> Option<Self> {
        let percent = latest.get(FieldKey::RelativeHumidity)?.value;
        Some(Self {
            percent,
            remainder: 100.0 - percent,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindDirectionGauge {
    pub degrees: f64,
    pub cardinal: &'static str,
}

impl WindDirectionGauge {
    #[must_use]
    pub fn from_latest(latest: &LatestSnapshot) -> Option<Self> {
        let degrees = latest.get(FieldKey::WindDirection)?.value;
        Some(Self {
            degrees,
            cardinal: cardinal(degrees),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryLevel {
    Good,
    Fair,
    Low,
}

impl BatteryLevel {
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent > 50.0 {
            Self::Good
        } else if percent > 20.0 {
            Self::Fair
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatteryGauge {
    pub volts: f64,
    /// Charge over the 3.5..4.2 V range
    pub percent: f64,
    pub level: BatteryLevel,
}

impl BatteryGauge {
    #[must_use]
    pub fn from_latest(latest: &LatestSnapshot) -> Option<Self> {
        let volts = latest.get(FieldKey::Battery)?.value;
        let percent = percent_of(volts, BATTERY_EMPTY_V, BATTERY_FULL_V);
        Some(Self {
            volts,
            percent,
            level: BatteryLevel::from_percent(percent),
        })
    }
}
