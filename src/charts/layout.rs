use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::selection::{DeviceLayout, UnknownValue};
use crate::telemetry::FieldKey;

pub const RED: &str = "#C8102E";
pub const GOLD: &str = "#FDB813";

/// Named place on the dashboard that one chart, gauge or panel binds to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum MountPoint {
    LatestConditions,
    Thermometer,
    RhGauge,
    WindDirectionGauge,
    BatteryStatus,
    Windrose,
    TemperatureChart,
    PressureChart,
    WindSpeedChart,
    WindDirectionChart,
    GustSpeedChart,
    DewPointChart,
    RainChart,
    AccumulatedRainChart,
    BatteryChart,
}

/// A time-series mount point: which field it plots and how it is titled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesBinding {
    pub field: FieldKey,
    pub title_key: &'static str,
    pub color: &'static str,
}

impl MountPoint {
    pub const COUNT: usize = 15;

    pub const ALL: [Self; Self::COUNT] = [
        Self::LatestConditions,
        Self::Thermometer,
        Self::RhGauge,
        Self::WindDirectionGauge,
        Self::BatteryStatus,
        Self::Windrose,
        Self::TemperatureChart,
        Self::PressureChart,
        Self::WindSpeedChart,
        Self::WindDirectionChart,
        Self::GustSpeedChart,
        Self::DewPointChart,
        Self::RainChart,
        Self::AccumulatedRainChart,
        Self::BatteryChart,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LatestConditions => "latest-conditions",
            Self::Thermometer => "thermometer",
            Self::RhGauge => "rh-gauge",
            Self::WindDirectionGauge => "wind-direction-gauge",
            Self::BatteryStatus => "battery-status",
            Self::Windrose => "windrose",
            Self::TemperatureChart => "temperature-chart",
            Self::PressureChart => "pressure-chart",
            Self::WindSpeedChart => "wind-speed-chart",
            Self::WindDirectionChart => "wind-direction-chart",
            Self::GustSpeedChart => "gust-speed-chart",
            Self::DewPointChart => "dew-point-chart",
            Self::RainChart => "rain-chart",
            Self::AccumulatedRainChart => "accumulated-rain-chart",
            Self::BatteryChart => "battery-chart",
        }
    }

    #[must_use]
    pub const fn series_binding(self) -> Option<SeriesBinding> {
        let (field, title_key, color) = match self {
            Self::TemperatureChart => (FieldKey::AirTemperature, "airTemperature", RED),
            Self::PressureChart => (FieldKey::BarometricPressure, "barometricPressure", RED),
            Self::WindSpeedChart => (FieldKey::WindSpeed, "windSpeed", GOLD),
            Self::WindDirectionChart => (FieldKey::WindDirection, "windDirection", RED),
            Self::GustSpeedChart => (FieldKey::GustSpeed, "gustSpeed", GOLD),
            Self::DewPointChart => (FieldKey::DewPoint, "dewPoint", RED),
            Self::RainChart => (FieldKey::Rain, "rainfall", RED),
            Self::AccumulatedRainChart => (FieldKey::AccumulatedRain, "accumulatedRain", RED),
            Self::BatteryChart => (FieldKey::Battery, "batteryHistory", GOLD),
            _ => return None,
        };
        Some(SeriesBinding {
            field,
            title_key,
            color,
        })
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MountPoint {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| UnknownValue {
                kind: "mount point",
                value: s.to_string(),
            })
    }
}

const BAROMETRIC_TARGETS: [MountPoint; 4] = [
    MountPoint::LatestConditions,
    MountPoint::BatteryStatus,
    MountPoint::PressureChart,
    MountPoint::BatteryChart,
];

/// Fields the latest-conditions panel lists for the barometric logger.
pub const BAROMETRIC_PANEL_FIELDS: [FieldKey; 2] =
    [FieldKey::BarometricPressure, FieldKey::Battery];

/// Mount points present on a device's dashboard, in render order.
#[must_use]
pub fn targets(layout: DeviceLayout) -> &'static [MountPoint] {
    match layout {
        DeviceLayout::Barometric => &BAROMETRIC_TARGETS,
        DeviceLayout::Full => &MountPoint::ALL,
    }
}

#[must_use]
pub fn contains(layout: DeviceLayout, target: MountPoint) -> bool {
    targets(layout).contains(&target)
}
