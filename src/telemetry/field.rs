use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;
use utoipa::ToSchema;

/// Canonical sensor field reported by a logger.
///
/// Declaration order is the display order of the latest-conditions panel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    BarometricPressure,
    WindDirection,
    WindSpeed,
    GustSpeed,
    AirTemperature,
    RelativeHumidity,
    DewPoint,
    Battery,
    Rain,
    AccumulatedRain,
}

impl FieldKey {
    pub const ALL: [Self; 10] = [
        Self::BarometricPressure,
        Self::WindDirection,
        Self::WindSpeed,
        Self::GustSpeed,
        Self::AirTemperature,
        Self::RelativeHumidity,
        Self::DewPoint,
        Self::Battery,
        Self::Rain,
        Self::AccumulatedRain,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BarometricPressure => "barometric_pressure",
            Self::WindDirection => "wind_direction",
            Self::WindSpeed => "wind_speed",
            Self::GustSpeed => "gust_speed",
            Self::AirTemperature => "air_temperature",
            Self::RelativeHumidity => "relative_humidity",
            Self::DewPoint => "dew_point",
            Self::Battery => "battery",
            Self::Rain => "rain",
            Self::AccumulatedRain => "accumulated_rain",
        }
    }

    /// Display unit, including the leading space where one is shown.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::AirTemperature | Self::DewPoint => "°C",
            Self::RelativeHumidity => "%",
            Self::BarometricPressure => " hPa",
            Self::WindSpeed | Self::GustSpeed => " m/s",
            Self::WindDirection => "°",
            Self::Rain | Self::AccumulatedRain => " mm",
            Self::Battery => " V",
        }
    }

    /// Locale key used for the field's label in panels and chart titles.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::BarometricPressure => "barometricPressure",
            Self::WindDirection => "windDirection",
            Self::WindSpeed => "windSpeed",
            Self::GustSpeed => "gustSpeed",
            Self::AirTemperature => "airTemperature",
            Self::RelativeHumidity => "relativeHumidity",
            Self::DewPoint => "dewPoint",
            Self::Battery => "battery",
            Self::Rain => "rainfall",
            Self::AccumulatedRain => "accumulatedRain",
        }
    }

    /// Quantities that cannot be negative get a zero-based y axis.
    #[must_use]
    pub const fn begins_at_zero(self) -> bool {
        matches!(
            self,
            Self::WindSpeed | Self::GustSpeed | Self::Rain | Self::AccumulatedRain
        )
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known label spellings, keyed by their normalized form.
static LABELS: LazyLock<HashMap<String, FieldKey>> = LazyLock::new(|| {
    let aliases: &[(&str, FieldKey)] = &[
        ("Pressure", FieldKey::BarometricPressure),
        ("Barometric Pressure", FieldKey::BarometricPressure),
        ("Baro Pressure", FieldKey::BarometricPressure),
        ("Wind Direction", FieldKey::WindDirection),
        ("Wind Speed", FieldKey::WindSpeed),
        ("Gust Speed", FieldKey::GustSpeed),
        ("Temperature", FieldKey::AirTemperature),
        ("Air Temperature", FieldKey::AirTemperature),
        ("RH", FieldKey::RelativeHumidity),
        ("Relative Humidity", FieldKey::RelativeHumidity),
        ("Dew Point", FieldKey::DewPoint),
        ("Battery", FieldKey::Battery),
        ("Rain", FieldKey::Rain),
        ("Accumulated Rain", FieldKey::AccumulatedRain),
    ];

    let mut map: HashMap<String, FieldKey> = aliases
        .iter()
        .map(|(label, key)| (normalize_label(label), *key))
        .collect();

    // Canonical keys resolve to themselves
    for key in FieldKey::ALL {
        map.insert(normalize_label(key.as_str()), key);
    }
    map
});

/// Lowercase, treat `_` and `-` as spaces, collapse whitespace runs.
fn normalize_label(label: &str) -> String {
    label
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map a raw sensor-measurement label to its canonical field.
///
/// Total and side-effect free: unknown labels return `None`, which callers
/// treat as "ignore this reading".
#[must_use]
pub fn resolve(label: &str) -> Option<FieldKey> {
    LABELS.get(&normalize_label(label)).copied()
}
