use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::selection::window::TimeWindow;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValue {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Which set of mount points a device's dashboard exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeviceLayout {
    /// Pressure and battery only
    Barometric,
    /// Full weather station
    Full,
}

/// Known LI-COR loggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Device {
    #[serde(rename = "MFSD Thaton Barometric")]
    ThatonBarometric,
    #[serde(rename = "MFSD MLM Stationary")]
    MlmStationary,
    #[serde(rename = "MFSD MLM Transportable")]
    MlmTransportable,
}

impl Device {
    pub const ALL: [Self; 3] = [
        Self::ThatonBarometric,
        Self::MlmStationary,
        Self::MlmTransportable,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ThatonBarometric => "MFSD Thaton Barometric",
            Self::MlmStationary => "MFSD MLM Stationary",
            Self::MlmTransportable => "MFSD MLM Transportable",
        }
    }

    /// Logger serial used by the upstream `loggers` query parameter
    #[must_use]
    pub const fn logger_id(self) -> &'static str {
        match self {
            Self::ThatonBarometric => "22226346",
            Self::MlmStationary => "22284699",
            Self::MlmTransportable => "22284700",
        }
    }

    #[must_use]
    pub const fn layout(self) -> DeviceLayout {
        match self {
            Self::ThatonBarometric => DeviceLayout::Barometric,
            Self::MlmStationary | Self::MlmTransportable => DeviceLayout::Full,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Device {
    type Err = UnknownValue;

    /// Accepts the display name (case-insensitive) or the logger id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s) || d.logger_id() == s)
            .ok_or_else(|| UnknownValue::new("device", s))
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    /// Burmese
    My,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::My];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::My => "my",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "my" | "burmese" => Ok(Self::My),
            _ => Err(UnknownValue::new("language", s)),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    #[default]
    Line,
    Bar,
}

impl ChartStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
        }
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartStyle {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            _ => Err(UnknownValue::new("chart style", s)),
        }
    }
}

/// User-controlled inputs of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SelectionState {
    pub device: Device,
    pub window: TimeWindow,
    pub language: Language,
    pub chart_style: ChartStyle,
}
