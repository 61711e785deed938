use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::telemetry::{FieldKey, Series};

/// Tooltip layout shared by every time axis.
pub const TOOLTIP_FORMAT: &str = "%b %-d, %Y, %-I:%M:%S %p";

pub const MAX_TICKS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub at: DateTime<Utc>,
    pub timestamp: String,
    pub value: f64,
}

/// The records of a series that carry one field, in series order.
///
/// An empty point list is a valid result and means "no data for this field".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSeries {
    pub field: FieldKey,
    pub points: Vec<SeriesPoint>,
}

impl FieldSeries {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance between the earliest and latest point.
    #[must_use]
    pub fn span(&self) -> Option<TimeDelta> {
        let min = self.points.iter().map(|p| p.at).min()?;
        let max = self.points.iter().map(|p| p.at).max()?;
        Some(max - min)
    }

    #[must_use]
    pub fn granularity(&self) -> Option<TimeUnit> {
        self.span().map(select_granularity)
    }
}

#[must_use]
pub fn field_series(series: &Series, field: FieldKey) -> FieldSeries {
    let points = series
        .records()
        .iter()
        .filter_map(|record| {
            record.get(field).map(|value| SeriesPoint {
                at: record.at,
                timestamp: record.timestamp.clone(),
                value,
            })
        })
        .collect();
    FieldSeries { field, points }
}

/// Tick unit of a time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    /// Tick label layout as a chrono format string.
    #[must_use]
    pub const fn tick_format(self) -> &'static str {
        match self {
            Self::Minute => "%-I:%M %p",
            Self::Hour => "%-I %p",
            Self::Day => "%b %-d",
        }
    }
}

/// Minute ticks up to 2 hours of span, hour ticks up to 48 hours, days beyond.
#[must_use]
pub fn select_granularity(span: TimeDelta) -> TimeUnit {
    if span <= TimeDelta::hours(2) {
        TimeUnit::Minute
    } else if span <= TimeDelta::hours(48) {
        TimeUnit::Hour
    } else {
        TimeUnit::Day
    }
}
