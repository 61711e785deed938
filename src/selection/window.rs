use chrono::{DateTime, Days, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::selection::state::UnknownValue;

/// Upstream query format, always rendered in UTC.
pub const API_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DISPLAY_DATETIME_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Window start {start} is after end {end}")]
pub struct InvertedWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Inclusive `[start, end]` query window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// # Errors
    ///
    /// Returns `InvertedWindow` if `start` is after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, InvertedWindow> {
        if start > end {
            return Err(InvertedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// The window ending at `now` and reaching back `span`.
    #[must_use]
    pub fn trailing(now: DateTime<Utc>, span: Duration) -> Self {
        Self {
            start: now - span,
            end: now,
        }
    }

    /// `(start, end)` formatted for the upstream `*_date_time` parameters.
    #[must_use]
    pub fn api_bounds(&self) -> (String, String) {
        (
            self.start.format(API_DATETIME_FORMAT).to_string(),
            self.end.format(API_DATETIME_FORMAT).to_string(),
        )
    }

    /// Human-readable range in the given zone, e.g. `Jan 1, 2024, 12:00 AM to Jan 2, 2024, 12:00 AM`.
    #[must_use]
    pub fn display_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        format!(
            "{} to {}",
            self.start.with_timezone(tz).format(DISPLAY_DATETIME_FORMAT),
            self.end.with_timezone(tz).format(DISPLAY_DATETIME_FORMAT)
        )
    }
}

/// Named shortcut windows, each resolved relative to the moment it is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum WindowPreset {
    Today,
    Last6Hours,
    Last12Hours,
    Last24Hours,
    Last7Days,
    Last30Days,
}

impl WindowPreset {
    pub const ALL: [Self; 6] = [
        Self::Today,
        Self::Last6Hours,
        Self::Last12Hours,
        Self::Last24Hours,
        Self::Last7Days,
        Self::Last30Days,
    ];

    /// Also the locale key of the preset's button label.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Last6Hours => "last6Hours",
            Self::Last12Hours => "last12Hours",
            Self::Last24Hours => "last24Hours",
            Self::Last7Days => "last7Days",
            Self::Last30Days => "last30Days",
        }
    }

    /// Resolve against `now`.
    ///
    /// `today` starts at local midnight of `now`'s zone; day presets step back
    /// whole calendar days in that zone, hour presets step back exact hours.
    #[must_use]
    pub fn window_at<Tz: TimeZone>(self, now: &DateTime<Tz>) -> TimeWindow {
        let end = now.with_timezone(&Utc);
        let start = match self {
            Self::Today => {
                let midnight = now.date_naive().and_time(chrono::NaiveTime::MIN);
                now.timezone()
                    .from_local_datetime(&midnight)
                    .earliest()
                    .map_or(end, |dt| dt.with_timezone(&Utc))
            }
            Self::Last6Hours => end - Duration::hours(6),
            Self::Last12Hours => end - Duration::hours(12),
            Self::Last24Hours => end - Duration::hours(24),
            Self::Last7Days => calendar_days_back(now, 7),
            Self::Last30Days => calendar_days_back(now, 30),
        };
        TimeWindow { start, end }
    }
}

fn calendar_days_back<Tz: TimeZone>(now: &DateTime<Tz>, days: u64) -> DateTime<Utc> {
    now.clone()
        .checked_sub_days(Days::new(days))
        .map_or_else(
            || now.with_timezone(&Utc) - Duration::days(days as i64),
            |dt| dt.with_timezone(&Utc),
        )
}

impl fmt::Display for WindowPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WindowPreset {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownValue {
                kind: "window preset",
                value: s.to_string(),
            })
    }
}
