use serde::Serialize;

use crate::telemetry::{FieldKey, Series};

pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const SECTOR_DEGREES: f64 = 22.5;

/// `round(degrees / 22.5) mod 16`, rounding halves up and wrapping negative angles.
#[must_use]
pub fn sector_index(degrees: f64) -> usize {
    let rounded = (degrees / SECTOR_DEGREES + 0.5).floor() as i64;
    rounded.rem_euclid(COMPASS_POINTS.len() as i64) as usize
}

#[must_use]
pub fn cardinal(degrees: f64) -> &'static str {
    COMPASS_POINTS[sector_index(degrees)]
}

/// Wind speed class in m/s. Bins are half-open and checked in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedBin {
    /// `[0, 2)`
    Calm,
    /// `[2, 4)`
    Light,
    /// `[4, 6)`
    Moderate,
    /// `[6, ∞)`
    Strong,
}

impl SpeedBin {
    pub const ALL: [Self; 4] = [Self::Calm, Self::Light, Self::Moderate, Self::Strong];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Exclusive upper bound of the bin.
    #[must_use]
    pub const fn upper(self) -> f64 {
        match self {
            Self::Calm => 2.0,
            Self::Light => 4.0,
            Self::Moderate => 6.0,
            Self::Strong => f64::INFINITY,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calm => "0-2 m/s",
            Self::Light => "2-4 m/s",
            Self::Moderate => "4-6 m/s",
            Self::Strong => ">6 m/s",
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Calm => "#a7f3d0",
            Self::Light => "#FDB813",
            Self::Moderate => "#fbbf24",
            Self::Strong => "#C8102E",
        }
    }

    /// First bin whose upper bound exceeds `speed`.
    ///
    /// Negative speeds land in `Calm` so every sample is counted exactly once.
    #[must_use]
    pub fn classify(speed: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|bin| speed < bin.upper())
            .unwrap_or(Self::Strong)
    }
}

/// 16 compass sectors × 4 speed bins of sample counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WindRose {
    counts: [[u32; 4]; 16],
    total: u32,
}

impl WindRose {
    /// Count every record carrying both wind direction and wind speed.
    #[must_use]
    pub fn from_series(series: &Series) -> Self {
        let mut rose = Self::default();
        for record in series.records() {
            if let (Some(direction), Some(speed)) = (
                record.get(FieldKey::WindDirection),
                record.get(FieldKey::WindSpeed),
            ) {
                rose.add(direction, speed);
            }
        }
        rose
    }

    fn add(&mut self, direction: f64, speed: f64) {
        let sector = sector_index(direction);
        let bin = SpeedBin::classify(speed);
        self.counts[sector][bin.index()] += 1;
        self.total += 1;
    }

    #[must_use]
    pub fn count(&self, sector: usize, bin: SpeedBin) -> u32 {
        self.counts.get(sector).map_or(0, |row| row[bin.index()])
    }

    /// Counts for one speed bin across all sectors, N first.
    #[must_use]
    pub fn bin_counts(&self, bin: SpeedBin) -> [u32; 16] {
        std::array::from_fn(|sector| self.counts[sector][bin.index()])
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
