//! Pure derivations from a canonical series.
//!
//! None of these fail: empty or sparse input yields explicit "no data"
//! results that the render layer checks before creating anything.

pub mod gauges;
pub mod latest;
pub mod timeseries;
pub mod windrose;

use std::collections::BTreeMap;

pub use gauges::{BatteryGauge, BatteryLevel, HumidityGauge, ThermometerGauge, WindDirectionGauge};
pub use latest::{latest_value, LatestSnapshot, LatestValue};
pub use timeseries::{field_series, select_granularity, FieldSeries, SeriesPoint, TimeUnit};
pub use windrose::{cardinal, sector_index, SpeedBin, WindRose, COMPASS_POINTS};

use crate::selection::{ChartStyle, Language};
use crate::telemetry::{FieldKey, Series};

/// Everything the dashboard renders, derived from one series.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub chart_style: ChartStyle,
    pub language: Language,
    pub latest: LatestSnapshot,
    pub fields: BTreeMap<FieldKey, FieldSeries>,
    pub windrose: WindRose,
}

impl ViewState {
    #[must_use]
    pub fn derive(series: &Series, chart_style: ChartStyle, language: Language) -> Self {
        let fields = FieldKey::ALL
            .into_iter()
            .map(|field| (field, field_series(series, field)))
            .collect();

        Self {
            chart_style,
            language,
            latest: LatestSnapshot::from_series(series),
            fields,
            windrose: WindRose::from_series(series),
        }
    }

    /// Filtered series for `field`, or `None` when the field never reported.
    #[must_use]
    pub fn field(&self, field: FieldKey) -> Option<&FieldSeries> {
        self.fields.get(&field).filter(|series| !series.is_empty())
    }

    /// True when no derivation produced any data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }
}
