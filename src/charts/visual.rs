//! Declarative content of each mount point.
//!
//! A mount point is either `Ready` with a fully described visual or `NoData`
//! with a localized placeholder message. Concrete drawing happens outside
//! this crate.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::charts::layout::{MountPoint, SeriesBinding, BAROMETRIC_PANEL_FIELDS};
use crate::locale::translate;
use crate::selection::{ChartStyle, DeviceLayout, Language};
use crate::telemetry::FieldKey;
use crate::views::timeseries::{MAX_TICKS, TOOLTIP_FORMAT};
use crate::views::{
    BatteryGauge, HumidityGauge, SpeedBin, ThermometerGauge, TimeUnit, ViewState,
    WindDirectionGauge, COMPASS_POINTS,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TargetView {
    Ready { visual: Visual },
    NoData { message: String },
}

impl TargetView {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    fn no_data(language: Language, key: &str) -> Self {
        Self::NoData {
            message: translate(language, key).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Visual {
    LatestConditions(LatestPanel),
    Thermometer {
        title: String,
        gauge: ThermometerGauge,
    },
    HumidityGauge {
        title: String,
        gauge: HumidityGauge,
    },
    WindDirectionGauge {
        title: String,
        gauge: WindDirectionGauge,
    },
    BatteryStatus {
        title: String,
        gauge: BatteryGauge,
    },
    Windrose(WindroseChart),
    TimeSeries(TimeSeriesChart),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestEntry {
    pub field: FieldKey,
    pub label: String,
    pub value: f64,
    pub unit: &'static str,
    /// Value with two decimals and its unit, e.g. `1013.25 hPa`
    pub formatted: String,
    pub timestamp: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestPanel {
    pub title: String,
    pub entries: Vec<LatestEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub at: DateTime<Utc>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesChart {
    pub title: String,
    pub field: FieldKey,
    pub chart_type: ChartStyle,
    pub color: &'static str,
    pub fill_color: String,
    pub fill: bool,
    pub begin_at_zero: bool,
    pub time_unit: TimeUnit,
    pub tick_format: &'static str,
    pub tooltip_format: &'static str,
    pub max_ticks: u32,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindroseDataset {
    pub bin: SpeedBin,
    pub label: &'static str,
    pub color: &'static str,
    pub counts: [u32; 16],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindroseChart {
    pub title: String,
    pub labels: [&'static str; 16],
    pub datasets: Vec<WindroseDataset>,
}

/// Build the content of `target` from derived views.
#[must_use]
pub fn build(target: MountPoint, view: &ViewState, layout: DeviceLayout) -> TargetView {
    let lang = view.language;
    let title = |key: &str| translate(lang, key).to_string();

    if let Some(binding) = target.series_binding() {
        return time_series(binding, view);
    }

    let visual = match target {
        MountPoint::LatestConditions => latest_panel(view, layout).map(Visual::LatestConditions),
        MountPoint::Thermometer => {
            ThermometerGauge::from_latest(&view.latest).map(|gauge| Visual::Thermometer {
                title: title("temperature"),
                gauge,
            })
        }
        MountPoint::RhGauge => {
            HumidityGauge::from_latest(&view.latest).map(|gauge| Visual::HumidityGauge {
                title: title("relativeHumidity"),
                gauge,
            })
        }
        MountPoint::WindDirectionGauge => WindDirectionGauge::from_latest(&view.latest).map(
            |gauge| Visual::WindDirectionGauge {
                title: title("currentWind"),
                gauge,
            },
        ),
        MountPoint::BatteryStatus => {
            BatteryGauge::from_latest(&view.latest).map(|gauge| Visual::BatteryStatus {
                title: title("batteryStatus"),
                gauge,
            })
        }
        MountPoint::Windrose => {
            if view.windrose.is_empty() {
                return TargetView::no_data(lang, "noWindData");
            }
            Some(Visual::Windrose(windrose_chart(view)))
        }
        // Series-bound targets returned above
        _ => None,
    };

    match visual {
        Some(visual) => TargetView::Ready { visual },
        None => TargetView::no_data(lang, "noRecentData"),
    }
}

fn time_series(binding: SeriesBinding, view: &ViewState) -> TargetView {
    let lang = view.language;
    let title = translate(lang, binding.title_key);

    let plotted = view
        .field(binding.field)
        .and_then(|series| series.granularity().map(|unit| (series, unit)));
    let Some((series, time_unit)) = plotted else {
        return TargetView::NoData {
            message: format!("{} {title}.", translate(lang, "noDataFor")),
        };
    };

    let style = view.chart_style;
    let chart = TimeSeriesChart {
        title: title.to_string(),
        field: binding.field,
        chart_type: style,
        color: binding.color,
        fill_color: match style {
            ChartStyle::Bar => format!("{}80", binding.color),
            ChartStyle::Line => binding.color.to_string(),
        },
        fill: style == ChartStyle::Bar,
        begin_at_zero: binding.field.begins_at_zero(),
        time_unit,
        tick_format: time_unit.tick_format(),
        tooltip_format: TOOLTIP_FORMAT,
        max_ticks: MAX_TICKS,
        points: series
            .points
            .iter()
            .map(|p| ChartPoint {
                at: p.at,
                value: p.value,
            })
            .collect(),
    };

    TargetView::Ready {
        visual: Visual::TimeSeries(chart),
    }
}

fn windrose_chart(view: &ViewState) -> WindroseChart {
    WindroseChart {
        title: translate(view.language, "windrose").to_string(),
        labels: COMPASS_POINTS,
        datasets: SpeedBin::ALL
            .into_iter()
            .map(|bin| WindroseDataset {
                bin,
                label: bin.label(),
                color: bin.color(),
                counts: view.windrose.bin_counts(bin),
            })
            .collect(),
    }
}

fn latest_panel(view: &ViewState, layout: DeviceLayout) -> Option<LatestPanel> {
    let lang = view.language;
    let entries: Vec<LatestEntry> = view
        .latest
        .iter()
        .filter(|(field, _)| {
            layout != DeviceLayout::Barometric || BAROMETRIC_PANEL_FIELDS.contains(field)
        })
        .map(|(field, latest)| LatestEntry {
            field,
            label: translate(lang, field.label_key()).to_string(),
            value: latest.value,
            unit: field.unit(),
            formatted: format!("{:.2}{}", latest.value, field.unit()),
            timestamp: latest.timestamp.clone(),
            at: latest.at,
        })
        .collect();

    if entries.is_empty() {
        return None;
    }
    Some(LatestPanel {
        title: translate(lang, "latestConditions").to_string(),
        entries,
    })
}
