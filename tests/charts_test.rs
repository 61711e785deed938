//! Tests for chart content building and the destroy-before-create registry.
//!
//! Run with: cargo test --test charts_test

use std::collections::BTreeSet;

use weather_dash::charts::{
    build, targets, Board, ChartRegistry, MountPoint, Reconciled, RenderSurface, Slot,
    TargetView, Visual,
};
use weather_dash::selection::{ChartStyle, Device, DeviceLayout, Language};
use weather_dash::telemetry::{build_series, RawReading, Series};
use weather_dash::views::ViewState;

/// Surface that records every lifecycle call and tracks live handles.
#[derive(Default)]
struct RecordingSurface {
    missing: BTreeSet<MountPoint>,
    next_handle: u32,
    live: BTreeSet<(MountPoint, u32)>,
    events: Vec<String>,
}

impl RenderSurface for RecordingSurface {
    type Handle = u32;

    fn has_target(&self, target: MountPoint) -> bool {
        !self.missing.contains(&target)
    }

    fn create(&mut self, target: MountPoint, _visual: &Visual) -> u32 {
        self.next_handle += 1;
        self.live.insert((target, self.next_handle));
        self.events.push(format!("create {target} #{}", self.next_handle));
        self.next_handle
    }

    fn destroy(&mut self, target: MountPoint, handle: u32) {
        assert!(self.live.remove(&(target, handle)), "double destroy");
        self.events.push(format!("destroy {target} #{handle}"));
    }

    fn show_placeholder(&mut self, target: MountPoint, message: &str) {
        self.events.push(format!("placeholder {target}: {message}"));
    }
}

fn full_series() -> Series {
    let readings = vec![
        RawReading::new("2024-01-01T00:00:00Z", "Temperature", 20.0),
        RawReading::new("2024-01-01T00:00:00Z", "RH", 55.0),
        RawReading::new("2024-01-01T00:00:00Z", "Pressure", 1012.0),
        RawReading::new("2024-01-01T00:00:00Z", "Wind Direction", 45.0),
        RawReading::new("2024-01-01T00:00:00Z", "Wind Speed", 3.0),
        RawReading::new("2024-01-01T00:00:00Z", "Battery", 4.1),
        RawReading::new("2024-01-01T01:00:00Z", "Temperature", 22.0),
        RawReading::new("2024-01-01T01:00:00Z", "Pressure", 1011.0),
    ];
    build_series(Device::MlmStationary, &readings)
}

fn view(series: &Series, style: ChartStyle, language: Language) -> ViewState {
    ViewState::derive(series, style, language)
}

fn pressure_chart(view: &ViewState) -> TargetView {
    build(MountPoint::PressureChart, view, DeviceLayout::Full)
}

#[test]
fn repeated_reconcile_keeps_one_live_chart() {
    let series = full_series();
    let view = view(&series, ChartStyle::Line, Language::En);
    let mut registry = ChartRegistry::new(RecordingSurface::default());

    for _ in 0..5 {
        let result = registry.reconcile(MountPoint::PressureChart, &pressure_chart(&view));
        assert_eq!(result, Reconciled::Created);
        assert_eq!(registry.surface().live.len(), 1);
    }

    assert_eq!(registry.live_count(), 1);
    assert_eq!(registry.handle(MountPoint::PressureChart), Some(&5));
    // Each create after the first is preceded by destroying the previous instance
    let events = &registry.surface().events;
    assert_eq!(events[0], "create pressure-chart #1");
    assert_eq!(events[1], "destroy pressure-chart #1");
    assert_eq!(events[2], "create pressure-chart #2");
}

#[test]
fn placeholder_releases_previous_chart() {
    let series = full_series();
    let mut registry = ChartRegistry::new(RecordingSurface::default());

    registry.reconcile(
        MountPoint::PressureChart,
        &pressure_chart(&view(&series, ChartStyle::Line, Language::En)),
    );
    let empty = Series::empty(Device::MlmStationary);
    let result = registry.reconcile(
        MountPoint::PressureChart,
        &pressure_chart(&view(&empty, ChartStyle::Line, Language::En)),
    );

    assert_eq!(result, Reconciled::Placeholder);
    assert!(!registry.is_live(MountPoint::PressureChart));
    assert!(registry.surface().live.is_empty());
    assert_eq!(
        registry.surface().events.last().map(String::as_str),
        Some("placeholder pressure-chart: No data for Barometric Pressure.")
    );
}

#[test]
fn missing_target_is_skipped() {
    let series = full_series();
    let view = view(&series, ChartStyle::Line, Language::En);
    let surface = RecordingSurface {
        missing: BTreeSet::from([MountPoint::Windrose]),
        ..RecordingSurface::default()
    };
    let mut registry = ChartRegistry::new(surface);

    let result = registry.reconcile(
        MountPoint::Windrose,
        &build(MountPoint::Windrose, &view, DeviceLayout::Full),
    );

    assert_eq!(result, Reconciled::MissingTarget);
    assert_eq!(registry.live_count(), 0);
    assert!(registry.surface().events.is_empty());
}

#[test]
fn teardown_destroys_every_live_chart() {
    let series = full_series();
    let view = view(&series, ChartStyle::Bar, Language::En);
    let mut registry = ChartRegistry::new(RecordingSurface::default());

    for target in MountPoint::ALL {
        registry.reconcile(target, &build(target, &view, DeviceLayout::Full));
    }
    assert!(registry.live_count() > 0);

    registry.teardown();

    assert_eq!(registry.live_count(), 0);
    assert!(registry.surface().live.is_empty());
}

#[test]
fn empty_view_creates_nothing() {
    let empty = Series::empty(Device::MlmStationary);
    let view = view(&empty, ChartStyle::Line, Language::En);
    let mut registry = ChartRegistry::new(RecordingSurface::default());

    for target in MountPoint::ALL {
        let result = registry.reconcile(target, &build(target, &view, DeviceLayout::Full));
        assert_eq!(result, Reconciled::Placeholder, "{target}");
    }
    assert_eq!(registry.surface().next_handle, 0);
}

#[test]
fn bar_style_fills_with_translucent_color() {
    let series = full_series();
    let view = view(&series, ChartStyle::Bar, Language::En);

    let TargetView::Ready {
        visual: Visual::TimeSeries(chart),
    } = pressure_chart(&view)
    else {
        panic!("expected a time-series chart");
    };
    assert!(chart.fill);
    assert_eq!(chart.fill_color, "#C8102E80");
    assert!(!chart.begin_at_zero);
    assert_eq!(chart.points.len(), 2);
}

#[test]
fn titles_and_placeholders_follow_language() {
    let empty = Series::empty(Device::MlmStationary);
    let view = view(&empty, ChartStyle::Line, Language::My);

    let TargetView::NoData { message } = build(MountPoint::Windrose, &view, DeviceLayout::Full)
    else {
        panic!("expected a placeholder");
    };
    assert_eq!(message, "လေဒေတာမရှိပါ။");
}

#[test]
fn barometric_panel_lists_pressure_and_battery_only() {
    let series = full_series();
    let view = view(&series, ChartStyle::Line, Language::En);

    let TargetView::Ready {
        visual: Visual::LatestConditions(panel),
    } = build(MountPoint::LatestConditions, &view, DeviceLayout::Barometric)
    else {
        panic!("expected the latest-conditions panel");
    };
    let labels: Vec<&str> = panel.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Barometric Pressure", "Battery"]);
    assert_eq!(panel.entries[0].formatted, "1011.00 hPa");
}

#[test]
fn board_only_exposes_layout_targets() {
    let mut board = Board::new();
    assert!(!board.has_target(MountPoint::PressureChart));

    board.set_layout(DeviceLayout::Barometric);
    for target in MountPoint::ALL {
        assert_eq!(
            board.has_target(target),
            targets(DeviceLayout::Barometric).contains(&target),
            "{target}"
        );
    }
}

#[test]
fn board_publishes_and_retires_charts() {
    let series = full_series();
    let view = view(&series, ChartStyle::Line, Language::En);
    let mut registry = ChartRegistry::new(Board::new());
    registry.reset(DeviceLayout::Full);

    registry.reconcile(MountPoint::PressureChart, &pressure_chart(&view));
    let first = registry.handle(MountPoint::PressureChart).copied().unwrap();
    registry.reconcile(MountPoint::PressureChart, &pressure_chart(&view));
    let second = registry.handle(MountPoint::PressureChart).copied().unwrap();

    assert_ne!(first, second);
    let board = registry.surface();
    assert!(matches!(
        board.slot(MountPoint::PressureChart),
        Some(Slot::Chart { instance, .. }) if *instance == second.id
    ));
    assert_eq!(board.live_charts(), 1);
    assert_eq!(board.churn(), (2, 1));

    // Switching to the barometric layout drops every full-layout slot
    registry.reset(DeviceLayout::Barometric);
    assert_eq!(registry.surface().live_charts(), 0);
    assert_eq!(registry.surface().layout(), Some(DeviceLayout::Barometric));
}
