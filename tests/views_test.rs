//! Tests for latest values, time-axis granularity, the wind rose and gauges.
//!
//! Run with: cargo test --test views_test

use chrono::{TimeDelta, TimeZone, Utc};
use weather_dash::selection::{ChartStyle, Device, Language};
use weather_dash::telemetry::{build_series, FieldKey, RawReading, Series};
use weather_dash::views::{
    cardinal, field_series, latest_value, sector_index, select_granularity, BatteryGauge,
    BatteryLevel, HumidityGauge, LatestSnapshot, SpeedBin, ThermometerGauge, TimeUnit,
    ViewState, WindDirectionGauge, WindRose,
};

fn series(readings: &[(&str, &str, f64)]) -> Series {
    let readings: Vec<RawReading> = readings
        .iter()
        .map(|(t, label, value)| RawReading::new(*t, *label, *value))
        .collect();
    build_series(Device::MlmStationary, &readings)
}

fn wind(count: usize, direction: f64, speed: f64) -> Series {
    let readings: Vec<RawReading> = (0..count)
        .flat_map(|i| {
            let t = format!("2024-01-01T00:{i:02}:00Z");
            [
                RawReading::new(t.clone(), "Wind Direction", direction),
                RawReading::new(t, "Wind Speed", speed),
            ]
        })
        .collect();
    build_series(Device::MlmStationary, &readings)
}

#[test]
fn latest_value_takes_last_record_carrying_field() {
    let s = series(&[
        ("2024-01-01T00:00:00Z", "Temperature", 20.0),
        ("2024-01-01T00:00:00Z", "RH", 55.0),
        ("2024-01-01T01:00:00Z", "Temperature", 22.0),
    ]);

    let temperature = latest_value(&s, FieldKey::AirTemperature).unwrap();
    assert_eq!(temperature.value, 22.0);
    assert_eq!(temperature.at, Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap());

    // Sparse fields fall back to an older record
    let humidity = latest_value(&s, FieldKey::RelativeHumidity).unwrap();
    assert_eq!(humidity.value, 55.0);
    assert_eq!(humidity.timestamp, "2024-01-01T00:00:00Z");

    assert!(latest_value(&s, FieldKey::Rain).is_none());
}

#[test]
fn latest_value_tie_goes_to_last_record_in_series_order() {
    // Same instant, spelled two ways
    let s = series(&[
        ("2024-01-01T01:00:00+01:00", "Temperature", 1.0),
        ("2024-01-01T00:00:00Z", "Temperature", 2.0),
    ]);
    assert_eq!(s.len(), 2);

    let temperature = latest_value(&s, FieldKey::AirTemperature).unwrap();
    assert_eq!(temperature.value, 2.0);
    assert_eq!(temperature.timestamp, "2024-01-01T00:00:00Z");
}

#[test]
fn latest_snapshot_only_lists_reported_fields() {
    let s = series(&[
        ("2024-01-01T00:00:00Z", "Pressure", 1013.2),
        ("2024-01-01T00:00:00Z", "Battery", 4.0),
    ]);

    let snapshot = LatestSnapshot::from_series(&s);
    let fields: Vec<FieldKey> = snapshot.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, vec![FieldKey::BarometricPressure, FieldKey::Battery]);
    assert!(LatestSnapshot::from_series(&Series::empty(Device::MlmStationary)).is_empty());
}

#[test]
fn granularity_thresholds() {
    assert_eq!(select_granularity(TimeDelta::zero()), TimeUnit::Minute);
    assert_eq!(select_granularity(TimeDelta::hours(2)), TimeUnit::Minute);
    assert_eq!(
        select_granularity(TimeDelta::hours(2) + TimeDelta::seconds(1)),
        TimeUnit::Hour
    );
    assert_eq!(select_granularity(TimeDelta::hours(48)), TimeUnit::Hour);
    assert_eq!(select_granularity(TimeDelta::hours(49)), TimeUnit::Day);
    assert_eq!(select_granularity(TimeDelta::days(30)), TimeUnit::Day);
}

#[test]
fn field_series_filters_to_records_with_field() {
    let s = series(&[
        ("2024-01-01T00:00:00Z", "Temperature", 20.0),
        ("2024-01-01T01:00:00Z", "RH", 50.0),
        ("2024-01-01T03:00:00Z", "Temperature", 24.0),
    ]);

    let temperature = field_series(&s, FieldKey::AirTemperature);
    let values: Vec<f64> = temperature.points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![20.0, 24.0]);
    assert_eq!(temperature.span(), Some(TimeDelta::hours(3)));
    assert_eq!(temperature.granularity(), Some(TimeUnit::Hour));

    let rain = field_series(&s, FieldKey::Rain);
    assert!(rain.is_empty());
    assert_eq!(rain.granularity(), None);
}

#[test]
fn single_point_series_uses_minute_ticks() {
    let s = series(&[("2024-01-01T00:00:00Z", "Temperature", 20.0)]);
    assert_eq!(
        field_series(&s, FieldKey::AirTemperature).granularity(),
        Some(TimeUnit::Minute)
    );
}

#[test]
fn sector_index_rounds_to_nearest_point() {
    assert_eq!(sector_index(0.0), 0);
    assert_eq!(sector_index(11.24), 0);
    assert_eq!(sector_index(11.25), 1);
    assert_eq!(sector_index(90.0), 4);
    assert_eq!(sector_index(348.75), 0);
    assert_eq!(sector_index(360.0), 0);
    assert_eq!(sector_index(720.0), 0);
    assert_eq!(sector_index(-22.5), 15);
    assert_eq!(cardinal(225.0), "SW");
}

#[test]
fn speed_bins_have_half_open_bounds() {
    assert_eq!(SpeedBin::classify(0.0), SpeedBin::Calm);
    assert_eq!(SpeedBin::classify(1.99), SpeedBin::Calm);
    assert_eq!(SpeedBin::classify(2.0), SpeedBin::Light);
    assert_eq!(SpeedBin::classify(4.0), SpeedBin::Moderate);
    assert_eq!(SpeedBin::classify(5.99), SpeedBin::Moderate);
    assert_eq!(SpeedBin::classify(6.0), SpeedBin::Strong);
    assert_eq!(SpeedBin::classify(42.0), SpeedBin::Strong);
    assert_eq!(SpeedBin::classify(-1.0), SpeedBin::Calm);
}

#[test]
fn windrose_counts_calm_north_wind() {
    let rose = WindRose::from_series(&wind(5, 0.0, 1.0));

    assert_eq!(rose.count(0, SpeedBin::Calm), 5);
    assert_eq!(rose.total(), 5);
    for sector in 0..16 {
        for bin in SpeedBin::ALL {
            if (sector, bin) != (0, SpeedBin::Calm) {
                assert_eq!(rose.count(sector, bin), 0, "sector {sector} bin {bin:?}");
            }
        }
    }
}

#[test]
fn windrose_requires_both_direction_and_speed() {
    let s = series(&[
        ("2024-01-01T00:00:00Z", "Wind Direction", 90.0),
        ("2024-01-01T01:00:00Z", "Wind Speed", 3.0),
        ("2024-01-01T02:00:00Z", "Wind Direction", 180.0),
        ("2024-01-01T02:00:00Z", "Wind Speed", 12.0),
    ]);

    let rose = WindRose::from_series(&s);
    assert_eq!(rose.total(), 1);
    assert_eq!(rose.count(8, SpeedBin::Strong), 1);
    assert_eq!(rose.bin_counts(SpeedBin::Strong)[8], 1);
}

#[test]
fn windrose_of_no_wind_is_empty() {
    let s = series(&[("2024-01-01T00:00:00Z", "Temperature", 20.0)]);
    assert!(WindRose::from_series(&s).is_empty());
}

#[test]
fn gauges_derive_from_latest_values() {
    let s = series(&[
        ("2024-01-01T00:00:00Z", "Temperature", 20.0),
        ("2024-01-01T00:00:00Z", "RH", 65.0),
        ("2024-01-01T00:00:00Z", "Wind Direction", 270.0),
        ("2024-01-01T00:00:00Z", "Battery", 3.78),
    ]);
    let latest = LatestSnapshot::from_series(&s);

    let thermometer = ThermometerGauge::from_latest(&latest).unwrap();
    assert!((thermometer.fill_percent - 50.0).abs() < 1e-9);

    let humidity = HumidityGauge::from_latest(&latest).unwrap();
    assert_eq!(humidity.remainder, 35.0);

    let direction = WindDirectionGauge::from_latest(&latest).unwrap();
    assert_eq!(direction.cardinal, "W");

    let battery = BatteryGauge::from_latest(&latest).unwrap();
    assert!((battery.percent - 40.0).abs() < 1e-6);
    assert_eq!(battery.level, BatteryLevel::Fair);
}

#[test]
fn gauges_clamp_and_grade_extremes() {
    let s = series(&[
        ("2024-01-01T00:00:00Z", "Temperature", 65.0),
        ("2024-01-01T00:00:00Z", "Battery", 3.2),
    ]);
    let latest = LatestSnapshot::from_series(&s);

    assert_eq!(ThermometerGauge::from_latest(&latest).unwrap().fill_percent, 100.0);
    let battery = BatteryGauge::from_latest(&latest).unwrap();
    assert_eq!(battery.percent, 0.0);
    assert_eq!(battery.level, BatteryLevel::Low);
    assert!(HumidityGauge::from_latest(&latest).is_none());
}

#[test]
fn view_state_of_empty_series_has_no_data() {
    let view = ViewState::derive(
        &Series::empty(Device::MlmStationary),
        ChartStyle::Line,
        Language::En,
    );

    assert!(view.is_empty());
    assert!(view.windrose.is_empty());
    assert!(FieldKey::ALL.into_iter().all(|field| view.field(field).is_none()));
}
