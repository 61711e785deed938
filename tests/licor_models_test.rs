//! Unit tests for LI-COR Cloud response parsing and locale lookup.
//!
//! Run with: cargo test --test licor_models_test

use weather_dash::error::FetchError;
use weather_dash::licor::models::{parse_data_response, ApiErrorBody};
use weather_dash::locale::{table, translate};
use weather_dash::selection::Language;

#[test]
fn parses_reading_array() {
    let body = r#"{
        "data": [
            {"timestamp": "2024-01-01 00:00:00", "sensor_measurement_type": "Temperature", "value": 20.5, "units": "°C", "sensor_sn": "21401234-1"},
            {"timestamp": "2024-01-01 00:00:00", "sensor_measurement_type": "RH", "value": 55}
        ]
    }"#;

    let readings = parse_data_response(body).unwrap();

    assert_eq!(readings.len(), 2);
    assert_eq!(readings[0].timestamp, "2024-01-01 00:00:00");
    assert_eq!(readings[0].sensor_measurement_type, "Temperature");
    assert_eq!(readings[0].value, 20.5);
    assert_eq!(readings[1].value, 55.0);
}

#[test]
fn skips_null_values_and_malformed_items() {
    let body = r#"{
        "data": [
            {"timestamp": "2024-01-01 00:00:00", "sensor_measurement_type": "Rain", "value": null},
            {"timestamp": "2024-01-01 00:00:00", "value": 1.0},
            "garbage",
            {"timestamp": "2024-01-01 00:00:00", "sensor_measurement_type": "Battery", "value": 4.1}
        ]
    }"#;

    let readings = parse_data_response(body).unwrap();

    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].sensor_measurement_type, "Battery");
}

#[test]
fn empty_data_array_is_not_an_error() {
    assert!(parse_data_response(r#"{"data": []}"#).unwrap().is_empty());
}

#[test]
fn missing_or_non_array_data_is_rejected() {
    assert_eq!(parse_data_response(r#"{"data": {}}"#), Err(FetchError::NotAnArray));
    assert_eq!(parse_data_response(r#"{"items": []}"#), Err(FetchError::NotAnArray));
    assert_eq!(parse_data_response("[]"), Err(FetchError::NotAnArray));
}

#[test]
fn invalid_json_is_a_decode_error() {
    assert!(matches!(
        parse_data_response("<html>502</html>"),
        Err(FetchError::Decode(_))
    ));
}

#[test]
fn error_body_message_falls_back() {
    assert_eq!(
        ApiErrorBody::message_from(r#"{"message": "Invalid token"}"#),
        "Invalid token"
    );
    assert_eq!(ApiErrorBody::message_from(r#"{"message": ""}"#), "Unknown error");
    assert_eq!(ApiErrorBody::message_from("Bad Gateway"), "Unknown error");
}

#[test]
fn status_error_formats_like_upstream() {
    let e = FetchError::Status {
        status: 401,
        message: "Invalid token".to_string(),
    };
    assert_eq!(e.to_string(), "API error: 401 - Invalid token");
}

#[test]
fn translate_falls_back_to_key() {
    assert_eq!(translate(Language::En, "windrose"), "Windrose");
    assert_eq!(translate(Language::My, "noSuchKey"), "noSuchKey");
}

#[test]
fn both_languages_cover_the_same_keys() {
    let en: Vec<&str> = table(Language::En).keys().copied().collect();
    let my: Vec<&str> = table(Language::My).keys().copied().collect();
    assert_eq!(en, my);
}
