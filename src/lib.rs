//! Weather Dash - telemetry normalization and dashboard views for LI-COR Cloud weather stations
//!
//! This library exposes the core modules for testing and reuse.

pub mod charts;
pub mod common;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod licor;
pub mod locale;
pub mod routes;
pub mod selection;
pub mod telemetry;
pub mod views;
