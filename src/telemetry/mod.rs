//! Raw readings → canonical per-timestamp records → ordered series.

pub mod field;
pub mod merge;
pub mod reading;
pub mod series;

pub use field::{resolve, FieldKey};
pub use merge::{merge, MergedRecords};
pub use reading::{parse_timestamp, RawReading};
pub use series::{normalize, CanonicalRecord, Series};

use crate::selection::Device;

/// Run the full pipeline over one fetch's readings.
#[must_use]
pub fn build_series(device: Device, readings: &[RawReading]) -> Series {
    let merged = merge(readings);
    let series = normalize(device, merged);
    tracing::debug!(
        device = %device,
        readings = readings.len(),
        records = series.len(),
        "Normalized readings"
    );
    series
}
