use indexmap::IndexMap;

use crate::telemetry::field::resolve;
use crate::telemetry::reading::{parse_timestamp, RawReading};
use crate::telemetry::series::CanonicalRecord;

/// Records keyed by their raw timestamp, in first-seen order.
pub type MergedRecords = IndexMap<String, CanonicalRecord>;

/// Fold flat readings into one record per distinct timestamp.
///
/// Readings with an unrecognised label or an unparseable timestamp are
/// skipped without affecting the rest of the batch. A record is created on
/// the first valid reading for its timestamp, so no record is ever empty.
/// When the same `(timestamp, field)` pair appears more than once, the
/// reading that comes later in `readings` wins.
pub fn merge<'a, I>(readings: I) -> MergedRecords
where
    I: IntoIterator<Item = &'a RawReading>,
{
    let mut records = MergedRecords::new();
    let mut unresolved = 0usize;

    for reading in readings {
        let Some(key) = resolve(&reading.sensor_measurement_type) else {
            unresolved += 1;
            tracing::trace!(
                label = %reading.sensor_measurement_type,
                "Ignoring reading with unrecognised sensor label"
            );
            continue;
        };

        if let Some(record) = records.get_mut(&reading.timestamp) {
            record.fields.insert(key, reading.value);
            continue;
        }

        let Some(at) = parse_timestamp(&reading.timestamp) else {
            tracing::debug!(
                timestamp = %reading.timestamp,
                "Ignoring reading with unparseable timestamp"
            );
            continue;
        };

        let mut record = CanonicalRecord::new(reading.timestamp.clone(), at);
        record.fields.insert(key, reading.value);
        records.insert(reading.timestamp.clone(), record);
    }

    if unresolved > 0 {
        tracing::debug!(unresolved, "Skipped readings with unrecognised labels");
    }

    records
}
