use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::telemetry::{FieldKey, Series};

/// Most recent value of one field and when it was reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestValue {
    pub value: f64,
    pub timestamp: String,
    pub at: DateTime<Utc>,
}

/// Latest value of `field`, scanning from the end of the series.
///
/// Among records sharing the newest instant, the one later in series order
/// wins. `None` means the series never reported the field.
#[must_use]
pub fn latest_value(series: &Series, field: FieldKey) -> Option<LatestValue> {
    series.records().iter().rev().find_map(|record| {
        record.get(field).map(|value| LatestValue {
            value,
            timestamp: record.timestamp.clone(),
            at: record.at,
        })
    })
}

/// Latest value for every field that has data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatestSnapshot {
    values: BTreeMap<FieldKey, LatestValue>,
}

impl LatestSnapshot {
    #[must_use]
    pub fn from_series(series: &Series) -> Self {
        let values = FieldKey::ALL
            .into_iter()
            .filter_map(|field| latest_value(series, field).map(|latest| (field, latest)))
            .collect();
        Self { values }
    }

    #[must_use]
    pub fn get(&self, field: FieldKey) -> Option<&LatestValue> {
        self.values.get(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fields with data, in `FieldKey` order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &LatestValue)> {
        self.values.iter().map(|(field, latest)| (*field, latest))
    }
}
