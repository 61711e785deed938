use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::selection::Device;
use crate::telemetry::field::FieldKey;
use crate::telemetry::merge::MergedRecords;

/// All fields observed at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalRecord {
    /// Timestamp exactly as the upstream API reported it
    pub timestamp: String,
    #[serde(skip)]
    pub at: DateTime<Utc>,
    pub fields: BTreeMap<FieldKey, f64>,
}

impl CanonicalRecord {
    #[must_use]
    pub fn new(timestamp: String, at: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            at,
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, key: FieldKey) -> Option<f64> {
        self.fields.get(&key).copied()
    }
}

/// Chronologically ordered records for one device.
///
/// Only [`normalize`] builds a non-empty series; once built it is never
/// mutated, and a new fetch replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    device: Device,
    records: Vec<CanonicalRecord>,
}

impl Series {
    #[must_use]
    pub fn empty(device: Device) -> Self {
        Self {
            device,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn device(&self) -> Device {
        self.device
    }

    #[must_use]
    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Sort merged records ascending by instant.
///
/// The sort is stable: records whose timestamps parse to the same instant
/// keep the order in which the merger first saw them.
#[must_use]
pub fn normalize(device: Device, records: MergedRecords) -> Series {
    let mut records: Vec<CanonicalRecord> = records.into_values().collect();
    records.sort_by_key(|record| record.at);
    Series { device, records }
}
