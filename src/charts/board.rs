use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::charts::layout::{self, MountPoint};
use crate::charts::registry::RenderSurface;
use crate::charts::visual::Visual;
use crate::selection::DeviceLayout;

/// Handle of a chart published on a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartInstance {
    pub id: Uuid,
}

/// What a mount point currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Slot {
    Chart { instance: Uuid, visual: Visual },
    Placeholder { message: String },
}

/// In-memory render surface served to HTTP clients.
///
/// Mount points exist only while they belong to the active device layout.
#[derive(Debug, Default)]
pub struct Board {
    layout: Option<DeviceLayout>,
    slots: BTreeMap<MountPoint, Slot>,
    created: u64,
    destroyed: u64,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the set of mount points; slots outside the new layout are dropped.
    pub fn set_layout(&mut self, layout: DeviceLayout) {
        self.layout = Some(layout);
        self.slots.retain(|target, _| layout::contains(layout, *target));
    }

    /// Remove every placeholder, leaving charts to their owner.
    pub fn clear_placeholders(&mut self) {
        self.slots.retain(|_, slot| matches!(slot, Slot::Chart { .. }));
    }

    #[must_use]
    pub fn layout(&self) -> Option<DeviceLayout> {
        self.layout
    }

    #[must_use]
    pub fn slot(&self, target: MountPoint) -> Option<&Slot> {
        self.slots.get(&target)
    }

    pub fn slots(&self) -> impl Iterator<Item = (MountPoint, &Slot)> {
        self.slots.iter().map(|(target, slot)| (*target, slot))
    }

    /// Charts currently published.
    #[must_use]
    pub fn live_charts(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| matches!(slot, Slot::Chart { .. }))
            .count()
    }

    /// Lifetime `(created, destroyed)` chart counts.
    #[must_use]
    pub fn churn(&self) -> (u64, u64) {
        (self.created, self.destroyed)
    }
}

impl RenderSurface for Board {
    type Handle = ChartInstance;

    fn has_target(&self, target: MountPoint) -> bool {
        self.layout.is_some_and(|layout| layout::contains(layout, target))
    }

    fn create(&mut self, target: MountPoint, visual: &Visual) -> ChartInstance {
        let instance = ChartInstance { id: Uuid::new_v4() };
        self.slots.insert(
            target,
            Slot::Chart {
                instance: instance.id,
                visual: visual.clone(),
            },
        );
        self.created += 1;
        instance
    }

    fn destroy(&mut self, target: MountPoint, handle: ChartInstance) {
        let owned = matches!(
            self.slots.get(&target),
            Some(Slot::Chart { instance, .. }) if *instance == handle.id
        );
        if owned {
            self.slots.remove(&target);
        }
        self.destroyed += 1;
    }

    fn show_placeholder(&mut self, target: MountPoint, message: &str) {
        self.slots.insert(
            target,
            Slot::Placeholder {
                message: message.to_string(),
            },
        );
    }

    fn prepare(&mut self, layout: DeviceLayout) {
        self.clear_placeholders();
        self.set_layout(layout);
    }
}
