use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::selection::state::{ChartStyle, Device, Language, SelectionState};
use crate::selection::window::{TimeWindow, WindowPreset};

/// Monotonic marker of the selection a fetch cycle was started for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema,
)]
pub struct Epoch(u64);

impl Epoch {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the data-fetch boundary is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub device: Device,
    pub window: TimeWindow,
}

/// A scheduled fetch cycle. Its results only apply while `epoch` is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub epoch: Epoch,
    pub request: FetchRequest,
    pub selection: SelectionState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Device(Device),
    Window(TimeWindow),
    Language(Language),
    ChartStyle(ChartStyle),
}

/// Next selection after `change`, or `None` when nothing would change.
#[must_use]
pub fn reduce(state: &SelectionState, change: SelectionChange) -> Option<SelectionState> {
    let mut next = state.clone();
    match change {
        SelectionChange::Device(device) => next.device = device,
        SelectionChange::Window(window) => next.window = window,
        SelectionChange::Language(language) => next.language = language,
        SelectionChange::ChartStyle(style) => next.chart_style = style,
    }
    (next != *state).then_some(next)
}

/// Owns the selection and hands out one ticket per effective change.
#[derive(Debug, Clone)]
pub struct SelectionController {
    state: SelectionState,
    epoch: Epoch,
}

impl SelectionController {
    #[must_use]
    pub fn new(initial: SelectionState) -> Self {
        Self {
            state: initial,
            epoch: Epoch::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    #[must_use]
    pub fn is_current(&self, epoch: Epoch) -> bool {
        self.epoch == epoch
    }

    /// Apply a change; a ticket is issued only if the selection actually moved.
    pub fn apply(&mut self, change: SelectionChange) -> Option<FetchTicket> {
        let next = reduce(&self.state, change)?;
        self.state = next;
        Some(self.advance())
    }

    /// Start a new cycle for the unchanged selection (initial load, manual refresh).
    pub fn reload(&mut self) -> FetchTicket {
        self.advance()
    }

    pub fn set_device(&mut self, device: Device) -> Option<FetchTicket> {
        self.apply(SelectionChange::Device(device))
    }

    pub fn set_time_window(&mut self, window: TimeWindow) -> Option<FetchTicket> {
        self.apply(SelectionChange::Window(window))
    }

    /// Resolve `preset` against the current local time and select it.
    pub fn set_window_preset(&mut self, preset: WindowPreset) -> Option<FetchTicket> {
        self.set_window_preset_at(preset, &Local::now())
    }

    pub fn set_window_preset_at<Tz: TimeZone>(
        &mut self,
        preset: WindowPreset,
        now: &DateTime<Tz>,
    ) -> Option<FetchTicket> {
        self.set_time_window(preset.window_at(now))
    }

    pub fn set_language(&mut self, language: Language) -> Option<FetchTicket> {
        self.apply(SelectionChange::Language(language))
    }

    pub fn set_chart_style(&mut self, style: ChartStyle) -> Option<FetchTicket> {
        self.apply(SelectionChange::ChartStyle(style))
    }

    fn advance(&mut self) -> FetchTicket {
        self.epoch = self.epoch.next();
        tracing::debug!(
            epoch = self.epoch.value(),
            device = %self.state.device,
            language = %self.state.language,
            chart_style = %self.state.chart_style,
            "Selection epoch advanced"
        );
        FetchTicket {
            epoch: self.epoch,
            request: FetchRequest {
                device: self.state.device,
                window: self.state.window,
            },
            selection: self.state.clone(),
        }
    }
}
