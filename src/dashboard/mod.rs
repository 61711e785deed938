//! Fetch-cycle state machine tying selection, derivation and chart lifecycle together.
//!
//! A cycle is `begin` (issue a ticket, tear charts down), one fetch through a
//! [`ReadingSource`], then `complete`. Completion applies the result only if
//! the ticket's epoch is still current; otherwise it is discarded as stale.
//! `begin` and `complete` are separate calls so callers sharing a dashboard
//! need not hold it across the network await.

mod source;

pub use source::ReadingSource;

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::charts::{self, ChartRegistry, MountPoint, RenderSurface, TargetView};
use crate::error::FetchError;
use crate::locale::translate;
use crate::selection::{
    ChartStyle, Device, Epoch, FetchTicket, Language, SelectionController, SelectionState,
    TimeWindow, WindowPreset,
};
use crate::telemetry::{build_series, RawReading, Series};
use crate::views::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DataStatus {
    /// No cycle started yet
    Idle,
    Loading,
    Ready,
    /// Valid response without usable records
    Empty,
    Failed,
}

/// How a completed fetch was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    Fresh(Arc<Series>),
    /// A newer selection superseded this cycle; its result was dropped.
    Stale,
    Failed(FetchError),
}

pub struct Dashboard<S: RenderSurface> {
    selection: SelectionController,
    charts: ChartRegistry<S>,
    series: Option<Arc<Series>>,
    view: Option<Arc<ViewState>>,
    status: DataStatus,
    stale: bool,
    error: Option<String>,
}

impl<S: RenderSurface> Dashboard<S> {
    pub fn new(initial: SelectionState, surface: S) -> Self {
        Self {
            selection: SelectionController::new(initial),
            charts: ChartRegistry::new(surface),
            series: None,
            view: None,
            status: DataStatus::Idle,
            stale: false,
            error: None,
        }
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.selection.epoch()
    }

    #[must_use]
    pub fn status(&self) -> DataStatus {
        self.status
    }

    /// Localized error banner, until dismissed or the next cycle starts.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Localized notice for a successful fetch with nothing in it.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        (self.status == DataStatus::Empty)
            .then(|| translate(self.selection().language, "noDataFound"))
    }

    /// True when the published series predates a failed refresh.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    #[must_use]
    pub fn series(&self) -> Option<&Arc<Series>> {
        self.series.as_ref()
    }

    #[must_use]
    pub fn view_state(&self) -> Option<&Arc<ViewState>> {
        self.view.as_ref()
    }

    #[must_use]
    pub fn charts(&self) -> &ChartRegistry<S> {
        &self.charts
    }

    /// Content of `target` under the current view, if one is published.
    #[must_use]
    pub fn target_view(&self, target: MountPoint) -> Option<TargetView> {
        let view = self.view.as_ref()?;
        Some(charts::build(target, view, self.selection().device.layout()))
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Start a cycle for the current selection (first load, manual refresh).
    pub fn start(&mut self) -> FetchTicket {
        let ticket = self.selection.reload();
        self.begin(&ticket);
        ticket
    }

    pub fn set_device(&mut self, device: Device) -> Option<FetchTicket> {
        let ticket = self.selection.set_device(device)?;
        self.begin(&ticket);
        Some(ticket)
    }

    pub fn set_time_window(&mut self, window: TimeWindow) -> Option<FetchTicket> {
        let ticket = self.selection.set_time_window(window)?;
        self.begin(&ticket);
        Some(ticket)
    }

    pub fn set_window_preset(&mut self, preset: WindowPreset) -> Option<FetchTicket> {
        let ticket = self.selection.set_window_preset(preset)?;
        self.begin(&ticket);
        Some(ticket)
    }

    pub fn set_window_preset_at<Tz: TimeZone>(
        &mut self,
        preset: WindowPreset,
        now: &DateTime<Tz>,
    ) -> Option<FetchTicket> {
        let ticket = self.selection.set_window_preset_at(preset, now)?;
        self.begin(&ticket);
        Some(ticket)
    }

    pub fn set_language(&mut self, language: Language) -> Option<FetchTicket> {
        let ticket = self.selection.set_language(language)?;
        self.begin(&ticket);
        Some(ticket)
    }

    pub fn set_chart_style(&mut self, style: ChartStyle) -> Option<FetchTicket> {
        let ticket = self.selection.set_chart_style(style)?;
        self.begin(&ticket);
        Some(ticket)
    }

    fn begin(&mut self, ticket: &FetchTicket) {
        self.status = DataStatus::Loading;
        self.error = None;
        // Series survives as the stale fallback; the view is rebuilt on completion
        self.view = None;
        self.charts.reset(ticket.request.device.layout());
        tracing::info!(
            epoch = ticket.epoch.value(),
            device = %ticket.request.device,
            start = %ticket.request.window.start,
            end = %ticket.request.window.end,
            "Fetch cycle started"
        );
    }

    /// Apply the result of `ticket`'s fetch.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<RawReading>, FetchError>,
    ) -> CycleOutcome {
        if !self.selection.is_current(ticket.epoch) {
            tracing::debug!(
                ticket_epoch = ticket.epoch.value(),
                current_epoch = self.epoch().value(),
                "Discarding stale fetch result"
            );
            return CycleOutcome::Stale;
        }

        match result {
            Ok(readings) => {
                let series = Arc::new(build_series(ticket.request.device, &readings));
                self.status = if series.is_empty() {
                    DataStatus::Empty
                } else {
                    DataStatus::Ready
                };
                self.stale = false;
                self.series = Some(Arc::clone(&series));
                self.render();
                tracing::info!(
                    epoch = ticket.epoch.value(),
                    records = series.len(),
                    live_charts = self.charts.live_count(),
                    "Fetch cycle applied"
                );
                CycleOutcome::Fresh(series)
            }
            Err(e) => {
                let language = self.selection().language;
                self.status = DataStatus::Failed;
                self.error = Some(format!("{} {e}", translate(language, "failedToFetch")));
                tracing::warn!(epoch = ticket.epoch.value(), error = %e, "Fetch cycle failed");

                // Keep showing the previous series, flagged, if it is for this device
                let device = self.selection().device;
                if self.series.as_ref().is_some_and(|s| s.device() == device) {
                    self.stale = true;
                    self.render();
                } else {
                    self.stale = false;
                    self.series = None;
                    self.view = None;
                }
                CycleOutcome::Failed(e)
            }
        }
    }

    /// Run a whole cycle against `source` without releasing `self`.
    pub async fn run<R: ReadingSource>(&mut self, ticket: FetchTicket, source: &R) -> CycleOutcome {
        let result = source.fetch(&ticket.request).await;
        self.complete(&ticket, result)
    }

    /// Refresh the current selection from `source`.
    pub async fn refresh<R: ReadingSource>(&mut self, source: &R) -> CycleOutcome {
        let ticket = self.start();
        self.run(ticket, source).await
    }

    /// Destroy every chart, as when the dashboard goes away.
    pub fn unmount(&mut self) {
        self.charts.teardown();
    }

    fn render(&mut self) {
        let Some(series) = self.series.as_ref() else {
            return;
        };
        let selection = self.selection.state();
        let view = Arc::new(ViewState::derive(
            series,
            selection.chart_style,
            selection.language,
        ));
        let layout = selection.device.layout();

        self.charts.reset(layout);
        for target in MountPoint::ALL {
            let target_view = charts::build(target, &view, layout);
            self.charts.reconcile(target, &target_view);
        }
        self.view = Some(view);
    }
}
