use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::AppState;
use crate::dashboard::{CycleOutcome, DataStatus};
use crate::error::{AppError, AppResult};
use crate::selection::{
    ChartStyle, Device, Epoch, FetchTicket, Language, SelectionState, TimeWindow, WindowPreset,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct SelectionResponse {
    pub selection: SelectionState,
    pub epoch: Epoch,
    pub status: DataStatus,
    /// Window in server-local time, e.g. `Jan 1, 2024, 12:00 AM to Jan 2, 2024, 12:00 AM`
    pub window_label: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeviceRequest {
    /// Display name or logger id
    pub device: String,
}

/// Either a named preset or an explicit range.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum WindowRequest {
    Preset {
        /// e.g. `today`, `last6Hours`, `last7Days`
        preset: String,
    },
    Range {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LanguageRequest {
    pub language: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChartStyleRequest {
    pub chart_style: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CycleResult {
    /// The selection already had this value; no fetch was made
    Unchanged,
    Fresh,
    /// Superseded by a newer selection before the fetch returned
    Stale,
    Failed,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CycleResponse {
    pub result: CycleResult,
    pub epoch: Epoch,
    pub status: DataStatus,
    /// Records in the applied series
    pub records: Option<usize>,
    pub error: Option<String>,
}

impl CycleResponse {
    fn from_outcome(outcome: &CycleOutcome, epoch: Epoch, status: DataStatus) -> Self {
        let (result, records, error) = match outcome {
            CycleOutcome::Fresh(series) => (CycleResult::Fresh, Some(series.len()), None),
            CycleOutcome::Stale => (CycleResult::Stale, None, None),
            CycleOutcome::Failed(e) => (CycleResult::Failed, None, Some(e.to_string())),
        };
        Self {
            result,
            epoch,
            status,
            records,
            error,
        }
    }
}

async fn settle(state: &AppState, ticket: Option<FetchTicket>) -> CycleResponse {
    let Some(ticket) = ticket else {
        let dashboard = state.dashboard.lock().await;
        return CycleResponse {
            result: CycleResult::Unchanged,
            epoch: dashboard.epoch(),
            status: dashboard.status(),
            records: dashboard.series().map(|series| series.len()),
            error: None,
        };
    };

    let epoch = ticket.epoch;
    let outcome = state.run_cycle(ticket).await;
    let status = state.dashboard.lock().await.status();
    CycleResponse::from_outcome(&outcome, epoch, status)
}

/// Current selection
#[utoipa::path(
    get,
    path = "/api/selection",
    responses(
        (status = 200, description = "Selection retrieved successfully", body = SelectionResponse),
    ),
    tag = "selection"
)]
pub async fn get_selection(State(state): State<AppState>) -> Json<SelectionResponse> {
    let dashboard = state.dashboard.lock().await;
    let selection = dashboard.selection().clone();
    Json(SelectionResponse {
        window_label: selection.window.display_in(&chrono::Local),
        selection,
        epoch: dashboard.epoch(),
        status: dashboard.status(),
    })
}

/// Switch weather station
#[utoipa::path(
    put,
    path = "/api/selection/device",
    request_body = DeviceRequest,
    responses(
        (status = 200, description = "Selection applied", body = CycleResponse),
        (status = 400, description = "Unknown device"),
    ),
    tag = "selection"
)]
pub async fn set_device(
    State(state): State<AppState>,
    Json(request): Json<DeviceRequest>,
) -> AppResult<Json<CycleResponse>> {
    let device: Device = request.device.parse()?;
    let ticket = state.dashboard.lock().await.set_device(device);
    Ok(Json(settle(&state, ticket).await))
}

/// Change the time window
#[utoipa::path(
    put,
    path = "/api/selection/window",
    request_body = WindowRequest,
    responses(
        (status = 200, description = "Selection applied", body = CycleResponse),
        (status = 400, description = "Unknown preset or start after end"),
    ),
    tag = "selection"
)]
pub async fn set_window(
    State(state): State<AppState>,
    Json(request): Json<WindowRequest>,
) -> AppResult<Json<CycleResponse>> {
    let ticket = match request {
        WindowRequest::Preset { preset } => {
            let preset: WindowPreset = preset.parse()?;
            state.dashboard.lock().await.set_window_preset(preset)
        }
        WindowRequest::Range { start, end } => {
            let window = TimeWindow::new(start, end)?;
            state.dashboard.lock().await.set_time_window(window)
        }
    };
    Ok(Json(settle(&state, ticket).await))
}

/// Change display language
#[utoipa::path(
    put,
    path = "/api/selection/language",
    request_body = LanguageRequest,
    responses(
        (status = 200, description = "Selection applied", body = CycleResponse),
        (status = 400, description = "Unknown language"),
    ),
    tag = "selection"
)]
pub async fn set_language(
    State(state): State<AppState>,
    Json(request): Json<LanguageRequest>,
) -> AppResult<Json<CycleResponse>> {
    let language: Language = request.language.parse()?;
    let ticket = state.dashboard.lock().await.set_language(language);
    Ok(Json(settle(&state, ticket).await))
}

/// Switch between line and bar charts
#[utoipa::path(
    put,
    path = "/api/selection/chart-style",
    request_body = ChartStyleRequest,
    responses(
        (status = 200, description = "Selection applied", body = CycleResponse),
        (status = 400, description = "Unknown chart style"),
    ),
    tag = "selection"
)]
pub async fn set_chart_style(
    State(state): State<AppState>,
    Json(request): Json<ChartStyleRequest>,
) -> AppResult<Json<CycleResponse>> {
    let style: ChartStyle = request.chart_style.parse()?;
    let ticket = state.dashboard.lock().await.set_chart_style(style);
    Ok(Json(settle(&state, ticket).await))
}

/// Re-fetch the current selection
///
/// Unlike selection changes, a failed refresh is reported as 502. The
/// dashboard still keeps the error banner and any stale series.
#[utoipa::path(
    post,
    path = "/api/refresh",
    responses(
        (status = 200, description = "Refresh applied or superseded", body = CycleResponse),
        (status = 502, description = "LI-COR Cloud request failed"),
    ),
    tag = "selection"
)]
pub async fn refresh(State(state): State<AppState>) -> AppResult<Json<CycleResponse>> {
    let ticket = state.dashboard.lock().await.start();
    let epoch = ticket.epoch;
    match state.run_cycle(ticket).await {
        CycleOutcome::Failed(e) => Err(AppError::LicorApi(e)),
        outcome => {
            let status = state.dashboard.lock().await.status();
            Ok(Json(CycleResponse::from_outcome(&outcome, epoch, status)))
        }
    }
}
