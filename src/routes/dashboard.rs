use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::charts::{targets, MountPoint, RenderSurface, Slot, TargetView};
use crate::common::AppState;
use crate::dashboard::DataStatus;
use crate::error::{AppError, AppResult};
use crate::locale;
use crate::selection::{Epoch, Language, SelectionState, UnknownValue};

#[derive(Debug, Serialize, ToSchema)]
pub struct SlotResponse {
    pub target: MountPoint,
    /// Published chart or placeholder; null while loading
    #[schema(value_type = Option<Object>)]
    pub slot: Option<Slot>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub selection: SelectionState,
    pub epoch: Epoch,
    pub status: DataStatus,
    /// True when the series shown predates a failed refresh
    pub stale: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub window_label: String,
    pub records: usize,
    pub live_charts: usize,
    pub slots: Vec<SlotResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TargetResponse {
    pub target: MountPoint,
    pub live: bool,
    #[schema(value_type = Object)]
    pub view: TargetView,
}

/// Everything the dashboard currently shows
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Dashboard retrieved successfully", body = DashboardResponse),
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let dashboard = state.dashboard.lock().await;
    let selection = dashboard.selection().clone();
    let board = dashboard.charts().surface();

    let slots = targets(selection.device.layout())
        .iter()
        .map(|&target| SlotResponse {
            target,
            slot: board.slot(target).cloned(),
        })
        .collect();

    Json(DashboardResponse {
        window_label: selection.window.display_in(&chrono::Local),
        epoch: dashboard.epoch(),
        status: dashboard.status(),
        stale: dashboard.is_stale(),
        error: dashboard.error().map(str::to_string),
        notice: dashboard.notice().map(str::to_string),
        records: dashboard.series().map_or(0, |series| series.len()),
        live_charts: dashboard.charts().live_count(),
        slots,
        selection,
    })
}

/// Content of one mount point
#[utoipa::path(
    get,
    path = "/api/targets/{mount_point}",
    params(
        ("mount_point" = String, Path, description = "Mount point, e.g. `pressure-chart`"),
    ),
    responses(
        (status = 200, description = "Target retrieved successfully", body = TargetResponse),
        (status = 404, description = "Not part of the current layout, or nothing loaded yet"),
    ),
    tag = "dashboard"
)]
pub async fn get_target(
    State(state): State<AppState>,
    Path(mount_point): Path<String>,
) -> AppResult<Json<TargetResponse>> {
    let target: MountPoint = mount_point
        .parse()
        .map_err(|e: UnknownValue| AppError::NotFound(e.to_string()))?;

    let dashboard = state.dashboard.lock().await;
    if !dashboard.charts().surface().has_target(target) {
        return Err(AppError::NotFound(format!(
            "Target '{target}' is not shown for {}",
            dashboard.selection().device
        )));
    }

    let view = dashboard
        .target_view(target)
        .ok_or_else(|| AppError::NotFound("No data loaded yet".to_string()))?;

    Ok(Json(TargetResponse {
        target,
        live: dashboard.charts().is_live(target),
        view,
    }))
}

/// Dismiss the error banner
#[utoipa::path(
    delete,
    path = "/api/dashboard/error",
    responses(
        (status = 204, description = "Error dismissed"),
    ),
    tag = "dashboard"
)]
pub async fn dismiss_error(State(state): State<AppState>) -> StatusCode {
    state.dashboard.lock().await.dismiss_error();
    StatusCode::NO_CONTENT
}

/// Translation table of a language
#[utoipa::path(
    get,
    path = "/api/locale/{language}",
    params(
        ("language" = String, Path, description = "`en` or `my`"),
    ),
    responses(
        (status = 200, description = "Translations retrieved successfully", body = BTreeMap<String, String>),
        (status = 400, description = "Unknown language"),
    ),
    tag = "dashboard"
)]
pub async fn get_locale(Path(language): Path<String>) -> AppResult<Json<BTreeMap<String, String>>> {
    let language: Language = language.parse()?;
    let table = locale::table(language)
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect();
    Ok(Json(table))
}
