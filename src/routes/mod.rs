pub mod dashboard;
pub mod devices;
pub mod health;
pub mod selection;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        devices::list_devices,
        selection::get_selection,
        selection::set_device,
        selection::set_window,
        selection::set_language,
        selection::set_chart_style,
        selection::refresh,
        dashboard::get_dashboard,
        dashboard::get_target,
        dashboard::dismiss_error,
        dashboard::get_locale,
    ),
    components(
        schemas(
            devices::DeviceResponse,
            selection::SelectionResponse,
            selection::DeviceRequest,
            selection::WindowRequest,
            selection::LanguageRequest,
            selection::ChartStyleRequest,
            selection::CycleResult,
            selection::CycleResponse,
            dashboard::DashboardResponse,
            dashboard::SlotResponse,
            dashboard::TargetResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "selection", description = "Device, time window, language and chart style"),
        (name = "dashboard", description = "Derived views and chart slots"),
    ),
    info(
        title = "Weather Dash API",
        description = "Weather-station telemetry dashboard for LI-COR Cloud loggers",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/devices", get(devices::list_devices))
        .route("/selection", get(selection::get_selection))
        .route("/selection/device", put(selection::set_device))
        .route("/selection/window", put(selection::set_window))
        .route("/selection/language", put(selection::set_language))
        .route("/selection/chart-style", put(selection::set_chart_style))
        .route("/refresh", post(selection::refresh))
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/dashboard/error", delete(dashboard::dismiss_error))
        .route("/targets/{mount_point}", get(dashboard::get_target))
        .route("/locale/{language}", get(dashboard::get_locale))
        .layer(RequestBodyLimitLayer::new(64 * 1024));

    let health_routes = Router::new().route("/healthz", get(health::healthz));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .merge(docs_routes)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
