use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::charts::{targets, MountPoint};
use crate::selection::{Device, DeviceLayout};

#[derive(Debug, Serialize, ToSchema)]
pub struct DeviceResponse {
    pub name: Device,
    pub logger_id: String,
    pub layout: DeviceLayout,
    /// Mount points the device's dashboard shows
    pub targets: Vec<MountPoint>,
}

impl From<Device> for DeviceResponse {
    fn from(device: Device) -> Self {
        let layout = device.layout();
        Self {
            name: device,
            logger_id: device.logger_id().to_string(),
            layout,
            targets: targets(layout).to_vec(),
        }
    }
}

/// List the selectable weather stations
#[utoipa::path(
    get,
    path = "/api/devices",
    responses(
        (status = 200, description = "Devices retrieved successfully", body = Vec<DeviceResponse>),
    ),
    tag = "selection"
)]
pub async fn list_devices() -> Json<Vec<DeviceResponse>> {
    Json(Device::ALL.into_iter().map(DeviceResponse::from).collect())
}
