use reqwest::{header, Client};
use std::time::Duration;

use crate::config::Config;
use crate::dashboard::ReadingSource;
use crate::error::{AppError, AppResult, FetchError};
use crate::licor::models::{parse_data_response, ApiErrorBody};
use crate::selection::{Device, FetchRequest, TimeWindow};
use crate::telemetry::RawReading;

pub struct LicorClient {
    http_client: Client,
    base_url: String,
    bearer_token: String,
}

impl LicorClient {
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.licor_timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.licor_base_url.trim_end_matches('/').to_string(),
            bearer_token: config.licor_bearer_token.clone(),
        })
    }

    /// Get every reading a logger recorded inside `window`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Status` for non-2xx responses (with the server's
    /// message when it sent one), `FetchError::Transport` if the request could
    /// not be sent, and `FetchError::Decode`/`NotAnArray` for unusable bodies.
    pub async fn get_readings(
        &self,
        device: Device,
        window: &TimeWindow,
    ) -> Result<Vec<RawReading>, FetchError> {
        let url = format!("{}/data", self.base_url);
        let (start, end) = window.api_bounds();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("loggers", device.logger_id()),
                ("start_date_time", start.as_str()),
                ("end_date_time", end.as_str()),
            ])
            .header(header::ACCEPT, "application/json")
            .bearer_auth(&self.bearer_token)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to get response text: {e}")))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: ApiErrorBody::message_from(&body),
            });
        }

        parse_data_response(&body).inspect_err(|e| {
            tracing::error!(
                error = %e,
                body_preview = %body.chars().take(500).collect::<String>(),
                "Failed to parse data response"
            );
        })
    }
}

impl ReadingSource for LicorClient {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<RawReading>, FetchError> {
        self.get_readings(request.device, &request.window).await
    }
}
