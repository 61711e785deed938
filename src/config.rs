use std::env;
use std::str::FromStr;

use crate::selection::{ChartStyle, Device, Language, WindowPreset};

#[derive(Debug, Clone)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // LI-COR Cloud API
    pub licor_base_url: String,
    pub licor_bearer_token: String,
    pub licor_timeout_seconds: u64,

    // API settings
    pub api_host: String,
    pub api_port: u16,

    // Initial selection
    pub default_device: Device,
    pub default_language: Language,
    pub default_chart_style: ChartStyle,
    pub default_window_preset: WindowPreset,

    // Application metadata
    pub deployment: Deployment,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if required environment variables are not set,
    /// or `ConfigError::Invalid` if a selection default names an unknown value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            // LI-COR Cloud API
            licor_base_url: env::var("LICOR_BASE_URL")
                .unwrap_or_else(|_| "https://api.licor.cloud/v1".to_string()),
            licor_bearer_token: env::var("LICOR_BEARER_TOKEN")
                .map_err(|_| ConfigError::Missing("LICOR_BEARER_TOKEN"))?,
            licor_timeout_seconds: env::var("LICOR_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap_or(60),

            // API settings
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            // Initial selection
            default_device: parse_var("DEFAULT_DEVICE", "MFSD Thaton Barometric")?,
            default_language: parse_var("DEFAULT_LANGUAGE", "en")?,
            default_chart_style: parse_var("DEFAULT_CHART_STYLE", "line")?,
            default_window_preset: parse_var("DEFAULT_WINDOW_PRESET", "last24Hours")?,

            // Application metadata
            deployment: Deployment::from_str(
                &env::var("DEPLOYMENT").unwrap_or_else(|_| "local".to_string()),
            ),
        })
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .map_err(|_| ConfigError::Invalid { name, value: raw })
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}
