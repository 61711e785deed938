use std::sync::Arc;
use tokio::sync::Mutex;

use crate::charts::Board;
use crate::config::Config;
use crate::dashboard::{CycleOutcome, Dashboard, ReadingSource};
use crate::licor::LicorClient;
use crate::selection::{FetchTicket, SelectionState};

/// The single dashboard served to every client.
pub type SharedDashboard = Arc<Mutex<Dashboard<Board>>>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub licor_client: Arc<LicorClient>,
    pub dashboard: SharedDashboard,
}

impl AppState {
    pub fn new(config: Config, licor_client: LicorClient) -> Self {
        let initial = SelectionState {
            device: config.default_device,
            window: config.default_window_preset.window_at(&chrono::Local::now()),
            language: config.default_language,
            chart_style: config.default_chart_style,
        };

        Self {
            config: Arc::new(config),
            licor_client: Arc::new(licor_client),
            dashboard: Arc::new(Mutex::new(Dashboard::new(initial, Board::new()))),
        }
    }

    /// Fetch for `ticket` and apply the result.
    ///
    /// The lock is released while the request is in flight, so a newer
    /// selection can supersede this cycle; its result is then discarded.
    pub async fn run_cycle(&self, ticket: FetchTicket) -> CycleOutcome {
        let result = self.licor_client.fetch(&ticket.request).await;
        self.dashboard.lock().await.complete(&ticket, result)
    }

    /// Start a cycle for the current selection and run it.
    pub async fn refresh(&self) -> CycleOutcome {
        let ticket = self.dashboard.lock().await.start();
        self.run_cycle(ticket).await
    }
}
