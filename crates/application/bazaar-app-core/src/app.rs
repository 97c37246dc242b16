use anyhow::Context;
use bazaar_core::DashboardSnapshot;
use bazaar_infra::net::{default_http_client, DashboardClient};

use crate::app_core::AppStore;
use crate::async_runtime;
use crate::kernel::AdminKernel;
use crate::persistence::RedbSelectionRepo;
use crate::ports::DashboardSource;

/// Dashboard snapshots fetched over HTTP on the shared runtime.
#[derive(Debug, Clone)]
pub struct HttpDashboardSource {
    client: DashboardClient,
}

impl HttpDashboardSource {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let http = default_http_client().unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client: DashboardClient::new(http, base_url).with_token(token),
        }
    }

    /// Base URL and token from `BAZAAR_API_URL` / `BAZAAR_API_TOKEN`.
    pub fn from_env() -> Self {
        Self::new(bazaar_config::api_base_url(), bazaar_config::api_token())
    }

    pub fn client(&self) -> &DashboardClient {
        &self.client
    }
}

impl DashboardSource for HttpDashboardSource {
    fn fetch_snapshot_blocking(&self) -> anyhow::Result<DashboardSnapshot> {
        let rt = async_runtime::http_runtime()?;
        let snapshot = rt
            .block_on(self.client.fetch_snapshot())
            .with_context(|| format!("GET {}", self.client.snapshot_url()))?;
        Ok(snapshot)
    }
}

pub type AdminApplication = AdminKernel<RedbSelectionRepo, HttpDashboardSource>;

/// Production wiring: redb selection in the platform data dir, HTTP dashboard.
pub fn build_application() -> anyhow::Result<AdminApplication> {
    let repo = RedbSelectionRepo::open_default()?;
    let mut app = AdminKernel::new(AppStore::default(), repo, HttpDashboardSource::from_env());
    app.initialize();
    Ok(app)
}
