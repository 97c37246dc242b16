use std::time::Duration;

use bazaar_core::DashboardSnapshot;
use reqwest::Client;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} answered with HTTP {status}")]
    Status { status: u16, url: String },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(bazaar_config::HTTP_TIMEOUT_SECS))
        .user_agent(concat!("bazaar-admin/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Read-only access to the admin API.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl DashboardClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn snapshot_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            bazaar_config::DASHBOARD_SNAPSHOT_PATH
        )
    }

    pub async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, NetError> {
        let url = self.snapshot_url();
        debug!("fetching dashboard snapshot from {url}");

        let mut req = self.client.get(&url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!("dashboard snapshot request failed: HTTP {status}");
            return Err(NetError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
