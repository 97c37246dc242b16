//! Central configuration constants for runtime limits and defaults.

/// Storage key under which the selected order is persisted.
pub const SELECTED_ORDER_KEY: &str = "selectedOrder";

/// File name of the local state database inside the data directory.
pub const LOCAL_STATE_FILENAME: &str = "bazaar.redb";

/// Time an alert stays on screen in its exiting phase before it is removed.
pub const ALERT_EXIT_GRACE_MS: u64 = 300;

/// Default auto-dismiss delay for non-loading alerts.
pub const DEFAULT_ALERT_DURATION_MS: u64 = 5_000;

/// Backend used when `BAZAAR_API_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Path of the admin dashboard snapshot, relative to the API base.
pub const DASHBOARD_SNAPSHOT_PATH: &str = "admin/dashboard/";

/// Request timeout for backend calls.
pub const HTTP_TIMEOUT_SECS: u64 = 15;

pub const API_URL_ENV: &str = "BAZAAR_API_URL";
pub const API_TOKEN_ENV: &str = "BAZAAR_API_TOKEN";

/// Currency symbol used for all monetary amounts (Nigerian Naira).
pub const CURRENCY_SYMBOL: &str = "\u{20A6}";

/// API base URL from the environment, falling back to [`DEFAULT_API_BASE_URL`].
pub fn api_base_url() -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
}

/// Optional bearer token for the admin API.
pub fn api_token() -> Option<String> {
    std::env::var(API_TOKEN_ENV)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
