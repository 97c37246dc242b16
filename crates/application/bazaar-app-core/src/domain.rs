use bazaar_core::DashboardSnapshot;

pub type RequestId = uuid::Uuid;

pub const HOME_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Default)]
pub enum DashboardState {
    #[default]
    Idle,
    Loading,
    Ready(Box<DashboardSnapshot>),
    Failed {
        message: String,
    },
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match self {
            DashboardState::Ready(s) => Some(s.as_ref()),
            _ => None,
        }
    }
}

/// View-level state that is not owned by one of the stores.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Path of the page currently shown.
    pub route: &'static str,
    pub dashboard: DashboardState,
    /// The fetch whose answer we are waiting for; older answers are dropped.
    pub dashboard_request: Option<RequestId>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: HOME_PATH,
            dashboard: DashboardState::Idle,
            dashboard_request: None,
        }
    }
}
