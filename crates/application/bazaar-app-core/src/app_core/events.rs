use bazaar_core::DashboardSnapshot;

use crate::domain::RequestId;

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Navigation
    RouteChanged(&'static str),

    // Dashboard fetch
    DashboardRequested {
        request_id: RequestId,
    },
    DashboardLoaded {
        request_id: RequestId,
        snapshot: Box<DashboardSnapshot>,
    },
    DashboardFailed {
        request_id: RequestId,
        message: String,
    },
}

impl DomainEvent {
    /// The fetch this event answers, if it answers one.
    pub fn answers(&self) -> Option<RequestId> {
        match self {
            DomainEvent::DashboardLoaded { request_id, .. }
            | DomainEvent::DashboardFailed { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }
}
