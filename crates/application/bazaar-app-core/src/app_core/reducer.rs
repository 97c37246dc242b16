use crate::domain::{AppState, DashboardState};

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::RouteChanged(path) => state.route = path,

        DomainEvent::DashboardRequested { request_id } => {
            state.dashboard_request = Some(request_id);
            state.dashboard = DashboardState::Loading;
        }

        DomainEvent::DashboardLoaded {
            request_id,
            snapshot,
        } => {
            if state.dashboard_request == Some(request_id) {
                state.dashboard = DashboardState::Ready(snapshot);
                state.dashboard_request = None;
            }
        }

        DomainEvent::DashboardFailed {
            request_id,
            message,
        } => {
            if state.dashboard_request == Some(request_id) {
                state.dashboard = DashboardState::Failed { message };
                state.dashboard_request = None;
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::DashboardSnapshot;

    #[test]
    fn stale_answers_are_ignored() {
        let first = uuid::Uuid::new_v4();
        let second = uuid::Uuid::new_v4();

        let mut s = reduce(AppState::default(), DomainEvent::DashboardRequested { request_id: first });
        s = reduce(s, DomainEvent::DashboardRequested { request_id: second });
        s = reduce(
            s,
            DomainEvent::DashboardFailed {
                request_id: first,
                message: "timeout".into(),
            },
        );
        assert!(s.dashboard.is_loading());

        s = reduce(
            s,
            DomainEvent::DashboardLoaded {
                request_id: second,
                snapshot: Box::default(),
            },
        );
        assert_eq!(s.dashboard.snapshot(), Some(&DashboardSnapshot::default()));
        assert_eq!(s.dashboard_request, None);
    }

    #[test]
    fn failure_is_recorded_with_its_message() {
        let id = uuid::Uuid::new_v4();
        let s = reduce(AppState::default(), DomainEvent::DashboardRequested { request_id: id });
        let s = reduce(
            s,
            DomainEvent::DashboardFailed {
                request_id: id,
                message: "HTTP 500".into(),
            },
        );
        match s.dashboard {
            DashboardState::Failed { message } => assert_eq!(message, "HTTP 500"),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
