use std::sync::Mutex;
use std::time::{Duration, Instant};

use bazaar_app_core::app_core::{AppCommand, AppStore, DomainEvent};
use bazaar_app_core::domain::{AppState, DashboardState};
use bazaar_app_core::error::AccessError;
use bazaar_app_core::kernel::AdminKernel;
use bazaar_app_core::ports::{DashboardSource, SelectionRepo};
use bazaar_app_core::session::AuthStep;
use bazaar_core::{AlertKind, DashboardSnapshot, Order, OrderId, OrderStatus};

#[derive(Default)]
struct MemoryRepo {
    slot: Mutex<Option<Order>>,
}

impl SelectionRepo for MemoryRepo {
    fn load(&self) -> anyhow::Result<Option<Order>> {
        Ok(self.slot.lock().unwrap().clone())
    }
    fn save(&self, order: &Order) -> anyhow::Result<()> {
        *self.slot.lock().unwrap() = Some(order.clone());
        Ok(())
    }
    fn clear(&self) -> anyhow::Result<()> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

struct FixedSource(Result<serde_json::Value, &'static str>);

impl DashboardSource for FixedSource {
    fn fetch_snapshot_blocking(&self) -> anyhow::Result<DashboardSnapshot> {
        match &self.0 {
            Ok(v) => Ok(serde_json::from_value(v.clone())?),
            Err(msg) => Err(anyhow::anyhow!("{msg}").context("GET http://stub/admin/dashboard/")),
        }
    }
}

fn kernel(source: FixedSource) -> AdminKernel<MemoryRepo, FixedSource> {
    AdminKernel::new(AppStore::default(), MemoryRepo::default(), source)
}

fn tick_until_settled(k: &mut AdminKernel<MemoryRepo, FixedSource>) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while k.state().dashboard.is_loading() {
        assert!(Instant::now() < deadline, "dashboard fetch never settled");
        k.tick(Instant::now());
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn stores_are_unavailable_before_initialize() {
    let mut k = kernel(FixedSource(Err("unused")));
    assert!(!k.is_initialized());
    assert!(matches!(
        k.handle(),
        Err(AccessError::NotInitialized { .. })
    ));
    assert!(k.view().is_err());
    assert_eq!(
        k.dispatch(AppCommand::OpenAuth(AuthStep::Register))
            .unwrap_err(),
        AccessError::NotInitialized { store: "shared" }
    );

    k.initialize();
    assert!(k.handle().is_ok());
    k.dispatch(AppCommand::OpenAuth(AuthStep::Register)).unwrap();
    assert_eq!(k.view().unwrap().auth.step(), AuthStep::Register);
}

#[test]
fn navigation_only_accepts_registered_paths() {
    let mut k = kernel(FixedSource(Err("unused")));
    k.dispatch(AppCommand::Navigate("/orders".into())).unwrap();
    assert_eq!(k.state().route, "/orders");

    k.dispatch(AppCommand::Navigate("/nowhere".into())).unwrap();
    assert_eq!(k.state().route, "/orders");
}

#[test]
fn loaded_snapshot_feeds_the_order_working_set() {
    let mut k = kernel(FixedSource(Ok(serde_json::json!({
        "totals": {"orders": {"value": 2}},
        "recent": {"orders": [
            {"id": 1, "status": "pending"},
            {"id": "2", "status": "completed", "total": 90}
        ]}
    }))));
    k.initialize();

    k.dispatch(AppCommand::RefreshDashboard).unwrap();
    assert!(k.state().dashboard.is_loading());
    tick_until_settled(&mut k);

    let state = k.state();
    let snapshot = state.dashboard.snapshot().expect("snapshot loaded");
    assert_eq!(snapshot.totals.orders.value, 2.0);
    assert!(state.dashboard_request.is_none());

    let ids: Vec<_> = k
        .view()
        .unwrap()
        .orders
        .orders()
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(ids, vec![OrderId(1), OrderId(2)]);

    k.dispatch(AppCommand::SelectOrder(OrderId(2))).unwrap();
    assert_eq!(
        k.view().unwrap().orders.selected_order().map(|o| o.status),
        Some(OrderStatus::Completed)
    );
}

#[test]
fn failed_fetch_raises_an_error_alert_and_keeps_orders() {
    let mut k = kernel(FixedSource(Err("connection refused")));
    k.initialize();
    k.handle()
        .unwrap()
        .orders
        .update_orders(vec![Order::new(4, OrderStatus::Pending)]);

    k.dispatch(AppCommand::RefreshDashboard).unwrap();
    tick_until_settled(&mut k);

    match k.state().dashboard {
        DashboardState::Failed { message } => assert!(message.contains("connection refused")),
        other => panic!("expected failure, got {other:?}"),
    }
    let stores = k.view().unwrap();
    assert_eq!(stores.orders.orders().len(), 1);
    let alert = stores.alerts.queue().iter().next().expect("error alert");
    assert_eq!(alert.kind, AlertKind::Error);
    assert_eq!(alert.title.as_deref(), Some("Dashboard unavailable"));
}

#[test]
fn failure_message_keeps_the_underlying_cause() {
    let mut k = kernel(FixedSource(Err("HTTP status 401 Unauthorized")));
    k.initialize();

    k.dispatch(AppCommand::RefreshDashboard).unwrap();
    tick_until_settled(&mut k);

    let DashboardState::Failed { message } = k.state().dashboard else {
        panic!("expected failure");
    };
    assert!(message.starts_with("GET http://stub/admin/dashboard/"), "{message}");
    assert!(message.contains("401 Unauthorized"), "{message}");

    let stores = k.view().unwrap();
    let alert = stores.alerts.queue().iter().next().expect("error alert");
    assert_eq!(alert.message, message);
}

#[test]
fn answers_to_superseded_requests_are_dropped() {
    let current = uuid::Uuid::new_v4();
    let stale = uuid::Uuid::new_v4();
    let state = AppState {
        dashboard: DashboardState::Loading,
        dashboard_request: Some(current),
        ..AppState::default()
    };
    let mut k = AdminKernel::new(
        AppStore::new(state),
        MemoryRepo::default(),
        FixedSource(Err("unused")),
    );
    k.initialize();

    k.sender()
        .try_send(DomainEvent::DashboardFailed {
            request_id: stale,
            message: "late".into(),
        })
        .unwrap();
    k.tick(Instant::now());

    assert!(k.state().dashboard.is_loading());
    assert!(k.view().unwrap().alerts.queue().is_empty());
}

#[test]
fn status_update_through_the_kernel_confirms_with_an_alert() {
    let mut k = kernel(FixedSource(Err("unused")));
    k.initialize();
    k.handle()
        .unwrap()
        .orders
        .update_orders(vec![Order::new(1, OrderStatus::Pending)]);
    k.dispatch(AppCommand::SelectOrder(OrderId(1))).unwrap();

    k.dispatch(AppCommand::UpdateOrderStatus {
        id: OrderId(1),
        status: OrderStatus::Completed,
    })
    .unwrap();

    let stores = k.view().unwrap();
    assert_eq!(
        stores.orders.selected_order(),
        Some(&Order::new(1, OrderStatus::Completed))
    );
    assert_eq!(stores.orders.orders()[0], Order::new(1, OrderStatus::Completed));
    let alert = stores.alerts.queue().iter().next().unwrap();
    assert_eq!(alert.kind, AlertKind::Success);
    assert_eq!(alert.message, "Order #1 marked Completed");
}

#[test]
fn selecting_an_unknown_order_warns_instead() {
    let mut k = kernel(FixedSource(Err("unused")));
    k.initialize();
    k.dispatch(AppCommand::SelectOrder(OrderId(77))).unwrap();

    let stores = k.view().unwrap();
    assert!(stores.orders.selected_order().is_none());
    assert_eq!(
        stores.alerts.queue().iter().next().map(|a| a.kind),
        Some(AlertKind::Warning)
    );
}

#[test]
fn dismissed_alerts_leave_after_the_grace_period() {
    let mut k = kernel(FixedSource(Err("unused")));
    k.initialize();
    k.dispatch(AppCommand::Notify(bazaar_core::AlertRequest::info("hello")))
        .unwrap();
    let id = k.view().unwrap().alerts.queue().iter().next().unwrap().id;

    k.dispatch(AppCommand::DismissAlert(id)).unwrap();
    assert!(k.view().unwrap().alerts.queue().get(id).unwrap().exiting);

    k.tick(Instant::now() + Duration::from_secs(1));
    assert!(k.view().unwrap().alerts.queue().is_empty());
}
