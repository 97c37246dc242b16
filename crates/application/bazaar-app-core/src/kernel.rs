use std::sync::Arc;
use std::time::Instant;

use bazaar_core::{AlertRequest, RouteRegistry};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::alerts::AlertPresenter;
use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::domain::{AppState, RequestId};
use crate::error::AccessError;
use crate::orders::OrderStore;
use crate::ports::{DashboardSource, SelectionRepo};
use crate::session::AuthOverlay;

/// The shared stores views read from and write to.
pub struct Stores<R> {
    pub alerts: AlertPresenter,
    pub orders: OrderStore<R>,
    pub auth: AuthOverlay,
}

/// Owns every piece of shared client state. Views get at the stores through
/// [`AdminKernel::handle`], which only succeeds after [`AdminKernel::initialize`].
pub struct AdminKernel<R, D> {
    pub store: AppStore,
    pub routes: RouteRegistry,
    stores: Option<Stores<R>>,
    repo: Arc<R>,
    dashboard: Arc<D>,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<R, D> AdminKernel<R, D>
where
    R: SelectionRepo,
    D: DashboardSource,
{
    pub fn new(store: AppStore, repo: R, dashboard: D) -> Self {
        let (tx, rx) = mpsc::channel(16);
        Self {
            store,
            routes: RouteRegistry::default(),
            stores: None,
            repo: Arc::new(repo),
            dashboard: Arc::new(dashboard),
            tx,
            rx,
        }
    }

    /// Builds the stores, restoring the persisted selection. Calling it again
    /// is a no-op.
    pub fn initialize(&mut self) {
        if self.stores.is_some() {
            return;
        }
        self.stores = Some(Stores {
            alerts: AlertPresenter::new(),
            orders: OrderStore::load(self.repo.clone()),
            auth: AuthOverlay::new(),
        });
        info!("admin kernel initialized");
    }

    pub fn is_initialized(&self) -> bool {
        self.stores.is_some()
    }

    pub fn handle(&mut self) -> Result<&mut Stores<R>, AccessError> {
        self.stores
            .as_mut()
            .ok_or(AccessError::NotInitialized { store: "shared" })
    }

    pub fn view(&self) -> Result<&Stores<R>, AccessError> {
        self.stores
            .as_ref()
            .ok_or(AccessError::NotInitialized { store: "shared" })
    }

    pub fn state(&self) -> AppState {
        self.store.state()
    }

    pub fn dispatch(&mut self, cmd: AppCommand) -> Result<(), AccessError> {
        let now = Instant::now();
        match cmd {
            AppCommand::Navigate(path) => match self.routes.find_by_path(&path) {
                Some(route) => self.store.apply(DomainEvent::RouteChanged(route.path)),
                None => warn!("ignoring navigation to unknown path {path}"),
            },

            AppCommand::RefreshDashboard | AppCommand::RetryDashboard => {
                self.start_dashboard_fetch();
            }

            AppCommand::SelectOrder(id) => {
                let stores = self.handle()?;
                match stores.orders.order(id).cloned() {
                    Some(order) => stores.orders.select_order(order),
                    None => {
                        stores.alerts.notify(
                            AlertRequest::warning(format!("Order #{id} is not loaded")),
                            now,
                        );
                    }
                }
            }

            AppCommand::ClearSelection => self.handle()?.orders.clear_selected_order(),

            AppCommand::UpdateOrderStatus { id, status } => {
                let stores = self.handle()?;
                if stores.orders.update_order_status(id, status) {
                    stores.alerts.notify(
                        AlertRequest::success(format!("Order #{id} marked {}", status.label())),
                        now,
                    );
                }
            }

            AppCommand::RemoveOrder(id) => {
                self.handle()?.orders.remove_order(id);
            }

            AppCommand::Notify(req) => {
                self.handle()?.alerts.notify(req, now);
            }

            AppCommand::DismissAlert(id) => self.handle()?.alerts.dismiss(id, now),

            AppCommand::OpenAuth(step) => self.handle()?.auth.open(step),
            AppCommand::SetAuthStep(step) => self.handle()?.auth.go_to(step),
            AppCommand::CloseAuth => self.handle()?.auth.close(),
        }
        Ok(())
    }

    /// Drains worker results and advances alert timers. Call once per frame.
    pub fn tick(&mut self, now: Instant) {
        while let Ok(ev) = self.rx.try_recv() {
            if let Some(request_id) = ev.answers() {
                if self.store.state().dashboard_request != Some(request_id) {
                    debug!(%request_id, "dropping stale dashboard answer");
                    continue;
                }
            }
            self.apply_side_effects(&ev, now);
            self.store.apply(ev);
        }

        if let Some(stores) = self.stores.as_mut() {
            stores.alerts.tick(now);
        }
    }

    /// Earliest instant at which `tick` has timer work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.stores.as_ref().and_then(|s| s.alerts.next_deadline())
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }

    fn apply_side_effects(&mut self, ev: &DomainEvent, now: Instant) {
        let Some(stores) = self.stores.as_mut() else {
            return;
        };
        match ev {
            DomainEvent::DashboardLoaded { snapshot, .. } => {
                stores.orders.update_orders(snapshot.recent.orders.clone());
            }
            DomainEvent::DashboardFailed { message, .. } => {
                stores.alerts.notify(
                    AlertRequest::error(message.clone()).with_title("Dashboard unavailable"),
                    now,
                );
            }
            _ => {}
        }
    }

    fn start_dashboard_fetch(&mut self) {
        let request_id: RequestId = uuid::Uuid::new_v4();
        self.store
            .apply(DomainEvent::DashboardRequested { request_id });

        let tx = self.tx.clone();
        let source = self.dashboard.clone();
        let spawn_res = std::thread::Builder::new()
            .name("bazaar-dashboard-fetch".into())
            .spawn(move || {
                let ev = match source.fetch_snapshot_blocking() {
                    Ok(snapshot) => DomainEvent::DashboardLoaded {
                        request_id,
                        snapshot: Box::new(snapshot),
                    },
                    Err(e) => {
                        warn!("dashboard fetch failed: {e:#}");
                        DomainEvent::DashboardFailed {
                            request_id,
                            message: format!("{e:#}"),
                        }
                    }
                };
                let _ = tx.blocking_send(ev);
            });

        if let Err(e) = spawn_res {
            self.store.apply(DomainEvent::DashboardFailed {
                request_id,
                message: format!("Failed to start dashboard worker thread: {e}"),
            });
        }
    }
}
