use bazaar_core::{DashboardSnapshot, Order};

/// Durable home of the selected order.
pub trait SelectionRepo: Send + Sync + 'static {
    fn load(&self) -> anyhow::Result<Option<Order>>;
    fn save(&self, order: &Order) -> anyhow::Result<()>;
    /// Deletes the stored selection entirely.
    fn clear(&self) -> anyhow::Result<()>;
}

pub trait DashboardSource: Send + Sync + 'static {
    /// Called from a worker thread, never from the UI thread.
    fn fetch_snapshot_blocking(&self) -> anyhow::Result<DashboardSnapshot>;
}
