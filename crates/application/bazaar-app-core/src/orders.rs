use std::sync::Arc;

use bazaar_core::{Order, OrderId, OrderStatus};
use tracing::{debug, warn};

use crate::ports::SelectionRepo;

/// The order working set plus the single selected order.
///
/// The selection is an independent copy of the order, not a reference into
/// the working set. Operations that touch both keep them in step explicitly.
pub struct OrderStore<R> {
    repo: Arc<R>,
    orders: Vec<Order>,
    selected: Option<Order>,
}

impl<R: SelectionRepo> OrderStore<R> {
    /// Restores the persisted selection. Unreadable state counts as no
    /// selection; it never fails construction.
    pub fn load(repo: Arc<R>) -> Self {
        let selected = match repo.load() {
            Ok(sel) => sel,
            Err(e) => {
                warn!("ignoring unreadable persisted selection: {e:#}");
                None
            }
        };
        if let Some(o) = &selected {
            debug!("restored selected order #{}", o.id);
        }
        Self {
            repo,
            orders: Vec::new(),
            selected,
        }
    }

    pub fn selected_order(&self) -> Option<&Order> {
        self.selected.as_ref()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn select_order(&mut self, order: Order) {
        self.selected = Some(order);
        self.on_selection_changed();
    }

    pub fn clear_selected_order(&mut self) {
        self.selected = None;
        self.on_selection_changed();
    }

    pub fn update_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    /// Newest first.
    pub fn add_order(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Returns true if the working set or the selection was touched.
    pub fn update_order_status(&mut self, id: OrderId, status: OrderStatus) -> bool {
        let mut touched = false;
        if let Some(o) = self.orders.iter_mut().find(|o| o.id == id) {
            o.status = status;
            touched = true;
        }

        let selection_matches = self.selected.as_ref().is_some_and(|s| s.id == id);
        if selection_matches {
            if let Some(sel) = self.selected.as_mut() {
                sel.status = status;
            }
            self.on_selection_changed();
            touched = true;
        }
        touched
    }

    /// Returns true if a working-set record was removed.
    pub fn remove_order(&mut self, id: OrderId) -> bool {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);

        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.clear_selected_order();
        }
        self.orders.len() != before
    }

    /// Writes the selection through to storage. Failures are logged and
    /// swallowed; the in-memory session carries on regardless.
    fn on_selection_changed(&self) {
        let res = match &self.selected {
            Some(order) => self.repo.save(order),
            None => self.repo.clear(),
        };
        if let Err(e) = res {
            warn!("failed to persist selected order: {e:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryRepo {
        slot: Mutex<Option<Order>>,
        broken: bool,
    }

    impl SelectionRepo for MemoryRepo {
        fn load(&self) -> anyhow::Result<Option<Order>> {
            if self.broken {
                anyhow::bail!("unreadable");
            }
            Ok(self.slot.lock().unwrap().clone())
        }
        fn save(&self, order: &Order) -> anyhow::Result<()> {
            if self.broken {
                anyhow::bail!("disk full");
            }
            *self.slot.lock().unwrap() = Some(order.clone());
            Ok(())
        }
        fn clear(&self) -> anyhow::Result<()> {
            if self.broken {
                anyhow::bail!("disk full");
            }
            *self.slot.lock().unwrap() = None;
            Ok(())
        }
    }

    fn store() -> (Arc<MemoryRepo>, OrderStore<MemoryRepo>) {
        let repo = Arc::new(MemoryRepo::default());
        (repo.clone(), OrderStore::load(repo))
    }

    #[test]
    fn status_update_reaches_selection_and_working_set() {
        let (repo, mut s) = store();
        s.update_orders(vec![Order::new(1, OrderStatus::Pending)]);
        s.select_order(Order::new(1, OrderStatus::Pending));

        assert!(s.update_order_status(OrderId(1), OrderStatus::Completed));

        assert_eq!(s.selected_order(), Some(&Order::new(1, OrderStatus::Completed)));
        assert_eq!(s.orders()[0], Order::new(1, OrderStatus::Completed));
        assert_eq!(
            repo.slot.lock().unwrap().as_ref().map(|o| o.status),
            Some(OrderStatus::Completed)
        );
    }

    #[test]
    fn status_update_leaves_unrelated_records_alone() {
        let (_repo, mut s) = store();
        s.update_orders(vec![
            Order::new(1, OrderStatus::Pending),
            Order::new(2, OrderStatus::Processing),
        ]);
        s.select_order(Order::new(2, OrderStatus::Processing));

        s.update_order_status(OrderId(1), OrderStatus::Cancelled);

        assert_eq!(s.orders()[0].status, OrderStatus::Cancelled);
        assert_eq!(s.orders()[1].status, OrderStatus::Processing);
        assert_eq!(s.selected_order().unwrap().status, OrderStatus::Processing);
        assert!(!s.update_order_status(OrderId(99), OrderStatus::Refunded));
    }

    #[test]
    fn selection_is_a_copy_not_an_alias() {
        let (_repo, mut s) = store();
        let mut order = Order::new(5, OrderStatus::Pending);
        order.total = 100.0;
        s.update_orders(vec![order.clone()]);
        s.select_order(order);

        s.update_orders(vec![Order::new(5, OrderStatus::Pending)]);
        assert_eq!(s.selected_order().unwrap().total, 100.0);
    }

    #[test]
    fn removing_the_selected_order_clears_selection_and_storage() {
        let (repo, mut s) = store();
        s.update_orders(vec![
            Order::new(1, OrderStatus::Pending),
            Order::new(2, OrderStatus::Pending),
        ]);
        s.select_order(Order::new(2, OrderStatus::Pending));

        assert!(s.remove_order(OrderId(1)));
        assert_eq!(s.selected_order().map(|o| o.id), Some(OrderId(2)));

        assert!(s.remove_order(OrderId(2)));
        assert!(s.selected_order().is_none());
        assert!(repo.slot.lock().unwrap().is_none());
        assert!(s.orders().is_empty());
    }

    #[test]
    fn add_order_prepends() {
        let (_repo, mut s) = store();
        s.add_order(Order::new(1, OrderStatus::Pending));
        s.add_order(Order::new(2, OrderStatus::Pending));
        let ids: Vec<_> = s.orders().iter().map(|o| o.id.0).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn broken_storage_degrades_to_memory_only() {
        let repo = Arc::new(MemoryRepo {
            broken: true,
            ..Default::default()
        });
        let mut s = OrderStore::load(repo);
        assert!(s.selected_order().is_none());

        s.select_order(Order::new(3, OrderStatus::Pending));
        assert_eq!(s.selected_order().map(|o| o.id), Some(OrderId(3)));
        s.clear_selected_order();
        assert!(s.selected_order().is_none());
    }
}
