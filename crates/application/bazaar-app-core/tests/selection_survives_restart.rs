use std::sync::Arc;

use bazaar_app_core::{OrderStore, RedbSelectionRepo};
use bazaar_core::{Order, OrderId, OrderStatus};
use bazaar_persistence::LocalStateStore;
use camino::Utf8PathBuf;

fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    (dir, root)
}

fn open(root: &Utf8PathBuf) -> OrderStore<RedbSelectionRepo> {
    OrderStore::load(Arc::new(RedbSelectionRepo::in_dir(root)))
}

#[test]
fn selected_order_is_restored_by_a_new_session() {
    let (_dir, root) = temp_root();
    let order: Order = serde_json::from_value(serde_json::json!({
        "id": "12",
        "status": "processing",
        "total": "4500.50",
        "items": [{"quantity": 2, "product": {"name": "Kettle"}}],
        "created_at": "2024-01-05T10:00:00Z",
        "user": {"id": 3, "email": "ada@example.com"}
    }))
    .unwrap();

    {
        let mut s = open(&root);
        assert!(s.selected_order().is_none());
        s.update_orders(vec![order.clone()]);
        s.select_order(order.clone());
    }

    let restored = open(&root);
    assert_eq!(restored.selected_order(), Some(&order));
    assert_eq!(restored.selected_order().unwrap().id, OrderId(12));
    // The working set is not persisted.
    assert!(restored.orders().is_empty());
}

#[test]
fn cleared_selection_stays_cleared_and_leaves_no_entry() {
    let (_dir, root) = temp_root();
    {
        let mut s = open(&root);
        s.select_order(Order::new(3, OrderStatus::Pending));
        s.clear_selected_order();
    }

    let restored = open(&root);
    assert!(restored.selected_order().is_none());

    let repo = RedbSelectionRepo::in_dir(&root);
    assert!(repo
        .store()
        .get(bazaar_config::SELECTED_ORDER_KEY)
        .unwrap()
        .is_none());
}

#[test]
fn unreadable_stored_value_counts_as_no_selection() {
    let (_dir, root) = temp_root();
    RedbSelectionRepo::in_dir(&root)
        .store()
        .put(bazaar_config::SELECTED_ORDER_KEY, b"{not json")
        .unwrap();

    let mut s = open(&root);
    assert!(s.selected_order().is_none());

    // A later write replaces the garbage.
    s.select_order(Order::new(8, OrderStatus::Completed));
    let restored = open(&root);
    assert_eq!(
        restored.selected_order().map(|o| o.id),
        Some(OrderId(8))
    );
}

#[test]
fn status_change_on_the_selection_is_what_gets_restored() {
    let (_dir, root) = temp_root();
    {
        let mut s = open(&root);
        s.update_orders(vec![Order::new(1, OrderStatus::Pending)]);
        s.select_order(Order::new(1, OrderStatus::Pending));
        s.update_order_status(OrderId(1), OrderStatus::Completed);

        assert_eq!(
            s.selected_order(),
            Some(&Order::new(1, OrderStatus::Completed))
        );
        assert_eq!(s.orders()[0], Order::new(1, OrderStatus::Completed));
    }

    let restored = open(&root);
    assert_eq!(
        restored.selected_order(),
        Some(&Order::new(1, OrderStatus::Completed))
    );
}
