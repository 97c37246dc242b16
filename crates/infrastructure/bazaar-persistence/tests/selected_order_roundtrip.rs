use bazaar_core::{Order, OrderId, OrderStatus};
use bazaar_persistence::{DbState, LocalStateStore, RedbLocalStore, StorageErrorKind};
use camino::Utf8PathBuf;

fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    (dir, root)
}

#[test]
fn reads_on_a_missing_database_do_not_create_it() {
    let (_dir, root) = temp_root();
    let store = RedbLocalStore::in_dir(&root);

    assert_eq!(store.validate().unwrap(), DbState::Missing);
    assert!(store.load_selected_order().unwrap().is_none());
    store.clear_selected_order().unwrap();
    assert!(!store.path().exists());
}

#[test]
fn selected_order_survives_a_fresh_handle() {
    let (_dir, root) = temp_root();
    let mut order = Order::new(7, OrderStatus::Processing);
    order.total = 2500.0;
    order.created_at = "2024-03-01T08:30:00Z".into();

    RedbLocalStore::in_dir(&root)
        .save_selected_order(&order)
        .unwrap();

    let reopened = RedbLocalStore::in_dir(&root);
    assert_eq!(reopened.validate().unwrap(), DbState::Valid);
    let loaded = reopened.load_selected_order().unwrap().unwrap();
    assert_eq!(loaded, order);
    assert_eq!(loaded.id, OrderId(7));
}

#[test]
fn clear_removes_the_entry_instead_of_blanking_it() {
    let (_dir, root) = temp_root();
    let store = RedbLocalStore::in_dir(&root);
    store
        .save_selected_order(&Order::new(1, OrderStatus::Pending))
        .unwrap();

    store.clear_selected_order().unwrap();

    assert!(store.get(bazaar_config::SELECTED_ORDER_KEY).unwrap().is_none());
    assert!(store.load_selected_order().unwrap().is_none());
}

#[test]
fn undecodable_entry_reports_a_codec_error() {
    let (_dir, root) = temp_root();
    let store = RedbLocalStore::in_dir(&root);
    store
        .put(bazaar_config::SELECTED_ORDER_KEY, b"{\"id\": ")
        .unwrap();

    let err = store.load_selected_order().unwrap_err();
    assert_eq!(err.kind(), StorageErrorKind::Codec);
}
