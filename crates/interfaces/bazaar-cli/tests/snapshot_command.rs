use axum::{http::StatusCode, routing::get, Router};
use bazaar_cli::commands;
use std::net::SocketAddr;

const SNAPSHOT: &str = r#"{
  "totals": {
    "users": {"count": 120, "percentage_change": 4.2},
    "orders": {"count": "35"},
    "sales": {"value": null},
    "revenue": {"total": "1500000.5", "percentage_change": -1.25}
  },
  "recent": {
    "orders": [{"id": "7", "status": "completed", "total": 2500, "created_at": "2024-03-09T12:00:00Z"}]
  },
  "best_selling_products": [{"product__id": 3, "product__name": "Ankara Tote", "total_sold": 18}]
}"#;

async fn start_mock_server() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route("/api/admin/dashboard/", get(|| async { SNAPSHOT }))
        .route(
            "/broken/admin/dashboard/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

#[tokio::test]
async fn snapshot_is_fetched_and_rendered() {
    let (addr, server) = start_mock_server().await;

    let snapshot = commands::cmd_snapshot(format!("http://{addr}/api/"), None)
        .await
        .unwrap();
    assert_eq!(snapshot.totals.users.value, 120.0);
    assert_eq!(snapshot.totals.orders.value, 35.0);
    assert_eq!(snapshot.totals.sales.value, 0.0);

    let out = commands::render_snapshot(&snapshot);
    assert!(out.contains("\u{20A6}1,500,000.50"));
    assert!(out.contains("-1.2%") || out.contains("-1.3%"));
    assert!(out.contains("+4.2%"));
    assert!(out.contains("#7"));
    assert!(out.contains("Mar 9, 2024"));
    assert!(out.contains("Ankara Tote"));

    server.abort();
}

#[tokio::test]
async fn server_errors_surface_as_failures() {
    let (addr, server) = start_mock_server().await;

    let err = commands::cmd_snapshot(format!("http://{addr}/broken"), None)
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("500"));

    server.abort();
}
