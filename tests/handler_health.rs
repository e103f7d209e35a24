mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;
use storefront::api::handlers::health_handler;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_health_reports_database_ok(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "ok");
}
