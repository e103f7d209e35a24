#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use storefront::application::services::{
    AuthService, CatalogService, LoginTracker, OrderService, UserService,
};
use storefront::infrastructure::persistence::{
    PgOrderRepository, PgProductRepository, PgUserRepository,
};
use storefront::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with(pool, false)
}

/// Builds an [`AppState`] over real Postgres repositories.
///
/// `behind_proxy` lets login tests supply a client IP via the
/// `X-Forwarded-For` header, since the test transport has no peer address.
pub fn create_test_state_with(pool: PgPool, behind_proxy: bool) -> AppState {
    let pool_arc = Arc::new(pool.clone());

    let product_repo = Arc::new(PgProductRepository::new(pool_arc.clone()));
    let order_repo = Arc::new(PgOrderRepository::new(pool_arc.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool_arc.clone()));

    let catalog_service = Arc::new(CatalogService::new(product_repo.clone()));
    let order_service = Arc::new(OrderService::new(product_repo, order_repo));
    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let auth_service = Arc::new(AuthService::new(
        user_repo,
        TEST_JWT_SECRET.to_string(),
        3600,
    ));
    let login_tracker = Arc::new(LoginTracker::new(5, 1800));

    AppState {
        db: pool,
        catalog_service,
        order_service,
        user_service,
        auth_service,
        login_tracker,
        behind_proxy,
    }
}

pub async fn insert_product(pool: &PgPool, name: &str, price: &str, stock: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO products (name, category, price, stock, unit, description) \
         VALUES ($1, 'tools', $2, $3, 'pcs', 'test product') RETURNING id",
    )
    .bind(name)
    .bind(price)
    .bind(stock)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn product_stock(pool: &PgPool, id: i64) -> i64 {
    sqlx::query_scalar("SELECT stock FROM products WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_order(pool: &PgPool, product_id: i64, product_name: &str, quantity: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO orders (product_id, product_name, category, price, quantity) \
         VALUES ($1, $2, 'tools', '1.00', $3) RETURNING id",
    )
    .bind(product_id)
    .bind(product_name)
    .bind(quantity)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn order_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await
        .unwrap()
}
