//! Server startup: pool, migrations, service wiring, bind and serve.

use crate::application::services::{
    AuthService, CatalogService, LoginTracker, OrderService, UserService,
};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgOrderRepository, PgProductRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Brings the service up: connects the pool, applies pending migrations,
/// wires repositories and services into [`AppState`], and serves the
/// router until the process exits.
///
/// # Errors
///
/// Fails when the database is unreachable, migrations cannot be applied,
/// or the listen address cannot be bound.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;

    let pool_arc = Arc::new(pool.clone());
    let product_repository = Arc::new(PgProductRepository::new(pool_arc.clone()));
    let order_repository = Arc::new(PgOrderRepository::new(pool_arc.clone()));
    let user_repository = Arc::new(PgUserRepository::new(pool_arc.clone()));

    let catalog_service = Arc::new(CatalogService::new(product_repository.clone()));
    let order_service = Arc::new(OrderService::new(product_repository, order_repository));
    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        config.jwt_secret.clone(),
        config.token_ttl_seconds,
    ));
    let login_tracker = Arc::new(LoginTracker::new(
        config.login_max_attempts,
        config.login_window_seconds,
    ));

    let state = AppState {
        db: pool,
        catalog_service,
        order_service,
        user_service,
        auth_service,
        login_tracker,
        behind_proxy: config.behind_proxy,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
