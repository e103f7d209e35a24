use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, CatalogService, LoginTracker, OrderService, UserService,
};
use crate::infrastructure::persistence::{
    PgOrderRepository, PgProductRepository, PgUserRepository,
};

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Kept for the health check's database ping.
    pub db: PgPool,
    pub catalog_service: Arc<CatalogService<PgProductRepository>>,
    pub order_service: Arc<OrderService<PgProductRepository, PgOrderRepository>>,
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub login_tracker: Arc<LoginTracker>,
    /// When true, the login tracker reads client IPs from proxy headers.
    pub behind_proxy: bool,
}
