//! Business logic services for the application layer.

pub mod auth_service;
pub mod catalog_service;
pub mod login_tracker;
pub mod order_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use login_tracker::LoginTracker;
pub use order_service::OrderService;
pub use user_service::UserService;
