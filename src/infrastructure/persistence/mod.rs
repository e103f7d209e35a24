//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Listing queries are assembled with `QueryBuilder` from whitelisted sort
//! and search fields; see [`listing_sql`].

pub mod listing_sql;
pub mod pg_order_repository;
pub mod pg_product_repository;
pub mod pg_user_repository;

pub use pg_order_repository::PgOrderRepository;
pub use pg_product_repository::PgProductRepository;
pub use pg_user_repository::PgUserRepository;
