//! Repository trait for order history data access.

use crate::domain::entities::{NewOrder, Order};
use crate::domain::listing::{ListQuery, SearchFilter};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recorded orders.
///
/// Orders are written once by the placement flow; the only supported
/// mutation afterwards is a quantity correction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a new order snapshot.
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError>;

    /// Finds an order by its identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError>;

    /// Lists orders for a resolved listing query.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Order>, AppError>;

    /// Counts orders matching the filter; all orders when `None`.
    async fn count(&self, filter: Option<SearchFilter>) -> Result<i64, AppError>;

    /// Replaces the recorded quantity. Returns `Ok(None)` when the order
    /// does not exist.
    async fn update_quantity(&self, id: i64, quantity: i64) -> Result<Option<Order>, AppError>;

    /// Deletes an order record. Returns `Ok(false)` when nothing was
    /// deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
