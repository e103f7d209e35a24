//! Repository trait for product catalog data access.

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::domain::listing::{ListQuery, SearchFilter};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for catalog products.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Creates a new product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NameTaken`] if the name is already registered,
    /// [`AppError::Unprocessable`] on other database errors.
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError>;

    /// Finds a product by its identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Finds a product by its exact name. Used by the uniqueness guard.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, AppError>;

    /// Lists products for a resolved listing query (filter, sort, page).
    async fn list(&self, query: &ListQuery) -> Result<Vec<Product>, AppError>;

    /// Counts products matching the filter; all products when `None`.
    async fn count(&self, filter: Option<SearchFilter>) -> Result<i64, AppError>;

    /// Partially updates a product; `None` patch fields keep their current
    /// value. Returns `Ok(None)` when the product does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NameTaken`] if the patched name collides with
    /// another product.
    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Option<Product>, AppError>;

    /// Deletes a product. Returns `Ok(false)` when nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Atomically decrements stock by `quantity`, only when the remaining
    /// stock would stay non-negative.
    ///
    /// Returns the updated product, or `Ok(None)` when the product is
    /// missing or its stock is insufficient. This is the single write that
    /// keeps concurrent order placements from overselling.
    async fn decrement_stock(&self, id: i64, quantity: i64) -> Result<Option<Product>, AppError>;
}
