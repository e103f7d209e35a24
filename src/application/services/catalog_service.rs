//! Product catalog service: listing, lookup, and guarded mutations.

use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::domain::listing::{ListRequest, PRODUCT_LISTING, PageMeta};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// Service for catalog reads and writes.
///
/// Enforces the product-name uniqueness guard on create and update; the
/// update path excludes the record being updated so a product can always be
/// saved under its own name.
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> CatalogService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists products with pagination, sorting, and search.
    ///
    /// Pagination is resolved against the count of records matching the
    /// search filter, so `total_pages` always describes the filtered set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed or out-of-range
    /// listing parameters before the page query runs.
    pub async fn list_products(
        &self,
        request: &ListRequest,
    ) -> Result<(Vec<Product>, PageMeta), AppError> {
        let parsed = PRODUCT_LISTING
            .parse(request)
            .map_err(|e| AppError::validation(e.to_string()))?;

        let total = self.repository.count(parsed.filter().cloned()).await?;

        let query = parsed
            .paginate(total)
            .map_err(|e| AppError::validation(e.to_string()))?;

        let products = self.repository.list(&query).await?;
        let meta = query.meta(products.len());

        Ok((products, meta))
    }

    /// Retrieves a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product matches.
    pub async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown product"))
    }

    /// Creates a product after checking the name is free.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NameTaken`] when another product already carries
    /// the name.
    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, AppError> {
        if self
            .repository
            .find_by_name(&new_product.name)
            .await?
            .is_some()
        {
            return Err(AppError::name_taken("Name is already registered"));
        }

        self.repository.create(new_product).await
    }

    /// Partially updates a product. Omitted fields keep their current
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist and
    /// [`AppError::NameTaken`] when renaming onto another product's name.
    pub async fn update_product(&self, id: i64, patch: ProductPatch) -> Result<Product, AppError> {
        let existing = self.get_product(id).await?;

        if let Some(name) = &patch.name
            && let Some(holder) = self.repository.find_by_name(name).await?
            && holder.id != existing.id
        {
            return Err(AppError::name_taken("Name is already registered"));
        }

        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::unprocessable("Failed to update product"))
    }

    /// Deletes a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unprocessable`] when nothing was deleted.
    pub async fn delete_product(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(AppError::unprocessable("Failed to delete product"));
        }

        Ok(())
    }
}
