//! Order placement and order history service.

use std::sync::Arc;

use crate::domain::entities::{NewOrder, Order};
use crate::domain::listing::{ListRequest, ORDER_LISTING, PageMeta};
use crate::domain::repositories::{OrderRepository, ProductRepository};
use crate::error::AppError;

/// A successfully placed order together with the product fields the
/// confirmation echoes back.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order: Order,
    pub unit: String,
    pub remaining_stock: i64,
}

/// Service for placing orders and reading order history.
///
/// Placement applies stock through the repository's atomic conditional
/// decrement, so two concurrent orders for the last units cannot both
/// succeed. A rejected order never changes stock.
pub struct OrderService<P: ProductRepository, O: OrderRepository> {
    product_repository: Arc<P>,
    order_repository: Arc<O>,
}

impl<P: ProductRepository, O: OrderRepository> OrderService<P, O> {
    pub fn new(product_repository: Arc<P>, order_repository: Arc<O>) -> Self {
        Self {
            product_repository,
            order_repository,
        }
    }

    /// Places an order for `quantity` units of a product.
    ///
    /// Steps: look the product up, reject quantities above the current
    /// stock, decrement stock atomically, then record the snapshot order.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] when the product does not exist.
    /// - [`AppError::Unprocessable`] when the quantity exceeds stock
    ///   (including the case where a concurrent order drained it between
    ///   lookup and decrement), or when persisting fails.
    pub async fn place_order(&self, product_id: i64, quantity: i64) -> Result<PlacedOrder, AppError> {
        let product = self
            .product_repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown product"))?;

        if !product.can_fulfill(quantity) {
            return Err(exceeds_stock());
        }

        let updated = self
            .product_repository
            .decrement_stock(product_id, quantity)
            .await?
            // The conditional update refused: stock changed under us.
            .ok_or_else(exceeds_stock)?;

        let order = self
            .order_repository
            .create(NewOrder::snapshot_of(&product, quantity))
            .await?;

        tracing::info!(
            order_id = order.id,
            product_id,
            quantity,
            remaining_stock = updated.stock,
            "Order placed"
        );

        Ok(PlacedOrder {
            order,
            unit: product.unit.clone(),
            remaining_stock: updated.stock,
        })
    }

    /// Lists orders with pagination, sorting, and search.
    pub async fn list_orders(
        &self,
        request: &ListRequest,
    ) -> Result<(Vec<Order>, PageMeta), AppError> {
        let parsed = ORDER_LISTING
            .parse(request)
            .map_err(|e| AppError::validation(e.to_string()))?;

        let total = self.order_repository.count(parsed.filter().cloned()).await?;

        let query = parsed
            .paginate(total)
            .map_err(|e| AppError::validation(e.to_string()))?;

        let orders = self.order_repository.list(&query).await?;
        let meta = query.meta(orders.len());

        Ok((orders, meta))
    }

    /// Retrieves an order by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no order matches.
    pub async fn get_order(&self, id: i64) -> Result<Order, AppError> {
        self.order_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown order"))
    }

    /// Corrects the recorded quantity of an order. The product snapshot
    /// fields stay untouched and stock is not re-adjusted.
    pub async fn update_order(&self, id: i64, quantity: i64) -> Result<Order, AppError> {
        self.order_repository
            .update_quantity(id, quantity)
            .await?
            .ok_or_else(|| AppError::unprocessable("Failed to update order"))
    }

    /// Deletes an order record.
    pub async fn delete_order(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.order_repository.delete(id).await?;

        if !deleted {
            return Err(AppError::unprocessable("Failed to delete order"));
        }

        Ok(())
    }
}

fn exceeds_stock() -> AppError {
    AppError::unprocessable("order exceeds stock quantity, reduce order quantity")
}
