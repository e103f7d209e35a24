//! Order entity: an immutable purchase record.

use chrono::{DateTime, Utc};

/// A recorded purchase.
///
/// `product_name`, `category`, and `price` are snapshots taken when the
/// order was placed; later product changes never show up here.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub category: Option<String>,
    pub price: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for recording a new order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub product_id: i64,
    pub product_name: String,
    pub category: Option<String>,
    pub price: String,
    pub quantity: i64,
}

impl NewOrder {
    /// Snapshots the product fields that must survive later catalog edits.
    pub fn snapshot_of(product: &crate::domain::entities::Product, quantity: i64) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.clone(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Product;

    #[test]
    fn test_snapshot_copies_product_fields() {
        let product = Product {
            id: 7,
            name: "Widget".to_string(),
            category: Some("tools".to_string()),
            price: "12.00".to_string(),
            stock: 5,
            unit: "pcs".to_string(),
            description: "A widget".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let new_order = NewOrder::snapshot_of(&product, 3);

        assert_eq!(new_order.product_id, 7);
        assert_eq!(new_order.product_name, "Widget");
        assert_eq!(new_order.category.as_deref(), Some("tools"));
        assert_eq!(new_order.price, "12.00");
        assert_eq!(new_order.quantity, 3);
    }
}
