//! DTOs for order endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::order_service::PlacedOrder;
use crate::domain::entities::Order;

/// Request body for placing an order.
///
/// `quantity` deserializes as an unsigned integer, so negative or
/// fractional values are rejected before the flow starts.
#[derive(Debug, Deserialize, Validate)]
pub struct PlaceOrderRequest {
    pub id: i64,
    pub quantity: u32,
}

/// Confirmation returned after a successful order, echoing the product
/// snapshot taken at order time.
#[derive(Debug, Serialize)]
pub struct OrderConfirmation {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub category: Option<String>,
    pub price: String,
    pub quantity: i64,
    pub unit: String,
}

impl From<PlacedOrder> for OrderConfirmation {
    fn from(placed: PlacedOrder) -> Self {
        OrderConfirmation {
            id: placed.order.id,
            product_id: placed.order.product_id,
            product_name: placed.order.product_name,
            category: placed.order.category,
            price: placed.order.price,
            quantity: placed.order.quantity,
            unit: placed.unit,
        }
    }
}

/// JSON projection of a recorded order.
#[derive(Debug, Serialize)]
pub struct OrderItem {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub category: Option<String>,
    pub price: String,
    pub quantity: i64,
}

impl From<Order> for OrderItem {
    fn from(order: Order) -> Self {
        OrderItem {
            id: order.id,
            product_id: order.product_id,
            product_name: order.product_name,
            category: order.category,
            price: order.price,
            quantity: order.quantity,
        }
    }
}

/// Request body for correcting an order's recorded quantity.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOrderRequest {
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_quantity_rejected_at_parse() {
        let json = r#"{"id": 1, "quantity": -3}"#;
        assert!(serde_json::from_str::<PlaceOrderRequest>(json).is_err());
    }

    #[test]
    fn test_fractional_quantity_rejected_at_parse() {
        let json = r#"{"id": 1, "quantity": 1.5}"#;
        assert!(serde_json::from_str::<PlaceOrderRequest>(json).is_err());
    }

    #[test]
    fn test_zero_quantity_parses() {
        let json = r#"{"id": 1, "quantity": 0}"#;
        let request: PlaceOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.quantity, 0);
    }
}
