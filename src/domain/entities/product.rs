//! Product entity for the shop catalog.

use chrono::{DateTime, Utc};

/// A catalog product.
///
/// `price` carries the decimal as text; the store compares it numerically
/// where ordering matters. `stock` never goes negative.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub price: String,
    pub stock: i64,
    pub unit: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns true if the current stock covers `quantity` units.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity <= self.stock
    }
}

/// Input data for creating a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: Option<String>,
    pub price: String,
    pub stock: i64,
    pub unit: String,
    pub description: String,
}

/// Partial update for an existing product.
///
/// `None` fields are left unchanged; an omitted field keeps its current
/// value.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub stock: Option<i64>,
    pub unit: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i64) -> Product {
        Product {
            id: 1,
            name: "Widget".to_string(),
            category: Some("tools".to_string()),
            price: "10.50".to_string(),
            stock,
            unit: "pcs".to_string(),
            description: "A widget".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_can_fulfill_within_stock() {
        assert!(product(5).can_fulfill(3));
        assert!(product(5).can_fulfill(5));
        assert!(product(5).can_fulfill(0));
    }

    #[test]
    fn test_can_fulfill_exceeding_stock() {
        assert!(!product(5).can_fulfill(6));
        assert!(!product(0).can_fulfill(1));
    }
}
