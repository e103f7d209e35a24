//! DTOs for product catalog endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::Product;

/// JSON projection of a product. Timestamps and other internals are never
/// exposed.
#[derive(Debug, Serialize)]
pub struct ProductItem {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub price: String,
    pub stock: i64,
    pub unit: String,
    pub description: String,
}

impl From<Product> for ProductItem {
    fn from(product: Product) -> Self {
        ProductItem {
            id: product.id,
            name: product.name,
            category: product.category,
            price: product.price,
            stock: product.stock,
            unit: product.unit,
            description: product.description,
        }
    }
}

/// Request body for creating a product.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,

    #[validate(length(min = 1, max = 12), custom(function = "validate_decimal"))]
    pub price: String,

    pub stock: u32,

    #[validate(length(min = 1, max = 10))]
    pub unit: String,

    #[validate(length(min = 1, max = 150))]
    pub description: String,
}

/// Request body for partially updating a product. Omitted fields keep
/// their current value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,

    #[validate(length(min = 1, max = 12), custom(function = "validate_decimal"))]
    pub price: Option<String>,

    pub stock: Option<u32>,

    #[validate(length(min = 1, max = 10))]
    pub unit: Option<String>,

    #[validate(length(min = 1, max = 150))]
    pub description: Option<String>,
}

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: i64,
}

/// Accepts plain decimals like `10` or `10.50`; the store compares prices
/// through a numeric cast, so scientific notation and signs are rejected.
fn validate_decimal(value: &str) -> Result<(), ValidationError> {
    let (integral, fraction) = match value.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (value, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if all_digits(integral) && fraction.is_none_or(all_digits) {
        Ok(())
    } else {
        Err(ValidationError::new("decimal"))
    }
}
