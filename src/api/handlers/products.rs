//! Handlers for product catalog endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::list::{ListParams, ListResponse};
use crate::api::dto::product::{
    CreateProductRequest, DeletedResponse, ProductItem, UpdateProductRequest,
};
use crate::domain::entities::{NewProduct, ProductPatch};
use crate::error::AppError;
use crate::state::AppState;

/// Lists products with pagination, sorting, and search.
///
/// # Endpoint
///
/// `GET /shop/products`
///
/// # Query Parameters
///
/// - `page_number` (optional): 1-indexed page, default 1
/// - `page_size` (optional): default is the full record count
/// - `sort` (optional): `field` or `field:asc|desc`, default `name`
/// - `search` (optional): `field:pattern`, case-insensitive substring match
///
/// # Errors
///
/// Returns 400 for malformed parameters or a page past the last one.
pub async fn product_list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<ProductItem>>, AppError> {
    let (products, meta) = state.catalog_service.list_products(&params.into()).await?;

    let items = products.into_iter().map(ProductItem::from).collect();

    Ok(Json(ListResponse::new(meta, items)))
}

/// Retrieves a single product.
///
/// # Endpoint
///
/// `GET /shop/products/{id}`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
pub async fn product_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductItem>, AppError> {
    let product = state.catalog_service.get_product(id).await?;

    Ok(Json(ProductItem::from(product)))
}

/// Creates a product.
///
/// # Endpoint
///
/// `POST /shop/products`
///
/// # Errors
///
/// Returns 400 on validation failure and 422 when the name is taken.
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<Json<ProductItem>, AppError> {
    payload.validate()?;

    let product = state
        .catalog_service
        .create_product(NewProduct {
            name: payload.name,
            category: payload.category,
            price: payload.price,
            stock: i64::from(payload.stock),
            unit: payload.unit,
            description: payload.description,
        })
        .await?;

    Ok(Json(ProductItem::from(product)))
}

/// Partially updates a product. Omitted fields keep their current value.
///
/// # Endpoint
///
/// `PUT /shop/products/{id}`
///
/// # Errors
///
/// Returns 404 for an unknown product and 422 when renaming onto another
/// product's name.
pub async fn update_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductItem>, AppError> {
    payload.validate()?;

    let patch = ProductPatch {
        name: payload.name,
        category: payload.category,
        price: payload.price,
        stock: payload.stock.map(i64::from),
        unit: payload.unit,
        description: payload.description,
    };

    let product = state.catalog_service.update_product(id, patch).await?;

    Ok(Json(ProductItem::from(product)))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /shop/products/{id}`
///
/// # Errors
///
/// Returns 422 when nothing was deleted.
pub async fn delete_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    state.catalog_service.delete_product(id).await?;

    Ok(Json(DeletedResponse { id }))
}
