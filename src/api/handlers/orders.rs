//! Handlers for order endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::list::{ListParams, ListResponse};
use crate::api::dto::order::{
    OrderConfirmation, OrderItem, PlaceOrderRequest, UpdateOrderRequest,
};
use crate::api::dto::product::DeletedResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Places an order: validates the quantity against stock, decrements it,
/// and records a snapshot of the product.
///
/// # Endpoint
///
/// `POST /shop/orders`
///
/// # Errors
///
/// Returns 404 for an unknown product and 422 when the quantity exceeds
/// the current stock.
pub async fn place_order_handler(
    State(state): State<AppState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> Result<Json<OrderConfirmation>, AppError> {
    payload.validate()?;

    let placed = state
        .order_service
        .place_order(payload.id, i64::from(payload.quantity))
        .await?;

    Ok(Json(OrderConfirmation::from(placed)))
}

/// Lists recorded orders with pagination, sorting, and search.
///
/// # Endpoint
///
/// `GET /shop/orders`
pub async fn order_list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<OrderItem>>, AppError> {
    let (orders, meta) = state.order_service.list_orders(&params.into()).await?;

    let items = orders.into_iter().map(OrderItem::from).collect();

    Ok(Json(ListResponse::new(meta, items)))
}

/// Retrieves a single order.
///
/// # Endpoint
///
/// `GET /shop/orders/{id}`
///
/// # Errors
///
/// Returns 404 if the order does not exist.
pub async fn order_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<OrderItem>, AppError> {
    let order = state.order_service.get_order(id).await?;

    Ok(Json(OrderItem::from(order)))
}

/// Corrects the recorded quantity of an order. The product snapshot stays
/// untouched and stock is not re-adjusted.
///
/// # Endpoint
///
/// `PUT /shop/orders/{id}`
///
/// # Errors
///
/// Returns 422 when the order does not exist.
pub async fn update_order_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateOrderRequest>,
) -> Result<Json<OrderItem>, AppError> {
    payload.validate()?;

    let order = state
        .order_service
        .update_order(id, i64::from(payload.quantity))
        .await?;

    Ok(Json(OrderItem::from(order)))
}

/// Deletes an order record.
///
/// # Endpoint
///
/// `DELETE /shop/orders/{id}`
///
/// # Errors
///
/// Returns 422 when nothing was deleted.
pub async fn delete_order_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    state.order_service.delete_order(id).await?;

    Ok(Json(DeletedResponse { id }))
}
