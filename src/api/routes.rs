//! API route configuration.
//!
//! Routes are split into a public set and a set protected by Bearer token
//! authentication via [`crate::api::middleware::auth`]. Paths shared
//! between the two sets (`/shop/products`, `/users`) carry different
//! methods on each side and are merged by the top-level router.

use crate::api::handlers::{
    change_password_handler, create_product_handler, create_user_handler, delete_order_handler,
    delete_product_handler, delete_user_handler, health_handler, login_handler,
    order_detail_handler, order_list_handler, place_order_handler, product_detail_handler,
    product_list_handler, update_order_handler, update_product_handler, update_user_handler,
    user_detail_handler, user_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes reachable without a token.
///
/// # Endpoints
///
/// - `POST /authentication/login` - Credential login (failed attempts are
///   rate limited per IP)
/// - `POST /shop/products`        - Create a product
/// - `POST /users`                - Register a user
/// - `GET  /health`               - Liveness and DB reachability
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/authentication/login", post(login_handler))
        .route("/shop/products", post(create_product_handler))
        .route("/users", post(create_user_handler))
        .route("/health", get(health_handler))
}

/// Routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /shop/products`       - List products (paginated)
/// - `GET    /shop/products/{id}`  - Product detail
/// - `PUT    /shop/products/{id}`  - Partial update
/// - `DELETE /shop/products/{id}`  - Delete
/// - `POST   /shop/orders`         - Place an order
/// - `GET    /shop/orders`         - List orders (paginated)
/// - `GET    /shop/orders/{id}`    - Order detail
/// - `PUT    /shop/orders/{id}`    - Correct recorded quantity
/// - `DELETE /shop/orders/{id}`    - Delete order record
/// - `GET    /users`               - List users (paginated)
/// - `GET    /users/{id}`          - User detail
/// - `PUT    /users/{id}`          - Update profile
/// - `DELETE /users/{id}`          - Delete user
/// - `POST   /users/{id}/change-password` - Change password
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shop/products", get(product_list_handler))
        .route(
            "/shop/products/{id}",
            get(product_detail_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .route(
            "/shop/orders",
            get(order_list_handler).post(place_order_handler),
        )
        .route(
            "/shop/orders/{id}",
            get(order_detail_handler)
                .put(update_order_handler)
                .delete(delete_order_handler),
        )
        .route("/users", get(user_list_handler))
        .route(
            "/users/{id}",
            get(user_detail_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/users/{id}/change-password", post(change_password_handler))
}
