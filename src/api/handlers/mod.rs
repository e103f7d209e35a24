//! Request handlers, one module per resource.

pub mod auth;
pub mod health;
pub mod orders;
pub mod products;
pub mod users;

pub use auth::login_handler;
pub use health::health_handler;
pub use orders::{
    delete_order_handler, order_detail_handler, order_list_handler, place_order_handler,
    update_order_handler,
};
pub use products::{
    create_product_handler, delete_product_handler, product_detail_handler, product_list_handler,
    update_product_handler,
};
pub use users::{
    change_password_handler, create_user_handler, delete_user_handler, update_user_handler,
    user_detail_handler, user_list_handler,
};
