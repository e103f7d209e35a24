//! Core business entities.

pub mod order;
pub mod product;
pub mod user;

pub use order::{NewOrder, Order};
pub use product::{NewProduct, Product, ProductPatch};
pub use user::{NewUser, User, UserPatch};
