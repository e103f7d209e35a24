//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are auto-generated via `mockall` for testing.

pub mod order_repository;
pub mod product_repository;
pub mod user_repository;

pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
