//! HTTP surface: DTOs, handlers, middleware, and route tables.
//!
//! Handlers stay thin: validate the request, call a service, map the
//! result into a response DTO. All error formatting happens in one place,
//! [`crate::error::AppError`]'s `IntoResponse` impl.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
