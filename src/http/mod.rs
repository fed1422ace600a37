//! HTTP surface for task management.
//!
//! Routes map one-to-one onto [`TaskService`](crate::task::services::TaskService)
//! operations. Failures from every handler pass through [`ApiError`], which
//! owns the status code and error body mapping.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
mod router;

pub use dto::{TaskPayload, TaskResponse};
pub use error::{ApiError, ErrorBody};
pub use router::router;

#[cfg(test)]
mod tests;
