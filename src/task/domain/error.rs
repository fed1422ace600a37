//! Error types for task domain validation.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing or revising domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("Title is required.")]
    EmptyTitle,

    /// The title exceeds the persisted column width.
    #[error("Title must not exceed {max} characters, got {actual}.")]
    TitleTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Length of the rejected title in characters.
        actual: usize,
    },

    /// A new task must expire strictly after the moment it is created.
    #[error("Expiration date must be in the future.")]
    ExpirationNotInFuture {
        /// Requested expiration timestamp.
        expiration_date: DateTime<Utc>,
        /// Clock reading the expiration was compared against.
        now: DateTime<Utc>,
    },

    /// A revised expiration must remain strictly after the creation date.
    #[error("Expiration date cannot be before creation date.")]
    ExpirationBeforeCreation {
        /// Requested expiration timestamp.
        expiration_date: DateTime<Utc>,
        /// Creation timestamp of the existing task.
        creation_date: DateTime<Utc>,
    },
}
