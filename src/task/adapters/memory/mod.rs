//! In-memory adapter implementations.
//!
//! The in-memory repository is used by the default server configuration and
//! by tests that need no database.

mod task;

pub use task::InMemoryTaskRepository;
