//! Tasklist: a task record management service.
//!
//! Tasks are created, listed, read, updated and deleted over a JSON HTTP API.
//! Business rules (future expiration on create, expiration after creation on
//! update, unique titles) live in the service layer; storage is pluggable.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task domain, repository port, adapters and service
//! - [`http`]: Axum routes, DTOs and error translation
//! - [`config`]: Environment-driven configuration
//! - [`logging`]: Tracing subscriber setup
//! - [`server`]: Store selection and the HTTP server loop

pub mod config;
pub mod http;
pub mod logging;
pub mod server;
pub mod task;
