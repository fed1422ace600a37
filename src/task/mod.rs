//! Task record management.
//!
//! Tasks carry a unique title, an optional description, a creation date fixed
//! at creation and an expiration date that must always follow it. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
