//! Unit tests for the HTTP module.
