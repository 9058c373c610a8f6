//! Main entry point for integration tests
//!
//! Run with: `cargo test --test integration_tests`
//!
//! Note: The `common` module is loaded via `#[path]` in the integration module
//! to avoid duplicate module loading issues.

mod integration;

pub use integration::*;
