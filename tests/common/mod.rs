//! Shared test utilities for bubblestep
//!
//! - TUI terminal testing helpers
//! - App drivers that feed key events

pub mod driver;
pub mod terminal;
