//! Integration tests for bubblestep
//!
//! These tests verify that multiple components work together correctly.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod session_flow;
pub mod trace_properties;
pub mod tui_render;
