//! Integration tests for inventory-ops
//!
//! These tests drive the crate through its public API.

pub mod config_tests;
pub mod dispatch_tests;
