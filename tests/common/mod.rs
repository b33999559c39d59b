//! Common test utilities for inventory-ops

pub mod fixtures;

pub use fixtures::{InMemoryLauncher, SourceFactory};
