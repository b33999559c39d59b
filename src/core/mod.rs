//! Core request-handling logic
//!
//! - **access**: authorization seam used by the dispatcher
//! - **inventory**: bulk inventory source updates
//! - **insights**: Insights report retrieval and failure normalization

pub mod access;
pub mod insights;
pub mod inventory;
