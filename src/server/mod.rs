//! HTTP response shaping
//!
//! Routing and the server itself belong to the host application; this module
//! only turns results into `actix-web` responses.

pub mod responses;

pub use responses::{outcomes_response, report_response};
