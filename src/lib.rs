//! # inventory-ops
//!
//! Decision logic behind two API views of a job-orchestration service:
//!
//! - **Bulk inventory source updates**: start an update on every source of an
//!   inventory and return one outcome per source. Permission and eligibility
//!   failures are reported per source and never fail the request.
//! - **Insights report retrieval**: GET a host report from an Insights-style
//!   API and normalize every failure into a stable `(message, status)` pair.
//!
//! Routing, authentication and persistence stay with the host application,
//! which plugs in through [`AccessController`], [`UpdateLauncher`] and
//! [`ReportSource`].
//!
//! ## Dispatching updates
//!
//! ```rust,ignore
//! use inventory_ops::{Actor, SourceUpdateDispatcher, outcomes_response};
//!
//! let dispatcher = SourceUpdateDispatcher::new(access, launcher);
//! let outcomes = dispatcher.dispatch_updates(&inventory, &Actor::new(1, "admin")).await;
//! let response = outcomes_response(&outcomes);
//! ```
//!
//! ## Fetching a report
//!
//! ```rust,ignore
//! use inventory_ops::{Config, InsightsHttpClient, ReportFetcher};
//! use std::sync::Arc;
//!
//! let config = Config::from_file("config/inventory-ops.yaml").await?;
//! let client = InsightsHttpClient::from_config(&config.insights)?;
//! let result = ReportFetcher::new(Arc::new(client))
//!     .get_insights("https://cert-api.access.redhat.com/r/insights/v3/systems/abc/reports/", 4, 1)
//!     .await;
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

pub use config::Config;
pub use utils::error::{Result, ServiceError};

pub use crate::core::access::{
    AccessController, Actor, Resource, ResourceKey, StaticAccessController,
};
pub use crate::core::insights::{
    CredentialStore, FetchError, InsightsHttpClient, RawResponse, ReportFetcher, ReportMessage,
    ReportResult, ReportSource,
};
pub use crate::core::inventory::{
    Inventory, InventorySource, OutcomeStatus, ProjectRef, SourceKind, SourceUpdateDispatcher,
    UpdateId, UpdateLauncher, UpdateOutcome,
};
pub use server::{outcomes_response, report_response};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
