//! Inventory source bulk updates
//!
//! Given an inventory, start an update on each of its sources and report a
//! per-source outcome. Permission and eligibility failures are outcomes, not
//! errors.

mod dispatcher;
mod types;

pub use dispatcher::{SourceUpdateDispatcher, UpdateLauncher};
pub use types::{
    CANNOT_UPDATE_REASON, DispatchSummary, Inventory, InventorySource, OutcomeStatus, ProjectRef,
    STARTED_STATUS, SourceKind, UpdateId, UpdateOutcome, project_permission_reason,
};
