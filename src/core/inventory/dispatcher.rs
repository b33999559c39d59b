//! Bulk inventory source update dispatch

use super::types::{
    CANNOT_UPDATE_REASON, DispatchSummary, Inventory, InventorySource, ProjectRef, UpdateId,
    UpdateOutcome, project_permission_reason,
};
use crate::core::access::{AccessController, Actor, Resource};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Starts background update jobs. Returns as soon as the job is scheduled.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdateLauncher: Send + Sync {
    async fn launch_source_update(&self, source: &InventorySource) -> Result<UpdateId>;

    async fn launch_project_update(&self, project: &ProjectRef) -> Result<UpdateId>;
}

/// Starts an update on every source of an inventory and reports each result.
///
/// A rejected or failed source never stops the remaining ones; the returned
/// list always has one outcome per source, in collection order.
#[derive(Clone)]
pub struct SourceUpdateDispatcher {
    access: Arc<dyn AccessController>,
    launcher: Arc<dyn UpdateLauncher>,
}

impl SourceUpdateDispatcher {
    pub fn new(access: Arc<dyn AccessController>, launcher: Arc<dyn UpdateLauncher>) -> Self {
        Self { access, launcher }
    }

    pub async fn dispatch_updates(
        &self,
        inventory: &Inventory,
        actor: &Actor,
    ) -> Vec<UpdateOutcome> {
        debug!(
            inventory = inventory.id,
            sources = inventory.sources.len(),
            actor = actor.id,
            "Dispatching inventory source updates"
        );

        let mut outcomes = Vec::with_capacity(inventory.sources.len());
        for source in &inventory.sources {
            outcomes.push(self.dispatch_one(source, actor).await);
        }

        let summary = DispatchSummary::from_outcomes(&outcomes);
        info!(
            inventory = inventory.id,
            started = summary.started,
            rejected = summary.rejected,
            "Inventory source update dispatch finished"
        );

        outcomes
    }

    async fn dispatch_one(&self, source: &InventorySource, actor: &Actor) -> UpdateOutcome {
        let launched = match source.driving_project() {
            Some(project) => {
                if !self.access.can_access(actor, &Resource::Project(project)) {
                    warn!(
                        source = source.id,
                        project = project.id,
                        actor = actor.id,
                        "Actor may not update linked project"
                    );
                    return UpdateOutcome::rejected(
                        source.id,
                        project_permission_reason(&project.name),
                    );
                }
                self.launcher.launch_project_update(project).await
            }
            None => {
                if !source.can_update {
                    debug!(source = source.id, "Source cannot be updated right now");
                    return UpdateOutcome::rejected(source.id, CANNOT_UPDATE_REASON);
                }
                self.launcher.launch_source_update(source).await
            }
        };

        match launched {
            Ok(update_id) => {
                debug!(source = source.id, update_id, "Update started");
                UpdateOutcome::started(source.id, update_id)
            }
            Err(e) => {
                warn!(source = source.id, error = %e, "Failed to start update");
                UpdateOutcome::rejected(source.id, format!("Failed to start update: {}", e))
            }
        }
    }
}
