//! Test fixtures and data factories

use async_trait::async_trait;
use inventory_ops::{
    Inventory, InventorySource, ProjectRef, Result, ServiceError, SourceKind, UpdateId,
    UpdateLauncher,
};
use std::collections::HashSet;
use std::sync::Mutex;

/// Factory for inventory sources
pub struct SourceFactory;

impl SourceFactory {
    pub fn cloud(id: u64, kind: SourceKind, can_update: bool) -> InventorySource {
        InventorySource {
            id,
            name: format!("{}-{}", kind, id),
            kind,
            update_on_project_change: false,
            linked_project: None,
            can_update,
        }
    }

    pub fn project_driven(id: u64, project_id: u64, project_name: &str) -> InventorySource {
        InventorySource {
            id,
            name: format!("scm-{}", id),
            kind: SourceKind::Scm,
            update_on_project_change: true,
            linked_project: Some(ProjectRef {
                id: project_id,
                name: project_name.to_string(),
            }),
            can_update: true,
        }
    }

    pub fn inventory(sources: Vec<InventorySource>) -> Inventory {
        Inventory {
            id: 1,
            name: "Demo Inventory".to_string(),
            sources,
        }
    }
}

/// Update launcher that allocates ids from a counter. Sources listed in
/// `busy` fail to launch.
pub struct InMemoryLauncher {
    next_id: Mutex<UpdateId>,
    busy: HashSet<u64>,
    launched: Mutex<Vec<(&'static str, u64)>>,
}

impl InMemoryLauncher {
    pub fn starting_at(first_id: UpdateId) -> Self {
        Self {
            next_id: Mutex::new(first_id),
            busy: HashSet::new(),
            launched: Mutex::new(Vec::new()),
        }
    }

    pub fn with_busy_source(mut self, source_id: u64) -> Self {
        self.busy.insert(source_id);
        self
    }

    pub fn launched(&self) -> Vec<(&'static str, u64)> {
        self.launched.lock().unwrap().clone()
    }

    fn allocate(&self, kind: &'static str, id: u64) -> UpdateId {
        self.launched.lock().unwrap().push((kind, id));
        let mut next = self.next_id.lock().unwrap();
        let allocated = *next;
        *next += 1;
        allocated
    }
}

#[async_trait]
impl UpdateLauncher for InMemoryLauncher {
    async fn launch_source_update(&self, source: &InventorySource) -> Result<UpdateId> {
        if self.busy.contains(&source.id) {
            return Err(ServiceError::scheduler(format!(
                "source {} already has a pending update",
                source.id
            )));
        }
        Ok(self.allocate("inventory_source", source.id))
    }

    async fn launch_project_update(&self, project: &ProjectRef) -> Result<UpdateId> {
        Ok(self.allocate("project", project.id))
    }
}
