//! Access control seam
//!
//! Authorization policy lives outside this crate; callers plug it in through
//! [`AccessController`]. [`StaticAccessController`] is a grant-table
//! implementation used by the probe binary and tests.

use crate::core::inventory::ProjectRef;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// The user on whose behalf a request runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub is_superuser: bool,
}

impl Actor {
    pub fn new(id: u64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            is_superuser: false,
        }
    }

    pub fn superuser(id: u64, username: impl Into<String>) -> Self {
        Self {
            is_superuser: true,
            ..Self::new(id, username)
        }
    }
}

/// Something an actor may need permission to act on
#[derive(Debug, Clone, Copy)]
pub enum Resource<'a> {
    /// Starting an update of a project
    Project(&'a ProjectRef),
}

impl Resource<'_> {
    pub fn key(&self) -> ResourceKey {
        match self {
            Resource::Project(project) => ResourceKey::Project(project.id),
        }
    }
}

/// Owned identity of a [`Resource`], used as a grant-table key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Project(u64),
}

/// Decides whether an actor may act on a resource
pub trait AccessController: Send + Sync {
    fn can_access(&self, actor: &Actor, resource: &Resource<'_>) -> bool;
}

/// Grant table keyed by actor id
#[derive(Debug, Clone, Default)]
pub struct StaticAccessController {
    superusers: HashSet<u64>,
    grants: HashMap<u64, HashSet<ResourceKey>>,
}

impl StaticAccessController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_superuser(mut self, actor_id: u64) -> Self {
        self.superusers.insert(actor_id);
        self
    }

    pub fn grant(mut self, actor_id: u64, key: ResourceKey) -> Self {
        self.grants.entry(actor_id).or_default().insert(key);
        self
    }
}

impl AccessController for StaticAccessController {
    fn can_access(&self, actor: &Actor, resource: &Resource<'_>) -> bool {
        if actor.is_superuser || self.superusers.contains(&actor.id) {
            return true;
        }

        let key = resource.key();
        let granted = self
            .grants
            .get(&actor.id)
            .is_some_and(|keys| keys.contains(&key));

        debug!(actor = actor.id, ?key, granted, "Access check");
        granted
    }
}
