//! Inventory source types and per-source update outcomes

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Identifier of a started update job
pub type UpdateId = u64;

/// Rejection reason for a source whose `can_update` check failed
pub const CANNOT_UPDATE_REASON: &str = "Could not start because 'can_update' returned False";

/// Rejection reason for an actor who may not start the linked project's update
pub fn project_permission_reason(project_name: &str) -> String {
    format!(
        "You do not have permission to update project '{}'",
        project_name
    )
}

/// Status text of an outcome whose update was started
pub const STARTED_STATUS: &str = "started";

/// Where an inventory source pulls its hosts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    File,
    /// Inventory file kept in a version-controlled project
    Scm,
    Ec2,
    Gce,
    AzureRm,
    Vmware,
    Satellite6,
    Cloudforms,
    Openstack,
    Rhv,
    Tower,
    Custom,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::File => "file",
            SourceKind::Scm => "scm",
            SourceKind::Ec2 => "ec2",
            SourceKind::Gce => "gce",
            SourceKind::AzureRm => "azure_rm",
            SourceKind::Vmware => "vmware",
            SourceKind::Satellite6 => "satellite6",
            SourceKind::Cloudforms => "cloudforms",
            SourceKind::Openstack => "openstack",
            SourceKind::Rhv => "rhv",
            SourceKind::Tower => "tower",
            SourceKind::Custom => "custom",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a version-control project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: u64,
    pub name: String,
}

/// A configured data source attached to an inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySource {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub kind: SourceKind,
    /// Refresh is driven by updating `linked_project`
    #[serde(default)]
    pub update_on_project_change: bool,
    #[serde(default)]
    pub linked_project: Option<ProjectRef>,
    /// Precomputed eligibility, e.g. false while an update is already running
    pub can_update: bool,
}

impl InventorySource {
    /// The project whose update drives this source, if any.
    pub fn driving_project(&self) -> Option<&ProjectRef> {
        if self.kind == SourceKind::Scm && self.update_on_project_change {
            self.linked_project.as_ref()
        } else {
            None
        }
    }
}

/// An inventory and its sources in collection order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sources: Vec<InventorySource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    Started { update_id: UpdateId },
    Rejected { reason: String },
}

/// What happened to one inventory source during a bulk update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub source_id: u64,
    pub status: OutcomeStatus,
}

impl UpdateOutcome {
    pub fn started(source_id: u64, update_id: UpdateId) -> Self {
        Self {
            source_id,
            status: OutcomeStatus::Started { update_id },
        }
    }

    pub fn rejected(source_id: u64, reason: impl Into<String>) -> Self {
        Self {
            source_id,
            status: OutcomeStatus::Rejected {
                reason: reason.into(),
            },
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self.status, OutcomeStatus::Started { .. })
    }

    pub fn update_id(&self) -> Option<UpdateId> {
        match self.status {
            OutcomeStatus::Started { update_id } => Some(update_id),
            OutcomeStatus::Rejected { .. } => None,
        }
    }

    /// `"started"` or the rejection reason
    pub fn status_text(&self) -> &str {
        match &self.status {
            OutcomeStatus::Started { .. } => STARTED_STATUS,
            OutcomeStatus::Rejected { reason } => reason,
        }
    }
}

#[derive(Serialize)]
struct OutcomeBody<'a> {
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    inventory_update: Option<UpdateId>,
    inventory_source: u64,
}

impl Serialize for UpdateOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OutcomeBody {
            status: self.status_text(),
            inventory_update: self.update_id(),
            inventory_source: self.source_id,
        }
        .serialize(serializer)
    }
}

/// Counts of started and rejected outcomes in one dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub started: usize,
    pub rejected: usize,
}

impl DispatchSummary {
    pub fn from_outcomes(outcomes: &[UpdateOutcome]) -> Self {
        let started = outcomes.iter().filter(|o| o.is_started()).count();
        Self {
            started,
            rejected: outcomes.len() - started,
        }
    }
}
