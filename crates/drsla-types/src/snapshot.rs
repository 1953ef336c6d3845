use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, ProtectedVm, ProtectionGroup, ReplicationJob, ReplicationTarget, Result};

/// Everything the analyzer looks at for one protection group.
///
/// `jobs` should be ordered newest first; the analyzer does not re-sort them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub group: ProtectionGroup,

    #[serde(default)]
    pub target: Option<ReplicationTarget>,

    #[serde(default)]
    pub partner_target: Option<ReplicationTarget>,

    #[serde(default)]
    pub vms: Vec<ProtectedVm>,

    #[serde(default)]
    pub jobs: Vec<ReplicationJob>,
}

impl GroupSnapshot {
    pub fn new(group: ProtectionGroup) -> Self {
        Self {
            group,
            target: None,
            partner_target: None,
            vms: Vec::new(),
            jobs: Vec::new(),
        }
    }

    /// Check that the attached rows actually belong to the group.
    pub fn validate(&self) -> Result<()> {
        if let Some(target) = &self.target
            && self.group.target_id != Some(target.id)
        {
            return Err(Error::InvalidSnapshot(format!(
                "group '{}' does not reference target {}",
                self.group.name, target.id
            )));
        }

        if let Some(partner) = &self.partner_target {
            let Some(target) = &self.target else {
                return Err(Error::InvalidSnapshot(format!(
                    "group '{}' has a partner target but no target",
                    self.group.name
                )));
            };
            if target.partner_target_id != Some(partner.id) {
                return Err(Error::InvalidSnapshot(format!(
                    "target '{}' does not reference partner {}",
                    target.name, partner.id
                )));
            }
        }

        Ok(())
    }
}

/// Export of several protection groups, as written by the dashboard's snapshot tool.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FleetSnapshot {
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub groups: Vec<GroupSnapshot>,
}

impl FleetSnapshot {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let snapshot: FleetSnapshot = serde_json::from_str(content)?;
        for group in &snapshot.groups {
            group.validate()?;
        }
        Ok(snapshot)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Look a group up by UUID or by exact name.
    pub fn find_group(&self, key: &str) -> Option<&GroupSnapshot> {
        self.groups
            .iter()
            .find(|g| g.group.id.to_string() == key || g.group.name == key)
    }
}
