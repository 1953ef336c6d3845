use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Health reported for a replication target by the job executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetHealth {
    Healthy,
    Degraded,
    Error,
    Offline,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TargetHealth {
    /// Degraded or error states that warrant a diagnostic.
    pub fn is_unhealthy(self) -> bool {
        matches!(self, TargetHealth::Degraded | TargetHealth::Error)
    }
}

impl fmt::Display for TargetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetHealth::Healthy => write!(f, "healthy"),
            TargetHealth::Degraded => write!(f, "degraded"),
            TargetHealth::Error => write!(f, "error"),
            TargetHealth::Offline => write!(f, "offline"),
            TargetHealth::Unknown => write!(f, "unknown"),
        }
    }
}

/// Whether a target acts as the replication source or a DR counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteRole {
    Primary,
    Secondary,
    Dr,
    #[default]
    #[serde(other)]
    Other,
}

/// Storage appliance a protection group replicates to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationTarget {
    pub id: Uuid,
    pub name: String,
    pub hostname: String,

    #[serde(default)]
    pub health_status: TargetHealth,

    /// `None` when trust has not been probed yet.
    #[serde(default)]
    pub ssh_trust_established: Option<bool>,

    #[serde(default)]
    pub partner_target_id: Option<Uuid>,

    #[serde(default)]
    pub site_role: SiteRole,

    #[serde(default)]
    pub datastore_name: Option<String>,
}

impl ReplicationTarget {
    pub fn new(id: Uuid, name: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hostname: hostname.into(),
            health_status: TargetHealth::Healthy,
            ssh_trust_established: Some(true),
            partner_target_id: None,
            site_role: SiteRole::Primary,
            datastore_name: None,
        }
    }

    /// A primary target with no DR partner reference.
    pub fn is_unpaired_primary(&self) -> bool {
        self.site_role == SiteRole::Primary && self.partner_target_id.is_none()
    }

    /// Trust has been probed and found missing.
    pub fn lacks_ssh_trust(&self) -> bool {
        self.ssh_trust_established == Some(false)
    }
}
