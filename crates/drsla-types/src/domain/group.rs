use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named set of VMs replicated together under one schedule, target and RPO policy.
///
/// Mirrors the `protection_groups` row shape of the backing store. Every
/// optional field is a check the analyzer skips when the value is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectionGroup {
    pub id: Uuid,
    pub name: String,

    /// Replication target the group syncs to.
    #[serde(default)]
    pub target_id: Option<Uuid>,

    /// Schedule descriptor (cron expression or interval label).
    #[serde(default)]
    pub replication_schedule: Option<String>,

    #[serde(default)]
    pub last_replication_at: Option<DateTime<Utc>>,

    /// Recovery point objective in minutes. Zero means no objective.
    #[serde(default)]
    pub rpo_minutes: Option<u32>,

    #[serde(default = "default_enabled")]
    pub is_enabled: bool,

    #[serde(default)]
    pub paused_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub pause_reason: Option<String>,

    /// Free-form status label maintained by the job executor.
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub sync_in_progress: bool,

    #[serde(default)]
    pub last_test_at: Option<DateTime<Utc>>,

    /// Failover test cadence in days. Zero means no reminder.
    #[serde(default)]
    pub test_reminder_days: Option<u32>,
}

fn default_enabled() -> bool {
    true
}

impl ProtectionGroup {
    /// Minimal enabled group with nothing configured.
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            target_id: None,
            replication_schedule: None,
            last_replication_at: None,
            rpo_minutes: None,
            is_enabled: true,
            paused_at: None,
            pause_reason: None,
            status: None,
            sync_in_progress: false,
            last_test_at: None,
            test_reminder_days: None,
        }
    }

    /// Schedule descriptor, ignoring blank strings.
    pub fn schedule(&self) -> Option<&str> {
        self.replication_schedule
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn rpo_target(&self) -> Option<u32> {
        self.rpo_minutes.filter(|m| *m > 0)
    }

    pub fn test_reminder(&self) -> Option<u32> {
        self.test_reminder_days.filter(|d| *d > 0)
    }
}
