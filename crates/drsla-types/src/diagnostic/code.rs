use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable key of every finding the analyzer can emit.
///
/// The wire form is the SCREAMING_SNAKE_CASE name shared with the dashboard's
/// error-definition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Configuration
    NoTargetConfigured,
    NoScheduleConfigured,
    NoVmsInGroup,

    // Infrastructure
    TargetUnhealthy,
    DrSiteTargetMissing,
    DrTargetUnhealthy,
    DrShellVmMissing,

    // Connectivity
    SshTrustNotEstablished,
    SshConnectionFailed,
    TargetUnreachable,
    VcenterDisconnected,
    EsxiHostDisconnected,

    // Storage
    NfsMountFailed,
    SnapshotChainBroken,
    StorageFull,
    ZfsPoolOffline,

    // Data freshness
    NeverSynced,
    LastSyncTooOld,

    // Operational
    GroupPaused,
    SyncStuckInProgress,
    FailoverTestOverdue,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 21] = [
        ErrorCode::NoTargetConfigured,
        ErrorCode::NoScheduleConfigured,
        ErrorCode::NoVmsInGroup,
        ErrorCode::TargetUnhealthy,
        ErrorCode::DrSiteTargetMissing,
        ErrorCode::DrTargetUnhealthy,
        ErrorCode::DrShellVmMissing,
        ErrorCode::SshTrustNotEstablished,
        ErrorCode::SshConnectionFailed,
        ErrorCode::TargetUnreachable,
        ErrorCode::VcenterDisconnected,
        ErrorCode::EsxiHostDisconnected,
        ErrorCode::NfsMountFailed,
        ErrorCode::SnapshotChainBroken,
        ErrorCode::StorageFull,
        ErrorCode::ZfsPoolOffline,
        ErrorCode::NeverSynced,
        ErrorCode::LastSyncTooOld,
        ErrorCode::GroupPaused,
        ErrorCode::SyncStuckInProgress,
        ErrorCode::FailoverTestOverdue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NoTargetConfigured => "NO_TARGET_CONFIGURED",
            ErrorCode::NoScheduleConfigured => "NO_SCHEDULE_CONFIGURED",
            ErrorCode::NoVmsInGroup => "NO_VMS_IN_GROUP",
            ErrorCode::TargetUnhealthy => "TARGET_UNHEALTHY",
            ErrorCode::DrSiteTargetMissing => "DR_SITE_TARGET_MISSING",
            ErrorCode::DrTargetUnhealthy => "DR_TARGET_UNHEALTHY",
            ErrorCode::DrShellVmMissing => "DR_SHELL_VM_MISSING",
            ErrorCode::SshTrustNotEstablished => "SSH_TRUST_NOT_ESTABLISHED",
            ErrorCode::SshConnectionFailed => "SSH_CONNECTION_FAILED",
            ErrorCode::TargetUnreachable => "TARGET_UNREACHABLE",
            ErrorCode::VcenterDisconnected => "VCENTER_DISCONNECTED",
            ErrorCode::EsxiHostDisconnected => "ESXI_HOST_DISCONNECTED",
            ErrorCode::NfsMountFailed => "NFS_MOUNT_FAILED",
            ErrorCode::SnapshotChainBroken => "SNAPSHOT_CHAIN_BROKEN",
            ErrorCode::StorageFull => "STORAGE_FULL",
            ErrorCode::ZfsPoolOffline => "ZFS_POOL_OFFLINE",
            ErrorCode::NeverSynced => "NEVER_SYNCED",
            ErrorCode::LastSyncTooOld => "LAST_SYNC_TOO_OLD",
            ErrorCode::GroupPaused => "GROUP_PAUSED",
            ErrorCode::SyncStuckInProgress => "SYNC_STUCK_IN_PROGRESS",
            ErrorCode::FailoverTestOverdue => "FAILOVER_TEST_OVERDUE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown error code: {}", s))
    }
}
