use drsla_types::{ErrorCategory, ErrorCode, Severity};
use serde::Serialize;

/// Human-facing description of an error code.
///
/// `description` may contain `{contextKey}` placeholders that
/// [`DiagnosticResult::message`](super::DiagnosticResult::message) fills from
/// the finding's context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDefinition {
    pub code: ErrorCode,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub category: ErrorCategory,
    pub remediation: &'static [&'static str],
}

/// Resolve the definition of an error code.
///
/// The match is exhaustive, so adding an `ErrorCode` variant without a
/// definition fails to compile.
pub fn definition(code: ErrorCode) -> &'static ErrorDefinition {
    match code {
        ErrorCode::NoTargetConfigured => &NO_TARGET_CONFIGURED,
        ErrorCode::NoScheduleConfigured => &NO_SCHEDULE_CONFIGURED,
        ErrorCode::NoVmsInGroup => &NO_VMS_IN_GROUP,
        ErrorCode::TargetUnhealthy => &TARGET_UNHEALTHY,
        ErrorCode::DrSiteTargetMissing => &DR_SITE_TARGET_MISSING,
        ErrorCode::DrTargetUnhealthy => &DR_TARGET_UNHEALTHY,
        ErrorCode::DrShellVmMissing => &DR_SHELL_VM_MISSING,
        ErrorCode::SshTrustNotEstablished => &SSH_TRUST_NOT_ESTABLISHED,
        ErrorCode::SshConnectionFailed => &SSH_CONNECTION_FAILED,
        ErrorCode::TargetUnreachable => &TARGET_UNREACHABLE,
        ErrorCode::VcenterDisconnected => &VCENTER_DISCONNECTED,
        ErrorCode::EsxiHostDisconnected => &ESXI_HOST_DISCONNECTED,
        ErrorCode::NfsMountFailed => &NFS_MOUNT_FAILED,
        ErrorCode::SnapshotChainBroken => &SNAPSHOT_CHAIN_BROKEN,
        ErrorCode::StorageFull => &STORAGE_FULL,
        ErrorCode::ZfsPoolOffline => &ZFS_POOL_OFFLINE,
        ErrorCode::NeverSynced => &NEVER_SYNCED,
        ErrorCode::LastSyncTooOld => &LAST_SYNC_TOO_OLD,
        ErrorCode::GroupPaused => &GROUP_PAUSED,
        ErrorCode::SyncStuckInProgress => &SYNC_STUCK_IN_PROGRESS,
        ErrorCode::FailoverTestOverdue => &FAILOVER_TEST_OVERDUE,
    }
}

/// Every definition, in `ErrorCode::ALL` order.
pub fn all_definitions() -> impl Iterator<Item = &'static ErrorDefinition> {
    ErrorCode::ALL.into_iter().map(definition)
}

static NO_TARGET_CONFIGURED: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::NoTargetConfigured,
    title: "No replication target",
    description: "This protection group has no replication target, so none of its VMs are being replicated.",
    severity: Severity::Critical,
    category: ErrorCategory::Configuration,
    remediation: &[
        "Edit the protection group and select a replication target",
        "Register a target appliance first if none exists",
    ],
};

static NO_SCHEDULE_CONFIGURED: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::NoScheduleConfigured,
    title: "No replication schedule",
    description: "Replication only runs when triggered manually because no schedule is set.",
    severity: Severity::Warning,
    category: ErrorCategory::Configuration,
    remediation: &["Set a replication schedule that fits the group's RPO"],
};

static NO_VMS_IN_GROUP: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::NoVmsInGroup,
    title: "Protection group is empty",
    description: "No virtual machines are members of this protection group.",
    severity: Severity::Warning,
    category: ErrorCategory::Configuration,
    remediation: &["Add the VMs that should be protected to the group"],
};

static TARGET_UNHEALTHY: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::TargetUnhealthy,
    title: "Replication target unhealthy",
    description: "Target {targetName} ({hostname}) reports health status '{healthStatus}'.",
    severity: Severity::Critical,
    category: ErrorCategory::Infrastructure,
    remediation: &[
        "Check pool and disk status on the target appliance",
        "Run a health check from the targets page once the issue is cleared",
    ],
};

static DR_SITE_TARGET_MISSING: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::DrSiteTargetMissing,
    title: "No DR site partner",
    description: "Primary target {targetName} is not paired with a DR site target, so data never leaves the primary site.",
    severity: Severity::Warning,
    category: ErrorCategory::Infrastructure,
    remediation: &[
        "Register a target at the DR site",
        "Pair it with the primary target from the targets page",
    ],
};

static DR_TARGET_UNHEALTHY: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::DrTargetUnhealthy,
    title: "DR site target unhealthy",
    description: "Partner target {partnerName} reports health status '{healthStatus}'.",
    severity: Severity::Warning,
    category: ErrorCategory::Infrastructure,
    remediation: &["Check pool and disk status on the DR site appliance"],
};

static DR_SHELL_VM_MISSING: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::DrShellVmMissing,
    title: "DR shell VMs missing",
    description: "{missingCount} of {totalCount} VMs have no DR shell VM ({exampleVms}).",
    severity: Severity::Warning,
    category: ErrorCategory::Infrastructure,
    remediation: &[
        "Run 'Create DR shells' for the protection group",
        "Verify the DR vCenter has capacity for the shell VMs",
    ],
};

static SSH_TRUST_NOT_ESTABLISHED: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::SshTrustNotEstablished,
    title: "SSH trust not established",
    description: "Key-based SSH to {hostname} is not set up, so the executor cannot drive replication.",
    severity: Severity::Critical,
    category: ErrorCategory::Connectivity,
    remediation: &[
        "Run 'Establish SSH trust' on the target",
        "Confirm the executor's public key is in the target's authorized_keys",
    ],
};

static SSH_CONNECTION_FAILED: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::SshConnectionFailed,
    title: "SSH connection failed",
    description: "A recent job could not open an SSH session: {message}",
    severity: Severity::Critical,
    category: ErrorCategory::Connectivity,
    remediation: &[
        "Check that sshd is running on the target",
        "Check firewall rules between the executor and the target",
    ],
};

static TARGET_UNREACHABLE: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::TargetUnreachable,
    title: "Target unreachable",
    description: "A recent job timed out reaching the target: {message}",
    severity: Severity::Critical,
    category: ErrorCategory::Connectivity,
    remediation: &[
        "Ping the target from the executor host",
        "Check routing and VPN links between sites",
    ],
};

static VCENTER_DISCONNECTED: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::VcenterDisconnected,
    title: "vCenter disconnected",
    description: "A recent job lost its vCenter session: {message}",
    severity: Severity::Critical,
    category: ErrorCategory::Connectivity,
    remediation: &[
        "Verify vCenter is up and the service account is valid",
        "Re-sync the vCenter connection from settings",
    ],
};

static ESXI_HOST_DISCONNECTED: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::EsxiHostDisconnected,
    title: "ESXi host disconnected",
    description: "A recent job hit a disconnected ESXi host: {message}",
    severity: Severity::Warning,
    category: ErrorCategory::Connectivity,
    remediation: &["Reconnect the host in vCenter and retry the job"],
};

static NFS_MOUNT_FAILED: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::NfsMountFailed,
    title: "Datastore mount failed",
    description: "A recent job could not mount the replication datastore: {message}",
    severity: Severity::Critical,
    category: ErrorCategory::JobFailure,
    remediation: &[
        "Check the NFS export on the target",
        "Verify the ESXi hosts are allowed in the export's access list",
    ],
};

static SNAPSHOT_CHAIN_BROKEN: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::SnapshotChainBroken,
    title: "Snapshot chain broken",
    description: "Incremental replication has no common snapshot with the DR side: {message}",
    severity: Severity::Critical,
    category: ErrorCategory::JobFailure,
    remediation: &[
        "Run a full (non-incremental) sync to re-seed the DR copy",
        "Avoid deleting replication snapshots manually",
    ],
};

static STORAGE_FULL: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::StorageFull,
    title: "Storage exhausted",
    description: "A recent job ran out of space: {message}",
    severity: Severity::Critical,
    category: ErrorCategory::JobFailure,
    remediation: &[
        "Free space or expand the pool on the target",
        "Review snapshot retention for the group",
    ],
};

static ZFS_POOL_OFFLINE: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::ZfsPoolOffline,
    title: "ZFS pool offline",
    description: "A recent job reported a degraded or offline ZFS pool: {message}",
    severity: Severity::Critical,
    category: ErrorCategory::JobFailure,
    remediation: &[
        "Run 'zpool status' on the target and replace failed devices",
        "Clear pool errors once the devices are healthy",
    ],
};

static NEVER_SYNCED: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::NeverSynced,
    title: "Never replicated",
    description: "A target is configured but the group has never completed a sync.",
    severity: Severity::Warning,
    category: ErrorCategory::DataFreshness,
    remediation: &["Trigger an initial sync from the protection group page"],
};

static LAST_SYNC_TOO_OLD: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::LastSyncTooOld,
    title: "RPO exceeded",
    description: "Last sync was {currentRpoMinutes} minutes ago, {overdueMinutes} minutes past the {targetRpoMinutes}-minute RPO.",
    severity: Severity::Critical,
    category: ErrorCategory::DataFreshness,
    remediation: &[
        "Check recent replication jobs for failures",
        "Shorten the schedule interval if syncs routinely run late",
    ],
};

static GROUP_PAUSED: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::GroupPaused,
    title: "Replication paused",
    description: "Replication was paused at {pausedAt}: {reason}",
    severity: Severity::Info,
    category: ErrorCategory::Operational,
    remediation: &["Resume the group once maintenance is finished"],
};

static SYNC_STUCK_IN_PROGRESS: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::SyncStuckInProgress,
    title: "Sync appears stuck",
    description: "Sync job {jobId} has been running for {runningMinutes} minutes.",
    severity: Severity::Warning,
    category: ErrorCategory::Operational,
    remediation: &[
        "Check the job executor logs for the job",
        "Cancel the job and retry if the transfer is not progressing",
    ],
};

static FAILOVER_TEST_OVERDUE: ErrorDefinition = ErrorDefinition {
    code: ErrorCode::FailoverTestOverdue,
    title: "Failover test overdue",
    description: "Days since last failover test: {daysSinceTest} (reminder every {reminderDays} days).",
    severity: Severity::Info,
    category: ErrorCategory::Operational,
    remediation: &["Schedule a test failover for the group"],
};
