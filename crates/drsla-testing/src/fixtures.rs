//! Fixtures for protection group snapshots.
//!
//! `GroupBuilder` starts from a fully healthy group (target paired with a DR
//! partner, schedule set, recent sync, every VM shelled) so each test only
//! spells out the fault it cares about.

use chrono::{DateTime, Duration, TimeZone, Utc};
use drsla_types::{
    FleetSnapshot, GroupSnapshot, JobStatus, ProtectedVm, ProtectionGroup, REPLICATION_SYNC_JOB,
    ReplicationJob, ReplicationTarget, SiteRole, TargetHealth,
};
use serde_json::Value;
use uuid::Uuid;

/// Frozen clock shared by fixtures and assertions.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

/// Deterministic UUID in a namespace (`ns`) so fixture ids never collide.
pub fn fixture_id(ns: u16, n: u32) -> Uuid {
    Uuid::from_u128(((ns as u128) << 96) | n as u128)
}

/// Fluent builder for [`GroupSnapshot`].
pub struct GroupBuilder {
    snapshot: GroupSnapshot,
    next_job: u32,
}

impl GroupBuilder {
    /// Healthy group named `name`, with one shelled VM and a recent sync.
    pub fn healthy(name: &str) -> Self {
        let seed = name.bytes().fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
        let target_id = fixture_id(0xa, seed);
        let partner_id = fixture_id(0xb, seed);

        let mut group = ProtectionGroup::new(fixture_id(0x1, seed), name);
        group.target_id = Some(target_id);
        group.replication_schedule = Some("*/15 * * * *".to_string());
        group.rpo_minutes = Some(60);
        group.last_replication_at = Some(fixed_now() - Duration::minutes(10));

        let mut target =
            ReplicationTarget::new(target_id, format!("{}-zfs", name), format!("{}-zfs.dc1.lab", name));
        target.partner_target_id = Some(partner_id);
        target.datastore_name = Some(format!("{}-repl", name));

        let mut partner =
            ReplicationTarget::new(partner_id, format!("{}-zfs-dr", name), format!("{}-zfs.dc2.lab", name));
        partner.site_role = SiteRole::Dr;

        let mut vm = ProtectedVm::new(fixture_id(0xf, seed), format!("{}-vm01", name));
        vm.dr_shell_vm_created = true;
        vm.failover_ready = true;

        Self {
            snapshot: GroupSnapshot {
                group,
                target: Some(target),
                partner_target: Some(partner),
                vms: vec![vm],
                jobs: Vec::new(),
            },
            next_job: 1,
        }
    }

    pub fn without_target(mut self) -> Self {
        self.snapshot.group.target_id = None;
        self.snapshot.target = None;
        self.snapshot.partner_target = None;
        self
    }

    pub fn without_schedule(mut self) -> Self {
        self.snapshot.group.replication_schedule = None;
        self
    }

    pub fn without_partner(mut self) -> Self {
        if let Some(target) = self.snapshot.target.as_mut() {
            target.partner_target_id = None;
        }
        self.snapshot.partner_target = None;
        self
    }

    pub fn target_health(mut self, health: TargetHealth) -> Self {
        if let Some(target) = self.snapshot.target.as_mut() {
            target.health_status = health;
        }
        self
    }

    pub fn ssh_trust(mut self, established: Option<bool>) -> Self {
        if let Some(target) = self.snapshot.target.as_mut() {
            target.ssh_trust_established = established;
        }
        self
    }

    pub fn rpo_minutes(mut self, rpo: Option<u32>) -> Self {
        self.snapshot.group.rpo_minutes = rpo;
        self
    }

    /// Last sync `minutes_ago` before [`fixed_now`]; `None` means never synced.
    pub fn last_sync_minutes_ago(mut self, minutes_ago: Option<i64>) -> Self {
        self.snapshot.group.last_replication_at =
            minutes_ago.map(|m| fixed_now() - Duration::minutes(m));
        self
    }

    pub fn paused(mut self, reason: Option<&str>) -> Self {
        self.snapshot.group.paused_at = Some(fixed_now() - Duration::hours(3));
        self.snapshot.group.pause_reason = reason.map(str::to_string);
        self
    }

    pub fn test_reminder(mut self, days: u32, last_test_days_ago: Option<i64>) -> Self {
        self.snapshot.group.test_reminder_days = Some(days);
        self.snapshot.group.last_test_at = last_test_days_ago.map(|d| fixed_now() - Duration::days(d));
        self
    }

    /// Replace the VM list with `names`; the first `shelled` get DR shells.
    pub fn vms(mut self, names: &[&str], shelled: usize) -> Self {
        let group_id = self.snapshot.group.id;
        self.snapshot.vms = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut vm = ProtectedVm::new(
                    fixture_id(0xe, (group_id.as_u128() as u32).wrapping_add(i as u32)),
                    *name,
                );
                vm.dr_shell_vm_created = i < shelled;
                vm
            })
            .collect();
        self
    }

    /// Append a failed sync job whose details bag is `details`.
    ///
    /// Jobs are appended newest first: each one is 10 minutes older than the last.
    pub fn failed_job(mut self, details: Value) -> Self {
        let job = self.job(JobStatus::Failed, Some(details));
        self.snapshot.jobs.push(job);
        self
    }

    /// Mark the group as syncing with a running sync job started `minutes_ago`.
    pub fn running_sync(mut self, minutes_ago: i64) -> Self {
        self.snapshot.group.sync_in_progress = true;
        let mut job = self.job(JobStatus::Running, None);
        job.started_at = Some(fixed_now() - Duration::minutes(minutes_ago));
        self.snapshot.jobs.push(job);
        self
    }

    pub fn build(self) -> GroupSnapshot {
        self.snapshot
    }

    fn job(&mut self, status: JobStatus, details: Option<Value>) -> ReplicationJob {
        let n = self.next_job;
        self.next_job += 1;

        let mut job = ReplicationJob::new(
            fixture_id(0xc, (self.snapshot.group.id.as_u128() as u32).wrapping_add(n)),
            REPLICATION_SYNC_JOB,
            status,
            fixed_now() - Duration::minutes(10 * n as i64),
        );
        job.details = details;
        job
    }
}

/// Fleet export wrapping `groups`, captured at [`fixed_now`].
pub fn fleet(groups: Vec<GroupSnapshot>) -> FleetSnapshot {
    FleetSnapshot {
        captured_at: Some(fixed_now()),
        groups,
    }
}
