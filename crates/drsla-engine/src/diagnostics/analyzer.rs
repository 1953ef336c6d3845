use chrono::{DateTime, SecondsFormat, Utc};
use drsla_types::{
    ErrorCode, FleetSnapshot, GroupSnapshot, JobStatus, ProtectedVm, ProtectionGroup,
    ReplicationJob, ReplicationTarget, round_to_i64,
};
use serde_json::Value;

use super::classifier::{ErrorClassifier, RegexClassifier};
use super::result::DiagnosticResult;
use super::summary::GroupReport;
use crate::config::AnalyzerConfig;

const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_DAY: f64 = 86_400_000.0;

/// Stand-in for `{hostname}` when a job failure arrives without a target row.
const UNKNOWN_HOST: &str = "the replication target";

/// Evaluates protection groups against the replication rule set.
///
/// Every check reads the same `now`, so one analysis is internally
/// consistent. Checks that lack their input data are skipped; analysis never
/// fails.
#[derive(Debug, Clone)]
pub struct Analyzer<C = RegexClassifier> {
    config: AnalyzerConfig,
    classifier: C,
}

impl Analyzer<RegexClassifier> {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            classifier: RegexClassifier,
        }
    }
}

impl Default for Analyzer<RegexClassifier> {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl<C: ErrorClassifier> Analyzer<C> {
    /// Analyzer with a custom job-failure classifier.
    pub fn with_classifier(config: AnalyzerConfig, classifier: C) -> Self {
        Self { config, classifier }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&self, snapshot: &GroupSnapshot) -> Vec<DiagnosticResult> {
        self.analyze_at(snapshot, Utc::now())
    }

    pub fn analyze_at(&self, snapshot: &GroupSnapshot, now: DateTime<Utc>) -> Vec<DiagnosticResult> {
        self.analyze_parts_at(
            &snapshot.group,
            snapshot.target.as_ref(),
            snapshot.partner_target.as_ref(),
            &snapshot.vms,
            &snapshot.jobs,
            now,
        )
    }

    /// Ranked findings for one group. `jobs` is expected newest first.
    pub fn analyze_parts_at(
        &self,
        group: &ProtectionGroup,
        target: Option<&ReplicationTarget>,
        partner_target: Option<&ReplicationTarget>,
        vms: &[ProtectedVm],
        jobs: &[ReplicationJob],
        now: DateTime<Utc>,
    ) -> Vec<DiagnosticResult> {
        let input = Input {
            group,
            target,
            partner_target,
            vms,
            jobs,
            now,
        };
        let mut findings = Findings::new(&group.name);

        check_configuration(&input, &mut findings);
        check_infrastructure(&input, &self.config, &mut findings);
        check_connectivity(&input, &mut findings);
        check_freshness(&input, &mut findings);
        check_operational(&input, &self.config, &mut findings);
        self.check_job_failures(&input, &mut findings);

        findings.into_ranked()
    }

    /// Analyze every group of a fleet export against one clock reading.
    pub fn analyze_fleet_at(&self, fleet: &FleetSnapshot, now: DateTime<Utc>) -> Vec<GroupReport> {
        fleet
            .groups
            .iter()
            .map(|snapshot| {
                GroupReport::new(
                    snapshot.group.id,
                    snapshot.group.name.clone(),
                    self.analyze_at(snapshot, now),
                )
            })
            .collect()
    }

    pub fn analyze_fleet(&self, fleet: &FleetSnapshot) -> Vec<GroupReport> {
        self.analyze_fleet_at(fleet, Utc::now())
    }

    fn check_job_failures(&self, input: &Input<'_>, findings: &mut Findings) {
        let failed = input
            .jobs
            .iter()
            .filter(|job| job.status == JobStatus::Failed)
            .take(self.config.failed_job_scan_limit);

        for job in failed {
            let Some(code) = self.classifier.classify(&job.details_text()) else {
                continue;
            };
            if findings.contains(code) {
                continue;
            }

            let message = job
                .error_message()
                .unwrap_or("No error message recorded")
                .to_string();
            let hostname = input
                .target
                .map_or(UNKNOWN_HOST, |target| target.hostname.as_str());
            findings.push(
                DiagnosticResult::new(code)
                    .with("jobId", job.id.to_string())
                    .with("message", message)
                    .with("createdAt", timestamp(job.created_at))
                    .with("hostname", hostname),
            );
        }
    }
}

/// Analyze one group with default settings and the wall clock.
pub fn analyze_protection_group(
    group: &ProtectionGroup,
    target: Option<&ReplicationTarget>,
    partner_target: Option<&ReplicationTarget>,
    vms: &[ProtectedVm],
    jobs: &[ReplicationJob],
) -> Vec<DiagnosticResult> {
    analyze_protection_group_at(group, target, partner_target, vms, jobs, Utc::now())
}

/// [`analyze_protection_group`] evaluated at `now`.
pub fn analyze_protection_group_at(
    group: &ProtectionGroup,
    target: Option<&ReplicationTarget>,
    partner_target: Option<&ReplicationTarget>,
    vms: &[ProtectedVm],
    jobs: &[ReplicationJob],
    now: DateTime<Utc>,
) -> Vec<DiagnosticResult> {
    Analyzer::new(AnalyzerConfig::default()).analyze_parts_at(
        group,
        target,
        partner_target,
        vms,
        jobs,
        now,
    )
}

struct Input<'a> {
    group: &'a ProtectionGroup,
    target: Option<&'a ReplicationTarget>,
    partner_target: Option<&'a ReplicationTarget>,
    vms: &'a [ProtectedVm],
    jobs: &'a [ReplicationJob],
    now: DateTime<Utc>,
}

impl Input<'_> {
    fn minutes_since(&self, then: DateTime<Utc>) -> f64 {
        (self.now - then).num_milliseconds() as f64 / MS_PER_MINUTE
    }

    fn days_since(&self, then: DateTime<Utc>) -> f64 {
        (self.now - then).num_milliseconds() as f64 / MS_PER_DAY
    }
}

/// Detection-ordered findings; each code is kept once.
struct Findings<'a> {
    group_name: &'a str,
    results: Vec<DiagnosticResult>,
}

impl<'a> Findings<'a> {
    fn new(group_name: &'a str) -> Self {
        Self {
            group_name,
            results: Vec::new(),
        }
    }

    fn contains(&self, code: ErrorCode) -> bool {
        self.results.iter().any(|r| r.error_code == code)
    }

    fn push(&mut self, result: DiagnosticResult) {
        if self.contains(result.error_code) {
            return;
        }
        tracing::debug!(
            group = self.group_name,
            code = %result.error_code,
            severity = %result.severity(),
            "diagnostic detected"
        );
        self.results.push(result);
    }

    fn into_ranked(mut self) -> Vec<DiagnosticResult> {
        // stable: equal severities keep detection order
        self.results.sort_by_key(DiagnosticResult::severity);
        self.results
    }
}

fn check_configuration(input: &Input<'_>, findings: &mut Findings) {
    if input.group.target_id.is_none() || input.target.is_none() {
        findings.push(DiagnosticResult::new(ErrorCode::NoTargetConfigured));
    }

    if input.group.schedule().is_none() {
        findings.push(DiagnosticResult::new(ErrorCode::NoScheduleConfigured));
    }

    if input.vms.is_empty() {
        findings.push(DiagnosticResult::new(ErrorCode::NoVmsInGroup));
    }
}

fn check_infrastructure(input: &Input<'_>, config: &AnalyzerConfig, findings: &mut Findings) {
    if let Some(target) = input.target {
        if target.health_status.is_unhealthy() {
            findings.push(
                DiagnosticResult::new(ErrorCode::TargetUnhealthy)
                    .with("targetName", target.name.clone())
                    .with("hostname", target.hostname.clone())
                    .with("healthStatus", target.health_status.to_string()),
            );
        }

        if target.is_unpaired_primary() {
            findings.push(
                DiagnosticResult::new(ErrorCode::DrSiteTargetMissing)
                    .with("targetName", target.name.clone()),
            );
        }
    }

    if let Some(partner) = input.partner_target
        && partner.health_status.is_unhealthy()
    {
        findings.push(
            DiagnosticResult::new(ErrorCode::DrTargetUnhealthy)
                .with("partnerName", partner.name.clone())
                .with("healthStatus", partner.health_status.to_string()),
        );
    }

    if input.target.is_none() {
        return;
    }

    let missing: Vec<&ProtectedVm> = input
        .vms
        .iter()
        .filter(|vm| !vm.dr_shell_vm_created)
        .collect();
    if !missing.is_empty() {
        let examples = missing
            .iter()
            .take(config.example_vm_limit)
            .map(|vm| vm.vm_name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        findings.push(
            DiagnosticResult::new(ErrorCode::DrShellVmMissing)
                .with("missingCount", missing.len())
                .with("totalCount", input.vms.len())
                .with("exampleVms", examples),
        );
    }
}

fn check_connectivity(input: &Input<'_>, findings: &mut Findings) {
    if let Some(target) = input.target
        && target.lacks_ssh_trust()
    {
        findings.push(
            DiagnosticResult::new(ErrorCode::SshTrustNotEstablished)
                .with("hostname", target.hostname.clone()),
        );
    }
}

fn check_freshness(input: &Input<'_>, findings: &mut Findings) {
    let group = input.group;

    let Some(last_sync) = group.last_replication_at else {
        if group.target_id.is_some() {
            findings.push(DiagnosticResult::new(ErrorCode::NeverSynced));
        }
        return;
    };

    let Some(rpo) = group.rpo_target() else {
        return;
    };

    let minutes_since_sync = input.minutes_since(last_sync);
    if minutes_since_sync > f64::from(rpo) {
        findings.push(
            DiagnosticResult::new(ErrorCode::LastSyncTooOld)
                .with("currentRpoMinutes", round_to_i64(minutes_since_sync))
                .with("targetRpoMinutes", rpo)
                .with("overdueMinutes", round_to_i64(minutes_since_sync - f64::from(rpo)))
                .with("lastReplicationAt", timestamp(last_sync)),
        );
    }
}

fn check_operational(input: &Input<'_>, config: &AnalyzerConfig, findings: &mut Findings) {
    let group = input.group;

    if let Some(paused_at) = group.paused_at {
        let reason = group
            .pause_reason
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or("No reason provided");
        findings.push(
            DiagnosticResult::new(ErrorCode::GroupPaused)
                .with("pausedAt", timestamp(paused_at))
                .with("reason", reason),
        );
    }

    if group.sync_in_progress {
        let oldest_running = input
            .jobs
            .iter()
            .filter(|job| job.status == JobStatus::Running && job.is_replication_sync())
            .min_by_key(|job| job.running_since());

        if let Some(job) = oldest_running {
            let running_minutes = input.minutes_since(job.running_since());
            if running_minutes > f64::from(config.stuck_sync_minutes) {
                findings.push(
                    DiagnosticResult::new(ErrorCode::SyncStuckInProgress)
                        .with("jobId", job.id.to_string())
                        .with("runningMinutes", round_to_i64(running_minutes)),
                );
            }
        }
    }

    if let Some(reminder_days) = group.test_reminder() {
        let days_since_test = group.last_test_at.map(|at| input.days_since(at));
        let overdue = match days_since_test {
            Some(days) => days > f64::from(reminder_days),
            None => true,
        };

        if overdue {
            let shown = match days_since_test {
                Some(days) => Value::from(round_to_i64(days)),
                None => Value::from("Never tested"),
            };
            findings.push(
                DiagnosticResult::new(ErrorCode::FailoverTestOverdue)
                    .with("daysSinceTest", shown)
                    .with("reminderDays", reminder_days),
            );
        }
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use drsla_types::{SiteRole, TargetHealth};
    use serde_json::json;
    use uuid::Uuid;

    fn analyzer() -> Analyzer {
        Analyzer::new(AnalyzerConfig::default())
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn healthy() -> GroupSnapshot {
        let target_id = Uuid::from_u128(0xa1);
        let partner_id = Uuid::from_u128(0xa2);

        let mut group = ProtectionGroup::new(Uuid::from_u128(1), "erp");
        group.target_id = Some(target_id);
        group.replication_schedule = Some("*/15 * * * *".to_string());
        group.rpo_minutes = Some(60);
        group.last_replication_at = Some(now() - Duration::minutes(10));

        let mut target = ReplicationTarget::new(target_id, "zfs-dc1", "zfs-dc1.lab");
        target.partner_target_id = Some(partner_id);
        let mut partner = ReplicationTarget::new(partner_id, "zfs-dc2", "zfs-dc2.lab");
        partner.site_role = SiteRole::Dr;

        let mut vm = ProtectedVm::new(Uuid::from_u128(0xf1), "erp-db01");
        vm.dr_shell_vm_created = true;

        GroupSnapshot {
            group,
            target: Some(target),
            partner_target: Some(partner),
            vms: vec![vm],
            jobs: Vec::new(),
        }
    }

    fn codes(results: &[DiagnosticResult]) -> Vec<ErrorCode> {
        results.iter().map(|r| r.error_code).collect()
    }

    fn failed_job(n: u128, details: Value) -> ReplicationJob {
        let mut job = ReplicationJob::new(
            Uuid::from_u128(0xb00 + n),
            "run_replication_sync",
            JobStatus::Failed,
            now() - Duration::minutes(n as i64 * 10),
        );
        job.details = Some(details);
        job
    }

    #[test]
    fn test_healthy_group_has_no_findings() {
        let results = analyzer().analyze_at(&healthy(), now());
        assert!(results.is_empty(), "unexpected: {:?}", codes(&results));
    }

    #[test]
    fn test_target_row_missing_counts_as_unconfigured() {
        let mut snapshot = healthy();
        snapshot.target = None;
        snapshot.partner_target = None;
        let results = analyzer().analyze_at(&snapshot, now());
        assert!(codes(&results).contains(&ErrorCode::NoTargetConfigured));
    }

    #[test]
    fn test_unhealthy_target_and_partner() {
        let mut snapshot = healthy();
        snapshot.target.as_mut().unwrap().health_status = TargetHealth::Degraded;
        snapshot.partner_target.as_mut().unwrap().health_status = TargetHealth::Error;

        let results = analyzer().analyze_at(&snapshot, now());
        assert_eq!(
            codes(&results),
            vec![ErrorCode::TargetUnhealthy, ErrorCode::DrTargetUnhealthy]
        );
        assert_eq!(results[0].context["healthStatus"], json!("degraded"));
    }

    #[test]
    fn test_unpaired_primary() {
        let mut snapshot = healthy();
        snapshot.target.as_mut().unwrap().partner_target_id = None;
        snapshot.partner_target = None;

        let results = analyzer().analyze_at(&snapshot, now());
        assert_eq!(codes(&results), vec![ErrorCode::DrSiteTargetMissing]);
    }

    #[test]
    fn test_dr_shell_examples_are_capped() {
        let mut snapshot = healthy();
        snapshot.vms = (0..5)
            .map(|i| ProtectedVm::new(Uuid::from_u128(0xf0 + i), format!("app-{:02}", i)))
            .collect();
        snapshot.vms[4].dr_shell_vm_created = true;

        let results = analyzer().analyze_at(&snapshot, now());
        let shell = results
            .iter()
            .find(|r| r.error_code == ErrorCode::DrShellVmMissing)
            .unwrap();
        assert_eq!(shell.context["missingCount"], json!(4));
        assert_eq!(shell.context["totalCount"], json!(5));
        assert_eq!(shell.context["exampleVms"], json!("app-00, app-01, app-02"));
    }

    #[test]
    fn test_never_synced_requires_target() {
        let mut snapshot = healthy();
        snapshot.group.last_replication_at = None;
        let results = analyzer().analyze_at(&snapshot, now());
        assert_eq!(codes(&results), vec![ErrorCode::NeverSynced]);

        snapshot.group.target_id = None;
        snapshot.target = None;
        snapshot.partner_target = None;
        let results = analyzer().analyze_at(&snapshot, now());
        assert!(!codes(&results).contains(&ErrorCode::NeverSynced));
    }

    #[test]
    fn test_rpo_boundary_is_not_breached() {
        let mut snapshot = healthy();
        snapshot.group.last_replication_at = Some(now() - Duration::minutes(60));
        let results = analyzer().analyze_at(&snapshot, now());
        assert!(results.is_empty());

        snapshot.group.last_replication_at = Some(now() - Duration::minutes(61));
        let results = analyzer().analyze_at(&snapshot, now());
        assert_eq!(codes(&results), vec![ErrorCode::LastSyncTooOld]);
        assert_eq!(results[0].context["overdueMinutes"], json!(1));
    }

    #[test]
    fn test_zero_rpo_skips_freshness() {
        let mut snapshot = healthy();
        snapshot.group.rpo_minutes = Some(0);
        snapshot.group.last_replication_at = Some(now() - Duration::days(30));
        assert!(analyzer().analyze_at(&snapshot, now()).is_empty());
    }

    #[test]
    fn test_blank_pause_reason_uses_default() {
        let mut snapshot = healthy();
        snapshot.group.paused_at = Some(now() - Duration::hours(2));
        snapshot.group.pause_reason = Some("  ".to_string());

        let results = analyzer().analyze_at(&snapshot, now());
        assert_eq!(codes(&results), vec![ErrorCode::GroupPaused]);
        assert_eq!(results[0].context["reason"], json!("No reason provided"));
        assert_eq!(results[0].context["pausedAt"], json!("2026-03-01T10:00:00Z"));
    }

    #[test]
    fn test_stuck_sync_uses_oldest_running_job() {
        let mut snapshot = healthy();
        snapshot.group.sync_in_progress = true;

        let mut recent = ReplicationJob::new(
            Uuid::from_u128(0xc1),
            "run_replication_sync",
            JobStatus::Running,
            now() - Duration::minutes(5),
        );
        recent.started_at = Some(now() - Duration::minutes(5));
        let mut old = ReplicationJob::new(
            Uuid::from_u128(0xc2),
            "run_replication_sync",
            JobStatus::Running,
            now() - Duration::minutes(100),
        );
        old.started_at = Some(now() - Duration::minutes(95));
        let other_type = ReplicationJob::new(
            Uuid::from_u128(0xc3),
            "create_dr_shell",
            JobStatus::Running,
            now() - Duration::minutes(500),
        );
        snapshot.jobs = vec![recent, old, other_type];

        let results = analyzer().analyze_at(&snapshot, now());
        assert_eq!(codes(&results), vec![ErrorCode::SyncStuckInProgress]);
        assert_eq!(
            results[0].context["jobId"],
            json!(Uuid::from_u128(0xc2).to_string())
        );
        assert_eq!(results[0].context["runningMinutes"], json!(95));
    }

    #[test]
    fn test_stuck_threshold_is_configurable() {
        let mut snapshot = healthy();
        snapshot.group.sync_in_progress = true;
        let mut job = ReplicationJob::new(
            Uuid::from_u128(0xc1),
            "run_replication_sync",
            JobStatus::Running,
            now() - Duration::minutes(90),
        );
        job.started_at = Some(now() - Duration::minutes(90));
        snapshot.jobs = vec![job];

        let config = AnalyzerConfig {
            stuck_sync_minutes: 120,
            ..AnalyzerConfig::default()
        };
        assert!(Analyzer::new(config).analyze_at(&snapshot, now()).is_empty());
        assert_eq!(analyzer().analyze_at(&snapshot, now()).len(), 1);
    }

    #[test]
    fn test_failover_test_overdue() {
        let mut snapshot = healthy();
        snapshot.group.test_reminder_days = Some(30);

        let results = analyzer().analyze_at(&snapshot, now());
        assert_eq!(codes(&results), vec![ErrorCode::FailoverTestOverdue]);
        assert_eq!(results[0].context["daysSinceTest"], json!("Never tested"));

        snapshot.group.last_test_at = Some(now() - Duration::days(45));
        let results = analyzer().analyze_at(&snapshot, now());
        assert_eq!(results[0].context["daysSinceTest"], json!(45));
        assert_eq!(results[0].context["reminderDays"], json!(30));

        snapshot.group.last_test_at = Some(now() - Duration::days(10));
        assert!(analyzer().analyze_at(&snapshot, now()).is_empty());
    }

    #[test]
    fn test_job_scan_stops_after_limit() {
        let mut snapshot = healthy();
        let mut jobs: Vec<ReplicationJob> = (1..=5)
            .map(|n| failed_job(n, json!({ "error": "checksum mismatch" })))
            .collect();
        jobs.push(failed_job(6, json!({ "error": "No space left on device" })));
        snapshot.jobs = jobs;

        assert!(analyzer().analyze_at(&snapshot, now()).is_empty());
    }

    #[test]
    fn test_non_failed_jobs_are_not_scanned() {
        let mut snapshot = healthy();
        let mut job = failed_job(1, json!({ "error": "No space left on device" }));
        job.status = JobStatus::Cancelled;
        snapshot.jobs = vec![job];

        assert!(analyzer().analyze_at(&snapshot, now()).is_empty());
    }

    #[test]
    fn test_trust_finding_is_not_duplicated_by_job_text() {
        let mut snapshot = healthy();
        snapshot.target.as_mut().unwrap().ssh_trust_established = Some(false);
        snapshot.jobs = vec![failed_job(1, json!({ "error": "Host key verification failed." }))];

        let results = analyzer().analyze_at(&snapshot, now());
        assert_eq!(codes(&results), vec![ErrorCode::SshTrustNotEstablished]);
        assert_eq!(
            results[0].context["hostname"],
            json!("zfs-dc1.lab"),
            "connectivity finding keeps its own context"
        );
    }

    #[test]
    fn test_trust_from_job_text_names_the_host() {
        let mut snapshot = healthy();
        snapshot.target.as_mut().unwrap().ssh_trust_established = None;
        snapshot.jobs = vec![failed_job(1, json!({ "error": "Host key verification failed." }))];

        let results = analyzer().analyze_at(&snapshot, now());
        assert_eq!(codes(&results), vec![ErrorCode::SshTrustNotEstablished]);
        assert_eq!(results[0].context["message"], json!("Host key verification failed."));
        assert_eq!(
            results[0].message(),
            "Key-based SSH to zfs-dc1.lab is not set up, so the executor cannot drive replication."
        );
    }

    #[test]
    fn test_job_failure_without_target_row_keeps_message_readable() {
        let mut snapshot = healthy();
        snapshot.group.target_id = None;
        snapshot.target = None;
        snapshot.partner_target = None;
        snapshot.jobs = vec![failed_job(1, json!({ "error": "Permission denied (publickey)." }))];

        let results = analyzer().analyze_at(&snapshot, now());
        let trust = results
            .iter()
            .find(|r| r.error_code == ErrorCode::SshTrustNotEstablished)
            .unwrap();
        assert!(!trust.message().contains('{'), "{}", trust.message());
        assert!(trust.message().contains("the replication target"));
    }

    #[test]
    fn test_missing_target_row_skips_dr_shell_check() {
        let mut snapshot = healthy();
        snapshot.target = None;
        snapshot.partner_target = None;
        snapshot.vms[0].dr_shell_vm_created = false;

        let results = analyzer().analyze_at(&snapshot, now());
        assert_eq!(codes(&results), vec![ErrorCode::NoTargetConfigured]);
    }

    #[test]
    fn test_config_accessor() {
        let config = AnalyzerConfig {
            example_vm_limit: 1,
            ..AnalyzerConfig::default()
        };
        assert_eq!(Analyzer::new(config.clone()).config(), &config);
    }

    #[test]
    fn test_job_without_message_gets_placeholder() {
        let mut snapshot = healthy();
        snapshot.jobs = vec![failed_job(1, json!({ "stderr": "zpool: pool tank is FAULTED" }))];

        let results = analyzer().analyze_at(&snapshot, now());
        assert_eq!(codes(&results), vec![ErrorCode::ZfsPoolOffline]);
        assert_eq!(results[0].context["message"], json!("No error message recorded"));
    }

    #[test]
    fn test_custom_classifier() {
        let mut snapshot = healthy();
        snapshot.jobs = vec![failed_job(1, json!({ "code": 28 }))];

        let by_errno = |text: &str| text.contains("28").then_some(ErrorCode::StorageFull);
        let analyzer = Analyzer::with_classifier(AnalyzerConfig::default(), by_errno);
        let results = analyzer.analyze_at(&snapshot, now());
        assert_eq!(codes(&results), vec![ErrorCode::StorageFull]);
    }

    #[test]
    fn test_ranking_keeps_detection_order_within_severity() {
        let mut snapshot = healthy();
        snapshot.group.replication_schedule = None;
        snapshot.vms.clear();
        snapshot.group.paused_at = Some(now());
        snapshot.target.as_mut().unwrap().ssh_trust_established = Some(false);

        let results = analyzer().analyze_at(&snapshot, now());
        assert_eq!(
            codes(&results),
            vec![
                ErrorCode::SshTrustNotEstablished,
                ErrorCode::NoScheduleConfigured,
                ErrorCode::NoVmsInGroup,
                ErrorCode::GroupPaused,
            ]
        );
    }
}
