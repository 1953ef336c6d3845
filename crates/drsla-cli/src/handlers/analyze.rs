use super::HandlerContext;
use crate::config::Config;
use crate::presentation::view_models::FleetReportViewModel;
use crate::types::FailOn;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use drsla_engine::Analyzer;
use drsla_types::{FleetSnapshot, Severity};
use std::path::Path;

pub struct AnalyzeOptions {
    pub group: Option<String>,
    pub now: Option<DateTime<Utc>>,
    pub fail_on: Option<FailOn>,
    pub verbose: bool,
}

pub fn handle(
    snapshot_path: &Path,
    options: AnalyzeOptions,
    config: &Config,
    ctx: &HandlerContext,
) -> Result<()> {
    let mut fleet = FleetSnapshot::load_from(snapshot_path)
        .with_context(|| format!("Failed to load snapshot {}", snapshot_path.display()))?;

    if let Some(selector) = &options.group {
        let Some(snapshot) = fleet.find_group(selector).cloned() else {
            anyhow::bail!(
                "Protection group '{}' not found in {}",
                selector,
                snapshot_path.display()
            );
        };
        fleet.groups = vec![snapshot];
    }

    let now = options.now.unwrap_or_else(Utc::now);
    tracing::info!(
        groups = fleet.groups.len(),
        evaluated_at = %now,
        "analyzing snapshot"
    );

    let analyzer = Analyzer::new(config.analyzer.clone());
    let tunables = analyzer.config();
    tracing::debug!(
        stuck_sync_minutes = tunables.stuck_sync_minutes,
        failed_job_scan_limit = tunables.failed_job_scan_limit,
        example_vm_limit = tunables.example_vm_limit,
        "analyzer settings"
    );
    let reports = analyzer.analyze_fleet_at(&fleet, now);

    let failing = options.fail_on.map(|threshold| {
        let severity = Severity::from(threshold);
        let count = reports
            .iter()
            .filter(|r| r.has_findings_at(severity))
            .count();
        (threshold, count)
    });

    ctx.render(FleetReportViewModel {
        reports,
        evaluated_at: now,
        verbose: options.verbose,
    })?;

    if let Some((threshold, count)) = failing
        && count > 0
    {
        anyhow::bail!(
            "{} group(s) have findings at {} severity or worse",
            count,
            threshold
        );
    }

    Ok(())
}
