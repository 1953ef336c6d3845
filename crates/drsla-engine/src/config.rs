use serde::{Deserialize, Serialize};

/// Tunables for the rule set. Defaults match the dashboard's behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// A running sync older than this is reported as stuck.
    pub stuck_sync_minutes: u32,
    /// How many of the most recent failed jobs are classified.
    pub failed_job_scan_limit: usize,
    /// VM names quoted in the DR shell finding.
    pub example_vm_limit: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            stuck_sync_minutes: 60,
            failed_job_scan_limit: 5,
            example_vm_limit: 3,
        }
    }
}
