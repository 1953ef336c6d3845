use drsla_types::Severity;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use super::result::DiagnosticResult;

/// Overall badge for a protection group, driven by its worst finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupHealth {
    Healthy,
    Info,
    Warning,
    Critical,
}

impl fmt::Display for GroupHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupHealth::Healthy => write!(f, "healthy"),
            GroupHealth::Info => write!(f, "info"),
            GroupHealth::Warning => write!(f, "warning"),
            GroupHealth::Critical => write!(f, "critical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DiagnosticSummary {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl DiagnosticSummary {
    pub fn from_results(results: &[DiagnosticResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut acc, r| {
                match r.severity() {
                    Severity::Critical => acc.critical += 1,
                    Severity::Warning => acc.warning += 1,
                    Severity::Info => acc.info += 1,
                }
                acc
            })
    }

    pub fn total(&self) -> usize {
        self.critical + self.warning + self.info
    }

    pub fn health(&self) -> GroupHealth {
        if self.critical > 0 {
            GroupHealth::Critical
        } else if self.warning > 0 {
            GroupHealth::Warning
        } else if self.info > 0 {
            GroupHealth::Info
        } else {
            GroupHealth::Healthy
        }
    }
}

/// Findings for one group of a fleet analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupReport {
    pub group_id: Uuid,
    pub group_name: String,
    pub health: GroupHealth,
    pub summary: DiagnosticSummary,
    pub diagnostics: Vec<DiagnosticResult>,
}

impl GroupReport {
    pub fn new(group_id: Uuid, group_name: impl Into<String>, diagnostics: Vec<DiagnosticResult>) -> Self {
        let summary = DiagnosticSummary::from_results(&diagnostics);
        Self {
            group_id,
            group_name: group_name.into(),
            health: summary.health(),
            summary,
            diagnostics,
        }
    }

    /// Any finding at `threshold` or more urgent.
    pub fn has_findings_at(&self, threshold: Severity) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity().at_least(threshold))
    }
}
