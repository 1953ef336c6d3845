// Engine module - SLA diagnostics over protection group snapshots
// This layer sits between the data model (types) and CLI presentation

pub mod config;
pub mod diagnostics;
mod duration;
mod rpo;

pub use config::AnalyzerConfig;
pub use diagnostics::{
    Analyzer, DiagnosticContext, DiagnosticResult, DiagnosticSummary, ErrorClassifier,
    ErrorDefinition, GroupHealth, GroupReport, RegexClassifier, all_definitions,
    analyze_protection_group, analyze_protection_group_at, definition,
};
pub use duration::format_duration;
pub use rpo::{RpoState, RpoStatus, rpo_status};

use chrono::{DateTime, Utc};
use drsla_types::{FleetSnapshot, GroupSnapshot};

// Façade API - Stable public interface for CLI layer

/// Ranked findings for one group, evaluated at `now`
pub fn analyze_group_at(snapshot: &GroupSnapshot, now: DateTime<Utc>) -> Vec<DiagnosticResult> {
    Analyzer::new(AnalyzerConfig::default()).analyze_at(snapshot, now)
}

/// Per-group reports for a fleet export, evaluated at `now`
pub fn analyze_fleet_at(fleet: &FleetSnapshot, now: DateTime<Utc>) -> Vec<GroupReport> {
    Analyzer::new(AnalyzerConfig::default()).analyze_fleet_at(fleet, now)
}
