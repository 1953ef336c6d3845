use chrono::{DateTime, SecondsFormat, Utc};
use drsla_engine::{DiagnosticSummary, GroupReport};
use drsla_types::truncate;
use serde::Serialize;
use std::fmt;

use crate::presentation::style;

/// Job output quoted in messages can be long; plain output cuts it unless verbose.
const MESSAGE_WIDTH: usize = 160;

/// Reports for every analyzed group. Serializes as the bare report array.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct FleetReportViewModel {
    pub reports: Vec<GroupReport>,
    #[serde(skip)]
    pub evaluated_at: DateTime<Utc>,
    #[serde(skip)]
    pub verbose: bool,
}

impl FleetReportViewModel {
    fn totals(&self) -> DiagnosticSummary {
        self.reports
            .iter()
            .fold(DiagnosticSummary::default(), |mut acc, r| {
                acc.critical += r.summary.critical;
                acc.warning += r.summary.warning;
                acc.info += r.summary.info;
                acc
            })
    }
}

impl fmt::Display for FleetReportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.reports {
            write_report(f, report, self.verbose)?;
            writeln!(f)?;
        }

        let totals = self.totals();
        writeln!(
            f,
            "{} group(s) analyzed at {}: {} critical, {} warning, {} info",
            self.reports.len(),
            self.evaluated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            totals.critical,
            totals.warning,
            totals.info
        )
    }
}

fn write_report(f: &mut fmt::Formatter<'_>, report: &GroupReport, verbose: bool) -> fmt::Result {
    let badge = report.health.to_string().to_uppercase();
    writeln!(
        f,
        "{}  {}",
        style::bold(&report.group_name),
        style::health(report.health, &badge)
    )?;

    if report.diagnostics.is_empty() {
        return writeln!(f, "  {}", style::dim("No issues detected"));
    }

    for diagnostic in &report.diagnostics {
        let severity = diagnostic.severity();
        let label = format!("{} {:<8}", style::severity_icon(severity), severity.to_string());
        writeln!(
            f,
            "  {}  {}  {}",
            style::severity(severity, &label),
            style::accent(diagnostic.error_code.as_str()),
            diagnostic.definition.title
        )?;
        let message = diagnostic.message();
        if !verbose {
            writeln!(f, "      {}", truncate(&message, MESSAGE_WIDTH))?;
        } else {
            writeln!(f, "      {}", message)?;
            for step in diagnostic.definition.remediation {
                writeln!(f, "      {} {}", style::dim("→"), step)?;
            }
        }
    }
    Ok(())
}
