use drsla_engine::{RpoState, RpoStatus};
use drsla_types::Severity;
use serde::Serialize;
use std::fmt;

use crate::presentation::style;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpoViewModel {
    pub current_minutes: f64,
    pub target_minutes: f64,
    #[serde(flatten)]
    pub rpo: RpoStatus,
    pub current: String,
    pub target: String,
    pub overdue: String,
}

impl fmt::Display for RpoViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.rpo.status.to_string();
        let status = match self.rpo.status {
            RpoState::Ok => style::bold(&label),
            RpoState::Warning => style::severity(Severity::Warning, &label),
            RpoState::Critical => style::severity(Severity::Critical, &label),
        };

        writeln!(f, "Status:   {} ({:.1}% of RPO)", status, self.rpo.percentage)?;
        writeln!(f, "Current:  {}", self.current)?;
        writeln!(f, "Target:   {}", self.target)?;
        if self.rpo.overdue_minutes > 0.0 {
            writeln!(f, "Overdue:  {}", self.overdue)?;
        }
        Ok(())
    }
}
