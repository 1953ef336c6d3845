use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RpoState {
    Ok,
    Warning,
    Critical,
}

impl fmt::Display for RpoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpoState::Ok => write!(f, "ok"),
            RpoState::Warning => write!(f, "warning"),
            RpoState::Critical => write!(f, "critical"),
        }
    }
}

/// How the current replication lag compares with the objective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpoStatus {
    pub status: RpoState,
    pub percentage: f64,
    pub overdue_minutes: f64,
}

/// Classify replication lag against an RPO.
///
/// Up to 100% of the objective is `ok`, up to 150% `warning`, beyond that
/// `critical`. A non-positive target means there is no objective and is
/// always `ok`.
pub fn rpo_status(current_minutes: f64, target_minutes: f64) -> RpoStatus {
    if target_minutes <= 0.0 {
        return RpoStatus {
            status: RpoState::Ok,
            percentage: 0.0,
            overdue_minutes: 0.0,
        };
    }

    let percentage = current_minutes * 100.0 / target_minutes;
    let status = if percentage <= 100.0 {
        RpoState::Ok
    } else if percentage <= 150.0 {
        RpoState::Warning
    } else {
        RpoState::Critical
    };

    let overdue_minutes = match status {
        RpoState::Ok => 0.0,
        _ => (current_minutes - target_minutes).max(0.0),
    };

    RpoStatus {
        status,
        percentage,
        overdue_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_objective_is_ok() {
        let s = rpo_status(100.0, 100.0);
        assert_eq!(s.status, RpoState::Ok);
        assert_eq!(s.percentage, 100.0);
        assert_eq!(s.overdue_minutes, 0.0);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(rpo_status(101.0, 100.0).status, RpoState::Warning);
        assert_eq!(rpo_status(150.0, 100.0).status, RpoState::Warning);
        assert_eq!(rpo_status(151.0, 100.0).status, RpoState::Critical);
    }

    #[test]
    fn test_critical_overdue() {
        let s = rpo_status(170.0, 100.0);
        assert_eq!(s.status, RpoState::Critical);
        assert!((s.percentage - 170.0).abs() < 1e-9);
        assert!((s.overdue_minutes - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_target_has_no_objective() {
        let s = rpo_status(500.0, 0.0);
        assert_eq!(s.status, RpoState::Ok);
        assert_eq!(s.percentage, 0.0);
        assert_eq!(s.overdue_minutes, 0.0);
    }
}
