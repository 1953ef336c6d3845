use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Job type tag the executor uses for scheduled and manual replication syncs.
pub const REPLICATION_SYNC_JOB: &str = "run_replication_sync";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Running => write!(f, "running"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Failed => write!(f, "failed"),
            JobStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Job record written by the executor.
///
/// `details` is whatever the executor chose to attach; failed jobs usually
/// carry an `error` or `message` string somewhere inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationJob {
    pub id: Uuid,
    pub job_type: String,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl ReplicationJob {
    pub fn new(
        id: Uuid,
        job_type: impl Into<String>,
        status: JobStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            job_type: job_type.into(),
            status,
            created_at,
            started_at: None,
            completed_at: None,
            details: None,
        }
    }

    pub fn is_replication_sync(&self) -> bool {
        self.job_type == REPLICATION_SYNC_JOB
    }

    /// When the job began running; jobs picked up without a start stamp count from creation.
    pub fn running_since(&self) -> DateTime<Utc> {
        self.started_at.unwrap_or(self.created_at)
    }

    /// Details bag as text, the form failure classification works on.
    pub fn details_text(&self) -> String {
        match &self.details {
            Some(details) => details.to_string(),
            None => "null".to_string(),
        }
    }

    /// Top-level `error` field, else `message`.
    pub fn error_message(&self) -> Option<&str> {
        let details = self.details.as_ref()?;
        details
            .get("error")
            .and_then(|v| v.as_str())
            .or_else(|| details.get("message").and_then(|v| v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn job() -> ReplicationJob {
        let created = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        ReplicationJob::new(Uuid::nil(), REPLICATION_SYNC_JOB, JobStatus::Failed, created)
    }

    #[test]
    fn test_error_message_prefers_error_field() {
        let mut job = job();
        job.details = Some(json!({ "message": "sync aborted", "error": "ssh: connect to host" }));
        assert_eq!(job.error_message(), Some("ssh: connect to host"));

        job.details = Some(json!({ "message": "sync aborted" }));
        assert_eq!(job.error_message(), Some("sync aborted"));

        job.details = Some(json!({ "error": { "code": 5 } }));
        assert_eq!(job.error_message(), None);

        job.details = None;
        assert_eq!(job.error_message(), None);
    }

    #[test]
    fn test_details_text_of_missing_bag() {
        assert_eq!(job().details_text(), "null");
    }

    #[test]
    fn test_running_since_falls_back_to_creation() {
        let mut job = job();
        assert_eq!(job.running_since(), job.created_at);

        let started = Utc.with_ymd_and_hms(2026, 3, 1, 8, 5, 0).unwrap();
        job.started_at = Some(started);
        assert_eq!(job.running_since(), started);
    }

    #[test]
    fn test_status_wire_form() {
        let status: JobStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, JobStatus::Cancelled);
        assert_eq!(serde_json::to_string(&JobStatus::Running).unwrap(), "\"running\"");
    }
}
