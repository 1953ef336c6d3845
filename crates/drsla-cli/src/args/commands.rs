use crate::types::{CategoryFilter, FailOn};
use chrono::{DateTime, Utc};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Analyze the protection groups of a snapshot export")]
    Analyze {
        /// Fleet snapshot exported from the dashboard
        snapshot: PathBuf,

        /// Only analyze the group with this id or name
        #[arg(long)]
        group: Option<String>,

        /// Evaluate as of this RFC 3339 instant instead of the wall clock
        #[arg(long, env = "DRSLA_NOW", value_parser = parse_instant)]
        now: Option<DateTime<Utc>>,

        /// Exit with an error when any finding is at this severity or worse
        #[arg(long)]
        fail_on: Option<FailOn>,

        /// Show remediation steps under each finding
        #[arg(long, short)]
        verbose: bool,
    },

    #[command(about = "Classify replication lag against an RPO")]
    Rpo {
        /// Minutes since the last successful sync
        current_minutes: f64,

        /// Recovery point objective in minutes
        target_minutes: f64,
    },

    #[command(about = "Render a minute count as a compact duration")]
    Duration { minutes: f64 },

    #[command(about = "List the diagnostic error codes")]
    Codes {
        #[arg(long)]
        category: Option<CategoryFilter>,
    },
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {}", e))
}
