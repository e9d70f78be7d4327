//! Presentation models for a finished run.

use std::fmt::Write as _;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::BatchReport;
use crate::util::{ConfirmedReservation, FailedReservation};

/// How a run summary is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One line per reservation.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format `{other}` (expected text or json)")),
        }
    }
}

/// Failure as shown to users: the reason flattened to its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureLine {
    /// Person the request was for.
    pub person: String,
    /// Time originally asked for.
    pub desired_time: String,
    /// Human-readable reason.
    pub reason: String,
}

impl From<&FailedReservation> for FailureLine {
    fn from(f: &FailedReservation) -> Self {
        Self {
            person: f.person.clone(),
            desired_time: f.desired_time.clone(),
            reason: f.reason.to_string(),
        }
    }
}

/// Serializable summary of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Booked reservations.
    pub reserved: Vec<ConfirmedReservation>,
    /// Permanent failures.
    pub failed: Vec<FailureLine>,
    /// Rounds that opened a session.
    pub rounds: u32,
    /// Retry credit left at the end.
    pub credit_remaining: u32,
}

impl From<&BatchReport> for RunSummary {
    fn from(report: &BatchReport) -> Self {
        Self {
            reserved: report.confirmed.clone(),
            failed: report.failed.iter().map(FailureLine::from).collect(),
            rounds: report.rounds,
            credit_remaining: report.credit_remaining,
        }
    }
}

impl RunSummary {
    /// Render the summary as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Header line separating the text reports of consecutive runs.
pub fn render_header(started_at: NaiveDateTime) -> String {
    format!("=== {}\n", started_at.format("%Y-%m-%d %H:%M:%S%.6f"))
}

/// Render a report as one `Reserved:` line per booking followed by one
/// `Failed to reserve:` line per failure.
pub fn render_text(report: &BatchReport) -> String {
    let mut out = String::new();
    for c in &report.confirmed {
        let _ = writeln!(
            out,
            "Reserved: name={}, time={}, cancelation_code={}",
            c.person, c.actual_time, c.confirmation_code
        );
    }
    for f in &report.failed {
        let _ = writeln!(
            out,
            "Failed to reserve: name={}, time={}, reason={}",
            f.person, f.desired_time, f.reason
        );
    }
    out
}
