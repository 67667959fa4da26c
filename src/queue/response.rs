//! Job queue response parsing.
//!
//! The transcoder answers every submission with three lists. Which of them is
//! populated decides the [`Outcome`]; `skipped` and per-job `events` are kept
//! as raw JSON since their shape is not part of the contract.

use serde::Deserialize;
use serde_json::value::RawValue;

/// Body returned by `POST /api/v1/job/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobResponse {
    #[serde(default)]
    pub scheduled: Vec<ScheduledJob>,

    #[serde(default)]
    pub failed: Vec<FailedJob>,

    #[serde(default)]
    pub skipped: Option<Box<RawValue>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduledJob {
    pub source_path: String,
    pub destination_path: String,
    pub id: String,
    pub events: Option<Box<RawValue>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FailedJob {
    pub source_path: String,
    pub destination_path: String,
    pub force_completed: bool,
    pub force_failed: bool,
    pub force_executing: bool,
    pub force_added: bool,
    pub priority: i32,
    pub error: String,
}

/// Classified result for one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The queue accepted the job.
    Scheduled {
        source_path: String,
        destination_path: String,
    },
    /// The queue explicitly rejected the job.
    Failed {
        source_path: String,
        destination_path: String,
        error: String,
    },
    /// Selected during a dry run; nothing was sent.
    Skipped,
    /// Neither scheduled nor failed. Carries the raw `skipped` payload, if any.
    Unknown { skipped: Option<String> },
}

impl Outcome {
    /// Whether this outcome should fail the run
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Unknown { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled { .. } => "scheduled",
            Self::Failed { .. } => "failed",
            Self::Skipped => "skipped",
            Self::Unknown { .. } => "unknown",
        }
    }
}

impl JobResponse {
    /// Classify the response. `scheduled` wins over `failed`; an empty pair
    /// is `Unknown` whatever `skipped` holds.
    pub fn outcome(self) -> Outcome {
        if let Some(job) = self.scheduled.into_iter().next() {
            return Outcome::Scheduled {
                source_path: job.source_path,
                destination_path: job.destination_path,
            };
        }

        if let Some(job) = self.failed.into_iter().next() {
            return Outcome::Failed {
                source_path: job.source_path,
                destination_path: job.destination_path,
                error: job.error,
            };
        }

        Outcome::Unknown {
            skipped: self.skipped.map(|raw| raw.get().to_string()),
        }
    }
}

/// Parse and classify a raw response body.
///
/// Malformed JSON is returned as an error and never classified.
pub fn interpret(body: &[u8]) -> Result<Outcome, serde_json::Error> {
    let response: JobResponse = serde_json::from_slice(body)?;
    Ok(response.outcome())
}
