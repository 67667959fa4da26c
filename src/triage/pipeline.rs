//! Triage run: fetch, filter, rank, dispatch.
//!
//! A run moves through [`Stage`]s in order and never goes back. Dispatch is
//! strictly sequential: each submission completes before the next starts.
//! Rejected or unclassifiable jobs are recorded and the loop moves on. A
//! catalog failure ends the run with an error; a submission that gets no usable
//! response stops dispatch and is returned in [`RunSummary::aborted`] alongside
//! the reports collected so far.

use super::{is_candidate, rank};
use crate::arr::Catalog;
use crate::config::TriageConfig;
use crate::error::{Error, Result};
use crate::queue::{JobQueue, Outcome, SubmissionOutcome};
use recodarr_common::{format_size, MediaAsset};
use std::fmt;

/// Pipeline stage, used for progress logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Filtering,
    Ranking,
    Dispatching,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetching => write!(f, "fetching"),
            Self::Filtering => write!(f, "filtering"),
            Self::Ranking => write!(f, "ranking"),
            Self::Dispatching => write!(f, "dispatching"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// Per-run options
#[derive(Debug, Clone, Copy)]
pub struct TriageOptions {
    /// Maximum number of candidates to dispatch
    pub count: usize,
    /// Report selections without submitting
    pub dry_run: bool,
}

impl From<&TriageConfig> for TriageOptions {
    fn from(config: &TriageConfig) -> Self {
        Self {
            count: config.count,
            dry_run: config.dry_run,
        }
    }
}

/// What happened to one selected candidate
#[derive(Debug, Clone)]
pub struct CandidateReport {
    pub title: String,
    pub library_path: String,
    pub file_path: String,
    pub video_codec: String,
    pub size_bytes: u64,
    pub result: SubmissionOutcome,
}

impl CandidateReport {
    pub fn size(&self) -> String {
        format_size(self.size_bytes)
    }
}

/// Aggregated result of a run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Assets returned by the catalog
    pub catalog_size: usize,
    /// Assets that passed the filter, before truncation
    pub candidate_count: usize,
    pub dry_run: bool,
    /// One entry per dispatched candidate, in ranked order
    pub reports: Vec<CandidateReport>,
    /// Error that stopped dispatch early; later candidates were never sent
    pub aborted: Option<Error>,
}

impl RunSummary {
    pub fn scheduled(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Scheduled { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(Outcome::is_failure)
    }

    /// Whether the process should exit with a failure status
    pub fn has_failures(&self) -> bool {
        self.aborted.is_some() || self.failed() > 0
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.reports
            .iter()
            .filter(|r| pred(&r.result.outcome))
            .count()
    }
}

pub struct TriagePipeline<'a> {
    catalog: &'a dyn Catalog,
    queue: &'a dyn JobQueue,
    options: TriageOptions,
}

impl<'a> TriagePipeline<'a> {
    pub fn new(catalog: &'a dyn Catalog, queue: &'a dyn JobQueue, options: TriageOptions) -> Self {
        Self {
            catalog,
            queue,
            options,
        }
    }

    /// Execute one run
    ///
    /// Only a catalog failure is returned as `Err`. Submission errors end
    /// dispatch and are reported through [`RunSummary::aborted`].
    pub async fn run(&self) -> Result<RunSummary> {
        enter(Stage::Fetching);
        let assets = self.catalog.fetch_all().await?;

        enter(Stage::Filtering);
        let candidates: Vec<MediaAsset> =
            assets.iter().filter(|a| is_candidate(a)).cloned().collect();
        let candidate_count = candidates.len();

        enter(Stage::Ranking);
        let mut selected = rank(candidates);
        selected.truncate(self.options.count);
        tracing::info!(
            "{} of {} assets need transcoding, processing {}",
            candidate_count,
            assets.len(),
            selected.len()
        );

        enter(Stage::Dispatching);
        let mut reports = Vec::with_capacity(selected.len());
        let mut aborted = None;
        for asset in selected {
            // Candidates always have a file; the filter guarantees it
            let Some(file) = asset.encoded_file else {
                continue;
            };

            tracing::info!(
                "{} ({}, {}): {}",
                asset.title,
                file.video_codec.as_deref().unwrap_or("unknown"),
                format_size(file.size_bytes),
                file.file_path
            );

            let result = if self.options.dry_run {
                tracing::info!("[DRY RUN] Would add {} to transcoder queue", file.file_path);
                SubmissionOutcome::dry_run()
            } else {
                match self.queue.submit(&file.file_path).await {
                    Ok(result) => {
                        log_outcome(&file.file_path, &result);
                        result
                    }
                    Err(e) => {
                        tracing::error!("Stopping dispatch: {}", e);
                        aborted = Some(e);
                        break;
                    }
                }
            };

            reports.push(CandidateReport {
                title: asset.title,
                library_path: asset.library_path,
                file_path: file.file_path,
                video_codec: file.video_codec.unwrap_or_default(),
                size_bytes: file.size_bytes,
                result,
            });
        }

        enter(Stage::Done);
        Ok(RunSummary {
            catalog_size: assets.len(),
            candidate_count,
            dry_run: self.options.dry_run,
            reports,
            aborted,
        })
    }
}

fn enter(stage: Stage) {
    tracing::debug!("Triage stage: {}", stage);
}

fn log_outcome(file_path: &str, result: &SubmissionOutcome) {
    let message = describe_outcome(file_path, result);
    match result.outcome {
        Outcome::Scheduled { .. } | Outcome::Skipped => tracing::info!("{}", message),
        Outcome::Failed { .. } => tracing::warn!("{}", message),
        Outcome::Unknown { .. } => tracing::error!("{}", message),
    }
}

/// One-line description of a submission result for the log
fn describe_outcome(file_path: &str, result: &SubmissionOutcome) -> String {
    let status = result
        .http_status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    let label = result.outcome.label();

    match &result.outcome {
        Outcome::Scheduled {
            destination_path, ..
        } if !destination_path.is_empty() => {
            format!("{} {} -> {} (HTTP {})", label, file_path, destination_path, status)
        }
        Outcome::Failed { error, .. } => {
            format!("{} {} (HTTP {}): {}", label, file_path, status, error)
        }
        Outcome::Unknown { skipped } => format!(
            "{} {} (HTTP {}): neither scheduled nor rejected, skipped: {}",
            label,
            file_path,
            status,
            skipped.as_deref().unwrap_or("null")
        ),
        _ => format!("{} {} (HTTP {})", label, file_path, status),
    }
}
