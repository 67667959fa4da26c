use super::{interpret, Outcome};
use crate::config::QueueConfig;
use crate::error::{Error, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Result of one submission attempt that reached the job queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub outcome: Outcome,
    /// Transport status; `None` when nothing was sent
    pub http_status: Option<u16>,
}

impl SubmissionOutcome {
    /// Outcome for a candidate selected in dry-run mode
    pub fn dry_run() -> Self {
        Self {
            outcome: Outcome::Skipped,
            http_status: None,
        }
    }
}

/// Destination for transcoding jobs
#[async_trait::async_trait]
pub trait JobQueue: Send + Sync {
    /// Submit one file. Returns `Err` only when no usable response was received.
    async fn submit(&self, file_path: &str) -> Result<SubmissionOutcome>;
}

#[derive(Serialize)]
struct JobRequest<'a> {
    #[serde(rename = "SourcePath")]
    source_path: &'a str,
}

/// HTTP client for the transcoder web server
pub struct TranscoderClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl TranscoderClient {
    pub fn new(config: &QueueConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            endpoint: config.job_endpoint(),
            token: config.token.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl JobQueue for TranscoderClient {
    async fn submit(&self, file_path: &str) -> Result<SubmissionOutcome> {
        let transport = |source: reqwest::Error| Error::Transport {
            path: file_path.to_string(),
            source,
        };

        tracing::info!("Adding {} to transcoder queue", file_path);

        // `json` also sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&JobRequest {
                source_path: file_path,
            })
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;

        if !status.is_success() {
            tracing::warn!(
                "Transcoder returned {} for {}: {}",
                status,
                file_path,
                String::from_utf8_lossy(&body)
            );
        }

        // The parsed body decides the outcome, even on a non-2xx status
        let outcome = interpret(&body).map_err(|source| Error::MalformedResponse {
            path: file_path.to_string(),
            status: status.as_u16(),
            source,
        })?;

        Ok(SubmissionOutcome {
            outcome,
            http_status: Some(status.as_u16()),
        })
    }
}
