use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub queue: QueueConfig,

    #[serde(default)]
    pub triage: TriageConfig,
}

/// Radarr connection settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub api_key: String,
}

/// Transcoder job queue settings
#[derive(Debug, Clone, Deserialize)]
pub struct QueueConfig {
    /// Base URL of the transcoder web server; jobs go to `<url>/api/v1/job/`
    #[serde(default)]
    pub url: String,

    /// Bearer token sent with every submission
    #[serde(default)]
    pub token: String,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl QueueConfig {
    /// Full URL of the job submission endpoint
    pub fn job_endpoint(&self) -> String {
        format!("{}/api/v1/job/", self.url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TriageConfig {
    /// Maximum number of candidates to process per run (default: 10)
    #[serde(default = "default_count")]
    pub count: usize,

    /// Report selected candidates without submitting them
    #[serde(default)]
    pub dry_run: bool,
}

fn default_count() -> usize {
    10
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            dry_run: false,
        }
    }
}

/// Values supplied on the command line. `None` leaves the file value in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub catalog_url: Option<String>,
    pub catalog_api_key: Option<String>,
    pub queue_url: Option<String>,
    pub queue_token: Option<String>,
    pub count: Option<usize>,
    pub dry_run: bool,
}
