//! Error types for recodarr.
//!
//! Only conditions that end a run are errors. A job the queue rejects, or a
//! response that neither schedules nor rejects, is an
//! [`Outcome`](crate::queue::Outcome) recorded per candidate instead.

/// Errors that abort a triage run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required setting is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`](crate::config::Config).
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// The catalog answered with an error status.
    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(String),

    /// The catalog request failed or its body could not be decoded.
    #[error("Catalog request failed: {context}: {source}")]
    CatalogRequest {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// A submission never produced a response (connect, DNS, timeout, body read).
    #[error("Transport error submitting {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The job queue answered with a body that is not a job response.
    #[error("Malformed response (HTTP {status}) submitting {path}: {source}")]
    MalformedResponse {
        path: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a new Configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new CatalogFetch error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        Self::CatalogFetch(msg.into())
    }
}

/// Result type alias using the recodarr Error type.
pub type Result<T> = std::result::Result<T, Error>;
